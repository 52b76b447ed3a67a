//! WASM bindings for JavaScript/TypeScript usage.
//!
//! Filter trees cross the boundary as plain JS objects in the same JSON
//! shape the application persists on saved queries.
//!
//! ## Usage from TypeScript
//!
//! ```typescript
//! import init, { readCql, writeCql, transformCqlToFilter } from './pkg/cql_parser.js';
//!
//! await init();
//!
//! const tree = readCql("title ILIKE 'cat*' AND height > 3");
//! console.log(tree.type);     // "AND"
//! console.log(writeCql(tree)); // back to CQL text
//! ```

use wasm_bindgen::prelude::*;

use crate::ast::FilterNode;

/// Initialize the WASM module (called automatically on load).
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn tree_from_js(filter: JsValue) -> Result<FilterNode, JsValue> {
    serde_wasm_bindgen::from_value(filter)
        .map_err(|e| JsValue::from_str(&format!("Invalid filter tree: {}", e)))
}

fn tree_to_js(tree: &FilterNode) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(tree).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a CQL expression into a filter-tree object.
#[wasm_bindgen(js_name = readCql)]
pub fn read_cql(cql: &str) -> Result<JsValue, JsValue> {
    let tree = crate::read(cql).map_err(|e| JsValue::from_str(&format!("Parse error: {}", e)))?;
    tree_to_js(&tree)
}

/// Serialize a filter-tree object back to CQL text.
#[wasm_bindgen(js_name = writeCql)]
pub fn write_cql(filter: JsValue) -> Result<String, JsValue> {
    let tree = tree_from_js(filter)?;
    crate::write(&tree).map_err(|e| JsValue::from_str(&format!("Write error: {}", e)))
}

/// Normalize a filter tree: flatten nested groups and collapse NOTs.
#[wasm_bindgen(js_name = simplifyTree)]
pub fn simplify_tree(filter: JsValue) -> Result<JsValue, JsValue> {
    let tree = tree_from_js(filter)?;
    tree_to_js(&crate::simplify(tree))
}

/// Parse CQL into the normalized filter tree the filter builder edits.
#[wasm_bindgen(js_name = transformCqlToFilter)]
pub fn transform_cql_to_filter(cql: &str) -> Result<JsValue, JsValue> {
    let tree = crate::filters::transform_cql_to_filter(cql)
        .map_err(|e| JsValue::from_str(&format!("Parse error: {}", e)))?;
    tree_to_js(&tree)
}

/// Serialize a filter tree to the CQL string sent to the search endpoint.
#[wasm_bindgen(js_name = transformFilterToCql)]
pub fn transform_filter_to_cql(filter: JsValue) -> Result<String, JsValue> {
    let tree = tree_from_js(filter)?;
    crate::filters::transform_filter_to_cql(&tree)
        .map_err(|e| JsValue::from_str(&format!("Write error: {}", e)))
}

/// Translate a UserQL value (`*`/`?` wildcards) to CQL LIKE syntax.
#[wasm_bindgen(js_name = translateUserqlToCql)]
pub fn translate_userql_to_cql(input: &str) -> String {
    crate::userql::translate_userql_to_cql(input)
}

/// Translate a CQL LIKE value (`%`/`_` wildcards) to UserQL syntax.
#[wasm_bindgen(js_name = translateCqlToUserql)]
pub fn translate_cql_to_userql(input: &str) -> String {
    crate::userql::translate_cql_to_userql(input)
}
