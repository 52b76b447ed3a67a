//! # CQL Filter Expression Parser
//!
//! A Rust library for converting between CQL (Common Query Language) filter
//! expressions and the structured filter-tree representation a catalog
//! search UI edits and persists.
//!
//! ## Features
//!
//! - **Tokenizer**: grammar-table-driven scanning of CQL text, including
//!   balanced-paren WKT geometry literals, ISO-8601 timestamps and
//!   time periods, and `'RELATIVE(...)'` durations
//! - **AST Builder**: shunting-yard operator-precedence parsing into a
//!   typed filter tree
//! - **Simplifier**: flattening of nested `AND`/`OR` groups and the
//!   `NOT AND`/`NOT OR` collapsed forms used by the filter-builder UI
//! - **Writer**: serialization back to CQL with explicit parenthesization
//! - **UserQL Translation**: `*`/`?` search wildcards to CQL `%`/`_` and
//!   back, escape-aware
//! - **Filter Construction**: drawn location models to WKT-embedding
//!   spatial filters, proximity predicates, attribute-metadata dispatch
//! - **Serde Model**: the filter tree serializes to the JSON shapes the
//!   application persists on saved queries
//!
//! ## Quick Start
//!
//! ```rust
//! use cql_parser::{read, simplify, write, FilterNode};
//!
//! let tree = read("title ILIKE 'cat*' AND height BETWEEN 1 AND 3").unwrap();
//! let tree = simplify(tree);
//!
//! let cql = write(&tree).unwrap();
//! assert_eq!(cql, "(\"title\" ILIKE 'cat%') AND (\"height\" BETWEEN 1 AND 3)");
//!
//! // Trees round-trip through the JSON shape the UI persists.
//! let json = serde_json::to_string(&tree).unwrap();
//! let back: FilterNode = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, tree);
//! ```
//!
//! ## Round-tripping saved queries
//!
//! ```rust
//! use cql_parser::{transform_cql_to_filter, transform_filter_to_cql};
//!
//! let cql = "(INTERSECTS(anyGeo, POLYGON((1 2,3 4,5 6,1 2))))";
//! let filter = transform_cql_to_filter(cql).unwrap();
//! assert_eq!(transform_filter_to_cql(&filter).unwrap(), cql);
//! ```

pub mod ast;
pub mod error;
pub mod filters;
pub mod metacard;
pub mod parser;
pub mod simplify;
pub mod userql;
pub mod writer;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use ast::{
    filter_function_param_count, BboxNode, BetweenNode, ComparisonNode, ComparisonOp, DuringNode,
    FilterNode, FunctionNode, GeometryNode, IsNullNode, LogicalNode, LogicalOp, PropertyRef,
    SpatialNode, SpatialOp, SpatialOperand, TemporalNode, TemporalOp, Value,
};
pub use error::{Error, FilterError, ParseError, WriteError};
pub use filters::{
    generate_filter, generate_filter_for_filter_function, generate_is_empty_filter,
    sanitize_geometry_cql, transform_cql_to_filter, transform_filter_to_cql, FilterInput,
    LocationModel,
};
pub use metacard::{AttributeDefinition, AttributeType, MetacardDefinitions};
pub use parser::{build_ast, tokenize, Token, TokenKind};
pub use userql::{translate_cql_to_userql, translate_userql_to_cql};

/// Parses a CQL expression into a filter tree.
///
/// The tree is the raw parse result; run [`simplify`] before handing it
/// to editing code.
///
/// # Examples
///
/// ```
/// use cql_parser::{read, FilterNode};
///
/// let tree = read("title ILIKE 'cat'").unwrap();
/// assert!(matches!(tree, FilterNode::Comparison(_)));
///
/// assert!(read("title ILIKE ILIKE").is_err());
/// ```
pub fn read(cql: &str) -> Result<FilterNode, Error> {
    let tokens = parser::tokenize(cql)?;
    Ok(parser::build_ast(tokens)?)
}

/// Serializes a filter tree to CQL text.
///
/// Collapsed `NOT AND`/`NOT OR` forms produced by [`simplify`] are
/// expanded back to standard `NOT` wrapping before serialization.
///
/// # Examples
///
/// ```
/// use cql_parser::{read, write};
///
/// let tree = read("NOT (a = 1 AND b = 2)").unwrap();
/// assert_eq!(write(&tree).unwrap(), "NOT ((\"a\" = 1) AND (\"b\" = 2))");
/// ```
pub fn write(filter: &FilterNode) -> Result<String, Error> {
    Ok(writer::write(filter)?)
}

/// Normalizes a filter tree: flattens nested same-operator groups and
/// collapses `NOT` over `AND`/`OR` into the UI's `NOT AND`/`NOT OR`
/// forms. Idempotent.
///
/// # Examples
///
/// ```
/// use cql_parser::{read, simplify, FilterNode, LogicalOp};
///
/// let tree = simplify(read("a = 1 AND (b = 2 AND c = 3)").unwrap());
/// match tree {
///     FilterNode::Logical(group) => {
///         assert_eq!(group.op, LogicalOp::And);
///         assert_eq!(group.filters.len(), 3);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn simplify(tree: FilterNode) -> FilterNode {
    simplify::simplify(tree)
}
