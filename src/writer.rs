//! Serialization of a filter tree back into CQL text.
//!
//! Every logical group and every NOT operand is parenthesized explicitly,
//! so operator precedence never depends on the reader. String values are
//! translated from UserQL wildcards to CQL wildcards and single-quote
//! wrapped; geometry literals are emitted bare, as CQL requires.

use crate::ast::{
    filter_function_param_count, FilterNode, FunctionNode, LogicalOp, PropertyRef, SpatialOp,
    SpatialOperand, Value,
};
use crate::error::WriteError;
use crate::simplify::uncollapse_nots;
use crate::userql::translate_userql_to_cql;

/// Serializes a filter tree to CQL. Collapsed `NOT AND`/`NOT OR` forms
/// are uncollapsed first, so a tree straight out of the simplifier is
/// valid input.
pub fn write(filter: &FilterNode) -> Result<String, WriteError> {
    write_node(&uncollapse_nots(filter.clone()))
}

fn write_node(node: &FilterNode) -> Result<String, WriteError> {
    match node {
        FilterNode::Logical(logical) => match logical.op {
            LogicalOp::And | LogicalOp::Or => {
                // An empty group means "match everything", the
                // query-language default.
                if logical.filters.is_empty() {
                    return Ok("(\"anyText\" ILIKE '%')".to_string());
                }
                let parts = logical
                    .filters
                    .iter()
                    .map(write_node)
                    .collect::<Result<Vec<_>, _>>()?;
                let separator = format!(") {} (", logical.op.as_str());
                Ok(format!("({})", parts.join(&separator)))
            }
            LogicalOp::Not => {
                if logical.filters.len() != 1 {
                    return Err(WriteError::InvalidNotArity(logical.filters.len()));
                }
                Ok(format!("NOT ({})", write_node(&logical.filters[0])?))
            }
            LogicalOp::NotAnd | LogicalOp::NotOr => {
                Err(WriteError::CollapsedNot(logical.op.as_str().to_string()))
            }
        },

        FilterNode::Comparison(comparison) => Ok(format!(
            "{} {} {}",
            write_property(&comparison.property)?,
            comparison.op.as_str(),
            write_value(&comparison.value)?
        )),

        FilterNode::IsNull(is_null) => Ok(format!("\"{}\" IS NULL", is_null.property)),

        FilterNode::Between(between) => Ok(format!(
            "\"{}\" BETWEEN {} AND {}",
            between.property,
            write_value(&between.lower_boundary)?,
            write_value(&between.upper_boundary)?
        )),

        FilterNode::Temporal(temporal) => Ok(format!(
            "\"{}\" {} {}",
            temporal.property,
            temporal.op.as_str(),
            temporal.value
        )),

        FilterNode::During(during) => Ok(format!(
            "\"{}\" DURING {}/{}",
            during.property, during.from, during.to
        )),

        FilterNode::Spatial(spatial) => {
            let operand = write_spatial_operand(&spatial.value);
            match spatial.op {
                SpatialOp::Dwithin => {
                    let distance = spatial.distance.ok_or(WriteError::MissingDistance)?;
                    Ok(format!(
                        "DWITHIN({}, {}, {}, meters)",
                        spatial.property, operand, distance
                    ))
                }
                op => Ok(format!("{}({}, {})", op.as_str(), spatial.property, operand)),
            }
        }

        FilterNode::Bbox(bbox) => {
            let bounds = bbox
                .value
                .iter()
                .map(|bound| bound.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Ok(format!("BBOX({}, {})", bbox.property, bounds))
        }

        FilterNode::Geometry(geometry) => Ok(geometry.value.clone()),

        FilterNode::Function(function) => write_function(function),
    }
}

fn write_property(property: &PropertyRef) -> Result<String, WriteError> {
    match property {
        PropertyRef::Name(name) => Ok(format!("\"{}\"", name)),
        PropertyRef::Function(function) => write_function(function),
    }
}

fn write_function(function: &FunctionNode) -> Result<String, WriteError> {
    // Same table the builder checks; a hand-assembled tree with an unknown
    // name is rejected here instead of producing unparseable output.
    if filter_function_param_count(&function.filter_function_name).is_none() {
        return Err(WriteError::UnsupportedFilterFunction(
            function.filter_function_name.clone(),
        ));
    }
    let params = function
        .params
        .iter()
        .map(write_value)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!(
        "{}({})",
        function.filter_function_name,
        params.join(",")
    ))
}

fn write_value(value: &Value) -> Result<String, WriteError> {
    match value {
        Value::Text(text) => Ok(quote_string(&translate_userql_to_cql(text))),
        Value::Number(number) => Ok(number.to_string()),
        Value::Boolean(boolean) => Ok(boolean.to_string()),
        Value::Function(function) => write_function(function),
    }
}

// Raw WKT strings get the regular string treatment; the boundary layer's
// sanitizer strips the quotes afterwards. Parsed GEOMETRY nodes are bare.
fn write_spatial_operand(operand: &SpatialOperand) -> String {
    match operand {
        SpatialOperand::Geometry(geometry) => geometry.value.clone(),
        SpatialOperand::Wkt(wkt) => quote_string(wkt),
    }
}

fn quote_string(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}
