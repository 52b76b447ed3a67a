use super::value::Value;
use serde::{Deserialize, Serialize};

/// Fixed parameter counts for the filter functions the grammar accepts.
/// Any name outside this table is rejected, at parse time and again
/// defensively at write time.
pub fn filter_function_param_count(name: &str) -> Option<usize> {
    match name {
        "proximity" => Some(3),
        "pi" => Some(0),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FunctionTag {
    #[default]
    #[serde(rename = "FILTER_FUNCTION")]
    FilterFunction,
}

/// A named filter-function call, usable as a filter of its own, as the
/// property of a functional-predicate comparison, or nested as a parameter
/// of another function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionNode {
    #[serde(rename = "type")]
    pub op: FunctionTag,
    #[serde(rename = "filterFunctionName")]
    pub filter_function_name: String,
    pub params: Vec<Value>,
}

impl FunctionNode {
    pub fn new(name: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            op: FunctionTag::FilterFunction,
            filter_function_name: name.into(),
            params,
        }
    }
}
