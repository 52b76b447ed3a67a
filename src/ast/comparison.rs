use super::value::{PropertyRef, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<>")]
    Neq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "ILIKE")]
    Ilike,
}

impl ComparisonOp {
    /// Looks up an operator by its CQL symbol, case-insensitively for the
    /// keyword operators.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol.to_uppercase().as_str() {
            "=" => ComparisonOp::Eq,
            "<>" => ComparisonOp::Neq,
            "<" => ComparisonOp::Lt,
            "<=" => ComparisonOp::Lte,
            ">" => ComparisonOp::Gt,
            ">=" => ComparisonOp::Gte,
            "LIKE" => ComparisonOp::Like,
            "ILIKE" => ComparisonOp::Ilike,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Neq => "<>",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Like => "LIKE",
            ComparisonOp::Ilike => "ILIKE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonNode {
    #[serde(rename = "type")]
    pub op: ComparisonOp,
    pub property: PropertyRef,
    pub value: Value,
}

impl ComparisonNode {
    pub fn new(
        op: ComparisonOp,
        property: impl Into<PropertyRef>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            op,
            property: property.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IsNullTag {
    #[default]
    #[serde(rename = "IS NULL")]
    IsNull,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsNullNode {
    #[serde(rename = "type")]
    pub op: IsNullTag,
    pub property: String,
}

impl IsNullNode {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            op: IsNullTag::IsNull,
            property: property.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BetweenTag {
    #[default]
    #[serde(rename = "BETWEEN")]
    Between,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetweenNode {
    #[serde(rename = "type")]
    pub op: BetweenTag,
    pub property: String,
    #[serde(rename = "lowerBoundary")]
    pub lower_boundary: Value,
    #[serde(rename = "upperBoundary")]
    pub upper_boundary: Value,
}

impl BetweenNode {
    pub fn new(
        property: impl Into<String>,
        lower_boundary: impl Into<Value>,
        upper_boundary: impl Into<Value>,
    ) -> Self {
        Self {
            op: BetweenTag::Between,
            property: property.into(),
            lower_boundary: lower_boundary.into(),
            upper_boundary: upper_boundary.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_op_as_str() {
        assert_eq!(ComparisonOp::Neq.as_str(), "<>");
        assert_eq!(ComparisonOp::Ilike.as_str(), "ILIKE");
    }

    #[test]
    fn test_comparison_op_from_symbol() {
        assert_eq!(ComparisonOp::from_symbol("<="), Some(ComparisonOp::Lte));
        assert_eq!(ComparisonOp::from_symbol("ilike"), Some(ComparisonOp::Ilike));
        assert_eq!(ComparisonOp::from_symbol("BETWEEN"), None);
    }

    #[test]
    fn test_comparison_json_shape() {
        let node = ComparisonNode::new(ComparisonOp::Ilike, "anyText", "cat*");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "ILIKE",
                "property": "anyText",
                "value": "cat*",
            })
        );
    }

    #[test]
    fn test_comparison_op_rejects_unknown_tag() {
        let result: Result<ComparisonOp, _> = serde_json::from_str("\"BEFORE\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_null_json_shape() {
        let node = IsNullNode::new("title");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({"type": "IS NULL", "property": "title"}));
    }

    #[test]
    fn test_between_json_uses_camel_case_boundaries() {
        let node = BetweenNode::new("height", 1.0, 3.0);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["lowerBoundary"], 1.0);
        assert_eq!(json["upperBoundary"], 3.0);
    }

    #[test]
    fn test_between_round_trips_through_json() {
        let node = BetweenNode::new("height", 1.0, 3.0);
        let back: BetweenNode =
            serde_json::from_str(&serde_json::to_string(&node).unwrap()).unwrap();
        assert_eq!(back, node);
    }
}
