use super::function::FunctionNode;
use serde::{Deserialize, Serialize};

/// A literal operand: the `value` of a comparison, a BETWEEN boundary, or
/// a filter-function parameter. String values hold UserQL wildcard syntax;
/// the writer translates them back to CQL wildcards on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Number(f64),
    Text(String),
    Function(Box<FunctionNode>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionNode> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<FunctionNode> for Value {
    fn from(f: FunctionNode) -> Self {
        Value::Function(Box::new(f))
    }
}

/// The left-hand side of a comparison: normally an attribute name, but a
/// filter-function call for functional predicates such as
/// `proximity('anyText',3,'cat dog') = true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyRef {
    Name(String),
    Function(Box<FunctionNode>),
}

impl PropertyRef {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            PropertyRef::Name(s) => Some(s.as_str()),
            PropertyRef::Function(_) => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionNode> {
        match self {
            PropertyRef::Name(_) => None,
            PropertyRef::Function(f) => Some(f),
        }
    }
}

impl From<&str> for PropertyRef {
    fn from(s: &str) -> Self {
        PropertyRef::Name(s.to_string())
    }
}

impl From<String> for PropertyRef {
    fn from(s: String) -> Self {
        PropertyRef::Name(s)
    }
}

impl From<FunctionNode> for PropertyRef {
    fn from(f: FunctionNode) -> Self {
        PropertyRef::Function(Box::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from("cat").as_str(), Some("cat"));
        assert_eq!(Value::from(3.0).as_f64(), Some(3.0));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("cat").as_f64(), None);
    }

    #[test]
    fn test_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Value::from("cat")).unwrap(), "\"cat\"");
        assert_eq!(serde_json::to_string(&Value::from(true)).unwrap(), "true");
    }

    #[test]
    fn test_value_deserializes_integer_as_number() {
        let value: Value = serde_json::from_str("3").unwrap();
        assert_eq!(value, Value::Number(3.0));
    }

    #[test]
    fn test_property_ref_as_name() {
        let property = PropertyRef::from("anyText");
        assert_eq!(property.as_name(), Some("anyText"));
        assert!(property.as_function().is_none());
    }

    #[test]
    fn test_property_ref_deserializes_plain_string() {
        let property: PropertyRef = serde_json::from_str("\"created\"").unwrap();
        assert_eq!(property, PropertyRef::Name("created".to_string()));
    }
}
