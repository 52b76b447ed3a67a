use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemporalOp {
    #[serde(rename = "BEFORE")]
    Before,
    #[serde(rename = "AFTER")]
    After,
}

impl TemporalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalOp::Before => "BEFORE",
            TemporalOp::After => "AFTER",
        }
    }
}

/// A point-in-time bound. `value` is the ISO-8601 text exactly as scanned;
/// no date math happens in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalNode {
    #[serde(rename = "type")]
    pub op: TemporalOp,
    pub property: String,
    pub value: String,
}

impl TemporalNode {
    pub fn before(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            op: TemporalOp::Before,
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn after(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            op: TemporalOp::After,
            property: property.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DuringTag {
    #[default]
    #[serde(rename = "DURING")]
    During,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuringNode {
    #[serde(rename = "type")]
    pub op: DuringTag,
    pub property: String,
    pub from: String,
    pub to: String,
}

impl DuringNode {
    pub fn new(
        property: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            op: DuringTag::During,
            property: property.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}
