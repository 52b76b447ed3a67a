use super::node::FilterNode;
use serde::{Deserialize, Serialize};

/// Logical connectives. `NOT AND`/`NOT OR` are the collapsed forms the
/// simplifier produces for the filter-builder UI; `uncollapse_nots`
/// restores plain `NOT` wrapping before anything reaches the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOp {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
    #[serde(rename = "NOT")]
    Not,
    #[serde(rename = "NOT AND")]
    NotAnd,
    #[serde(rename = "NOT OR")]
    NotOr,
}

impl LogicalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
            LogicalOp::Not => "NOT",
            LogicalOp::NotAnd => "NOT AND",
            LogicalOp::NotOr => "NOT OR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalNode {
    #[serde(rename = "type")]
    pub op: LogicalOp,
    pub filters: Vec<FilterNode>,
}

impl LogicalNode {
    pub fn new(op: LogicalOp, filters: Vec<FilterNode>) -> Self {
        Self { op, filters }
    }

    pub fn and(filters: Vec<FilterNode>) -> Self {
        Self::new(LogicalOp::And, filters)
    }

    pub fn or(filters: Vec<FilterNode>) -> Self {
        Self::new(LogicalOp::Or, filters)
    }

    pub fn not(filter: FilterNode) -> Self {
        Self::new(LogicalOp::Not, vec![filter])
    }
}
