use super::comparison::{BetweenNode, ComparisonNode, IsNullNode};
use super::function::FunctionNode;
use super::logical::LogicalNode;
use super::spatial::{BboxNode, GeometryNode, SpatialNode};
use super::temporal::{DuringNode, TemporalNode};
use serde::{Deserialize, Serialize};

/// The filter tree, a tagged union over the grammar's node categories.
/// JSON carries the tag in each node's `type` field, so serde can stay
/// untagged here: every category's own `type` enum rejects the tags of
/// the others during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterNode {
    Logical(LogicalNode),
    Comparison(ComparisonNode),
    IsNull(IsNullNode),
    Between(BetweenNode),
    Temporal(TemporalNode),
    During(DuringNode),
    Spatial(SpatialNode),
    Bbox(BboxNode),
    Geometry(GeometryNode),
    Function(FunctionNode),
}

impl FilterNode {
    /// The node's `type` tag, e.g. `"AND"`, `"ILIKE"`, `"IS NULL"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            FilterNode::Logical(n) => n.op.as_str(),
            FilterNode::Comparison(n) => n.op.as_str(),
            FilterNode::IsNull(_) => "IS NULL",
            FilterNode::Between(_) => "BETWEEN",
            FilterNode::Temporal(n) => n.op.as_str(),
            FilterNode::During(_) => "DURING",
            FilterNode::Spatial(n) => n.op.as_str(),
            FilterNode::Bbox(_) => "BBOX",
            FilterNode::Geometry(_) => "GEOMETRY",
            FilterNode::Function(_) => "FILTER_FUNCTION",
        }
    }
}

impl From<LogicalNode> for FilterNode {
    fn from(node: LogicalNode) -> Self {
        FilterNode::Logical(node)
    }
}

impl From<ComparisonNode> for FilterNode {
    fn from(node: ComparisonNode) -> Self {
        FilterNode::Comparison(node)
    }
}

impl From<IsNullNode> for FilterNode {
    fn from(node: IsNullNode) -> Self {
        FilterNode::IsNull(node)
    }
}

impl From<BetweenNode> for FilterNode {
    fn from(node: BetweenNode) -> Self {
        FilterNode::Between(node)
    }
}

impl From<TemporalNode> for FilterNode {
    fn from(node: TemporalNode) -> Self {
        FilterNode::Temporal(node)
    }
}

impl From<DuringNode> for FilterNode {
    fn from(node: DuringNode) -> Self {
        FilterNode::During(node)
    }
}

impl From<SpatialNode> for FilterNode {
    fn from(node: SpatialNode) -> Self {
        FilterNode::Spatial(node)
    }
}

impl From<BboxNode> for FilterNode {
    fn from(node: BboxNode) -> Self {
        FilterNode::Bbox(node)
    }
}

impl From<GeometryNode> for FilterNode {
    fn from(node: GeometryNode) -> Self {
        FilterNode::Geometry(node)
    }
}

impl From<FunctionNode> for FilterNode {
    fn from(node: FunctionNode) -> Self {
        FilterNode::Function(node)
    }
}
