pub mod comparison;
pub mod function;
pub mod logical;
pub mod node;
pub mod spatial;
pub mod temporal;
pub mod value;

pub use comparison::{BetweenNode, ComparisonNode, ComparisonOp, IsNullNode};
pub use function::{filter_function_param_count, FunctionNode};
pub use logical::{LogicalNode, LogicalOp};
pub use node::FilterNode;
pub use spatial::{BboxNode, GeometryNode, SpatialNode, SpatialOp, SpatialOperand};
pub use temporal::{DuringNode, TemporalNode, TemporalOp};
pub use value::{PropertyRef, Value};
