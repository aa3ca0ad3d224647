pub mod node;
pub mod edge;

pub use node::{DagNode, ParentIds};
pub use edge::{Edge, EdgeKind, InterEdge, LaneIdx, NodeEdge};
