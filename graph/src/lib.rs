pub mod config;
pub mod core;
pub mod decor;
pub mod error;
pub mod input;
pub mod layout;

pub use config::GraphConfig;
pub use core::{DagNode, Edge, EdgeKind, InterEdge, LaneIdx, NodeEdge};
pub use decor::{Ref, RefIndex};
pub use error::{GraphError, Result};
pub use layout::{build_graph, Color, ColorPalette, GraphFragment, Grapher, NodeSymbol};
