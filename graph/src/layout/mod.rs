pub mod palette;
pub mod fragment;
pub mod grapher;

pub use palette::{Color, ColorPalette};
pub use fragment::{GraphFragment, NodeSymbol};
pub use grapher::Grapher;

use std::collections::HashMap;

use crate::core::DagNode;
use crate::decor::RefIndex;

/// Lay out a whole history and key the fragments by commit id
pub fn build_graph<'a, I>(
    nodes: I,
    refs: RefIndex,
    colors: Vec<Color>,
) -> HashMap<String, GraphFragment>
where
    I: IntoIterator<Item = &'a DagNode>,
{
    let mut grapher = Grapher::new(colors, refs);
    nodes
        .into_iter()
        .map(|node| (node.id.clone(), grapher.proceed(node)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_graph_keys_by_commit() {
        let history = vec![
            DagNode::new("b", ["a"]),
            DagNode::new("a", Vec::<String>::new()),
        ];
        let graph = build_graph(&history, RefIndex::new(), vec![Color::from("orange")]);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph["b"].commit_id, "b");
        assert_eq!(graph["a"].child_edges().count(), 1);
    }
}
