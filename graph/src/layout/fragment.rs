use serde::Serialize;
use std::fmt;

use crate::core::{InterEdge, LaneIdx, NodeEdge};
use crate::layout::Color;

/// Column and color of the commit itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSymbol {
    pub lane_index: LaneIdx,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Layout of a single commit row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphFragment {
    pub commit_id: String,
    /// Lanes passing this row
    pub inter_edges: Vec<InterEdge>,
    /// Lanes attached to this row's commit, sorted by lane
    pub node_edges: Vec<NodeEdge>,
    pub node: NodeSymbol,
    /// Number of lanes the row needs, above or below the commit
    pub width: usize,
}

impl GraphFragment {
    pub fn parent_edges(&self) -> impl Iterator<Item = &NodeEdge> {
        self.node_edges.iter().filter(|e| e.is_parent())
    }

    pub fn child_edges(&self) -> impl Iterator<Item = &NodeEdge> {
        self.node_edges.iter().filter(|e| e.is_child())
    }

    /// Lanes arriving from the row above
    pub fn lane_count_before(&self) -> usize {
        self.inter_edges.len() + self.child_edges().count()
    }

    /// Lanes leaving toward the row below
    pub fn lane_count_after(&self) -> usize {
        let reused = self
            .parent_edges()
            .filter(|p| self.inter_edges.iter().any(|e| e.lane_index == p.lane_index))
            .count();
        self.inter_edges.len() + self.parent_edges().count() - reused
    }
}

/// One-line text summary: short id, node lane, width, then the lanes of
/// child edges (`C`), parent edges (`P`) and passing lanes (`|`)
impl fmt::Display for GraphFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short: String = self.commit_id.chars().take(8).collect();
        write!(f, "{short:<8} node {} width {}", self.node.lane_index, self.width)?;
        if let Some(color) = &self.node.color {
            write!(f, " ({color})")?;
        }
        write_lanes(f, "C", self.child_edges().map(|e| e.lane_index))?;
        write_lanes(f, "P", self.parent_edges().map(|e| e.lane_index))?;
        write_lanes(f, "|", self.inter_edges.iter().map(|e| e.lane_index))
    }
}

fn write_lanes(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    lanes: impl Iterator<Item = LaneIdx>,
) -> fmt::Result {
    let lanes: Vec<String> = lanes.map(|lane| lane.to_string()).collect();
    if lanes.is_empty() {
        return Ok(());
    }
    write!(f, " {label}:{}", lanes.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DagNode, Edge};
    use crate::decor::RefIndex;
    use crate::layout::Grapher;
    use pretty_assertions::assert_eq;

    fn fragment() -> GraphFragment {
        GraphFragment {
            commit_id: "0123456789abcdef".into(),
            inter_edges: vec![Edge {
                lane_index: 0,
                source_id: "x".into(),
                target_id: "y".into(),
                color: None,
            }],
            node_edges: vec![
                NodeEdge::parent(0, "0123456789abcdef", "y", None),
                NodeEdge::parent(1, "0123456789abcdef", "z", None),
            ],
            node: NodeSymbol {
                lane_index: 1,
                color: Some(Color::from("cyan")),
            },
            width: 2,
        }
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            fragment().to_string(),
            "01234567 node 1 width 2 (cyan) P:0,1 |:0"
        );
    }

    #[test]
    fn test_reused_lane_counted_once() {
        let f = fragment();
        assert_eq!(f.lane_count_before(), 1);
        assert_eq!(f.lane_count_after(), 2);
    }

    #[test]
    fn test_serialized_shape() {
        let mut grapher = Grapher::new(vec![Color::from("orange")], RefIndex::new());
        let f = grapher.proceed(&DagNode::new("a", ["b"]));
        assert_eq!(
            serde_json::to_value(&f).unwrap(),
            serde_json::json!({
                "commitId": "a",
                "interEdges": [],
                "nodeEdges": [
                    {"type": "P", "laneIndex": 0, "sourceId": "a", "targetId": "b"}
                ],
                "node": {"laneIndex": 0},
                "width": 1,
            })
        );
    }
}
