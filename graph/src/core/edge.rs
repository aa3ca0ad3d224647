use serde::Serialize;

use crate::layout::Color;

/// A lane represents a vertical column in the graph
pub type LaneIdx = usize;

/// A lane segment between a child commit and one of its parents.
///
/// As an inter edge it passes a row without touching the commit drawn there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub lane_index: LaneIdx,
    /// Child commit the segment comes from
    pub source_id: String,
    /// Parent commit the segment is heading to
    pub target_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Segment passing by a row
pub type InterEdge = Edge;

/// Which side of the row a node edge attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeKind {
    /// Goes down to a parent
    #[serde(rename = "P")]
    Parent,
    /// Comes down from a child
    #[serde(rename = "C")]
    Child,
}

/// A segment that touches the commit of its row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeEdge {
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub lane_index: LaneIdx,
    pub source_id: String,
    pub target_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl NodeEdge {
    /// Edge from `commit_id` down to `parent_id` on `lane_index`
    pub fn parent(
        lane_index: LaneIdx,
        commit_id: &str,
        parent_id: &str,
        color: Option<Color>,
    ) -> Self {
        Self {
            kind: EdgeKind::Parent,
            lane_index,
            source_id: commit_id.to_string(),
            target_id: parent_id.to_string(),
            color,
        }
    }

    /// Edge arriving at its target along an incoming lane
    pub fn child(incoming: &Edge) -> Self {
        Self {
            kind: EdgeKind::Child,
            lane_index: incoming.lane_index,
            source_id: incoming.source_id.clone(),
            target_id: incoming.target_id.clone(),
            color: incoming.color.clone(),
        }
    }

    pub fn is_parent(&self) -> bool {
        self.kind == EdgeKind::Parent
    }

    pub fn is_child(&self) -> bool {
        self.kind == EdgeKind::Child
    }

    /// The lane this edge keeps open below its row, seen from the next row
    pub fn to_incoming(&self) -> Edge {
        Edge {
            lane_index: self.lane_index,
            source_id: self.source_id.clone(),
            target_id: self.target_id.clone(),
            color: self.color.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_node_edge_serializes_kind_tag() {
        let edge = NodeEdge::parent(2, "child", "parent", Some(Color::from("cyan")));
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "P",
                "laneIndex": 2,
                "sourceId": "child",
                "targetId": "parent",
                "color": "cyan",
            })
        );
    }

    #[test]
    fn test_child_edge_keeps_incoming_lane() {
        let incoming = Edge {
            lane_index: 3,
            source_id: "c".into(),
            target_id: "p".into(),
            color: None,
        };
        let edge = NodeEdge::child(&incoming);
        assert!(edge.is_child());
        assert_eq!(edge.lane_index, 3);
        assert_eq!(edge.to_incoming(), incoming);

        let json = serde_json::to_value(&edge).unwrap();
        assert!(json.get("color").is_none());
        assert_eq!(json["type"], "C");
    }
}
