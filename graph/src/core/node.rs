use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Parent ids of a commit. Almost every commit has one or two.
pub type ParentIds = SmallVec<[String; 2]>;

/// A commit as seen by the layout engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DagNode {
    /// Unique commit ID (SHA)
    pub id: String,
    /// Parent commit IDs, primary parent first
    #[serde(default)]
    pub parent_ids: ParentIds,
}

impl DagNode {
    pub fn new<I, S>(id: impl Into<String>, parent_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            parent_ids: parent_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// The parent that continues this commit's lineage
    pub fn primary_parent(&self) -> Option<&str> {
        self.parent_ids.first().map(String::as_str)
    }

    /// Merge parents, in the order they were recorded
    pub fn secondary_parents(&self) -> impl Iterator<Item = &str> {
        self.parent_ids.iter().skip(1).map(String::as_str)
    }

    /// Check if this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parent_ids.is_empty()
    }

    /// Check if this is a merge commit (multiple parents)
    pub fn is_merge(&self) -> bool {
        self.parent_ids.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parent_roles() {
        let merge = DagNode::new("m", ["a", "b", "c"]);
        assert_eq!(merge.primary_parent(), Some("a"));
        assert_eq!(merge.secondary_parents().collect::<Vec<_>>(), vec!["b", "c"]);
        assert!(merge.is_merge());
        assert!(!merge.is_root());

        let root = DagNode::new("r", Vec::<String>::new());
        assert_eq!(root.primary_parent(), None);
        assert_eq!(root.secondary_parents().count(), 0);
        assert!(root.is_root());
    }

    #[test]
    fn test_deserialize_without_parents() {
        let node: DagNode = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(node, DagNode::new("abc", Vec::<String>::new()));

        let node: DagNode = serde_json::from_str(r#"{"id":"abc","parentIds":["def"]}"#).unwrap();
        assert_eq!(node.primary_parent(), Some("def"));
    }
}
