use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A reference pointing at a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Ref {
    Branch {
        id: String,
        name: String,
        #[serde(default)]
        current: bool,
    },
    Tag {
        id: String,
        name: String,
    },
    Remote {
        id: String,
        name: String,
        remote: String,
    },
    Head {
        id: String,
    },
    MergeHead {
        id: String,
    },
}

impl Ref {
    /// Commit the reference points at
    pub fn id(&self) -> &str {
        match self {
            Ref::Branch { id, .. }
            | Ref::Tag { id, .. }
            | Ref::Remote { id, .. }
            | Ref::Head { id }
            | Ref::MergeHead { id } => id,
        }
    }

    /// Branches and tags are major: a commit they point at gets a lane color
    pub fn is_major(&self) -> bool {
        match self {
            Ref::Branch { .. } | Ref::Tag { .. } => true,
            Ref::Remote { .. } | Ref::Head { .. } | Ref::MergeHead { .. } => false,
        }
    }
}

/// References grouped by the commit they point at
#[derive(Debug, Clone, Default)]
pub struct RefIndex {
    head: Option<String>,
    merge_heads: Vec<String>,
    by_id: HashMap<String, Vec<Ref>>,
}

impl RefIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_refs<I: IntoIterator<Item = Ref>>(refs: I) -> Self {
        let mut index = Self::new();
        for r in refs {
            index.insert(r);
        }
        index
    }

    pub fn insert(&mut self, r: Ref) {
        match &r {
            Ref::Head { id } => self.head = Some(id.clone()),
            Ref::MergeHead { id } => self.merge_heads.push(id.clone()),
            Ref::Branch { .. } | Ref::Tag { .. } | Ref::Remote { .. } => {}
        }
        self.by_id.entry(r.id().to_string()).or_default().push(r);
    }

    pub fn refs_for(&self, commit_id: &str) -> &[Ref] {
        self.by_id.get(commit_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether a branch or tag points directly at the commit
    pub fn is_major(&self, commit_id: &str) -> bool {
        self.refs_for(commit_id).iter().any(Ref::is_major)
    }

    pub fn head(&self) -> Option<&str> {
        self.head.as_deref()
    }

    pub fn merge_heads(&self) -> &[String] {
        &self.merge_heads
    }

    pub fn branches(&self) -> impl Iterator<Item = &Ref> {
        self.all().filter(|r| matches!(r, Ref::Branch { .. }))
    }

    pub fn tags(&self) -> impl Iterator<Item = &Ref> {
        self.all().filter(|r| matches!(r, Ref::Tag { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    fn all(&self) -> impl Iterator<Item = &Ref> {
        self.by_id.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> RefIndex {
        RefIndex::from_refs(vec![
            Ref::Branch { id: "a".into(), name: "main".into(), current: true },
            Ref::Head { id: "a".into() },
            Ref::Tag { id: "b".into(), name: "v1.0".into() },
            Ref::Remote { id: "c".into(), name: "origin/main".into(), remote: "origin".into() },
            Ref::MergeHead { id: "d".into() },
        ])
    }

    #[test]
    fn test_majorness() {
        let refs = sample();
        assert!(refs.is_major("a"));
        assert!(refs.is_major("b"));
        assert!(!refs.is_major("c"));
        assert!(!refs.is_major("d"));
        assert!(!refs.is_major("unknown"));
    }

    #[test]
    fn test_lookup() {
        let refs = sample();
        assert_eq!(refs.head(), Some("a"));
        assert_eq!(refs.merge_heads(), &["d".to_string()]);
        assert_eq!(refs.refs_for("a").len(), 2);
        assert!(refs.refs_for("zzz").is_empty());
        assert_eq!(refs.branches().count(), 1);
        assert_eq!(refs.tags().count(), 1);
    }

    #[test]
    fn test_deserialize_tagged() {
        let refs: Vec<Ref> = serde_json::from_str(
            r#"[
                {"type": "branch", "id": "a", "name": "main"},
                {"type": "mergeHead", "id": "b"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            refs,
            vec![
                Ref::Branch { id: "a".into(), name: "main".into(), current: false },
                Ref::MergeHead { id: "b".into() },
            ]
        );
    }
}
