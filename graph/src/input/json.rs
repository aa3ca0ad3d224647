use std::io::Read;

use crate::core::DagNode;
use crate::decor::{Ref, RefIndex};
use crate::error::Result;

/// Read a JSON array of `{ "id", "parentIds" }` commits
pub fn read_commits<R: Read>(reader: R) -> Result<Vec<DagNode>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a JSON array of refs, tagged by `"type"`, into an index
pub fn read_refs<R: Read>(reader: R) -> Result<RefIndex> {
    let refs: Vec<Ref> = serde_json::from_reader(reader)?;
    Ok(RefIndex::from_refs(refs))
}
