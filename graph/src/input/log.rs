use crate::core::DagNode;
use crate::error::{GraphError, Result};

/// Parse `git log --format="%H %P"` output: one commit per line, the commit
/// id followed by its parent ids. Blank lines are skipped.
pub fn parse_log(output: &str) -> Result<Vec<DagNode>> {
    let mut nodes = Vec::new();
    for (idx, line) in output.lines().enumerate() {
        let line_no = idx + 1;
        let mut ids = line.split_whitespace();
        let Some(id) = ids.next() else {
            continue;
        };
        check_object_id(id, line_no)?;

        let parents = ids
            .map(|parent| check_object_id(parent, line_no).map(|()| parent))
            .collect::<Result<Vec<_>>>()?;
        nodes.push(DagNode::new(id, parents));
    }
    Ok(nodes)
}

fn check_object_id(id: &str, line_no: usize) -> Result<()> {
    if id.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(GraphError::InvalidObjectId {
            line: line_no,
            id: id.to_string(),
        })
    }
}
