use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// Errors from reading layout input and configuration.
///
/// Layout itself never fails; see [`crate::Grapher::proceed`].
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("line {line}: `{id}` is not an object id")]
    InvalidObjectId { line: usize, id: String },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}
