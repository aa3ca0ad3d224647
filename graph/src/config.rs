use serde::Deserialize;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::layout::Color;

/// Palette used when nothing else is configured
pub const DEFAULT_COLORS: [&str; 4] = ["orange", "cyan", "yellow", "magenta"];

/// Layout settings, usually read from a TOML file
///
/// ```toml
/// colors = ["orange", "cyan", "yellow", "magenta"]
/// max_count = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Lane colors, handed out in this order
    pub colors: Vec<Color>,
    /// Only lay out this many commits from the top of the history
    pub max_count: Option<usize>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|&c| Color::from(c)).collect(),
            max_count: None,
        }
    }
}

impl GraphConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GraphError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.colors.is_empty() {
            return Err(GraphError::EmptyPalette);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::from_toml("").unwrap();
        assert_eq!(config, GraphConfig::default());
        assert_eq!(config.colors.len(), 4);
        assert_eq!(config.colors[0].as_str(), "orange");
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.toml");
        fs::write(&path, "colors = [\"red\", \"blue\"]\nmax_count = 50\n").unwrap();

        let config = GraphConfig::load_from_file(&path).unwrap();
        assert_eq!(config.colors, vec![Color::from("red"), Color::from("blue")]);
        assert_eq!(config.max_count, Some(50));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = GraphConfig::load_from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, GraphError::ConfigRead { .. }));
    }

    #[test]
    fn test_rejects_empty_palette() {
        let err = GraphConfig::from_toml("colors = []").unwrap_err();
        assert!(matches!(err, GraphError::EmptyPalette));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = GraphConfig::from_toml("colour = [\"red\"]").unwrap_err();
        assert!(matches!(err, GraphError::ConfigParse(_)));
    }
}
