//! Readers that turn external history dumps into layout input.

pub mod log;
pub mod json;

pub use log::parse_log;
pub use json::{read_commits, read_refs};
