use std::path::Path;

use super::types::Context;
use crate::error::{Error, Result};

/// Load the contexts a parser dumped to a JSON file (an array of contexts).
pub fn load_contexts(path: &Path) -> Result<Vec<Context>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ContextRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_contexts(&content).map_err(|source| Error::ContextParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse contexts from a JSON string (useful for testing)
pub fn parse_contexts(json: &str) -> serde_json::Result<Vec<Context>> {
    serde_json::from_str(json)
}
