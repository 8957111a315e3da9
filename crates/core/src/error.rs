use std::path::PathBuf;

/// Errors raised by config loading, context loading and detectors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read contexts from {}: {source}", .path.display())]
    ContextRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid context file {}: {source}", .path.display())]
    ContextParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A detector met a context that breaks an assumption it relies on.
    #[error("{detector} cannot examine `{context}`: {reason}")]
    MalformedContext {
        detector: String,
        context: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
