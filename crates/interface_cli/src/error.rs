//! CLI boundary errors

use thiserror::Error;

/// Errors raised at the file-to-file boundary
///
/// Unlike per-rental pricing failures, these are fatal: a document that
/// cannot be read, parsed, or written aborts the run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed document {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown rule set level {0}; expected 1-5")]
    UnknownLevel(u8),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
