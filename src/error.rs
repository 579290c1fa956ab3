//! Error types for the restring tree mutator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the tree mutator and the configuration layer.
///
/// Every variant is terminal for the current invocation: the traversal stops
/// at the first error and already-applied mutations are retained.
#[derive(Debug, Error)]
pub enum MutateError {
    /// Malformed replacement spec or invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The traversal root carries no `.git` entry.
    #[error("Directory is not under version control: {0}")]
    NotVersionControlled(PathBuf),

    /// The running file counter exceeded the configured ceiling.
    #[error("Exceeded maximum number of files ({limit})")]
    LimitExceeded { limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}
