use thiserror::Error;

use crate::types::RowFailure;

/// Errors that can occur while building the hypernymy graph.
#[derive(Error, Debug)]
pub enum HypernymGraphError {
    #[error("file error: {message} (path: {path})")]
    File { message: String, path: String },

    #[error("parse error: {message} (path: {path}, line: {line:?})")]
    Parse {
        message: String,
        path: String,
        line: Option<u64>,
    },

    #[error("inventory error: {message} (path: {path})")]
    Inventory { message: String, path: String },

    #[error("config error: {message}")]
    Config { message: String },

    /// A row could not be resolved and the run was stopped on it.
    #[error("unresolved {0}")]
    Unresolved(Box<RowFailure>),

    /// An edge whose source and target are the same sense reached the emitter.
    #[error("refusing to emit self-loop on sense {sense_id}")]
    SelfLoop { sense_id: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results using `HypernymGraphError`.
pub type Result<T> = std::result::Result<T, HypernymGraphError>;
