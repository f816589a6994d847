//! Error taxonomy for the resolution engine.
//!
//! `EngineError` covers everything that can fail inside a single request;
//! the batch dispatcher converts it into an `{ok: false, error}` entry and
//! never lets it cross the request boundary. Top-level payload parse failures
//! are handled separately in `main` and are the only errors that abort a run.

use thiserror::Error;

/// A per-request failure.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required field was missing or empty during entity construction.
    #[error("missing required field: {0}")]
    Validation(&'static str),

    /// The mechanics oracle rejected the fully-built entities.
    #[error("{0}")]
    Oracle(String),
}

impl EngineError {
    /// Oracle rejection with a formatted message.
    pub fn oracle(msg: impl Into<String>) -> Self {
        EngineError::Oracle(msg.into())
    }
}
