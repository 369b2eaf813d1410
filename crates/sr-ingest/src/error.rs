//! Ingestion error type.

use thiserror::Error;

/// Errors produced while loading the incident store.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Parse(String),

    /// A row parsed but failed boundary validation.
    #[error("incident {id}: {reason}")]
    Invalid { id: u32, reason: String },
}

pub type IngestResult<T> = Result<T, IngestError>;
