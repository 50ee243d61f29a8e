use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Error type that captures ledger storage and selection failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Ledger not loaded")]
    LedgerNotLoaded,
    #[error("Ledger has records appended before it was loaded")]
    PendingAppends,
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

impl From<io::Error> for LedgerError {
    fn from(err: io::Error) -> Self {
        LedgerError::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::StorageUnavailable(err.to_string())
    }
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("Input error: {0}")]
    Readline(#[from] ReadlineError),
}
