//! Common error types for TPW

use thiserror::Error;

/// Common result type for TPW operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the tracker engine and its hosts
#[derive(Error, Debug)]
pub enum Error {
    /// Plant name is empty after trimming
    #[error("Plant name is empty")]
    EmptyName,

    /// Case-insensitive duplicate in the plant catalog
    #[error("Plant already in catalog: {0}")]
    DuplicatePlant(String),

    /// Week key does not name a real ISO week in YYYY-Wnn form
    #[error("Invalid week key: {0}")]
    InvalidWeekKey(String),

    /// Persistence backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
