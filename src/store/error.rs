//! Store error definitions

use std::error::Error;
use std::fmt;

/// Store error types
#[derive(Debug)]
pub enum StoreError {
    /// The underlying store could not be opened
    Open(String),
    /// A get or set inside a transaction failed
    Transaction(String),
    /// A transaction commit failed
    Commit(String),
    /// A write was attempted on a read-only transaction
    ReadOnly,
    /// I/O error from the underlying store
    IoError(std::io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Open(msg) => write!(f, "Failed to open store: {}", msg),
            StoreError::Transaction(msg) => write!(f, "Transaction error: {}", msg),
            StoreError::Commit(msg) => write!(f, "Commit error: {}", msg),
            StoreError::ReadOnly => write!(f, "Write attempted on read-only transaction"),
            StoreError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<redb::DatabaseError> for StoreError {
    fn from(err: redb::DatabaseError) -> Self {
        StoreError::Open(err.to_string())
    }
}

impl From<redb::TransactionError> for StoreError {
    fn from(err: redb::TransactionError) -> Self {
        StoreError::Transaction(err.to_string())
    }
}

impl From<redb::TableError> for StoreError {
    fn from(err: redb::TableError) -> Self {
        StoreError::Transaction(err.to_string())
    }
}

impl From<redb::StorageError> for StoreError {
    fn from(err: redb::StorageError) -> Self {
        StoreError::Transaction(err.to_string())
    }
}

impl From<redb::CommitError> for StoreError {
    fn from(err: redb::CommitError) -> Self {
        StoreError::Commit(err.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
