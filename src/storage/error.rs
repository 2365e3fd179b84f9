//! Storage engine error definitions

use crate::store::StoreError;
use std::error::Error;
use std::fmt;

/// Storage engine error types
///
/// Represents all possible errors that can occur while opening the store,
/// hydrating the registry, or creating tables.
#[derive(Debug)]
pub enum StorageError {
    /// The underlying store could not be opened
    StoreOpen(StoreError),
    /// A table with the same name is already registered
    TableExists(String),
    /// The index names a table whose definition is missing from the store
    TableDefinitionMissing(String),
    /// Encode or decode failure on a table definition or the index
    Serialization(serde_json::Error),
    /// A get, set or commit failed in the underlying store
    Transaction(StoreError),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::StoreOpen(err) => write!(f, "Failed to open store: {}", err),
            StorageError::TableExists(name) => write!(f, "Table exists: {}", name),
            StorageError::TableDefinitionMissing(name) => {
                write!(f, "Table definition missing for indexed table: {}", name)
            }
            StorageError::Serialization(err) => write!(f, "Serialization error: {}", err),
            StorageError::Transaction(err) => write!(f, "Transaction error: {}", err),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StorageError::StoreOpen(err) => Some(err),
            StorageError::Serialization(err) => Some(err),
            StorageError::Transaction(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err)
    }
}

/// Result type for storage engine operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::TableExists("users".to_string());
        assert_eq!(err.to_string(), "Table exists: users");

        let err = StorageError::TableDefinitionMissing("orders".to_string());
        assert_eq!(
            err.to_string(),
            "Table definition missing for indexed table: orders"
        );
    }

    #[test]
    fn test_storage_error_preserves_cause() {
        let err = StorageError::Transaction(StoreError::Commit("disk full".to_string()));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("disk full"));
    }
}
