//! Storage engine module
//!
//! This module implements the metadata registry and storage coordination:
//! - In-memory registry of table names and definitions
//! - Startup hydration of the registry from the key-value store
//! - Atomic create-and-persist with rollback on any persistence failure

pub mod db;
pub mod error;
pub mod registry;

pub use db::Database;
pub use error::{StorageError, StorageResult};
pub use registry::Registry;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
