//! Tabledb embedded table-oriented database core
//!
//! Manages table schema definitions and keeps the in-memory view of
//! registered tables consistent with what is durably persisted in an
//! ordered key-value store. Consumed as a library through the
//! [`storage::Database`] operations plus the [`schema`] constructors.

// Schema model: tables, columns, rows, sequences, key scheme
pub mod schema;

// Storage engine: registry cache + atomic create/rollback protocol
pub mod storage;

// Key-value store boundary
pub mod store;

// Re-export storage items for easier access
pub use storage::Database;
pub use storage::StorageError;

// Re-export store items for easier access
pub use store::StoreError;
pub use store::StoreInterface;
