//! Key-value store boundary
//!
//! This module defines the capability contract the storage engine requires
//! from its transactional key-value store, together with an implementation
//! backed by redb. The engine only ever talks to the trait interface, so
//! tests can substitute fault-injecting stores.

// Re-export error types and result type
pub mod error;
pub use error::{StoreError, StoreResult};

// Re-export interface traits
pub mod interface;
pub use interface::{StoreInterface, StoreTransaction};

// Re-export redb-backed implementation
pub mod redb_store;
pub use redb_store::RedbStore;
