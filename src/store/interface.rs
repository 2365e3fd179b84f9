//! Store interface definitions

use crate::store::error::StoreResult;

/// Transaction handle trait for store operations
///
/// Represents one open transaction against the underlying store. A
/// transaction must be consumed by exactly one of `commit` or `discard`.
pub trait StoreTransaction {
    /// Get the value stored under a key
    ///
    /// Returns `Ok(None)` when the key is absent; only genuine store
    /// failures are reported as errors.
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>>;

    /// Set the value stored under a key
    ///
    /// Fails with [`StoreError::ReadOnly`] on a read-only transaction.
    ///
    /// [`StoreError::ReadOnly`]: crate::store::StoreError::ReadOnly
    fn set(&mut self, key: &[u8], value: &[u8]) -> StoreResult<()>;

    /// Commit the transaction, making its writes durable
    fn commit(self: Box<Self>) -> StoreResult<()>;

    /// Release the transaction without persisting its writes
    ///
    /// Safe to call after a failed `get` or `set`.
    fn discard(self: Box<Self>);
}

/// Store interface trait
///
/// This trait defines the capability contract the storage engine requires
/// from its transactional key-value store.
pub trait StoreInterface: Send + Sync {
    /// Begin a transaction
    ///
    /// # Arguments
    /// * `writable` - Whether the transaction may set keys
    ///
    /// # Returns
    /// * `Ok(Box<dyn StoreTransaction>)` if the transaction was opened
    /// * `Err(StoreError)` if an error occurred
    fn begin<'a>(&'a self, writable: bool) -> StoreResult<Box<dyn StoreTransaction + 'a>>;

    /// Release the store handle
    fn close(self: Box<Self>) -> StoreResult<()>;
}
