//! Database storage engine
//!
//! Orchestrates opening the key-value store, hydrating the registry on
//! startup, and the atomic create-and-persist protocol. After any error
//! return from [`Database::create_table`] the registry equals its pre-call
//! state and the store holds no partial write from that call.

use crate::schema::{Entity, TABLES_KEY, Table, table_key};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::registry::Registry;
use crate::store::{RedbStore, StoreInterface, StoreTransaction};
use parking_lot::Mutex;
use std::path::Path;
use tracing::{debug, warn};

/// Top-level storage reference
///
/// The registry lives behind a single mutex: `create_table` holds it across
/// snapshot, staging, and commit, so concurrent creators serialize instead
/// of racing on the in-memory cache. Read accessors return owned snapshots
/// taken under the same lock.
pub struct Database {
    store: Box<dyn StoreInterface>,
    registry: Mutex<Registry>,
}

impl Database {
    /// Open the store at `path` and hydrate the registry from it
    ///
    /// A store with no index key is treated as holding zero tables. Any
    /// fetch or decode failure during hydration surfaces as an error and
    /// no database handle is returned.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let store = RedbStore::open(path).map_err(StorageError::StoreOpen)?;
        Self::with_store(Box::new(store))
    }

    /// Hydrate a database from an already opened store
    pub fn with_store(store: Box<dyn StoreInterface>) -> StorageResult<Self> {
        let registry = load_existing_tables(store.as_ref())?;
        debug!(tables = registry.len(), "hydrated table registry");
        Ok(Self {
            store,
            registry: Mutex::new(registry),
        })
    }

    /// Store a new table, atomically and durably
    ///
    /// Fails with [`StorageError::TableExists`] on a name collision without
    /// touching any state. Otherwise the table is staged into the registry
    /// and the index plus every registered table definition is written in
    /// one store transaction. If anything fails before or at commit, the
    /// transaction is discarded and the registry restored to its pre-call
    /// snapshot; the original error is returned.
    pub fn create_table(&self, table: Table) -> StorageResult<()> {
        let mut registry = self.registry.lock();
        if registry.contains(table.name()) {
            return Err(StorageError::TableExists(table.name().to_string()));
        }

        let snapshot = registry.clone();
        let name = table.name().to_string();
        registry.insert(table);

        if let Err(err) = self.store_tables(&registry) {
            *registry = snapshot;
            warn!(table = %name, error = %err, "create_table rolled back");
            return Err(err);
        }

        debug!(table = %name, "table created");
        Ok(())
    }

    /// Get a snapshot of a registered table definition
    pub fn table(&self, name: &str) -> Option<Table> {
        self.registry.lock().get(name).cloned()
    }

    /// Get the registered table names in registration order
    pub fn table_names(&self) -> Vec<String> {
        self.registry.lock().names().to_vec()
    }

    /// Get the number of registered tables
    pub fn table_count(&self) -> usize {
        self.registry.lock().len()
    }

    /// Close the connection to the underlying store
    ///
    /// Failure is surfaced, not retried.
    pub fn close(self) -> StorageResult<()> {
        self.store.close().map_err(StorageError::Transaction)
    }

    /// Write the index key and every registered table definition in one
    /// write transaction
    fn store_tables(&self, registry: &Registry) -> StorageResult<()> {
        let index = serde_json::to_vec(registry.names())?;
        let mut tx = self.store.begin(true).map_err(StorageError::Transaction)?;

        if let Err(err) = tx.set(TABLES_KEY.as_bytes(), &index) {
            tx.discard();
            return Err(StorageError::Transaction(err));
        }
        for table in registry.iter() {
            let bytes = match table.bytes() {
                Ok(bytes) => bytes,
                Err(err) => {
                    tx.discard();
                    return Err(StorageError::Serialization(err));
                }
            };
            if let Err(err) = tx.set(table.key().as_bytes(), &bytes) {
                tx.discard();
                return Err(StorageError::Transaction(err));
            }
        }
        tx.commit().map_err(StorageError::Transaction)
    }
}

/// Read the index key and hydrate every table definition it names
fn load_existing_tables(store: &dyn StoreInterface) -> StorageResult<Registry> {
    let tx = store.begin(false).map_err(StorageError::Transaction)?;

    let index = match tx.get(TABLES_KEY.as_bytes()) {
        Ok(index) => index,
        Err(err) => {
            tx.discard();
            return Err(StorageError::Transaction(err));
        }
    };
    // Absent index key: first-ever open of an empty store, zero tables
    let Some(index) = index else {
        tx.commit().map_err(StorageError::Transaction)?;
        return Ok(Registry::new());
    };

    let table_names: Vec<String> = match serde_json::from_slice(&index) {
        Ok(names) => names,
        Err(err) => {
            tx.discard();
            return Err(StorageError::Serialization(err));
        }
    };

    let mut registry = Registry::new();
    for name in table_names {
        match load_table(tx.as_ref(), &name) {
            Ok(table) => registry.insert(table),
            Err(err) => {
                tx.discard();
                return Err(err);
            }
        }
    }

    tx.commit().map_err(StorageError::Transaction)?;
    Ok(registry)
}

/// Fetch and decode one table definition by name
fn load_table(tx: &dyn StoreTransaction, name: &str) -> StorageResult<Table> {
    let bytes = tx
        .get(table_key(name).as_bytes())
        .map_err(StorageError::Transaction)?
        .ok_or_else(|| StorageError::TableDefinitionMissing(name.to_string()))?;
    serde_json::from_slice(&bytes).map_err(StorageError::Serialization)
}
