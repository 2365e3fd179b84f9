//! redb-backed store implementation

use crate::store::error::{StoreError, StoreResult};
use crate::store::interface::{StoreInterface, StoreTransaction};
use redb::{Database, ReadOnlyTable, ReadableTable, TableDefinition, WriteTransaction};
use std::path::Path;

/// The single redb table holding the whole metadata key namespace
const META_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("meta");

/// Transactional key-value store backed by a redb database file
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open the store at the given path, creating the file if missing
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Ok(Self { db })
    }
}

impl StoreInterface for RedbStore {
    fn begin<'a>(&'a self, writable: bool) -> StoreResult<Box<dyn StoreTransaction + 'a>> {
        if writable {
            let txn = self.db.begin_write()?;
            return Ok(Box::new(RedbWriteTransaction { txn }));
        }
        let txn = self.db.begin_read()?;
        // A fresh database has no meta table yet; treat it as all keys absent
        let table = match txn.open_table(META_TABLE) {
            Ok(table) => Some(table),
            Err(redb::TableError::TableDoesNotExist(_)) => None,
            Err(err) => return Err(err.into()),
        };
        Ok(Box::new(RedbReadTransaction { table }))
    }

    fn close(self: Box<Self>) -> StoreResult<()> {
        drop(self);
        Ok(())
    }
}

/// Read-only transaction over the meta table
struct RedbReadTransaction {
    table: Option<ReadOnlyTable<&'static [u8], &'static [u8]>>,
}

impl StoreTransaction for RedbReadTransaction {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        let Some(table) = &self.table else {
            return Ok(None);
        };
        let value = table.get(key)?;
        Ok(value.map(|guard| guard.value().to_vec()))
    }

    fn set(&mut self, _key: &[u8], _value: &[u8]) -> StoreResult<()> {
        Err(StoreError::ReadOnly)
    }

    fn commit(self: Box<Self>) -> StoreResult<()> {
        // Nothing to persist; dropping releases the read snapshot
        Ok(())
    }

    fn discard(self: Box<Self>) {}
}

/// Writable transaction over the meta table
struct RedbWriteTransaction {
    txn: WriteTransaction,
}

impl StoreTransaction for RedbWriteTransaction {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        let table = self.txn.open_table(META_TABLE)?;
        let value = table.get(key)?;
        Ok(value.map(|guard| guard.value().to_vec()))
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        let mut table = self.txn.open_table(META_TABLE)?;
        table.insert(key, value)?;
        Ok(())
    }

    fn commit(self: Box<Self>) -> StoreResult<()> {
        self.txn.commit()?;
        Ok(())
    }

    fn discard(self: Box<Self>) {
        let _ = self.txn.abort();
    }
}
