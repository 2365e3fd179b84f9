use super::*;
use crate::schema::{
    Column, ColumnType, ColumnTypeName, Constraints, Entity, Precision, PrimaryKey, Table,
};
use crate::store::{StoreError, StoreInterface, StoreResult, StoreTransaction};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tempfile::TempDir;

fn test_columns() -> BTreeMap<String, Column> {
    let mut columns = BTreeMap::new();
    columns.insert(
        "col1".to_string(),
        Column::new(
            "col1",
            ColumnType::new(ColumnTypeName::Varchar, Precision::new(50, 0)),
        ),
    );
    columns
}

fn test_table(name: &str, with_pk: bool) -> Table {
    let constraints = if with_pk {
        Constraints::with_primary_key(PrimaryKey::new(vec!["col1".to_string()]))
    } else {
        Constraints::default()
    };
    Table::new(name, test_columns(), constraints)
}

fn db_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("tables.redb")
}

#[test]
fn test_open_empty_store() {
    let dir = TempDir::new().unwrap();
    let db = Database::open(db_path(&dir)).unwrap();
    assert_eq!(db.table_count(), 0);
    assert!(db.table_names().is_empty());
    db.close().unwrap();
}

#[test]
fn test_open_invalid_path() {
    let result = Database::open("/nonexistent-dir/tables.redb");
    assert!(matches!(result, Err(StorageError::StoreOpen(_))));
}

#[test]
fn test_create_table_and_reopen() {
    let dir = TempDir::new().unwrap();
    let table = test_table("tbl_1", true);

    let db = Database::open(db_path(&dir)).unwrap();
    db.create_table(table.clone()).unwrap();
    db.close().unwrap();

    let db = Database::open(db_path(&dir)).unwrap();
    assert_eq!(db.table_names()[0], "tbl_1");
    let loaded = db.table("tbl_1").expect("table 'tbl_1' missing after reopen");
    assert_eq!(loaded, table);
    db.close().unwrap();
}

#[test]
fn test_create_table_duplicate_rejected() {
    let dir = TempDir::new().unwrap();
    let db = Database::open(db_path(&dir)).unwrap();
    let table = test_table("tbl_1", true);

    db.create_table(table.clone()).unwrap();
    let names_before = db.table_names();
    let definition_before = db.table("tbl_1").unwrap();

    let result = db.create_table(table);
    assert!(matches!(result, Err(StorageError::TableExists(ref name)) if name == "tbl_1"));

    // The failed call must leave registry and store unchanged
    assert_eq!(db.table_names(), names_before);
    assert_eq!(db.table("tbl_1").unwrap(), definition_before);
    db.close().unwrap();

    let db = Database::open(db_path(&dir)).unwrap();
    assert_eq!(db.table_names(), names_before);
    assert_eq!(db.table("tbl_1").unwrap(), definition_before);
    db.close().unwrap();
}

#[test]
fn test_create_table_without_primary_key_persists_sequence() {
    let dir = TempDir::new().unwrap();
    let db = Database::open(db_path(&dir)).unwrap();
    db.create_table(test_table("events", false)).unwrap();
    db.close().unwrap();

    let db = Database::open(db_path(&dir)).unwrap();
    let table = db.table("events").unwrap();
    let sequence = table.sequence().expect("sequence missing after reopen");
    assert_eq!(sequence.name(), "sequence:events");
    assert_eq!(sequence.number(), 0);
    db.close().unwrap();
}

#[test]
fn test_create_many_tables_preserves_order() {
    let dir = TempDir::new().unwrap();
    let db = Database::open(db_path(&dir)).unwrap();

    for name in ["zeta", "alpha", "mid"] {
        db.create_table(test_table(name, true)).unwrap();
    }
    assert_eq!(db.table_names(), vec!["zeta", "alpha", "mid"]);
    db.close().unwrap();

    let db = Database::open(db_path(&dir)).unwrap();
    assert_eq!(db.table_names(), vec!["zeta", "alpha", "mid"]);
    db.close().unwrap();
}

#[test]
fn test_concurrent_create_table_serializes() {
    let dir = TempDir::new().unwrap();
    let db = Arc::new(Database::open(db_path(&dir)).unwrap());
    let num_threads = 4;
    let tables_per_thread = 10;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                for i in 0..tables_per_thread {
                    let name = format!("table_{}_{}", thread_id, i);
                    db.create_table(test_table(&name, true)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(db.table_count(), num_threads * tables_per_thread);
}

// In-memory store double with switchable commit failure, used to exercise
// the rollback path without touching redb.
#[derive(Default)]
struct FlakyState {
    data: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
    fail_commits: AtomicBool,
}

struct FlakyStore {
    state: Arc<FlakyState>,
}

impl StoreInterface for FlakyStore {
    fn begin<'a>(&'a self, writable: bool) -> StoreResult<Box<dyn StoreTransaction + 'a>> {
        Ok(Box::new(FlakyTransaction {
            state: Arc::clone(&self.state),
            writable,
            staged: HashMap::new(),
        }))
    }

    fn close(self: Box<Self>) -> StoreResult<()> {
        Ok(())
    }
}

struct FlakyTransaction {
    state: Arc<FlakyState>,
    writable: bool,
    staged: HashMap<Vec<u8>, Vec<u8>>,
}

impl StoreTransaction for FlakyTransaction {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        if let Some(value) = self.staged.get(key) {
            return Ok(Some(value.clone()));
        }
        Ok(self.state.data.lock().get(key).cloned())
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        if !self.writable {
            return Err(StoreError::ReadOnly);
        }
        self.staged.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn commit(self: Box<Self>) -> StoreResult<()> {
        if self.state.fail_commits.load(Ordering::SeqCst) {
            return Err(StoreError::Commit("injected commit failure".to_string()));
        }
        self.state.data.lock().extend(self.staged);
        Ok(())
    }

    fn discard(self: Box<Self>) {}
}

#[test]
fn test_commit_failure_rolls_back_registry() {
    let state = Arc::new(FlakyState::default());
    let db = Database::with_store(Box::new(FlakyStore {
        state: Arc::clone(&state),
    }))
    .unwrap();

    db.create_table(test_table("tbl_1", true)).unwrap();
    let names_before = db.table_names();
    let definition_before = db.table("tbl_1").unwrap();
    let stored_keys_before = state.data.lock().len();

    state.fail_commits.store(true, Ordering::SeqCst);
    let result = db.create_table(test_table("tbl_2", true));
    assert!(matches!(
        result,
        Err(StorageError::Transaction(StoreError::Commit(_)))
    ));

    // Rollback removes only the staged, uncommitted table
    assert_eq!(db.table_names(), names_before);
    assert_eq!(db.table("tbl_1").unwrap(), definition_before);
    assert!(db.table("tbl_2").is_none());
    assert_eq!(state.data.lock().len(), stored_keys_before);

    // A later create succeeds once commits work again
    state.fail_commits.store(false, Ordering::SeqCst);
    db.create_table(test_table("tbl_2", true)).unwrap();
    assert_eq!(db.table_names(), vec!["tbl_1", "tbl_2"]);
}

#[test]
fn test_create_table_rewrites_all_definitions() {
    // Pinned behavior: every create persists the index plus every known
    // table definition, not only the new one
    let state = Arc::new(FlakyState::default());
    let db = Database::with_store(Box::new(FlakyStore {
        state: Arc::clone(&state),
    }))
    .unwrap();

    db.create_table(test_table("tbl_1", true)).unwrap();
    db.create_table(test_table("tbl_2", true)).unwrap();

    let data = state.data.lock();
    // Index key plus one definition key per table
    assert_eq!(data.len(), 3);
    assert!(data.contains_key("tables".as_bytes()));
    assert!(data.contains_key("table:tbl_1".as_bytes()));
    assert!(data.contains_key("table:tbl_2".as_bytes()));

    let index: Vec<String> = serde_json::from_slice(&data["tables".as_bytes()]).unwrap();
    assert_eq!(index, vec!["tbl_1", "tbl_2"]);
}

#[test]
fn test_hydration_fails_on_missing_definition() {
    let state = Arc::new(FlakyState::default());
    state.data.lock().insert(
        b"tables".to_vec(),
        serde_json::to_vec(&["ghost"]).unwrap(),
    );

    let result = Database::with_store(Box::new(FlakyStore { state }));
    assert!(matches!(
        result,
        Err(StorageError::TableDefinitionMissing(ref name)) if name == "ghost"
    ));
}

#[test]
fn test_hydration_fails_on_corrupt_index() {
    let state = Arc::new(FlakyState::default());
    state
        .data
        .lock()
        .insert(b"tables".to_vec(), b"not json".to_vec());

    let result = Database::with_store(Box::new(FlakyStore { state }));
    assert!(matches!(result, Err(StorageError::Serialization(_))));
}

#[test]
fn test_hydration_fails_on_corrupt_definition() {
    let state = Arc::new(FlakyState::default());
    {
        let mut data = state.data.lock();
        data.insert(b"tables".to_vec(), serde_json::to_vec(&["tbl_1"]).unwrap());
        data.insert(b"table:tbl_1".to_vec(), b"{\"name\":".to_vec());
    }

    let result = Database::with_store(Box::new(FlakyStore { state }));
    assert!(matches!(result, Err(StorageError::Serialization(_))));
}

#[test]
fn test_stored_definition_matches_table_bytes() {
    let state = Arc::new(FlakyState::default());
    let db = Database::with_store(Box::new(FlakyStore {
        state: Arc::clone(&state),
    }))
    .unwrap();

    let table = test_table("tbl_1", true);
    db.create_table(table.clone()).unwrap();

    let data = state.data.lock();
    let stored = &data[table.key().as_bytes()];
    assert_eq!(stored, &table.bytes().unwrap());
}
