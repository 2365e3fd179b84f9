//! In-memory registry of table names and definitions

use crate::schema::Table;
use std::collections::HashMap;

/// Authoritative in-memory cache of registered tables
///
/// Holds the ordered list of table names (the enumeration order and the
/// content of the reserved index key) plus the name-to-definition mapping.
/// The registry is a cache: the key-value store remains the durable source
/// of truth, and the storage engine keeps the two consistent. `Clone`
/// provides the snapshot used for rollback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    /// Table names in registration order
    table_names: Vec<String>,
    /// Table definitions keyed by table name
    tables: HashMap<String, Table>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a table name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Register a table, appending its name to the enumeration order
    ///
    /// Callers must check [`contains`](Self::contains) first; registering a
    /// duplicate name would shadow the existing definition.
    pub fn insert(&mut self, table: Table) {
        self.table_names.push(table.name().to_string());
        self.tables.insert(table.name().to_string(), table);
    }

    /// Get a registered table definition by name
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Get the registered table names in registration order
    pub fn names(&self) -> &[String] {
        &self.table_names
    }

    /// Iterate over table definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.table_names
            .iter()
            .filter_map(|name| self.tables.get(name))
    }

    /// Get the number of registered tables
    pub fn len(&self) -> usize {
        self.table_names.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.table_names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, ColumnType, ColumnTypeName, Constraints, Precision};
    use std::collections::BTreeMap;

    fn table(name: &str) -> Table {
        let mut columns = BTreeMap::new();
        columns.insert(
            "id".to_string(),
            Column::new(
                "id",
                ColumnType::new(ColumnTypeName::Integer, Precision::INTEGER),
            ),
        );
        Table::new(name, columns, Constraints::default())
    }

    #[test]
    fn test_registry_insert_and_get() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.insert(table("users"));
        assert!(registry.contains("users"));
        assert!(!registry.contains("orders"));
        assert_eq!(registry.get("users").unwrap().name(), "users");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_preserves_registration_order() {
        let mut registry = Registry::new();
        registry.insert(table("zeta"));
        registry.insert(table("alpha"));
        registry.insert(table("mid"));

        assert_eq!(registry.names(), &["zeta", "alpha", "mid"]);
        let iterated: Vec<&str> = registry.iter().map(|t| t.name()).collect();
        assert_eq!(iterated, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_registry_clone_snapshot_is_independent() {
        let mut registry = Registry::new();
        registry.insert(table("users"));

        let snapshot = registry.clone();
        registry.insert(table("orders"));

        assert_eq!(registry.len(), 2);
        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.contains("orders"));
        assert_ne!(registry, snapshot);
    }
}
