//! Table structure for storing table metadata

use crate::schema::column::Column;
use crate::schema::constraint::Constraints;
use crate::schema::key::{self, KEY_DELIMITER};
use crate::schema::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storable entity that can be serialized and identified by a key
pub trait Entity {
    /// Get the identifying key in the key-value namespace
    fn key(&self) -> String;

    /// Get the serialized representation to persist under the key
    fn bytes(&self) -> serde_json::Result<Vec<u8>>;
}

/// Table metadata structure
///
/// Stores the schema definition of a table:
/// - name: Unique table name within a registry
/// - columns: Column definitions keyed by column name
/// - constraints: Constraint rules, at most one primary key
/// - sequence: Row-id counter, present iff no primary key is declared
///
/// Construction is pure and performs no I/O; a table only becomes durable
/// when passed to the storage engine's create operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table name
    name: String,
    /// Column definitions keyed by column name (sorted for stable encoding)
    columns: BTreeMap<String, Column>,
    /// Constraint rules
    constraints: Constraints,
    /// System-generated row identity, present iff no primary key
    #[serde(skip_serializing_if = "Option::is_none", default)]
    sequence: Option<Sequence>,
}

impl Table {
    /// Create a new table
    ///
    /// Attaches a fresh [`Sequence`] when no primary key is declared: a
    /// table has either caller-supplied primary-key identity or
    /// system-generated sequence identity, never both and never neither.
    pub fn new(
        name: impl Into<String>,
        columns: BTreeMap<String, Column>,
        constraints: Constraints,
    ) -> Self {
        let name = name.into();
        let sequence = match constraints.primary_key() {
            Some(_) => None,
            None => Some(Sequence::new(&name)),
        };
        Self {
            name,
            columns,
            constraints,
            sequence,
        }
    }

    /// Get table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get column by name
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Get all columns keyed by name
    pub fn columns(&self) -> &BTreeMap<String, Column> {
        &self.columns
    }

    /// Get the constraint rules
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Get the row-id sequence, present iff no primary key is declared
    pub fn sequence(&self) -> Option<&Sequence> {
        self.sequence.as_ref()
    }

    /// Get the key prefix under which this table's rows live
    ///
    /// Every row key strictly extends this prefix, which makes it suitable
    /// for range scans over the table's row namespace.
    pub fn key_prefix(&self) -> String {
        self.key() + KEY_DELIMITER
    }
}

impl Entity for Table {
    fn key(&self) -> String {
        key::table_key(&self.name)
    }

    fn bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
