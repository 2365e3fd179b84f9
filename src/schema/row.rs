//! Transient row values and their key derivation
//!
//! Rows are constructed by callers for read/write operations; the core
//! does not persist them. Their only durable trace is the key they would
//! occupy in the table's row namespace.

use crate::schema::column::ColumnType;
use crate::schema::key::KEY_DELIMITER;
use crate::schema::table::{Entity, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Row in a table
///
/// Holds the owning table's identifying key rather than a reference to the
/// table itself, so rows never dangle or form ownership cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Key of the owning table
    table_key: String,
    /// Row identifier
    id: String,
    /// Field values keyed by column name
    fields: BTreeMap<String, RowField>,
}

impl Row {
    /// Create a new row on the given table
    pub fn new(table: &Table, id: impl Into<String>, fields: BTreeMap<String, RowField>) -> Self {
        Self {
            table_key: table.key(),
            id: id.into(),
            fields,
        }
    }

    /// Get the row identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the key identifying the row
    ///
    /// Always strictly extends the owning table's key prefix.
    pub fn key(&self) -> String {
        format!("{}{}{}", self.table_key, KEY_DELIMITER, self.id)
    }

    /// Get a field value by column name
    pub fn field(&self, name: &str) -> Option<&RowField> {
        self.fields.get(name)
    }

    /// Get all field values keyed by column name
    pub fn fields(&self) -> &BTreeMap<String, RowField> {
        &self.fields
    }
}

/// Field in a row with datatype and raw data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowField {
    /// Field datatype
    #[serde(rename = "type")]
    column_type: ColumnType,
    /// Raw byte payload
    data: Vec<u8>,
}

impl RowField {
    /// Create a new row field
    pub fn new(column_type: ColumnType, data: Vec<u8>) -> Self {
        Self { column_type, data }
    }

    /// Get the field datatype
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Get the raw byte payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Check if a candidate field is equal to this field
    ///
    /// True iff the datatype name tags match and the payloads are identical
    /// in length and content, compared byte for byte. No type coercion:
    /// precision differences do not affect the result.
    pub fn equals(&self, candidate: &RowField) -> bool {
        if !self.column_type.equals(&candidate.column_type) {
            return false;
        }
        self.data == candidate.data
    }
}
