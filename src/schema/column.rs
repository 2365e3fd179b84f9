//! Column structures for table schema definition

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name tag of a column datatype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnTypeName {
    /// Variable-length string
    Varchar,
    /// Arbitrary-precision decimal number
    Number,
    /// 64-bit integer
    Integer,
    /// Unbounded text
    Text,
    /// JSON document
    Json,
}

impl fmt::Display for ColumnTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnTypeName::Varchar => write!(f, "VARCHAR"),
            ColumnTypeName::Number => write!(f, "NUMBER"),
            ColumnTypeName::Integer => write!(f, "INTEGER"),
            ColumnTypeName::Text => write!(f, "TEXT"),
            ColumnTypeName::Json => write!(f, "JSON"),
        }
    }
}

/// Precision of a column datatype
///
/// `applicable` is false for types without precision semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision {
    /// Number of significant digits
    pub precision: i64,
    /// Number of digits to the right of the decimal point
    pub scale: i64,
    /// Whether precision applies to the datatype at all
    pub applicable: bool,
}

impl Precision {
    /// Precision for types without precision semantics
    pub const NONE: Precision = Precision {
        precision: 0,
        scale: 0,
        applicable: false,
    };

    /// Maximal precision for 64-bit integer types
    pub const INTEGER: Precision = Precision {
        precision: 19,
        scale: 0,
        applicable: true,
    };

    /// Create a new precision
    pub fn new(precision: i64, scale: i64) -> Self {
        Self {
            precision,
            scale,
            applicable: true,
        }
    }
}

/// Type information of a column datatype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnType {
    /// Datatype name tag
    pub name: ColumnTypeName,
    /// Datatype precision
    pub precision: Precision,
}

impl ColumnType {
    /// Create a new column type
    pub fn new(name: ColumnTypeName, precision: Precision) -> Self {
        Self { name, precision }
    }

    /// Check type compatibility with a candidate column type
    ///
    /// Compares the datatype name tags only: two VARCHAR types with
    /// different widths are still the same type. Callers that need
    /// precision-aware equality must compare precision themselves.
    pub fn equals(&self, candidate: &ColumnType) -> bool {
        self.name == candidate.name
    }
}

/// Column metadata structure
///
/// Represents a single named, typed field definition belonging to a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    name: String,
    /// Column data type
    #[serde(rename = "type")]
    column_type: ColumnType,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }

    /// Get column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get column type
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }
}
