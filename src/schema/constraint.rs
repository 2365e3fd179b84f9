//! Constraint rules on data in a table

use serde::{Deserialize, Serialize};

/// Constraint rules on data in a table
///
/// A table has at most one primary key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    /// Optional primary key constraint
    #[serde(
        rename = "primaryKey",
        skip_serializing_if = "Option::is_none",
        default
    )]
    primary_key: Option<PrimaryKey>,
}

impl Constraints {
    /// Create constraints with a primary key
    pub fn with_primary_key(primary_key: PrimaryKey) -> Self {
        Self {
            primary_key: Some(primary_key),
        }
    }

    /// Get the primary key constraint, if declared
    pub fn primary_key(&self) -> Option<&PrimaryKey> {
        self.primary_key.as_ref()
    }
}

/// Ordered list of columns comprising a primary key
///
/// Composite keys are supported via the column ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKey {
    /// Column names in key order
    columns: Vec<String>,
}

impl PrimaryKey {
    /// Create a new primary key over the given columns
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Get the column names in key order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}
