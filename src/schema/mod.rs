//! Schema module for table metadata definitions
//!
//! This module implements the schema data model with the following features:
//! - Table definitions (columns, constraints, optional row-id sequence)
//! - Canonical key derivation for the key-value namespace
//! - Transient row values with byte-exact field comparison

pub mod column;
pub mod constraint;
pub mod key;
pub mod row;
pub mod sequence;
pub mod table;

pub use column::{Column, ColumnType, ColumnTypeName, Precision};
pub use constraint::{Constraints, PrimaryKey};
pub use key::{KEY_DELIMITER, TABLES_KEY, table_key};
pub use row::{Row, RowField};
pub use sequence::Sequence;
pub use table::{Entity, Table};
