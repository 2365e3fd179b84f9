//! Canonical key scheme for the shared key-value namespace
//!
//! Keys are colon-delimited ASCII strings with no escaping:
//! - `"tables"` holds the ordered list of registered table names
//! - `"table:<name>"` holds a table definition
//! - `"table:<name>:<rowID>"` is reserved for row payloads
//!
//! Because the scheme does no escaping, table and row identifiers must not
//! contain the delimiter character. This is a documented limitation of the
//! key layout, not something the scheme detects.

/// Delimiter between key segments
pub const KEY_DELIMITER: &str = ":";

/// Reserved key holding the ordered list of all registered table names
pub const TABLES_KEY: &str = "tables";

/// Create the identifying key for a table
pub fn table_key(name: &str) -> String {
    format!("table{}{}", KEY_DELIMITER, name)
}
