//! Thread-safe monotonic counter for system-generated row identity

use crate::schema::key::KEY_DELIMITER;
use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Named monotonic counter, one per table lacking a declared primary key
///
/// `next()` is safe to call concurrently from multiple callers; the counter
/// carries its own exclusive lock. The counter value is only made durable
/// when the owning table is persisted, so increments between persists are
/// lost on crash. That produces possible ID gaps after recovery but never
/// duplicate IDs within a live sequence instance.
#[derive(Debug, Serialize, Deserialize)]
pub struct Sequence {
    /// Sequence name, derived from the owning table name
    name: String,
    /// Current counter value
    #[serde(
        serialize_with = "serialize_number",
        deserialize_with = "deserialize_number"
    )]
    number: Mutex<u64>,
}

impl Sequence {
    /// Create a new sequence for the named table, starting at 0
    pub fn new(table_name: &str) -> Self {
        Self {
            name: format!("sequence{}{}", KEY_DELIMITER, table_name),
            number: Mutex::new(0),
        }
    }

    /// Get the sequence name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current counter value without advancing it
    pub fn number(&self) -> u64 {
        *self.number.lock()
    }

    /// Return the next number in the sequence
    ///
    /// Strictly increasing, starting at 1. Never returns the same value
    /// twice for a given sequence instance.
    pub fn next(&self) -> u64 {
        let mut number = self.number.lock();
        *number += 1;
        *number
    }
}

impl Clone for Sequence {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            number: Mutex::new(*self.number.lock()),
        }
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        // number() keeps each lock scoped to one call, so comparing a
        // sequence against itself cannot deadlock
        self.name == other.name && self.number() == other.number()
    }
}

impl Eq for Sequence {}

fn serialize_number<S: Serializer>(number: &Mutex<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(*number.lock())
}

fn deserialize_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Mutex<u64>, D::Error> {
    u64::deserialize(deserializer).map(Mutex::new)
}
