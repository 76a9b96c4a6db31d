//! core::record
//!
//! The collected metadata record.
//!
//! # Types
//!
//! - [`FieldValue`] - A resolved value: text, or a boolean flag
//! - [`GitLog`] - An insertion-ordered map of record key to value
//!
//! # Invariants
//!
//! - A record contains exactly the keys that were requested and recognized.
//!   Fields that could not be resolved are present with `""` or `false`,
//!   never absent and never null.
//! - Key order is first-insertion order. Inserting an existing key replaces
//!   its value in place, so duplicate requests cannot duplicate keys.
//! - Emitters treat records as read-only; a record never changes after
//!   collection.
//!
//! Serialization preserves order in both directions: the JSON artifact lists
//! keys in request order, and deserializing it reproduces the same record.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A resolved field value.
///
/// Serializes untagged: text as a JSON string, flags as a JSON boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    Bool(bool),
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl fmt::Display for FieldValue {
    /// Text verbatim; flags as `true` / `false` (the env-artifact form).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(value) => f.write_str(value),
            FieldValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::String(value) => serializer.serialize_str(value),
            FieldValue::Bool(value) => serializer.serialize_bool(*value),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldValueVisitor;

        impl<'de> Visitor<'de> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or a boolean")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<FieldValue, E> {
                Ok(FieldValue::String(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<FieldValue, E> {
                Ok(FieldValue::String(value))
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<FieldValue, E> {
                Ok(FieldValue::Bool(value))
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}

/// An insertion-ordered metadata record.
///
/// Backed by a vector of entries rather than a map type: records are small
/// (a dozen entries), and a vector keeps first-insertion order without any
/// hashing or ordering dependency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GitLog {
    entries: Vec<(String, FieldValue)>,
}

impl GitLog {
    /// An empty record.
    pub fn new() -> Self {
        GitLog { entries: Vec::new() }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a value under `key`.
    ///
    /// A new key appends at the end; an existing key is overwritten in
    /// place and keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for GitLog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut log = GitLog::new();
        for (key, value) in iter {
            log.insert(key, value);
        }
        log
    }
}

impl Serialize for GitLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GitLog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GitLogVisitor;

        impl<'de> Visitor<'de> for GitLogVisitor {
            type Value = GitLog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to string or boolean values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<GitLog, A::Error> {
                let mut log = GitLog::new();
                while let Some((key, value)) = access.next_entry::<String, FieldValue>()? {
                    log.insert(key, value);
                }
                Ok(log)
            }
        }

        deserializer.deserialize_map(GitLogVisitor)
    }
}
