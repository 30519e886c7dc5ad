// ABOUTME: Document store abstraction for the EdLab seeder
// ABOUTME: Single put-by-key operation with Firestore and in-memory backends behind a factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EdLab

//! # Document Store Abstraction
//!
//! The seeder needs exactly one storage operation: set the document at
//! `(collection, key)` to a value, as a full overwrite. [`DocumentStore`]
//! captures that contract; [`Store`] is the backend selector that
//! delegates to the Firestore client or the in-memory store.

use crate::config::ServiceAccountKey;
use crate::errors::SeedResult;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

pub mod firestore;
pub mod memory;

pub use firestore::{FirestoreConfig, FirestoreStore};
pub use memory::MemoryStore;

/// A single document field value
///
/// The sample dataset uses text, integers, floats, booleans, UTC
/// timestamps, and lists of text; nothing else is representable on
/// purpose.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// UTF-8 text
    Text(String),
    /// Signed integer
    Integer(i64),
    /// Double-precision float
    Float(f64),
    /// Boolean flag
    Boolean(bool),
    /// UTC timestamp
    Timestamp(DateTime<Utc>),
    /// Ordered list of text values
    TextArray(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<&[&str]> for FieldValue {
    fn from(values: &[&str]) -> Self {
        Self::TextArray(values.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl FieldValue {
    /// Render the value as plain JSON (timestamps become RFC 3339 strings)
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => json!(s),
            Self::Integer(n) => json!(n),
            Self::Float(f) => json!(f),
            Self::Boolean(b) => json!(b),
            Self::Timestamp(ts) => json!(ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Self::TextArray(values) => json!(values),
        }
    }
}

/// An ordered field-name → value mapping, the unit of storage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: Vec<(String, FieldValue)>,
}

impl Document {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, preserving insertion order
    #[must_use]
    pub fn field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.push((name.to_owned(), value.into()));
        self
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the whole document as a plain JSON object
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map: serde_json::Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        Value::Object(map)
    }
}

/// Core storage abstraction
///
/// All backends implement this trait to provide a consistent interface to
/// the seed loader. The one operation is an upsert: writing the same
/// document at the same key twice leaves the same stored state.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Descriptive backend name for logging
    fn backend_info(&self) -> &'static str;

    /// Set the document at `(collection, key)` to `document`, replacing
    /// any previous content (full overwrite, not merge)
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::SeedError::Storage`] when the write fails.
    async fn put_document(&self, collection: &str, key: &str, document: &Document)
        -> SeedResult<()>;
}

/// Store instance wrapper that delegates to the selected backend
pub enum Store {
    /// Hosted Firestore database
    Firestore(FirestoreStore),
    /// In-process store for dry runs and tests
    Memory(MemoryStore),
}

impl Store {
    /// Connect to Firestore with the given service-account key
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::SeedError::Credential`] when the JWT
    /// assertion cannot be signed or the token exchange is refused.
    pub async fn connect_firestore(
        key: &ServiceAccountKey,
        config: FirestoreConfig,
    ) -> SeedResult<Self> {
        Ok(Self::Firestore(FirestoreStore::connect(key, config).await?))
    }

    /// Create an in-memory store
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }
}

#[async_trait]
impl DocumentStore for Store {
    fn backend_info(&self) -> &'static str {
        match self {
            Self::Firestore(store) => store.backend_info(),
            Self::Memory(store) => store.backend_info(),
        }
    }

    async fn put_document(
        &self,
        collection: &str,
        key: &str,
        document: &Document,
    ) -> SeedResult<()> {
        match self {
            Self::Firestore(store) => store.put_document(collection, key, document).await,
            Self::Memory(store) => store.put_document(collection, key, document).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn document_preserves_insertion_order() {
        let doc = Document::new()
            .field("code", "TVE")
            .field("establishedYear", 1998)
            .field("studentsCount", 3500);

        let names: Vec<&str> = doc.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["code", "establishedYear", "studentsCount"]);
    }

    #[test]
    fn to_json_renders_each_value_kind() {
        let marked = Utc.with_ymd_and_hms(2024, 1, 13, 10, 30, 0).single().unwrap();
        let doc = Document::new()
            .field("name", "Data Structures")
            .field("credits", 4)
            .field("gpa", 3.8)
            .field("isActive", true)
            .field("markedTime", marked)
            .field("qualifications", ["B.Tech", "M.Tech"].as_slice());

        let json = doc.to_json();
        assert_eq!(json["name"], "Data Structures");
        assert_eq!(json["credits"], 4);
        assert_eq!(json["gpa"], 3.8);
        assert_eq!(json["isActive"], true);
        assert_eq!(json["markedTime"], "2024-01-13T10:30:00Z");
        assert_eq!(json["qualifications"], serde_json::json!(["B.Tech", "M.Tech"]));
    }
}
