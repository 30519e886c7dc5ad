// ABOUTME: In-process document store used by dry runs and the test suite
// ABOUTME: Stores documents as plain JSON keyed by collection and document key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EdLab

//! In-Memory Document Store
//!
//! Backs `--dry-run` mode and the integration tests. Documents are stored
//! as plain JSON objects so assertions can inspect field values without
//! going through the Firestore value encoding.

use crate::errors::SeedResult;
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::collections::BTreeMap;

use super::{Document, DocumentStore};

/// In-process store: collection name → (document key → JSON document)
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, BTreeMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held by a collection
    #[must_use]
    pub fn collection_count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map_or(0, |docs| docs.len())
    }

    /// Fetch a stored document as JSON
    #[must_use]
    pub fn get(&self, collection: &str, key: &str) -> Option<Value> {
        self.collections
            .get(collection)
            .and_then(|docs| docs.get(key).cloned())
    }

    /// Clone the entire stored state, for whole-store comparisons
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, BTreeMap<String, Value>> {
        self.collections
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_info(&self) -> &'static str {
        "In-Memory (Dry Run)"
    }

    async fn put_document(
        &self,
        collection: &str,
        key: &str,
        document: &Document,
    ) -> SeedResult<()> {
        self.collections
            .entry(collection.to_owned())
            .or_default()
            .insert(key.to_owned(), document.to_json());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_overwrites_existing_document() {
        let store = MemoryStore::new();
        let first = Document::new().field("name", "before");
        let second = Document::new().field("name", "after");

        store.put_document("colleges", "TVE", &first).await.unwrap();
        store.put_document("colleges", "TVE", &second).await.unwrap();

        assert_eq!(store.collection_count("colleges"), 1);
        assert_eq!(store.get("colleges", "TVE").unwrap()["name"], "after");
    }

    #[tokio::test]
    async fn missing_collection_counts_zero() {
        let store = MemoryStore::new();
        assert_eq!(store.collection_count("reports"), 0);
        assert!(store.get("reports", "anything").is_none());
    }
}
