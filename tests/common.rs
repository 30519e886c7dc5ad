// ABOUTME: Shared test utilities for the seeder integration tests
// ABOUTME: Provides quiet logging setup and a deliberately failing store backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EdLab
#![allow(dead_code)]

//! Shared test utilities for `edlab_seeder`.

use async_trait::async_trait;
use edlab_seeder::errors::{SeedError, SeedResult};
use edlab_seeder::store::{Document, DocumentStore, MemoryStore};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// A store that rejects writes to one collection and delegates the rest
///
/// Used to verify that a failed write aborts the remaining sequence while
/// earlier collections keep their documents.
pub struct FailingStore {
    pub inner: MemoryStore,
    pub fail_on: &'static str,
}

impl FailingStore {
    pub fn new(fail_on: &'static str) -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_on,
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn backend_info(&self) -> &'static str {
        "Failing (Test)"
    }

    async fn put_document(
        &self,
        collection: &str,
        key: &str,
        document: &Document,
    ) -> SeedResult<()> {
        if collection == self.fail_on {
            return Err(SeedError::storage(collection, key, "injected failure"));
        }
        self.inner.put_document(collection, key, document).await
    }
}
