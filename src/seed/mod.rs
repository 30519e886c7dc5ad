// ABOUTME: Generic seed loader and the fixed ten-collection seeding plan
// ABOUTME: Writes every record of a collection by its natural key, in sequence, and reports counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EdLab

//! # Seed Loader
//!
//! The one structural pattern of this tool: given a collection and an
//! ordered list of fixed records, write each record by its designated
//! document key and report the count. [`seed_all`] applies the loader to
//! the ten collections of the EdLab dataset in a fixed order; each
//! collection loads only after the previous one completes, and each write
//! is awaited before the next begins.
//!
//! The first failed write aborts the remaining sequence. Collections
//! loaded earlier keep their documents; there is no rollback.

use crate::errors::SeedResult;
use crate::store::{Document, DocumentStore};
use tracing::info;

pub mod data;

/// A record type belonging to one seeded collection
///
/// Implementations supply the collection name, the document key (the
/// record's natural key, e.g. a username or registration number), and the
/// document body. Re-running the loader with the same records produces the
/// same stored state.
pub trait SeedRecord {
    /// Target collection name
    const COLLECTION: &'static str;

    /// The document key this record is stored under
    fn document_key(&self) -> String;

    /// The full document body
    fn document(&self) -> Document;
}

/// Per-collection counts from a completed run
#[derive(Debug, Default)]
pub struct SeedSummary {
    /// `(collection, documents written)` in seeding order
    pub collections: Vec<(&'static str, usize)>,
}

impl SeedSummary {
    fn record(&mut self, collection: &'static str, count: usize) {
        self.collections.push((collection, count));
    }

    /// Total documents written across all collections
    #[must_use]
    pub fn total(&self) -> usize {
        self.collections.iter().map(|(_, count)| count).sum()
    }
}

/// Write every record into its collection, keyed by the record's document key
///
/// Writes are issued one at a time and awaited; the count returned is used
/// for logging only.
///
/// # Errors
///
/// Returns the first [`crate::errors::SeedError::Storage`] encountered;
/// records after the failing one are not written.
pub async fn load_collection<S, R>(store: &S, records: &[R]) -> SeedResult<usize>
where
    S: DocumentStore + ?Sized,
    R: SeedRecord,
{
    for record in records {
        store
            .put_document(R::COLLECTION, &record.document_key(), &record.document())
            .await?;
    }
    info!("  Wrote {} {} documents", records.len(), R::COLLECTION);
    Ok(records.len())
}

/// Seed all ten collections in their fixed order
///
/// Order: users, colleges, departments, students, staff, courses, classes,
/// announcements, attendance, reports.
///
/// # Errors
///
/// Propagates the first failed write; collections earlier in the order
/// retain what was already written.
pub async fn seed_all<S>(store: &S) -> SeedResult<SeedSummary>
where
    S: DocumentStore + ?Sized,
{
    let mut summary = SeedSummary::default();

    info!("Creating users collection...");
    summary.record("users", load_collection(store, &data::sample_users()).await?);

    info!("Creating colleges collection...");
    summary.record(
        "colleges",
        load_collection(store, &data::sample_colleges()).await?,
    );

    info!("Creating departments collection...");
    summary.record(
        "departments",
        load_collection(store, &data::sample_departments()).await?,
    );

    info!("Creating students collection...");
    summary.record(
        "students",
        load_collection(store, &data::sample_students()).await?,
    );

    info!("Creating staff collection...");
    summary.record("staff", load_collection(store, &data::sample_staff()).await?);

    info!("Creating courses collection...");
    summary.record(
        "courses",
        load_collection(store, &data::sample_courses()).await?,
    );

    info!("Creating classes collection...");
    summary.record(
        "classes",
        load_collection(store, &data::sample_classes()).await?,
    );

    info!("Creating announcements collection...");
    summary.record(
        "announcements",
        load_collection(store, &data::sample_announcements()).await?,
    );

    info!("Creating attendance collection...");
    summary.record(
        "attendance",
        load_collection(store, &data::sample_attendance()).await?,
    );

    info!("Creating reports collection...");
    summary.record(
        "reports",
        load_collection(store, &data::sample_reports()).await?,
    );

    Ok(summary)
}
