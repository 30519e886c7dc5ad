// ABOUTME: Integration tests for the seed loader against the in-memory backend
// ABOUTME: Covers counts, idempotency, key mapping, and partial-failure ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EdLab

mod common;

use common::{init_test_logging, FailingStore};
use edlab_seeder::errors::SeedError;
use edlab_seeder::seed::{data, load_collection, seed_all};
use edlab_seeder::store::MemoryStore;

/// The fixed seeding order with the expected per-collection counts
const EXPECTED_COUNTS: &[(&str, usize)] = &[
    ("users", 4),
    ("colleges", 4),
    ("departments", 4),
    ("students", 3),
    ("staff", 3),
    ("courses", 4),
    ("classes", 3),
    ("announcements", 3),
    ("attendance", 2),
    ("reports", 2),
];

#[tokio::test]
async fn seed_all_writes_every_collection_in_order() {
    init_test_logging();
    let store = MemoryStore::new();

    let summary = seed_all(&store).await.unwrap();

    assert_eq!(summary.collections, EXPECTED_COUNTS.to_vec());
    assert_eq!(summary.total(), 32);
    for (collection, count) in EXPECTED_COUNTS {
        assert_eq!(
            store.collection_count(collection),
            *count,
            "wrong document count in {collection}"
        );
    }
}

#[tokio::test]
async fn seeding_twice_is_idempotent() {
    init_test_logging();
    let store = MemoryStore::new();

    seed_all(&store).await.unwrap();
    let first = store.snapshot();

    let summary = seed_all(&store).await.unwrap();
    let second = store.snapshot();

    assert_eq!(first, second);
    assert_eq!(summary.total(), 32);
}

#[tokio::test]
async fn documents_are_stored_under_their_natural_keys() {
    init_test_logging();
    let store = MemoryStore::new();
    seed_all(&store).await.unwrap();

    let student = store.get("students", "TVE20CS001").unwrap();
    assert_eq!(student["registrationNumber"], "TVE20CS001");
    assert_eq!(student["firstName"], "Arjun");

    let user = store.get("users", "admin123").unwrap();
    assert_eq!(user["role"], "admin");

    // Department keys are the composite {collegeCode}_{code}
    let dept = store.get("departments", "TVE_CSE").unwrap();
    assert_eq!(dept["name"], "Computer Science & Engineering");
    assert!(store.get("departments", "CSE").is_none());
}

#[tokio::test]
async fn colleges_scenario_matches_the_fixture() {
    init_test_logging();
    let store = MemoryStore::new();

    let count = load_collection(&store, &data::sample_colleges()).await.unwrap();

    assert_eq!(count, 4);
    assert_eq!(store.collection_count("colleges"), 4);
    for code in ["TVE", "KMCT", "TCR", "RIT"] {
        assert!(store.get("colleges", code).is_some(), "missing {code}");
    }
    let tve = store.get("colleges", "TVE").unwrap();
    assert_eq!(tve["studentsCount"], 3500);
    assert_eq!(tve["establishedYear"], 1998);
}

#[tokio::test]
async fn timestamps_are_stored_as_rfc3339() {
    init_test_logging();
    let store = MemoryStore::new();
    load_collection(&store, &data::sample_attendance()).await.unwrap();

    let mark = store.get("attendance", "TVE_CSE_3A_20240113_001").unwrap();
    assert_eq!(mark["date"], "2024-01-13T00:00:00Z");
    assert_eq!(mark["markedTime"], "2024-01-13T10:30:00Z");
}

#[tokio::test]
async fn failed_write_aborts_later_collections_but_keeps_earlier_ones() {
    init_test_logging();
    let store = FailingStore::new("students");

    let err = seed_all(&store).await.unwrap_err();

    match err {
        SeedError::Storage { collection, key, .. } => {
            assert_eq!(collection, "students");
            assert_eq!(key, "TVE20CS001");
        }
        SeedError::Credential(_) => panic!("expected a storage error"),
    }

    // Collections earlier in the fixed order retain their writes
    assert_eq!(store.inner.collection_count("users"), 4);
    assert_eq!(store.inner.collection_count("colleges"), 4);
    assert_eq!(store.inner.collection_count("departments"), 4);

    // The failing collection and everything after it stay empty
    for collection in ["students", "staff", "courses", "classes", "announcements", "attendance", "reports"] {
        assert_eq!(
            store.inner.collection_count(collection),
            0,
            "{collection} should not have been written"
        );
    }
}
