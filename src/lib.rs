// ABOUTME: Main library entry point for the EdLab Firestore seeder
// ABOUTME: Provides the seed loader, document store backends, and sample dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EdLab

#![deny(unsafe_code)]

//! # EdLab Seeder
//!
//! A one-shot utility that populates a Firestore database with the sample
//! dataset of the EdLab college management demo: ten fixed collections
//! (users, colleges, departments, students, staff, courses, classes,
//! announcements, attendance, reports), each written document keyed by the
//! record's natural key.
//!
//! ## Quick Start
//!
//! ```bash
//! # Seed the project named in the service-account key
//! edlab-seed --credentials /path/to/serviceAccountKey.json
//!
//! # Inspect the dataset without touching Firestore
//! edlab-seed --dry-run
//! ```
//!
//! ## Architecture
//!
//! - **Store**: `DocumentStore` abstraction with Firestore and in-memory
//!   backends behind a delegating factory
//! - **Models**: the ten record types with their literal sample values
//! - **Seed**: the generic collection loader and the fixed seeding plan
//! - **Config**: service-account credential loading

/// Service-account credential loading
pub mod config;

/// Error taxonomy for credential and storage failures
pub mod errors;

/// Record types for the ten seeded collections
pub mod models;

/// Generic seed loader and the fixed collection plan
pub mod seed;

/// Document store abstraction with Firestore and in-memory backends
pub mod store;
