// ABOUTME: Demo data seeder for the EdLab college management application
// ABOUTME: Populates ten Firestore collections with the fixed sample dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EdLab

//! Demo data seeder for EdLab.
//!
//! This binary populates Firestore with the sample dataset used by the
//! EdLab dashboard: users, colleges, departments, students, staff,
//! courses, classes, announcements, attendance, and reports.
//!
//! Usage:
//! ```bash
//! # Seed using the standard credential environment variable
//! GOOGLE_APPLICATION_CREDENTIALS=serviceAccountKey.json edlab-seed
//!
//! # Seed with an explicit key file
//! edlab-seed --credentials /path/to/serviceAccountKey.json
//!
//! # Inspect the dataset without network access
//! edlab-seed --dry-run
//!
//! # Verbose output
//! edlab-seed -v
//! ```

use anyhow::Result;
use clap::Parser;
use edlab_seeder::config::ServiceAccountKey;
use edlab_seeder::seed::seed_all;
use edlab_seeder::store::{DocumentStore, FirestoreConfig, Store};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "edlab-seed",
    about = "EdLab Demo Data Seeder",
    long_about = "Populate Firestore with the EdLab sample dataset for dashboard testing"
)]
struct SeedArgs {
    /// Service-account key file (falls back to GOOGLE_APPLICATION_CREDENTIALS)
    #[arg(long)]
    credentials: Option<PathBuf>,

    /// Firestore REST endpoint override (for the emulator)
    #[arg(long)]
    firestore_url: Option<String>,

    /// Seed an in-memory store instead of Firestore
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== EdLab Demo Data Seeder ===");

    let store = if args.dry_run {
        Store::memory()
    } else {
        // Credential problems are fatal here, before any write
        let path = ServiceAccountKey::resolve_path(args.credentials)?;
        let key = ServiceAccountKey::load(&path)?;
        info!("Seeding project: {}", key.project_id);

        let mut config = FirestoreConfig::default();
        if let Some(url) = args.firestore_url {
            config.base_url = url;
        }
        Store::connect_firestore(&key, config).await?
    };

    info!("Storage backend: {}", store.backend_info());

    let summary = seed_all(&store).await?;

    info!("");
    info!("=== Seeding Complete ===");
    for (collection, count) in &summary.collections {
        info!("{}: {}", collection, count);
    }
    info!("Total documents written: {}", summary.total());

    Ok(())
}
