// ABOUTME: Error taxonomy for the EdLab seeder
// ABOUTME: Credential failures are fatal before any write; storage failures abort the sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EdLab

//! # Error Handling
//!
//! Two failure classes exist in this tool. A [`SeedError::Credential`] is
//! raised while loading or exchanging the service-account key, before any
//! document is written. A [`SeedError::Storage`] is raised by the first
//! failed write and aborts the remaining sequence; collections written
//! earlier keep their documents (there is no rollback and no retry).

use thiserror::Error;

/// Errors produced by the seeder
#[derive(Debug, Error)]
pub enum SeedError {
    /// Service-account key missing, unreadable, or rejected by the token
    /// endpoint. Always raised before the first write.
    #[error("credential error: {0}")]
    Credential(String),

    /// An individual document write failed. The failing document is
    /// identified by collection and key; the remaining sequence is not
    /// attempted.
    #[error("storage error writing {collection}/{key}: {message}")]
    Storage {
        /// Collection the failed write targeted
        collection: String,
        /// Document key of the failed write
        key: String,
        /// Backend-reported failure detail
        message: String,
    },
}

impl SeedError {
    /// Build a storage error for a failed write
    pub fn storage(
        collection: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Storage {
            collection: collection.into(),
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Convenient result type alias for seeder operations
pub type SeedResult<T> = Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_names_the_document() {
        let err = SeedError::storage("colleges", "TVE", "permission denied");
        assert_eq!(
            err.to_string(),
            "storage error writing colleges/TVE: permission denied"
        );
    }

    #[test]
    fn credential_error_display() {
        let err = SeedError::Credential("key file not found".into());
        assert_eq!(err.to_string(), "credential error: key file not found");
    }
}
