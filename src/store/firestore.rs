// ABOUTME: Firestore v1 REST backend for the document store abstraction
// ABOUTME: Signs a service-account JWT assertion, exchanges it for an access token, writes via PATCH
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EdLab

//! Firestore REST Client
//!
//! This module provides:
//! - OAuth2 token acquisition from a service-account key (signed RS256 JWT
//!   assertion, exchanged at the key's `token_uri`)
//! - Document upserts via `PATCH .../documents/{collection}/{key}`, which
//!   replaces the whole document (full overwrite, not merge)
//! - Encoding of field values into the REST API's typed value JSON
//!
//! The access token is fetched once at connect time; a one-shot seeding
//! run never outlives the one-hour token lifetime, so no refresh path
//! exists.
//!
//! # API Reference
//! Firestore REST API: <https://firebase.google.com/docs/firestore/use-rest-api>

use crate::config::ServiceAccountKey;
use crate::errors::{SeedError, SeedResult};
use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use super::{Document, DocumentStore, FieldValue};

/// OAuth2 scope granting Firestore read/write access
const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";

/// JWT-bearer grant type for the assertion exchange
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime in seconds (the maximum Google accepts)
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Firestore client configuration
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Base URL of the Firestore REST API; override to target the emulator
    pub base_url: String,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            base_url: "https://firestore.googleapis.com/v1".to_owned(),
        }
    }
}

/// Claims of the service-account JWT assertion
#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

/// Token endpoint response (only the field we use)
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Firestore REST backend
pub struct FirestoreStore {
    config: FirestoreConfig,
    project_id: String,
    access_token: String,
    http_client: reqwest::Client,
}

impl FirestoreStore {
    /// Authenticate against the token endpoint and build the client
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Credential`] when the private key cannot sign
    /// the assertion or the token endpoint refuses the exchange. No
    /// document write happens before this succeeds.
    pub async fn connect(key: &ServiceAccountKey, config: FirestoreConfig) -> SeedResult<Self> {
        let http_client = reqwest::Client::new();
        let assertion = sign_assertion(key)?;

        debug!("Exchanging JWT assertion at {}", key.token_uri);
        let response = http_client
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| SeedError::Credential(format!("token exchange failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SeedError::Credential(format!(
                "token endpoint returned HTTP {status}: {body}"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SeedError::Credential(format!("malformed token response: {e}")))?;

        info!("Authenticated service account {}", key.client_email);
        Ok(Self {
            config,
            project_id: key.project_id.clone(),
            access_token: token.access_token,
            http_client,
        })
    }

    /// URL of the document at `(collection, key)`
    fn document_url(&self, collection: &str, key: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            self.config.base_url, self.project_id, collection, key
        )
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    fn backend_info(&self) -> &'static str {
        "Firestore (Google Cloud)"
    }

    async fn put_document(
        &self,
        collection: &str,
        key: &str,
        document: &Document,
    ) -> SeedResult<()> {
        let url = self.document_url(collection, key);
        let body = json!({ "fields": encode_fields(document) });

        let response = self
            .http_client
            .patch(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| SeedError::storage(collection, key, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(SeedError::storage(
                collection,
                key,
                format!("HTTP {status}: {detail}"),
            ));
        }

        debug!("Wrote {}/{}", collection, key);
        Ok(())
    }
}

/// Sign the OAuth2 JWT assertion with the service-account private key
fn sign_assertion(key: &ServiceAccountKey) -> SeedResult<String> {
    let now = Utc::now();
    let claims = AssertionClaims {
        iss: &key.client_email,
        scope: DATASTORE_SCOPE,
        aud: &key.token_uri,
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ASSERTION_LIFETIME_SECS)).timestamp(),
    };

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| SeedError::Credential(format!("invalid service-account private key: {e}")))?;

    encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
        .map_err(|e| SeedError::Credential(format!("failed to sign JWT assertion: {e}")))
}

/// Encode one field value into the REST API's typed value JSON
fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(s) => json!({ "stringValue": s }),
        // The REST API carries 64-bit integers as decimal strings
        FieldValue::Integer(n) => json!({ "integerValue": n.to_string() }),
        FieldValue::Float(f) => json!({ "doubleValue": f }),
        FieldValue::Boolean(b) => json!({ "booleanValue": b }),
        FieldValue::Timestamp(ts) => {
            json!({ "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Secs, true) })
        }
        FieldValue::TextArray(values) => {
            let encoded: Vec<Value> = values
                .iter()
                .map(|s| json!({ "stringValue": s }))
                .collect();
            json!({ "arrayValue": { "values": encoded } })
        }
    }
}

/// Encode a whole document into the `fields` map of a Firestore document
fn encode_fields(document: &Document) -> Value {
    let map: serde_json::Map<String, Value> = document
        .iter()
        .map(|(name, value)| (name.to_owned(), encode_value(value)))
        .collect();
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn integers_encode_as_decimal_strings() {
        let encoded = encode_value(&FieldValue::Integer(3500));
        assert_eq!(encoded, json!({ "integerValue": "3500" }));
    }

    #[test]
    fn floats_encode_as_double_values() {
        let encoded = encode_value(&FieldValue::Float(3.8));
        assert_eq!(encoded, json!({ "doubleValue": 3.8 }));
    }

    #[test]
    fn booleans_and_text_encode_directly() {
        assert_eq!(
            encode_value(&FieldValue::Boolean(true)),
            json!({ "booleanValue": true })
        );
        assert_eq!(
            encode_value(&FieldValue::Text("TVE".into())),
            json!({ "stringValue": "TVE" })
        );
    }

    #[test]
    fn timestamps_encode_as_rfc3339_zulu() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 13, 10, 30, 0).single().unwrap();
        assert_eq!(
            encode_value(&FieldValue::Timestamp(ts)),
            json!({ "timestampValue": "2024-01-13T10:30:00Z" })
        );
    }

    #[test]
    fn text_arrays_encode_as_array_values() {
        let encoded = encode_value(&FieldValue::TextArray(vec![
            "B.Tech".into(),
            "M.Tech".into(),
            "PhD".into(),
        ]));
        assert_eq!(
            encoded,
            json!({ "arrayValue": { "values": [
                { "stringValue": "B.Tech" },
                { "stringValue": "M.Tech" },
                { "stringValue": "PhD" },
            ] } })
        );
    }

    #[test]
    fn fields_map_covers_every_field() {
        let doc = Document::new()
            .field("code", "CSE")
            .field("totalStudents", 420);
        let fields = encode_fields(&doc);
        assert_eq!(fields["code"], json!({ "stringValue": "CSE" }));
        assert_eq!(fields["totalStudents"], json!({ "integerValue": "420" }));
    }
}
