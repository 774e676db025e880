//! FileStorageService — signed single-shot uploads and removals against an
//! S3-compatible endpoint.
//!
//! Each call is independent and self-contained: it computes its own
//! timestamp, payload hash and signature, sends one HTTP request and
//! interprets the response. There is no retry, no backoff and no multi-step
//! protocol state; a failure surfaces immediately and the caller decides
//! what to do with it. The only cross-call state is the pooled
//! `reqwest::Client`, which is internally synchronized and safe to share
//! between concurrent in-flight calls.

use crate::{
    config::StorageConfig,
    errors::{StorageError, StorageResult},
    models::object::StoredObject,
    object_key,
    signing::{self, RequestSigner},
};
use bytes::Bytes;
use chrono::Utc;
use reqwest::{Client, Response, header};
use std::time::Duration;
use tracing::debug;

/// Everything is uploaded as opaque bytes; the original content type is not
/// preserved.
const CONTENT_TYPE: &str = "application/octet-stream";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one bucket on an S3-compatible object store.
///
/// Construct once at startup from a validated [`StorageConfig`] and share;
/// cloning is cheap and clones share the connection pool.
#[derive(Clone)]
pub struct FileStorageService {
    config: StorageConfig,
    signer: RequestSigner,
    client: Client,
}

impl FileStorageService {
    /// Create a service with a default HTTP client (30 second timeout).
    pub fn new(config: StorageConfig) -> StorageResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|err| {
                StorageError::Configuration(format!("failed to build HTTP client: {err}"))
            })?;
        Ok(Self::with_client(config, client))
    }

    /// Create a service around a caller-supplied HTTP client.
    ///
    /// This is where deadline and proxy policy live: the service itself
    /// enforces no timeout beyond what the client carries, so callers that
    /// need a different deadline (or cancellation) configure it here.
    pub fn with_client(config: StorageConfig, client: Client) -> Self {
        let signer = RequestSigner::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            config.region.clone(),
        );
        Self {
            config,
            signer,
            client,
        }
    }

    /// Upload `content` under a fresh unique key derived from
    /// `original_filename`.
    ///
    /// The payload is fully buffered; its SHA-256 is computed once and used
    /// both as the `x-amz-content-sha256` header and inside the signed
    /// canonical request. A success status returns the stored object with
    /// its public URL; any other status is a
    /// [`StorageError::RemoteRejection`] carrying status and body verbatim.
    pub async fn upload(
        &self,
        content: Bytes,
        original_filename: &str,
    ) -> StorageResult<StoredObject> {
        let key = object_key::generate(original_filename);
        let url = self.config.object_url(&key);
        let payload_hash = signing::sha256_hex(&content);
        let size_bytes = content.len() as u64;
        let now = Utc::now();

        let signed = self.signer.sign_put(
            self.config.host(),
            &self.config.bucket_name,
            &key,
            &payload_hash,
            now,
        );

        debug!(%key, size_bytes, "uploading object");

        // The `host` header is derived by the transport from the request URL,
        // which the signature relies on matching `config.host()`.
        let response = self
            .client
            .put(&url)
            .header("x-amz-date", &signed.amz_date)
            .header("x-amz-content-sha256", &payload_hash)
            .header(header::AUTHORIZATION, &signed.authorization)
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .body(content)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(remote_rejection(response).await);
        }

        debug!(%key, %url, "object stored");

        Ok(StoredObject {
            key,
            url,
            content_type: CONTENT_TYPE.to_string(),
            size_bytes,
            uploaded_at: now,
        })
    }

    /// Remove the object stored under `key`.
    ///
    /// DELETE carries no body, so the request is signed with
    /// `UNSIGNED-PAYLOAD` and without a content-hash header. Returns `true`
    /// on any success status (S3 answers 204); any other status is a
    /// [`StorageError::RemoteRejection`].
    pub async fn remove(&self, key: &str) -> StorageResult<bool> {
        let url = self.config.object_url(key);
        let signed =
            self.signer
                .sign_delete(self.config.host(), &self.config.bucket_name, key, Utc::now());

        debug!(%key, "removing object");

        let response = self
            .client
            .delete(&url)
            .header("x-amz-date", &signed.amz_date)
            .header(header::AUTHORIZATION, &signed.authorization)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(remote_rejection(response).await);
        }

        debug!(%key, "object removed");
        Ok(true)
    }
}

/// Turn a non-success response into a rejection error, keeping the remote
/// body verbatim for diagnostics.
async fn remote_rejection(response: Response) -> StorageError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    StorageError::RemoteRejection { status, body }
}
