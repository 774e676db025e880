//! Result of a successful upload.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Describes one object after it has been stored.
///
/// `url` is the public address callers hand out; `key` is what they keep if
/// they want to remove the object later, sparing them re-parsing the URL.
#[derive(Debug, Clone, Serialize)]
pub struct StoredObject {
    /// Generated object key within the bucket.
    pub key: String,

    /// Public URL of the object (`{service_url}/{bucket}/{key}`).
    pub url: String,

    /// Content type the object was uploaded with.
    pub content_type: String,

    /// Size of the uploaded payload in bytes.
    pub size_bytes: u64,

    /// When the upload completed.
    pub uploaded_at: DateTime<Utc>,
}
