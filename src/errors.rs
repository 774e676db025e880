//! Error types shared across the storage client.
//!
//! Every failure path is a distinct, inspectable variant so callers can
//! pattern-match on the failure kind instead of parsing message text.

use thiserror::Error;

/// Errors produced by the storage client.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Missing or invalid settings, detected before any request is made.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network-level failure reaching the remote endpoint (DNS, connect,
    /// timeout). The request may never have arrived; nothing is retried here.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-success status. Carries the
    /// status code and the response body verbatim for diagnostics.
    #[error("remote rejection: HTTP {status}: {body}")]
    RemoteRejection { status: u16, body: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Whether a caller may reasonably retry the failed call.
    ///
    /// Transport failures and 5xx rejections are retryable. A 403 whose body
    /// names `RequestTimeTooSkewed` is also retryable: SigV4 signatures are
    /// time-bound, and clock skew against the remote service must surface as
    /// a clear, retryable error rather than a permanent one.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Configuration(_) => false,
            Self::Transport(_) => true,
            Self::RemoteRejection { status, body } => {
                *status >= 500 || (*status == 403 && body.contains("RequestTimeTooSkewed"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_display_includes_status_and_body() {
        let err = StorageError::RemoteRejection {
            status: 403,
            body: "SignatureDoesNotMatch".into(),
        };
        assert_eq!(
            err.to_string(),
            "remote rejection: HTTP 403: SignatureDoesNotMatch"
        );
    }

    #[test]
    fn retryability_by_kind() {
        assert!(!StorageError::Configuration("missing key".into()).is_retryable());
        assert!(
            StorageError::RemoteRejection {
                status: 503,
                body: "SlowDown".into()
            }
            .is_retryable()
        );
        assert!(
            !StorageError::RemoteRejection {
                status: 404,
                body: "NoSuchBucket".into()
            }
            .is_retryable()
        );
    }

    #[test]
    fn clock_skew_rejection_is_retryable() {
        let err = StorageError::RemoteRejection {
            status: 403,
            body: "<Error><Code>RequestTimeTooSkewed</Code></Error>".into(),
        };
        assert!(err.is_retryable());

        let err = StorageError::RemoteRejection {
            status: 403,
            body: "SignatureDoesNotMatch".into(),
        };
        assert!(!err.is_retryable());
    }
}
