//! Signed object-storage client for an S3-compatible service.
//!
//! Implements AWS Signature Version 4 from first principles and exposes two
//! operations: upload bytes under a freshly generated unique key, and remove
//! an object by key. Used by the product-management flows of the surrounding
//! shop backend to store and delete product images.
//!
//! ```no_run
//! use bytes::Bytes;
//! use file_storage::{FileStorageService, StorageConfig};
//!
//! # async fn example() -> file_storage::StorageResult<()> {
//! let config = StorageConfig::from_env()?;
//! let storage = FileStorageService::new(config)?;
//!
//! let stored = storage.upload(Bytes::from_static(b"..."), "résumé.pdf").await?;
//! println!("available at {}", stored.url);
//!
//! storage.remove(&stored.key).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod models;
pub mod object_key;
pub mod services;
pub mod signing;

pub use config::StorageConfig;
pub use errors::{StorageError, StorageResult};
pub use models::object::StoredObject;
pub use services::storage_service::FileStorageService;
