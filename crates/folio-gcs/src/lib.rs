#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging
pub const TRACING_TARGET_CLIENT: &str = "folio_gcs::client";
pub const TRACING_TARGET_OPERATIONS: &str = "folio_gcs::operations";
pub const TRACING_TARGET_BUCKETS: &str = "folio_gcs::buckets";
pub const TRACING_TARGET_OBJECTS: &str = "folio_gcs::objects";

pub mod client;
pub mod operations;
pub mod types;

// Re-export for convenience
pub use crate::client::{GcsClient, GcsConfig, ServiceAccountKey};
pub use crate::operations::{ObjectStore, StorageProvider, WriteOptions};
pub use crate::types::{BaseUrl, BucketLocation, MediaFile, ObjectKey, RelatedRef};

/// Error type for storage provider operations.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised synchronously at initialization for missing or malformed
    /// credentials, an empty bucket name, or an unknown base URL template.
    /// The provider cannot proceed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication error.
    ///
    /// Raised when a service-account access token cannot be minted or
    /// exchanged.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Bucket creation failure, naming the bucket.
    ///
    /// Fatal to the upload attempt that triggered the creation.
    #[error("Failed to create bucket '{bucket}': {message}")]
    Bucket {
        /// Name of the bucket that could not be created.
        bucket: String,
        /// Underlying failure description.
        message: String,
    },

    /// Object write failure.
    ///
    /// The upload returns this error and the file keeps no new URL.
    #[error("Failed to write object '{key}': {message}")]
    Write {
        /// Key of the object that could not be written.
        key: String,
        /// Underlying failure description.
        message: String,
    },

    /// Resource not found.
    ///
    /// A missing object on delete is downgraded to a warning by the
    /// provider; everywhere else this surfaces to the caller.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Unexpected storage API response.
    #[error("Storage API error: {status} - {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body or status description.
        message: String,
    },

    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Underlying HTTP transport error.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Returns whether this error indicates a configuration issue.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns whether this error indicates a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns whether this error is fatal to an upload attempt.
    ///
    /// Bucket creation and object write failures abort the upload; every
    /// other error is judged at its call site.
    pub fn is_upload_fatal(&self) -> bool {
        matches!(self, Error::Bucket { .. } | Error::Write { .. })
    }
}

/// Specialized [`Result`] type for storage provider operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
