//! Object store seam.

use bytes::Bytes;

use crate::Result;
use crate::types::BucketLocation;

/// Per-object options applied when writing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// MIME type recorded on the object.
    pub content_type: Option<String>,
    /// `Content-Disposition` metadata header recorded on the object.
    pub content_disposition: Option<String>,
    /// Whether the object is readable without authentication.
    pub public_read: bool,
}

impl WriteOptions {
    /// Creates empty write options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the content disposition.
    pub fn with_content_disposition(mut self, disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(disposition.into());
        self
    }

    /// Marks the object publicly readable.
    pub fn with_public_read(mut self) -> Self {
        self.public_read = true;
        self
    }
}

/// Remote object-storage service the provider delegates to.
///
/// The provider only depends on these five operations; the wire protocol
/// behind them is the implementation's concern. [`crate::GcsClient`] is the
/// production implementation.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Checks whether a bucket exists.
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Creates a multi-regional bucket at the given location.
    async fn create_bucket(&self, bucket: &str, location: BucketLocation) -> Result<()>;

    /// Checks whether an object exists at the given key.
    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool>;

    /// Deletes an object.
    ///
    /// Returns [`crate::Error::NotFound`] when no object exists at the key.
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;

    /// Writes an object with the given options.
    async fn write_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        options: WriteOptions,
    ) -> Result<()>;
}
