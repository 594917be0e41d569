//! Host-owned file descriptor.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Reference to the host entity a file belongs to.
///
/// When present, it determines the folder a file is stored under:
/// `{kind}/{id}` (for example `article/42`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedRef {
    /// Owner type (e.g. a content-type name).
    pub kind: String,
    /// Owner identifier.
    pub id: String,
}

impl RelatedRef {
    /// Creates a new related reference.
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

/// File descriptor supplied by the host system.
///
/// The provider reads the input fields and writes `url` after a successful
/// upload. Everything else is owned and bookkept by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Original file name, including its extension (e.g. `Photo.JPG`).
    pub name: String,
    /// File extension with leading dot (e.g. `.jpg`).
    pub ext: String,
    /// MIME type reported by the host (e.g. `image/jpeg`).
    pub mime: String,
    /// Raw file content.
    #[serde(skip)]
    pub buffer: Bytes,
    /// Explicit folder the file should be stored under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Content hash assigned by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Entity the file belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<RelatedRef>,
    /// Public URL, populated by a successful upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl MediaFile {
    /// Creates a new file descriptor with the required input fields.
    pub fn new(
        name: impl Into<String>,
        ext: impl Into<String>,
        mime: impl Into<String>,
        buffer: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            ext: ext.into(),
            mime: mime.into(),
            buffer: buffer.into(),
            path: None,
            hash: None,
            related: None,
            url: None,
        }
    }

    /// Sets the explicit storage folder.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the content hash.
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Sets the related entity reference.
    pub fn with_related(mut self, related: RelatedRef) -> Self {
        self.related = Some(related);
        self
    }

    /// Returns the size of the file content in bytes.
    pub fn size(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_file_builders() {
        let file = MediaFile::new("Photo.JPG", ".jpg", "image/jpeg", &b"bytes"[..])
            .with_path("uploads")
            .with_hash("abc123")
            .with_related(RelatedRef::new("article", "42"));

        assert_eq!(file.name, "Photo.JPG");
        assert_eq!(file.ext, ".jpg");
        assert_eq!(file.mime, "image/jpeg");
        assert_eq!(file.size(), 5);
        assert_eq!(file.path.as_deref(), Some("uploads"));
        assert_eq!(file.hash.as_deref(), Some("abc123"));
        assert_eq!(file.related, Some(RelatedRef::new("article", "42")));
        assert!(file.url.is_none());
    }
}
