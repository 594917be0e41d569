//! Object key derivation.
//!
//! Keys are derived deterministically from a [`MediaFile`] as
//! `[base_path/]<folder>/<slug(stem)><lowercase ext>`. The folder is the
//! file's explicit `path` when present, else `{related.kind}/{related.id}`
//! when the file belongs to an entity, else the content hash. A file with
//! none of the three lands at the bucket root.
//!
//! Two derivations exist. The canonical one applies the full folder rule
//! and is used for both upload and delete. The legacy one skips the
//! `related` rule (folder = path, else hash) and is kept for hosts whose
//! stored objects were keyed under that older scheme.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::MediaFile;

/// Key identifying an object within a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectKey {
    key: String,
}

impl ObjectKey {
    /// Derives the canonical key used when uploading a file.
    pub fn for_upload(file: &MediaFile, base_path: Option<&str>) -> Self {
        Self::from_parts(base_path, Self::canonical_folder(file), Self::filename(file))
    }

    /// Derives the key used when deleting a file.
    ///
    /// Identical to [`ObjectKey::for_upload`], so objects stored under a
    /// `related` folder are addressable for deletion.
    pub fn for_delete(file: &MediaFile, base_path: Option<&str>) -> Self {
        Self::for_upload(file, base_path)
    }

    /// Derives the delete key under the legacy scheme.
    ///
    /// The legacy folder rule only considers the explicit `path` and the
    /// content hash, never the `related` reference. Only useful against
    /// buckets whose objects were written by an older provider.
    pub fn for_delete_legacy(file: &MediaFile, base_path: Option<&str>) -> Self {
        Self::from_parts(base_path, Self::legacy_folder(file), Self::filename(file))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Consumes the key and returns the inner string.
    pub fn into_string(self) -> String {
        self.key
    }

    fn from_parts(base_path: Option<&str>, folder: Option<String>, filename: String) -> Self {
        let mut segments = Vec::with_capacity(3);
        if let Some(base) = base_path {
            let base = base.trim_matches('/');
            if !base.is_empty() {
                segments.push(base.to_string());
            }
        }
        if let Some(folder) = folder {
            segments.push(folder);
        }
        segments.push(filename);

        Self {
            key: segments.join("/"),
        }
    }

    fn canonical_folder(file: &MediaFile) -> Option<String> {
        if let Some(path) = file.path.as_deref() {
            let path = path.trim_matches('/');
            if !path.is_empty() {
                return Some(path.to_string());
            }
        }
        if let Some(related) = &file.related {
            return Some(format!("{}/{}", related.kind, related.id));
        }
        file.hash.clone().filter(|hash| !hash.is_empty())
    }

    fn legacy_folder(file: &MediaFile) -> Option<String> {
        if let Some(path) = file.path.as_deref() {
            let path = path.trim_matches('/');
            if !path.is_empty() {
                return Some(path.to_string());
            }
        }
        file.hash.clone().filter(|hash| !hash.is_empty())
    }

    /// Slugified basename plus the lowercased extension.
    fn filename(file: &MediaFile) -> String {
        format!(
            "{}{}",
            slugify(stem(&file.name, &file.ext)),
            file.ext.to_lowercase()
        )
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

/// Strips `ext` from the end of `name`, ignoring ASCII case.
fn stem<'a>(name: &'a str, ext: &str) -> &'a str {
    if !ext.is_empty()
        && name.len() > ext.len()
        && name.is_char_boundary(name.len() - ext.len())
        && name[name.len() - ext.len()..].eq_ignore_ascii_case(ext)
    {
        &name[..name.len() - ext.len()]
    } else {
        name
    }
}

/// Lowercase, URL-safe transform: ASCII alphanumerics are kept, every other
/// run of characters collapses into a single dash. No leading or trailing
/// dashes.
fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RelatedRef;

    fn photo() -> MediaFile {
        MediaFile::new("Photo.JPG", ".jpg", "image/jpeg", &b"data"[..])
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Photo"), "photo");
        assert_eq!(slugify("My Summer Photo"), "my-summer-photo");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
        assert_eq!(slugify("Crème_Brûlée 2"), "cr-me-br-l-e-2");
        assert_eq!(slugify("v1.2.3"), "v1-2-3");
    }

    #[test]
    fn test_stem_strips_extension_case_insensitively() {
        assert_eq!(stem("Photo.JPG", ".jpg"), "Photo");
        assert_eq!(stem("Photo.jpg", ".jpg"), "Photo");
        assert_eq!(stem("archive.tar.gz", ".gz"), "archive.tar");
        assert_eq!(stem("noext", ".jpg"), "noext");
        assert_eq!(stem("name", ""), "name");
    }

    #[test]
    fn test_upload_key_with_explicit_path() {
        let file = photo().with_path("uploads");
        let key = ObjectKey::for_upload(&file, None);
        assert_eq!(key.as_str(), "uploads/photo.jpg");
    }

    #[test]
    fn test_upload_key_prefers_path_over_related_and_hash() {
        let file = photo()
            .with_path("uploads")
            .with_related(RelatedRef::new("article", "42"))
            .with_hash("deadbeef");
        let key = ObjectKey::for_upload(&file, None);
        assert_eq!(key.as_str(), "uploads/photo.jpg");
    }

    #[test]
    fn test_upload_key_uses_related_when_no_path() {
        let file = photo().with_related(RelatedRef::new("article", "42"));
        let key = ObjectKey::for_upload(&file, None);
        assert_eq!(key.as_str(), "article/42/photo.jpg");
    }

    #[test]
    fn test_upload_key_falls_back_to_hash() {
        let file = photo().with_hash("deadbeef");
        let key = ObjectKey::for_upload(&file, None);
        assert_eq!(key.as_str(), "deadbeef/photo.jpg");
    }

    #[test]
    fn test_upload_key_without_any_folder() {
        let key = ObjectKey::for_upload(&photo(), None);
        assert_eq!(key.as_str(), "photo.jpg");
    }

    #[test]
    fn test_upload_key_with_base_path() {
        let file = photo().with_path("uploads");
        let key = ObjectKey::for_upload(&file, Some("cms/media"));
        assert_eq!(key.as_str(), "cms/media/uploads/photo.jpg");

        let key = ObjectKey::for_upload(&file, Some("/cms/"));
        assert_eq!(key.as_str(), "cms/uploads/photo.jpg");
    }

    #[test]
    fn test_delete_key_matches_upload_key() {
        let file = photo().with_related(RelatedRef::new("article", "42"));
        assert_eq!(
            ObjectKey::for_delete(&file, None),
            ObjectKey::for_upload(&file, None)
        );
    }

    #[test]
    fn test_legacy_delete_key_ignores_related() {
        let file = photo()
            .with_related(RelatedRef::new("article", "42"))
            .with_hash("deadbeef");
        let key = ObjectKey::for_delete_legacy(&file, None);
        assert_eq!(key.as_str(), "deadbeef/photo.jpg");
    }

    #[test]
    fn test_extension_is_lowercased() {
        let file = MediaFile::new("SCAN.PDF", ".PDF", "application/pdf", &b"x"[..])
            .with_path("docs");
        let key = ObjectKey::for_upload(&file, None);
        assert_eq!(key.as_str(), "docs/scan.pdf");
    }

    #[test]
    fn test_display_and_as_ref() {
        let key = ObjectKey::for_upload(&photo().with_path("uploads"), None);
        assert_eq!(key.to_string(), "uploads/photo.jpg");
        assert_eq!(key.as_ref(), "uploads/photo.jpg");
    }
}
