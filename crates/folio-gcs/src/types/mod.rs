//! Data types for the storage provider.
//!
//! This module contains the host-facing file descriptor, the object key
//! derivation rules, and the small configuration enums for bucket location
//! and public base URL.

mod base_url;
mod bucket_location;
mod media_file;
mod object_key;

pub use base_url::BaseUrl;
pub use bucket_location::BucketLocation;
pub use media_file::{MediaFile, RelatedRef};
pub use object_key::ObjectKey;
