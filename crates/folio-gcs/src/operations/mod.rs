//! Provider operations over an object store.
//!
//! This module contains the [`ObjectStore`] trait — the seam to the remote
//! object-storage service — and the [`StorageProvider`] adapter that the
//! host system drives: initialization with validated configuration,
//! idempotent bucket ensurance, upload with overwrite-before-write, and
//! absence-tolerant delete.

mod provider;
mod store;

pub use provider::StorageProvider;
pub use store::{ObjectStore, WriteOptions};
