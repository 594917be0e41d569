//! Bucket location for multi-regional storage.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Geographic multi-region a bucket is created in.
///
/// New buckets are always created with the multi-regional storage class,
/// so the location is one of the three multi-region identifiers rather
/// than a single datacenter region.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BucketLocation {
    /// Asia multi-region.
    Asia,
    /// European Union multi-region.
    Eu,
    /// United States multi-region.
    #[default]
    Us,
}

impl BucketLocation {
    /// Storage class used for every bucket this provider creates.
    pub const STORAGE_CLASS: &'static str = "MULTI_REGIONAL";

    /// Returns the location token expected by the storage API.
    pub fn api_token(&self) -> &'static str {
        match self {
            Self::Asia => "ASIA",
            Self::Eu => "EU",
            Self::Us => "US",
        }
    }
}
