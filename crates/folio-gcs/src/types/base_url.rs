//! Public base URL templates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Base URL template used to build public object URLs.
///
/// Exactly three templates are accepted; each contains a `{bucket-name}`
/// placeholder that is substituted with the configured bucket name. The
/// plain-bucket forms are intended for buckets served through a CNAME
/// matching the bucket name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseUrl {
    /// `https://storage.googleapis.com/{bucket-name}`
    #[default]
    #[serde(rename = "https://storage.googleapis.com/{bucket-name}")]
    GoogleApis,
    /// `https://{bucket-name}`
    #[serde(rename = "https://{bucket-name}")]
    HttpsBucket,
    /// `http://{bucket-name}`
    #[serde(rename = "http://{bucket-name}")]
    HttpBucket,
}

impl BaseUrl {
    /// Placeholder substituted with the bucket name.
    pub const PLACEHOLDER: &'static str = "{bucket-name}";

    /// Returns the raw template string.
    pub fn as_template(&self) -> &'static str {
        match self {
            Self::GoogleApis => "https://storage.googleapis.com/{bucket-name}",
            Self::HttpsBucket => "https://{bucket-name}",
            Self::HttpBucket => "http://{bucket-name}",
        }
    }

    /// Substitutes the bucket name into the template.
    pub fn resolve(&self, bucket: &str) -> String {
        self.as_template().replace(Self::PLACEHOLDER, bucket)
    }

    /// Builds the public URL of an object within the bucket.
    pub fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}", self.resolve(bucket), key)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "https://storage.googleapis.com/{bucket-name}" => Ok(Self::GoogleApis),
            "https://{bucket-name}" => Ok(Self::HttpsBucket),
            "http://{bucket-name}" => Ok(Self::HttpBucket),
            other => Err(Error::Config(format!(
                "Unknown base URL template '{}', expected one of: \
                 'https://storage.googleapis.com/{{bucket-name}}', \
                 'https://{{bucket-name}}', 'http://{{bucket-name}}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_template())
    }
}
