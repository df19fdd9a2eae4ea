use std::fmt;

use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};

/// Region constants the tool knows how to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SupportedRegion {
    UsWest2,
    UsEast1,
}

impl SupportedRegion {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SupportedRegion::UsWest2 => "us-west-2",
            SupportedRegion::UsEast1 => "us-east-1",
        }
    }

    /// us-east-1 is the only region where CreateBucket must omit a location constraint
    #[must_use]
    pub fn location_constraint(self) -> Option<&'static str> {
        match self {
            SupportedRegion::UsEast1 => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for SupportedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to open a session against the storage service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub region: SupportedRegion,
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    pub name: String,
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub key: String,
    pub last_modified: Option<DateTime<Utc>>,
    pub size: Option<i64>,
    pub storage_class: Option<String>,
}

/// Represents the result of a put-object request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub bucket: String,
    pub key: String,
    pub e_tag: Option<String>,
}

/// Authenticated session bound to one region
pub struct S3StorageClient {
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) region: SupportedRegion,
    pub verbose: u8,
}

/// Convert an SDK timestamp into a chrono one, dropping values chrono cannot represent
pub(crate) fn to_chrono(value: &aws_sdk_s3::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(value.secs(), value.subsec_nanos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_constraint_skips_us_east_1() {
        assert_eq!(SupportedRegion::UsEast1.location_constraint(), None);
        assert_eq!(
            SupportedRegion::UsWest2.location_constraint(),
            Some("us-west-2")
        );
    }

    #[test]
    fn sdk_timestamps_convert() {
        let sdk = aws_sdk_s3::primitives::DateTime::from_secs_and_nanos(1_700_000_000, 5);
        let converted = to_chrono(&sdk).expect("in range");
        assert_eq!(converted.timestamp(), 1_700_000_000);
        assert_eq!(converted.timestamp_subsec_nanos(), 5);
    }
}
