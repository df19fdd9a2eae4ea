use std::time::Duration;

use aws_sdk_s3::client::Waiters;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use crate::storage::error::{Result, StorageError};
use crate::storage::models::{BucketSummary, S3StorageClient, to_chrono};
use crate::utils::log_utils;

impl S3StorageClient {
    /// Issue a create-bucket request in the session's region
    pub fn create_bucket(&self, bucket: &str) -> Result<()> {
        self.runtime.block_on(async {
            let mut request = self.client.create_bucket().bucket(bucket);

            if let Some(constraint) = self.region.location_constraint() {
                request = request.create_bucket_configuration(
                    CreateBucketConfiguration::builder()
                        .location_constraint(BucketLocationConstraint::from(constraint))
                        .build(),
                );
            }

            log_utils::debug(
                &format!("CreateBucket request: {:?}", request),
                self.verbose,
            );

            request
                .send()
                .await
                .map_err(|e| StorageError::CreateBucket {
                    bucket: bucket.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                })?;

            Ok(())
        })
    }

    /// Block until HeadBucket succeeds or `max_wait` elapses
    pub fn wait_until_bucket_exists(&self, bucket: &str, max_wait: Duration) -> Result<()> {
        self.runtime.block_on(async {
            log_utils::debug(
                &format!(
                    "Polling HeadBucket for '{}' for up to {}s",
                    bucket,
                    max_wait.as_secs()
                ),
                self.verbose,
            );

            self.client
                .wait_until_bucket_exists()
                .bucket(bucket)
                .wait(max_wait)
                .await
                .map_err(|e| StorageError::WaitForBucket {
                    bucket: bucket.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                })?;

            Ok(())
        })
    }

    /// List every bucket owned by the authenticated account
    pub fn list_buckets(&self) -> Result<Vec<BucketSummary>> {
        self.runtime.block_on(async {
            let output = self
                .client
                .list_buckets()
                .send()
                .await
                .map_err(|e| StorageError::ListBuckets(DisplayErrorContext(&e).to_string()))?;

            let buckets: Vec<BucketSummary> = output
                .buckets()
                .iter()
                .map(|b| BucketSummary {
                    name: b.name().unwrap_or_default().to_string(),
                    created: b.creation_date().and_then(to_chrono),
                })
                .collect();

            log_utils::debug(&format!("Found {} buckets", buckets.len()), self.verbose);

            Ok(buckets)
        })
    }
}
