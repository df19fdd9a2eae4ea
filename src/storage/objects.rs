use aws_sdk_s3::error::DisplayErrorContext;

use crate::storage::error::{Result, StorageError};
use crate::storage::models::{ObjectSummary, S3StorageClient, to_chrono};
use crate::utils::log_utils;

impl S3StorageClient {
    /// List all objects in a bucket, following continuation tokens
    pub fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>> {
        self.runtime.block_on(async {
            let mut pages = self
                .client
                .list_objects_v2()
                .bucket(bucket)
                .into_paginator()
                .send();

            let mut objects = Vec::new();
            while let Some(page) = pages.next().await {
                let page = page.map_err(|e| StorageError::ListObjects {
                    bucket: bucket.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                })?;

                for object in page.contents() {
                    objects.push(ObjectSummary {
                        key: object.key().unwrap_or_default().to_string(),
                        last_modified: object.last_modified().and_then(to_chrono),
                        size: object.size(),
                        storage_class: object.storage_class().map(|c| c.as_str().to_string()),
                    });
                }
            }

            log_utils::debug(
                &format!("Found {} objects in bucket '{}'", objects.len(), bucket),
                self.verbose,
            );

            Ok(objects)
        })
    }
}
