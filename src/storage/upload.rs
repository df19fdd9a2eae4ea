use std::fs::File;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::storage::error::{Result, StorageError};
use crate::storage::models::{S3StorageClient, UploadReceipt};
use crate::utils::log_utils;

impl S3StorageClient {
    /// Stream an already-open file as the body of a single put-object request
    pub fn put_object(&self, bucket: &str, key: &str, body: File) -> Result<UploadReceipt> {
        self.runtime.block_on(async {
            let body = ByteStream::read_from()
                .file(tokio::fs::File::from_std(body))
                .build()
                .await
                .map_err(|e| StorageError::ReadBody {
                    file: key.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                })?;

            log_utils::debug(
                &format!(
                    "PutObject: bucket={}, key={}, content length={:?}",
                    bucket,
                    key,
                    body.size_hint().1
                ),
                self.verbose,
            );

            let response = self
                .client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(body)
                .send()
                .await
                .map_err(|e| StorageError::Upload {
                    file: key.to_string(),
                    bucket: bucket.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                })?;

            Ok(UploadReceipt {
                bucket: bucket.to_string(),
                key: key.to_string(),
                // ETags come back quoted
                e_tag: response.e_tag().map(|tag| tag.replace('"', "")),
            })
        })
    }
}
