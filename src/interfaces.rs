use std::fs::File;
use std::time::Duration;

use mockall::automock;

use crate::storage::error::Result;
use crate::storage::{BucketSummary, ObjectSummary, S3StorageClient, UploadReceipt};

/// Interface to the remote object-storage service, so operations can be tested without it
#[automock]
pub trait ObjectStore {
    fn create_bucket(&self, bucket: &str) -> Result<()>;
    fn wait_until_bucket_exists(&self, bucket: &str, max_wait: Duration) -> Result<()>;
    fn list_buckets(&self) -> Result<Vec<BucketSummary>>;
    fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>>;
    fn put_object(&self, bucket: &str, key: &str, body: File) -> Result<UploadReceipt>;
}

impl ObjectStore for S3StorageClient {
    fn create_bucket(&self, bucket: &str) -> Result<()> {
        S3StorageClient::create_bucket(self, bucket)
    }

    fn wait_until_bucket_exists(&self, bucket: &str, max_wait: Duration) -> Result<()> {
        S3StorageClient::wait_until_bucket_exists(self, bucket, max_wait)
    }

    fn list_buckets(&self) -> Result<Vec<BucketSummary>> {
        S3StorageClient::list_buckets(self)
    }

    fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>> {
        S3StorageClient::list_objects(self, bucket)
    }

    fn put_object(&self, bucket: &str, key: &str, body: File) -> Result<UploadReceipt> {
        S3StorageClient::put_object(self, bucket, key, body)
    }
}
