use thiserror::Error;

/// Failures reported by the remote object-storage service or the session around it
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unable to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Unable to create AWS session: {0}")]
    Session(String),

    #[error("Unable to create bucket {bucket:?}, {message}")]
    CreateBucket { bucket: String, message: String },

    #[error("Bucket {bucket:?} did not become available, {message}")]
    WaitForBucket { bucket: String, message: String },

    #[error("Unable to list buckets, {0}")]
    ListBuckets(String),

    #[error("Unable to list items in bucket {bucket:?} {message}")]
    ListObjects { bucket: String, message: String },

    #[error("Unable to read {file:?} for upload, {message}")]
    ReadBody { file: String, message: String },

    #[error("Unable to upload {file:?} to {bucket:?}, {message}")]
    Upload {
        file: String,
        bucket: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;
