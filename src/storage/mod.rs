pub mod bucket;
pub mod client;
pub mod error;
pub mod models;
pub mod objects;
pub mod upload;

// Re-export types for convenient access from other modules
pub use error::StorageError;
pub use models::{
    BucketSummary, ObjectSummary, S3StorageClient, SessionConfig, SupportedRegion, UploadReceipt,
};
