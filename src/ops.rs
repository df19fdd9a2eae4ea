//! The four storage operations, each writing a human-readable report to `out`.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::errors::{AppError, Result};
use crate::interfaces::ObjectStore;
use crate::storage::UploadReceipt;

const UNKNOWN: &str = "<unknown>";

/// Create a bucket and block until the service reports that it exists
///
/// # Errors
///
/// Returns an error if the create request fails or the bucket never shows up
/// within `max_wait`.
pub fn create_bucket<S: ObjectStore + ?Sized>(
    store: &S,
    bucket: &str,
    max_wait: Duration,
    out: &mut impl Write,
) -> Result<()> {
    store.create_bucket(bucket)?;

    writeln!(out, "Waiting for bucket {bucket:?} to be created ...")?;
    out.flush()?;

    store.wait_until_bucket_exists(bucket, max_wait)?;

    writeln!(out, "Bucket {bucket} created")?;
    Ok(())
}

/// Print every bucket with its creation time
///
/// # Errors
///
/// Returns an error if the listing fails.
pub fn list_buckets<S: ObjectStore + ?Sized>(store: &S, out: &mut impl Write) -> Result<()> {
    let buckets = store.list_buckets()?;

    writeln!(out, "Buckets:")?;
    for bucket in &buckets {
        writeln!(
            out,
            "* {} created {}",
            bucket.name,
            format_time(bucket.created.as_ref())
        )?;
    }
    Ok(())
}

/// Print key, modification time, size and storage class of each object in `bucket`
///
/// # Errors
///
/// Returns an error if the listing fails.
pub fn list_bucket_items<S: ObjectStore + ?Sized>(
    store: &S,
    bucket: &str,
    out: &mut impl Write,
) -> Result<()> {
    for item in store.list_objects(bucket)? {
        writeln!(out, "Name:\t\t\t{}", item.key)?;
        writeln!(
            out,
            "Last modified:\t\t{}",
            format_time(item.last_modified.as_ref())
        )?;
        writeln!(
            out,
            "Size:\t\t\t{}",
            item.size.map_or_else(|| UNKNOWN.to_string(), |s| s.to_string())
        )?;
        writeln!(
            out,
            "Storage class:\t\t{}",
            item.storage_class.as_deref().unwrap_or(UNKNOWN)
        )?;
        writeln!(out)?;
    }
    Ok(())
}

/// Upload a local file into `bucket` under its own file name
///
/// The file is opened before anything is sent, so a missing file never
/// reaches the service.
///
/// # Errors
///
/// Returns an error if the path has no file name, cannot be opened, or the
/// upload fails.
pub fn upload_file<S: ObjectStore + ?Sized>(
    store: &S,
    bucket: &str,
    path: &Path,
    out: &mut impl Write,
) -> Result<UploadReceipt> {
    let key = object_key_for(path)?;
    let file = File::open(path).map_err(|source| AppError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;

    // `file` moves into the store and is closed when the request completes or fails
    let receipt = store.put_object(bucket, &key, file)?;

    writeln!(
        out,
        "Successfully uploaded {:?} to {:?}",
        receipt.key, receipt.bucket
    )?;
    Ok(receipt)
}

/// Remote key for a local path: its final component
///
/// # Errors
///
/// Returns `InvalidObjectKey` for paths such as `..` or `/` that have no file name.
pub fn object_key_for(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| AppError::InvalidObjectKey(path.to_path_buf()))
}

fn format_time(value: Option<&DateTime<Utc>>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
}
