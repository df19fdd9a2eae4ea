use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::Result;
use crate::interfaces::ObjectStore;
use crate::ops;
use crate::storage::{S3StorageClient, SessionConfig};
use crate::utils::log_utils::Logger;

/// The fixed work a run performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub bucket: String,
    pub file: PathBuf,
    pub wait_timeout: Duration,
}

/// Open the one session every step of the run shares
///
/// # Errors
///
/// Returns an error if the session cannot be established.
pub fn open_session(
    config: &SessionConfig,
    verbose: u8,
    out: &mut impl Write,
) -> Result<S3StorageClient> {
    let client = S3StorageClient::new(config, verbose)?;
    writeln!(out, "AWS Session Created")?;
    Ok(client)
}

/// Create the bucket, list buckets, list the bucket's items, then upload the file
///
/// Stops at the first failing step; later steps never run.
///
/// # Errors
///
/// Returns the error of the first step that failed.
pub fn run_sequence<S: ObjectStore + ?Sized>(
    store: &S,
    plan: &Plan,
    verbose: u8,
    out: &mut impl Write,
) -> Result<()> {
    let logger = Logger::new(verbose);

    logger.info(&format!("Creating bucket '{}'", plan.bucket));
    ops::create_bucket(store, &plan.bucket, plan.wait_timeout, out)?;

    logger.info("Listing buckets");
    ops::list_buckets(store, out)?;

    logger.info(&format!("Listing items in bucket '{}'", plan.bucket));
    ops::list_bucket_items(store, &plan.bucket, out)?;

    logger.info(&format!(
        "Uploading '{}' to bucket '{}'",
        plan.file.display(),
        plan.bucket
    ));
    let receipt = ops::upload_file(store, &plan.bucket, &plan.file, out)?;
    logger.debug(&format!(
        "Upload ETag: {}",
        receipt.e_tag.as_deref().unwrap_or("<none>")
    ));

    Ok(())
}
