use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use super::validators::validate;
use crate::start::Plan;
use crate::storage::{SessionConfig, SupportedRegion};

pub const DEFAULT_BUCKET: &str = "bruno-golang-5";
pub const DEFAULT_FILE: &str = "baby.JPG";
/// Total time budget for the bucket-exists waiter; polls back off with jitter within it
pub const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 100;

#[derive(Parser, Debug, Clone, serde::Serialize)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Region to open the session in (us-west-2 or us-east-1)
    #[arg(
        short,
        long,
        value_name = "REGION",
        default_value = "us-west-2",
        value_parser = parse_region
    )]
    pub region: SupportedRegion,

    /// Bucket to create, list and upload into
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// Local file to upload; its file name becomes the object key
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Override the service endpoint, e.g. for an S3-compatible server
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Seconds to wait for a new bucket to become visible
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_WAIT_TIMEOUT_SECS)]
    pub wait_timeout: u64,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_region(raw: &str) -> Result<SupportedRegion, String> {
    match raw {
        "us-west-2" => Ok(SupportedRegion::UsWest2),
        "us-east-1" => Ok(SupportedRegion::UsEast1),
        other => Err(format!(
            "unsupported region '{other}', expected one of: us-west-2, us-east-1"
        )),
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            region: SupportedRegion::UsWest2,
            bucket: DEFAULT_BUCKET.to_string(),
            file: PathBuf::from(DEFAULT_FILE),
            endpoint_url: None,
            wait_timeout: DEFAULT_WAIT_TIMEOUT_SECS,
            verbose: 0,
        }
    }
}

impl Args {
    /// Validate the arguments without modifying them
    ///
    /// # Errors
    ///
    /// Returns an error message describing the first invalid argument.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }

    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            region: self.region,
            endpoint_url: self.endpoint_url.clone(),
        }
    }

    #[must_use]
    pub fn plan(&self) -> Plan {
        Plan {
            bucket: self.bucket.clone(),
            file: self.file.clone(),
            wait_timeout: Duration::from_secs(self.wait_timeout),
        }
    }
}
