// Public modules
pub mod types;
mod validators;

// Re-export everything from the submodules
pub use types::*;
pub use validators::*;

use clap::Parser;

/// Parse command line arguments and validate them
///
/// Argument syntax errors are reported by clap itself (exit code 2).
///
/// # Errors
///
/// Returns the validation message if the parsed arguments are inconsistent.
pub fn args_checks() -> Result<Args, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SupportedRegion;

    #[test]
    fn no_arguments_gives_original_parameters() {
        let args = Args::parse_from(["s3-bucket-tool"]);
        assert_eq!(args.region, SupportedRegion::UsWest2);
        assert_eq!(args.bucket, "bruno-golang-5");
        assert_eq!(args.file, std::path::PathBuf::from("baby.JPG"));
        assert_eq!(args.wait_timeout, 100);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn only_supported_regions_parse() {
        let args = Args::parse_from(["s3-bucket-tool", "--region", "us-east-1", "-vv"]);
        assert_eq!(args.region, SupportedRegion::UsEast1);
        assert_eq!(args.verbose, 2);

        assert!(Args::try_parse_from(["s3-bucket-tool", "-r", "eu-west-1"]).is_err());
    }
}
