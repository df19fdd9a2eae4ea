use url::Url;

use super::types::Args;

/// Validate the arguments that clap's parsers cannot check on their own
///
/// The upload file is deliberately not checked here: a missing file has to
/// surface at the upload step, after the earlier steps have run.
///
/// # Errors
///
/// Returns an error message for the first invalid argument.
pub fn validate(args: &Args) -> Result<(), String> {
    if args.bucket.trim().is_empty() {
        return Err("Bucket name must not be empty.".to_string());
    }

    if args.wait_timeout == 0 {
        return Err("--wait-timeout must be greater than zero.".to_string());
    }

    if let Some(endpoint) = &args.endpoint_url {
        check_endpoint_url(endpoint)?;
    }

    Ok(())
}

/// Checks that an endpoint override carries an http(s) scheme and a host
///
/// # Returns
///
/// * `Result<(), String>` - Ok or an error message
pub fn check_endpoint_url(endpoint: &str) -> Result<(), String> {
    let url = Url::parse(endpoint)
        .map_err(|e| format!("The endpoint '{endpoint}' is not a valid URL: {e}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "The endpoint '{endpoint}' must use http:// or https://."
        ));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(format!("The endpoint '{endpoint}' has no host.")),
    }
}
