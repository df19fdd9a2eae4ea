use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;

use crate::storage::error::{Result, StorageError};
use crate::storage::models::{S3StorageClient, SessionConfig};
use crate::utils::log_utils;

impl S3StorageClient {
    /// Open an authenticated session for the configured region
    ///
    /// Credentials come from the SDK's default discovery chain (environment,
    /// shared profile files, container or instance metadata).
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be started or no credentials
    /// can be resolved.
    pub fn new(config: &SessionConfig, verbose: u8) -> Result<Self> {
        // All SDK calls are driven from this single thread
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        log_utils::debug(
            &format!(
                "Creating S3 session: region={}, endpoint={}",
                config.region,
                config.endpoint_url.as_deref().unwrap_or("<default>")
            ),
            verbose,
        );

        let shared_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(config.region.as_str()));
            if let Some(endpoint) = &config.endpoint_url {
                loader = loader.endpoint_url(endpoint.as_str());
            }
            loader.load().await
        });

        // Resolve credentials now so a missing identity fails here, not mid-sequence
        let provider = shared_config.credentials_provider().ok_or_else(|| {
            StorageError::Session("no credentials provider configured".to_string())
        })?;
        let credentials = runtime
            .block_on(provider.provide_credentials())
            .map_err(|e| {
                StorageError::Session(format!(
                    "unable to resolve credentials: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        log_utils::debug(
            &format!(
                "Resolved credentials for key {}****",
                credentials.access_key_id().chars().take(4).collect::<String>()
            ),
            verbose,
        );

        // Custom endpoints (minio and friends) rarely support virtual-hosted buckets
        let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(config.endpoint_url.is_some())
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            runtime,
            region: config.region,
            verbose,
        })
    }
}
