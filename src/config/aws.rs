//! AWS SDK configuration
//!
//! Builds AWS SDK configuration and clients from resolved [`Settings`],
//! pointing them at the local emulation endpoint when the profile asks for it.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::Client as S3Client;

use crate::config::Settings;

/// Provider name attached to static credentials taken from settings
const SETTINGS_CREDENTIALS_PROVIDER: &str = "sage-auth-settings";

/// AWS configuration builder
///
/// Creates AWS SDK configuration with support for:
/// - The region from the credential bundle
/// - Static keys when the bundle carries a full pair, the default provider
///   chain (IAM role, instance profile) otherwise
/// - The profile's endpoint overrides for LocalStack
pub struct AwsConfigBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> AwsConfigBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Build the base AWS SDK configuration shared by all service clients
    pub async fn build_sdk_config(&self) -> SdkConfig {
        let credentials = self.settings.cloud_credentials();

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(credentials.region));

        if let Some(keys) = credentials.static_keys {
            loader = loader.credentials_provider(Credentials::new(
                keys.access_key_id,
                keys.secret_access_key,
                None,
                None,
                SETTINGS_CREDENTIALS_PROVIDER,
            ));
        }

        if let Some(endpoint_url) = self.settings.aws_endpoint_override() {
            tracing::info!(endpoint = %endpoint_url, "Using local emulation endpoint for AWS clients");
            loader = loader.endpoint_url(endpoint_url);
        }

        loader.load().await
    }

    /// Create an S3 client
    ///
    /// When the profile overrides the storage endpoint the client uses it with
    /// path-style addressing, which LocalStack requires.
    pub async fn build_s3_client(&self) -> S3Client {
        let sdk_config = self.build_sdk_config().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);

        if let Some(endpoint_url) = self.settings.storage_endpoint_override() {
            tracing::info!(endpoint = %endpoint_url, "Using custom S3 endpoint");
            builder = builder.endpoint_url(endpoint_url).force_path_style(true);
        }

        S3Client::from_conf(builder.build())
    }
}

/// Build AWS SDK config from settings (convenience function)
pub async fn build_aws_config(settings: &Settings) -> SdkConfig {
    AwsConfigBuilder::new(settings).build_sdk_config().await
}

/// Create an S3 client from settings (convenience function)
pub async fn create_s3_client(settings: &Settings) -> S3Client {
    AwsConfigBuilder::new(settings).build_s3_client().await
}
