//! Configuration management module
//!
//! Resolves one immutable [`Settings`] value per process from an environment
//! indicator and externally supplied values, and builds AWS clients from it.

pub mod aws;
pub mod error;
pub mod keys;
pub mod profile;
pub mod settings;
pub mod sources;

pub use aws::{build_aws_config, create_s3_client, AwsConfigBuilder};
pub use error::{ConfigError, ConfigWarning};
pub use profile::{Profile, ProfilePolicy, LOCALSTACK_URL};
pub use settings::{
    AwsSettings, CloudCredentials, Environment, GoogleOAuthConfig, RateLimitConfig, Settings,
    StaticKeys, SupabaseConfig,
};
pub use sources::{EnvLoader, ExternalValues, Layered, ProcessEnv, DEFAULT_ENVIRONMENT};
