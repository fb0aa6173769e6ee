//! Configuration error types

use thiserror::Error;

use super::profile::Profile;

/// Fatal configuration errors raised while resolving [`Settings`](super::Settings).
///
/// None of these are retried; the process must not start serving traffic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid ENVIRONMENT value: '{value}'. Must be one of: {}", .accepted.join(", "))]
    UnknownEnvironment {
        value: String,
        accepted: Vec<&'static str>,
    },

    #[error("Missing required setting {field} for the {profile} profile")]
    MissingRequiredSetting { field: &'static str, profile: Profile },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidSetting {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Name of the offending setting, if the error is about a specific one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::UnknownEnvironment { .. } => None,
            ConfigError::MissingRequiredSetting { field, .. } => Some(field),
            ConfigError::InvalidSetting { field, .. } => Some(field),
        }
    }
}

/// Degraded but non-fatal configuration states.
///
/// Stored on the resolved settings so the caller decides how to report them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// One half of the static AWS key pair was supplied without the other.
    /// Neither half is used; ambient (role based) credentials apply instead.
    #[error("{present} is set but {missing} is not; ignoring static AWS credentials")]
    InvalidCredentialPair {
        present: &'static str,
        missing: &'static str,
    },
}
