//! Configuration errors.
//!
//! All errors produced by the config module (validation and env loading) use [`ConfigError`].
//! Callers can match on variants or use [`ConfigError::message`] for logging.

use thiserror::Error;

/// Errors produced when building or validating configuration.
///
/// # Variants
///
/// - **Validation**: values are inconsistent or out of range (e.g. final layer wider than 1).
///   *When*: calling [`Config::validate`](super::Config::validate).
///   *Recovery*: fix the values so that `validate()` passes; the message names the rule.
///
/// - **EnvVar**: an environment variable could not be read (e.g. invalid Unicode).
///
/// - **Parse**: a variable was set but does not parse into the expected type (e.g. `SEED=abc`).
///   *Recovery*: set a valid value or unset it to use the default.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Configuration validation failed.
    #[error("config validation: {0}")]
    Validation(String),

    /// Failed to read an environment variable.
    #[error("env var {key}: {message}")]
    EnvVar {
        /// The full environment variable name that was read.
        key: String,
        /// Underlying cause (e.g. NotUnicode).
        message: String,
    },

    /// Environment variable was set but could not be parsed into the expected type.
    #[error("env var {key}={value:?}: {message}")]
    Parse {
        /// The full environment variable name.
        key: String,
        /// The raw value that failed to parse.
        value: String,
        /// Human-readable parse reason (e.g. "invalid digit found in string").
        message: String,
    },
}

impl ConfigError {
    /// Returns a short message suitable for logging or user display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ConfigError::Validation(m) => m,
            ConfigError::EnvVar { message, .. } | ConfigError::Parse { message, .. } => message,
        }
    }
}
