//! Error types for configuration loading.

use kundali_ephem::EphemError;
use kundali_vedic_base::VedicError;
use thiserror::Error;

/// Errors from reading or validating a configuration file.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File could not be read.
    #[error("failed to read config file: {0}")]
    Io(String),
    /// File is not valid TOML or does not match the schema.
    #[error("failed to parse config file: {0}")]
    Parse(String),
    /// A selector names no known system.
    #[error("invalid config value: {0}")]
    Invalid(#[from] VedicError),
    /// A numeric value lies outside its accepted range.
    #[error("config value `{key}` out of range: {reason}")]
    OutOfRange {
        key: &'static str,
        reason: &'static str,
    },
    /// No file found in any default location.
    #[error("no kundali.toml found in standard locations")]
    NotFound,
}

impl From<EphemError> for ConfigError {
    fn from(e: EphemError) -> Self {
        Self::Invalid(VedicError::Ephemeris(e))
    }
}
