//! Error types for ephemeris queries.

use thiserror::Error;

/// Errors from an ephemeris backend.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemError {
    /// Epoch outside the range the backend supports.
    #[error("JD {jd} outside the supported ephemeris range")]
    EpochOutOfRange { jd: f64 },
    /// Unrecognized body name.
    #[error("unknown body '{0}'")]
    UnknownBody(String),
    /// Unrecognized node mode.
    #[error("unknown node mode '{0}' (expected mean or true)")]
    UnknownNodeMode(String),
    /// Failure reported by a substituted backend.
    #[error("ephemeris backend: {0}")]
    Backend(String),
}
