//! Error types for Vedic calculations.

use kundali_ephem::EphemError;
use kundali_time::TimeError;
use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris backend.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemError),
    /// Error from time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Unrecognized ayanamsa name.
    #[error("unknown ayanamsa '{0}' (expected lahiri, raman, kp or fagan)")]
    UnknownAyanamsa(String),
    /// Unrecognized house system name.
    #[error("unknown house system '{0}' (expected whole_sign, equal, placidus or koch)")]
    UnknownHouseSystem(String),
    /// Unrecognized divisional chart code.
    #[error("unknown divisional chart '{0}' (expected D1, D2, D3, D9, D10, D12 or D60)")]
    UnknownDivision(String),
    /// Time-based house division is geometrically undefined at this latitude.
    #[error("house system undefined: {0}")]
    HouseSystemUndefined(&'static str),
    /// Iterative algorithm did not converge or the event does not occur.
    #[error("no convergence: {0}")]
    NonConvergence(&'static str),
    /// Invalid search or calculation parameters.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}
