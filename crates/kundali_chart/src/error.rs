//! Error type for chart generation.

use kundali_config::ConfigError;
use kundali_ephem::EphemError;
use kundali_time::TimeError;
use kundali_vedic_base::VedicError;
use thiserror::Error;

/// Errors from chart generation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Annual chart requested for a year before the birth year.
    #[error("target year {target_year} precedes birth year {birth_year}")]
    YearBeforeBirth { target_year: i32, birth_year: i32 },
}

impl From<EphemError> for ChartError {
    fn from(e: EphemError) -> Self {
        Self::Vedic(VedicError::Ephemeris(e))
    }
}
