//! Chart inputs and calculation options.

use kundali_config::{ConfigError, KundaliConfig};
use kundali_time::CivilTime;
use kundali_vedic_base::{
    ALL_AMSHAS, Amsha, AyanamshaSystem, BhavaSystem, GeoLocation, RiseSetConfig,
    SolarReturnConfig, VimshottariConfig,
};

/// A birth moment with a known time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInput {
    pub civil: CivilTime,
    pub location: GeoLocation,
}

impl BirthInput {
    pub fn new(civil: CivilTime, location: GeoLocation) -> Self {
        Self { civil, location }
    }

    /// Julian Day (UT) of the birth moment.
    pub fn jd_ut(&self) -> f64 {
        self.civil.to_jd_ut()
    }
}

/// A birth date whose time of day is unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnknownTimeInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Civil offset in hours east of UTC.
    pub tz_offset_hours: f64,
    pub location: GeoLocation,
}

/// Calculation systems and parameters for a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub ayanamsha: AyanamshaSystem,
    pub house_system: BhavaSystem,
    /// Divisional charts to include, in output order.
    pub amshas: Vec<Amsha>,
    pub riseset: RiseSetConfig,
    pub dasha: VimshottariConfig,
    pub solar_return: SolarReturnConfig,
    /// Moment for the "current" dasha, JD (UT). `None` means now.
    pub dasha_query_jd: Option<f64>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::default(),
            house_system: BhavaSystem::default(),
            amshas: ALL_AMSHAS.to_vec(),
            riseset: RiseSetConfig::default(),
            dasha: VimshottariConfig::default(),
            solar_return: SolarReturnConfig::default(),
            dasha_query_jd: None,
        }
    }
}

impl ChartOptions {
    /// Options from a validated configuration file.
    pub fn from_config(config: &KundaliConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            ayanamsha: config.ayanamsha()?,
            house_system: config.house_system()?,
            amshas: config.amshas()?,
            riseset: config.riseset_config()?,
            dasha: config.vimshottari_config()?,
            solar_return: config.solar_return_config()?,
            dasha_query_jd: None,
        })
    }

    pub fn with_house_system(mut self, house_system: BhavaSystem) -> Self {
        self.house_system = house_system;
        self
    }

    pub fn with_ayanamsha(mut self, ayanamsha: AyanamshaSystem) -> Self {
        self.ayanamsha = ayanamsha;
        self
    }

    pub fn with_dasha_query_jd(mut self, jd_ut: f64) -> Self {
        self.dasha_query_jd = Some(jd_ut);
        self
    }
}
