//! `kundali.toml` schema and loading.
//!
//! Every section and field has a default, so an empty file is a valid
//! configuration. Selectors are kept as strings until [`KundaliConfig::validate`]
//! or one of the typed accessors parses them.

use std::fs;
use std::path::{Path, PathBuf};

use kundali_ephem::NodeMode;
use kundali_vedic_base::{
    Amsha, AyanamshaSystem, BhavaSystem, RiseSetConfig, SolarReturnConfig, VimshottariConfig,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Files searched, in order, by [`KundaliConfig::from_default_location`].
pub const DEFAULT_LOCATIONS: [&str; 2] = ["kundali.toml", "config/kundali.toml"];

/// Divisional charts produced when the file does not list any.
pub const DEFAULT_DIVISIONAL_CHARTS: [&str; 7] = ["D1", "D2", "D3", "D9", "D10", "D12", "D60"];

/// Largest accepted dasha span; the timeline generator caps at ten cycles.
const MAX_DASHA_SPAN_YEARS: f64 = 1200.0;

/// Complete configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KundaliConfig {
    pub chart: ChartSettings,
    pub riseset: RiseSetSettings,
    pub dasha: DashaSettings,
    pub varshphal: VarshphalSettings,
    pub logging: LoggingSettings,
}

/// `[chart]`: selectors for the calculation systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub ayanamsa: String,
    pub house_system: String,
    pub node_mode: String,
    pub divisional_charts: Vec<String>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamshaSystem::default().name().to_string(),
            house_system: BhavaSystem::default().name().to_string(),
            node_mode: NodeMode::default().name().to_string(),
            divisional_charts: DEFAULT_DIVISIONAL_CHARTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// `[riseset]`: sunrise/sunset parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseSetSettings {
    pub refraction_arcmin: f64,
    pub semidiameter_arcmin: f64,
    pub altitude_correction: bool,
    pub max_iterations: u32,
}

impl Default for RiseSetSettings {
    fn default() -> Self {
        let d = RiseSetConfig::default();
        Self {
            refraction_arcmin: d.refraction_arcmin,
            semidiameter_arcmin: d.semidiameter_arcmin,
            altitude_correction: d.altitude_correction,
            max_iterations: d.max_iterations,
        }
    }
}

/// `[dasha]`: Vimshottari timeline extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaSettings {
    pub min_span_years: f64,
}

impl Default for DashaSettings {
    fn default() -> Self {
        Self {
            min_span_years: VimshottariConfig::default().min_span_years,
        }
    }
}

/// `[varshphal]`: solar-return search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VarshphalSettings {
    pub step_size_days: f64,
    pub max_scan_days: f64,
}

impl Default for VarshphalSettings {
    fn default() -> Self {
        let d = SolarReturnConfig::default();
        Self {
            step_size_days: d.step_size_days,
            max_scan_days: d.max_scan_days,
        }
    }
}

/// `[logging]`: default log filter directive, overridden by `RUST_LOG`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl KundaliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        debug!("loading config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load the first file found among [`DEFAULT_LOCATIONS`].
    pub fn from_default_location() -> Result<Self, ConfigError> {
        DEFAULT_LOCATIONS
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
            .map_or(Err(ConfigError::NotFound), Self::from_file)
    }

    /// Parse every selector and range-check every number.
    ///
    /// Unknown names fail with the matching `Unknown*` error rather than
    /// falling back to a default.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ayanamsha()?;
        self.house_system()?;
        self.node_mode()?;
        self.amshas()?;
        self.riseset_config()?;
        self.vimshottari_config()?;
        self.solar_return_config()?;
        Ok(())
    }

    pub fn ayanamsha(&self) -> Result<AyanamshaSystem, ConfigError> {
        Ok(self.chart.ayanamsa.parse()?)
    }

    pub fn house_system(&self) -> Result<BhavaSystem, ConfigError> {
        Ok(self.chart.house_system.parse()?)
    }

    pub fn node_mode(&self) -> Result<NodeMode, ConfigError> {
        Ok(self.chart.node_mode.parse()?)
    }

    /// Divisional charts in file order, duplicates removed.
    pub fn amshas(&self) -> Result<Vec<Amsha>, ConfigError> {
        let mut out = Vec::with_capacity(self.chart.divisional_charts.len());
        for code in &self.chart.divisional_charts {
            let amsha: Amsha = code.parse()?;
            if !out.contains(&amsha) {
                out.push(amsha);
            }
        }
        Ok(out)
    }

    pub fn riseset_config(&self) -> Result<RiseSetConfig, ConfigError> {
        let r = &self.riseset;
        if !(0.0..=120.0).contains(&r.refraction_arcmin) {
            return Err(ConfigError::OutOfRange {
                key: "riseset.refraction_arcmin",
                reason: "must be within [0, 120]",
            });
        }
        if !(0.0..=60.0).contains(&r.semidiameter_arcmin) {
            return Err(ConfigError::OutOfRange {
                key: "riseset.semidiameter_arcmin",
                reason: "must be within [0, 60]",
            });
        }
        if r.max_iterations == 0 {
            return Err(ConfigError::OutOfRange {
                key: "riseset.max_iterations",
                reason: "must be at least 1",
            });
        }
        Ok(RiseSetConfig {
            refraction_arcmin: r.refraction_arcmin,
            semidiameter_arcmin: r.semidiameter_arcmin,
            altitude_correction: r.altitude_correction,
            max_iterations: r.max_iterations,
        })
    }

    pub fn vimshottari_config(&self) -> Result<VimshottariConfig, ConfigError> {
        let span = self.dasha.min_span_years;
        if !span.is_finite() || span <= 0.0 || span > MAX_DASHA_SPAN_YEARS {
            return Err(ConfigError::OutOfRange {
                key: "dasha.min_span_years",
                reason: "must be within (0, 1200]",
            });
        }
        Ok(VimshottariConfig {
            min_span_years: span,
            ..VimshottariConfig::default()
        })
    }

    pub fn solar_return_config(&self) -> Result<SolarReturnConfig, ConfigError> {
        let v = &self.varshphal;
        if !(v.step_size_days > 0.0 && v.step_size_days <= 30.0) {
            return Err(ConfigError::OutOfRange {
                key: "varshphal.step_size_days",
                reason: "must be within (0, 30]",
            });
        }
        if !(366.0..=400.0).contains(&v.max_scan_days) {
            return Err(ConfigError::OutOfRange {
                key: "varshphal.max_scan_days",
                reason: "must be within [366, 400]",
            });
        }
        Ok(SolarReturnConfig {
            step_size_days: v.step_size_days,
            max_scan_days: v.max_scan_days,
            ..SolarReturnConfig::default()
        })
    }
}
