//! TOML configuration for kundali generation.
//!
//! ```toml
//! [chart]
//! ayanamsa = "lahiri"
//! house_system = "whole_sign"
//! ```

pub mod config;
pub mod error;

pub use config::{
    ChartSettings, DEFAULT_DIVISIONAL_CHARTS, DEFAULT_LOCATIONS, DashaSettings, KundaliConfig,
    LoggingSettings, RiseSetSettings, VarshphalSettings,
};
pub use error::ConfigError;
