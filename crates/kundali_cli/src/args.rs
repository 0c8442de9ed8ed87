//! Command-line arguments and their conversion to library inputs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use clap::{Args, Parser, Subcommand};
use kundali_chart::{BirthInput, UnknownTimeInput};
use kundali_config::KundaliConfig;
use kundali_time::CivilTime;
use kundali_vedic_base::GeoLocation;

#[derive(Parser, Debug)]
#[command(name = "kundali", version, about = "Vedic birth chart calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: kundali.toml or config/kundali.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Single-line JSON instead of pretty-printed
    #[arg(long, global = true)]
    pub compact: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full birth chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        systems: SystemArgs,
        /// Moment for the active dasha (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss], local)
        #[arg(long)]
        dasha_at: Option<String>,
    },
    /// Sunrise, noon and sunset charts for a date without a birth time
    UnknownTime {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        systems: SystemArgs,
    },
    /// Panchang for a moment
    Panchang {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        systems: SystemArgs,
    },
    /// Vimshottari timeline and the active period
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        systems: SystemArgs,
        /// Moment for the active period (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss], local)
        #[arg(long)]
        at: Option<String>,
    },
    /// Annual solar-return chart with Muntha, sahams and Mudda dasha
    Varshphal {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        systems: SystemArgs,
        /// Gregorian year of the solar return
        #[arg(long)]
        year: i32,
        /// Moment for the active Mudda period (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss], local)
        #[arg(long)]
        at: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct PlaceArgs {
    /// UTC offset in hours, east positive (e.g. 5.5)
    #[arg(long, allow_hyphen_values = true)]
    pub tz: f64,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
    /// Altitude above sea level in meters
    #[arg(long, default_value_t = 0.0)]
    pub alt: f64,
}

impl PlaceArgs {
    pub fn location(&self) -> Result<GeoLocation> {
        Ok(GeoLocation::new(self.lat, self.lon, self.alt)?)
    }
}

#[derive(Args, Debug)]
pub struct BirthArgs {
    /// Local date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Local time (hh:mm or hh:mm:ss)
    #[arg(long)]
    pub time: String,
    #[command(flatten)]
    pub place: PlaceArgs,
}

impl BirthArgs {
    pub fn to_input(&self) -> Result<BirthInput> {
        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;
        let civil = civil_time(date.and_time(time), self.place.tz)?;
        Ok(BirthInput::new(civil, self.place.location()?))
    }
}

/// Overrides for the `[chart]` selectors of the configuration file.
#[derive(Args, Debug, Default)]
pub struct SystemArgs {
    /// whole_sign | equal | placidus | koch
    #[arg(long)]
    pub house_system: Option<String>,
    /// lahiri | raman | kp | fagan
    #[arg(long)]
    pub ayanamsa: Option<String>,
    /// mean | true
    #[arg(long)]
    pub node_mode: Option<String>,
}

impl SystemArgs {
    /// Write the given flags over the loaded configuration.
    pub fn apply(&self, config: &mut KundaliConfig) {
        if let Some(h) = &self.house_system {
            config.chart.house_system = h.clone();
        }
        if let Some(a) = &self.ayanamsa {
            config.chart.ayanamsa = a.clone();
        }
        if let Some(n) = &self.node_mode {
            config.chart.node_mode = n.clone();
        }
    }
}

pub fn unknown_time_input(date: &str, place: &PlaceArgs) -> Result<UnknownTimeInput> {
    let date = parse_date(date)?;
    Ok(UnknownTimeInput {
        year: date.year(),
        month: date.month(),
        day: date.day(),
        tz_offset_hours: place.tz,
        location: place.location()?,
    })
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .with_context(|| format!("invalid time '{s}', expected hh:mm[:ss]"))
}

/// JD (UT) of a local date or date-time; a bare date means local noon.
pub fn parse_moment(s: &str, tz_offset_hours: f64) -> Result<f64> {
    let s = s.trim();
    let local = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?.and_hms_opt(12, 0, 0))
        .with_context(|| format!("invalid moment '{s}', expected YYYY-MM-DD[Thh:mm[:ss]]"))?;
    Ok(civil_time(local, tz_offset_hours)?.to_jd_ut())
}

fn civil_time(local: NaiveDateTime, tz_offset_hours: f64) -> Result<CivilTime> {
    let second = local.second() as f64 + local.nanosecond() as f64 * 1e-9;
    Ok(CivilTime::new(
        local.year(),
        local.month(),
        local.day(),
        local.hour(),
        local.minute(),
        second,
        tz_offset_hours,
    )?)
}
