//! Full kundali (birth chart) generation.
//!
//! [`generate_chart`] combines the ephemeris, ayanamsha, houses, panchang,
//! Vimshottari dasha and divisional charts into one serializable [`Chart`].
//! [`generate_unknown_time`] casts the sunrise, noon and sunset variants
//! used when only the birth date is known. [`generate_panchang`] and
//! [`generate_dasha`] compute a single section without the rest.
//! [`generate_varshphal`] casts the annual chart at a solar return.

pub mod chart_types;
pub mod error;
pub mod generate;
pub mod input;
pub mod varshphal;

pub use chart_types::{
    BalaEntry, Chart, ChartMeta, CurrentDashaEntry, DashaEntry, DivisionalEntry, HouseEntry,
    InputEcho, Instant, LimbEntry, MahadashaEntry, MuddaEntry, MunthaEntry, NakshatraLimbEntry,
    OrderedMap, PanchangEntry, PeriodEntry, PlanetEntry, PointEntry, RahuKalaEntry, SahamEntry,
    TithiEntry, UnknownTimeCharts, UnknownTimeVariants, VarsheshEntry, Varshphal,
};
pub use error::ChartError;
pub use generate::{generate_chart, generate_dasha, generate_panchang, generate_unknown_time};
pub use input::{BirthInput, ChartOptions, UnknownTimeInput};
pub use varshphal::generate_varshphal;
