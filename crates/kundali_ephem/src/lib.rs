//! Geocentric ecliptic positions of the nine Vedic bodies.
//!
//! The [`Ephemeris`] trait is the only seam downstream crates see: Julian
//! Day (UT) and a [`Body`] in, tropical ecliptic position of date out.
//! [`SeriesEphemeris`] is the built-in truncated-series implementation;
//! any higher-precision backend can replace it by implementing the trait.

pub mod backend;
pub mod body;
pub mod error;
pub mod lunar;
pub mod nodes;
pub mod planetary;
pub mod series;
pub mod solar;

pub use backend::{EclipticPosition, Ephemeris};
pub use body::{ALL_BODIES, Body};
pub use error::EphemError;
pub use nodes::{NodeMode, mean_rahu_deg, rahu_deg, true_rahu_deg};
pub use series::SeriesEphemeris;

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Normalize an angle to [0, 360) degrees.
pub(crate) fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
