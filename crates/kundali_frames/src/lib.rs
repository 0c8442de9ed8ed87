//! Ecliptic frame helpers for the equinox of date.
//!
//! Provides nutation, obliquity of the ecliptic, general precession in
//! longitude, and ecliptic ↔ equatorial conversion.

pub mod equatorial;
pub mod nutation;
pub mod obliquity;
pub mod precession;

pub use equatorial::{ecliptic_to_equatorial_deg, equatorial_to_ecliptic_longitude_deg};
pub use nutation::{Nutation, fundamental_arguments, nutation};
pub use obliquity::{equation_of_equinoxes_deg, mean_obliquity_deg, true_obliquity_deg};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
