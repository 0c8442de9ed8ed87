//! Obliquity of the ecliptic.
//!
//! Mean obliquity: IAU 1980 polynomial (Meeus Eq. 22.2), good to ~1″
//! within a few centuries of J2000. True obliquity adds Δε.

use crate::nutation::nutation;

/// Mean obliquity of the ecliptic in degrees, `t` in Julian centuries (TT).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let seconds = 21.448 - 46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    23.0 + 26.0 / 60.0 + seconds / 3600.0
}

/// True obliquity of the ecliptic (mean + nutation in obliquity), degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation(t).obliquity_deg
}

/// Equation of the equinoxes Δψ·cos ε, degrees.
///
/// Apparent sidereal time = mean sidereal time + this value.
pub fn equation_of_equinoxes_deg(t: f64) -> f64 {
    let n = nutation(t);
    let eps = mean_obliquity_deg(t) + n.obliquity_deg;
    n.longitude_deg * eps.to_radians().cos()
}
