//! Lagna (Ascendant) and MC (Midheaven) computation.
//!
//! Standard spherical astronomy formulas for the ecliptic longitude of the
//! points rising on the eastern horizon and culminating on the meridian.
//! All angles are tropical and referred to the true equinox of date.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 12 and 13.

use kundali_frames::{equation_of_equinoxes_deg, true_obliquity_deg};
use kundali_time::{gmst_deg, jd_ut_to_jde, julian_centuries, local_sidereal_time_deg};

use crate::util::normalize_360;

/// Local apparent sidereal time in degrees, [0, 360).
///
/// GMST at `jd_ut` plus the equation of the equinoxes (Δψ cos ε, evaluated
/// in dynamical time) plus the east longitude.
pub fn local_apparent_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    let t = julian_centuries(jd_ut_to_jde(jd_ut));
    let gast = gmst_deg(jd_ut) + equation_of_equinoxes_deg(t);
    local_sidereal_time_deg(gast, longitude_east_deg)
}

/// True obliquity of the ecliptic at `jd_ut`, in degrees.
pub fn obliquity_of_date_deg(jd_ut: f64) -> f64 {
    true_obliquity_deg(julian_centuries(jd_ut_to_jde(jd_ut)))
}

/// Ecliptic longitude of the Lagna in degrees.
///
/// Formula: `Asc = atan2(−cos θ, sin ε tan φ + cos ε sin θ)`, plus 180°
/// when the denominator `x` is negative. `θ` is the local sidereal time
/// (RAMC). Returns a value in [0, 360).
///
/// With `x < 0` this is the point rising on the eastern horizon; otherwise
/// it is the opposite (setting) point. House cusps follow this Lagna.
pub fn ascendant_deg(lst_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let y = -theta.cos();
    let x = eps.sin() * phi.tan() + eps.cos() * theta.sin();
    let asc = normalize_360(f64::atan2(y, x).to_degrees());
    if x < 0.0 { normalize_360(asc + 180.0) } else { asc }
}

/// Ecliptic point on the eastern horizon (Meeus 14.2, quadrant-resolved):
/// `atan2(cos θ, −(sin θ cos ε + tan φ sin ε))`.
pub(crate) fn rising_point_deg(lst_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    normalize_360(asc.to_degrees())
}

/// Ecliptic longitude of the MC in degrees.
///
/// Formula: `MC = atan2(sin θ, cos θ cos ε)`. Returns a value in [0, 360).
pub fn midheaven_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(f64::atan2(theta.sin(), theta.cos() * eps.cos()).to_degrees())
}

/// Ecliptic point rising with the given oblique ascension.
///
/// The Ascendant itself has oblique ascension RAMC + 90°.
pub(crate) fn ascendant_from_oblique_ascension_deg(
    oblique_ascension_deg: f64,
    obliquity_deg: f64,
    latitude_deg: f64,
) -> f64 {
    rising_point_deg(oblique_ascension_deg - 90.0, obliquity_deg, latitude_deg)
}

/// Ecliptic longitude of the point on the ecliptic with right ascension `ra_deg`.
pub(crate) fn ecliptic_longitude_of_ra_deg(ra_deg: f64, obliquity_deg: f64) -> f64 {
    let ra = ra_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(f64::atan2(ra.sin(), ra.cos() * eps.cos()).to_degrees())
}

/// Declination of the ecliptic point at longitude `lon_deg`.
pub(crate) fn ecliptic_declination_deg(lon_deg: f64, obliquity_deg: f64) -> f64 {
    (obliquity_deg.to_radians().sin() * lon_deg.to_radians().sin())
        .asin()
        .to_degrees()
}
