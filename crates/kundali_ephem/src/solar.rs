//! Geocentric Sun, Meeus Chapter 25 (low-precision theory, ~0.01°).

use crate::normalize_deg;

/// Aberration constant in degrees (20.4898″ at 1 AU).
const ABERRATION_DEG: f64 = 20.4898 / 3600.0;

/// Geometric Sun referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoords {
    /// Geometric (true) longitude in degrees.
    pub longitude_deg: f64,
    /// Earth–Sun distance in AU.
    pub radius_au: f64,
}

/// Geometric solar longitude and radius vector, `t` in Julian centuries (TT).
pub fn sun_geometric(t: f64) -> SolarCoords {
    let t2 = t * t;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let m_rad = m.to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let v = (m + c).to_radians();
    let radius_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * v.cos());
    SolarCoords {
        longitude_deg: normalize_deg(l0 + c),
        radius_au,
    }
}

/// Apparent longitude: geometric + nutation in longitude − annual aberration.
pub fn sun_apparent_longitude_deg(sun: &SolarCoords, nutation_longitude_deg: f64) -> f64 {
    normalize_deg(sun.longitude_deg + nutation_longitude_deg - ABERRATION_DEG / sun.radius_au)
}
