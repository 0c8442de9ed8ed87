//! Greenwich and local sidereal time, in degrees.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Eq. 12.4.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Greenwich Mean Sidereal Time at a UT Julian Day, degrees in [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local sidereal time from a Greenwich sidereal time and east longitude.
///
/// Works for both mean and apparent time. Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(greenwich_deg: f64, longitude_east_deg: f64) -> f64 {
    (greenwich_deg + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn meeus_example_12a() {
        // 1987 Apr 10, 0h UT: GMST = 13h10m46.3668s
        let expected = (13.0 + 10.0 / 60.0 + 46.3668 / 3600.0) * 15.0;
        assert_abs_diff_eq!(gmst_deg(2_446_895.5), expected, epsilon = 1e-5);
    }

    #[test]
    fn meeus_example_12b() {
        // 1987 Apr 10, 19h21m00s UT: GMST = 8h34m57.0896s
        let jd = 2_446_895.5 + (19.0 + 21.0 / 60.0) / 24.0;
        let expected = (8.0 + 34.0 / 60.0 + 57.0896 / 3600.0) * 15.0;
        assert_abs_diff_eq!(gmst_deg(jd), expected, epsilon = 1e-4);
    }

    #[test]
    fn lst_wraps() {
        assert_abs_diff_eq!(local_sidereal_time_deg(350.0, 20.0), 10.0);
        assert_abs_diff_eq!(local_sidereal_time_deg(10.0, -20.0), 350.0);
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5, 2_378_496.5] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }
}
