//! ΔT = TT − UT, in seconds.
//!
//! Polynomial expressions of Espenak & Meeus (2006), "Five Millennium Canon
//! of Solar Eclipses", NASA/TP-2006-214141. Valid roughly -1999 to +3000;
//! outside -500..2150 the long-term parabola is used.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Decimal year of a Julian Day, close enough for ΔT lookup.
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < -500.0 || y >= 2150.0 {
        let u = (y - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if y < 500.0 {
        let u = y / 100.0;
        return horner(
            u,
            &[10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521],
        );
    }
    if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        return horner(
            u,
            &[1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073],
        );
    }
    if y < 1700.0 {
        let t = y - 1600.0;
        return 120.0 - 0.9808 * t - 0.01532 * t * t + t * t * t / 7129.0;
    }
    if y < 1800.0 {
        let t = y - 1700.0;
        return horner(t, &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0]);
    }
    if y < 1860.0 {
        let t = y - 1800.0;
        return horner(
            t,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        );
    }
    if y < 1900.0 {
        let t = y - 1860.0;
        return horner(
            t,
            &[7.62, 0.5737, -0.251754, 0.01680668, -0.0004473624, 1.0 / 233_174.0],
        );
    }
    if y < 1920.0 {
        let t = y - 1900.0;
        return horner(t, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197]);
    }
    if y < 1941.0 {
        let t = y - 1920.0;
        return horner(t, &[21.20, 0.84493, -0.076100, 0.0020936]);
    }
    if y < 1961.0 {
        let t = y - 1950.0;
        return horner(t, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0]);
    }
    if y < 1986.0 {
        let t = y - 1975.0;
        return horner(t, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0]);
    }
    if y < 2005.0 {
        let t = y - 2000.0;
        return horner(
            t,
            &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
        );
    }
    if y < 2050.0 {
        let t = y - 2000.0;
        return horner(t, &[62.92, 0.32217, 0.005589]);
    }
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
}

/// Julian Ephemeris Day (TT) for a Julian Day in UT.
pub fn jd_ut_to_jde(jd_ut: f64) -> f64 {
    let dt = delta_t_seconds(decimal_year(jd_ut));
    log::debug!("delta_t = {dt:.2} s at JD {jd_ut:.5}");
    jd_ut + dt / SECONDS_PER_DAY
}

/// Evaluate `c[0] + c[1]·x + c[2]·x² + …`.
fn horner(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn epoch_anchors() {
        assert_abs_diff_eq!(delta_t_seconds(2000.0), 63.86, epsilon = 1e-9);
        assert_abs_diff_eq!(delta_t_seconds(1900.0), -2.79, epsilon = 1e-9);
        assert_abs_diff_eq!(delta_t_seconds(1800.0), 13.72, epsilon = 1e-9);
        assert_abs_diff_eq!(delta_t_seconds(1975.0), 45.45, epsilon = 1e-9);
    }

    #[test]
    fn modern_values_are_plausible() {
        // Observed 1990 ≈ 56.9 s. The 2005-2050 extrapolation runs ~2 s high by 2020.
        assert!((delta_t_seconds(1990.0) - 56.9).abs() < 0.5);
        assert!((delta_t_seconds(2020.0) - 69.4).abs() < 3.0);
    }

    #[test]
    fn segments_join_smoothly() {
        for boundary in [1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let before = delta_t_seconds(boundary - 1e-6);
            let after = delta_t_seconds(boundary);
            assert!((before - after).abs() < 1.0, "jump at {boundary}: {before} vs {after}");
        }
    }

    #[test]
    fn jde_is_later_than_ut_today() {
        let jd = 2_460_000.5;
        assert!(jd_ut_to_jde(jd) > jd);
    }
}
