//! Ecliptic ↔ equatorial conversion for a given obliquity.

/// Ecliptic (λ, β) to equatorial (α, δ), all in degrees; α in [0, 360).
pub fn ecliptic_to_equatorial_deg(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (lam, beta, eps) = (
        lon_deg.to_radians(),
        lat_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    let ra = (lam.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lam.cos());
    let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lam.sin()).asin();
    (ra.to_degrees().rem_euclid(360.0), dec.to_degrees())
}

/// Ecliptic longitude of an equatorial direction (α, δ), degrees in [0, 360).
pub fn equatorial_to_ecliptic_longitude_deg(ra_deg: f64, dec_deg: f64, obliquity_deg: f64) -> f64 {
    let (ra, dec, eps) = (
        ra_deg.to_radians(),
        dec_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    let lon = (ra.sin() * eps.cos() + dec.tan() * eps.sin()).atan2(ra.cos());
    lon.to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn meeus_example_13a() {
        // Pollux: α = 116.328942°, δ = 28.026183°, ε = 23.4392911° → λ = 113.215630°
        let lon = equatorial_to_ecliptic_longitude_deg(116.328_942, 28.026_183, 23.439_291_1);
        assert_abs_diff_eq!(lon, 113.215_630, epsilon = 1e-5);
        let (ra, dec) = ecliptic_to_equatorial_deg(113.215_630, 6.684_170, 23.439_291_1);
        assert_abs_diff_eq!(ra, 116.328_942, epsilon = 1e-5);
        assert_abs_diff_eq!(dec, 28.026_183, epsilon = 1e-5);
    }

    #[test]
    fn equinoxes_and_solstices() {
        let eps = 23.44;
        let (ra, dec) = ecliptic_to_equatorial_deg(0.0, 0.0, eps);
        assert_abs_diff_eq!(ra, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dec, 0.0, epsilon = 1e-12);
        let (ra, dec) = ecliptic_to_equatorial_deg(90.0, 0.0, eps);
        assert_abs_diff_eq!(ra, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(dec, eps, epsilon = 1e-9);
        assert_abs_diff_eq!(equatorial_to_ecliptic_longitude_deg(270.0, -eps, eps), 270.0, epsilon = 1e-9);
    }
}
