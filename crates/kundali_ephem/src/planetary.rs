//! Geocentric positions of Mercury through Saturn from mean orbital elements.
//!
//! Mean elements referred to the J2000 ecliptic and equinox (Meeus,
//! Table 31.B) are propagated to the epoch, Kepler's equation is solved,
//! and the heliocentric vector is combined with the Earth's position
//! (the geometric Sun reversed). Jupiter and Saturn receive the largest
//! terms of their mutual "great inequality". One light-time iteration is
//! applied. Typical error is a few arcminutes over 1800–2100.

use kundali_frames::general_precession_longitude_deg;

use crate::body::Body;
use crate::normalize_deg;
use crate::solar::SolarCoords;

/// Light travel time for 1 AU, in days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Mean orbital elements as quadratic polynomials in T (J2000 frame).
struct OrbitalElements {
    /// Mean longitude L, degrees.
    mean_longitude: [f64; 3],
    /// Semi-major axis a, AU.
    semi_major_axis: [f64; 2],
    /// Eccentricity e.
    eccentricity: [f64; 3],
    /// Inclination i, degrees.
    inclination: [f64; 3],
    /// Longitude of ascending node Ω, degrees.
    node: [f64; 3],
    /// Longitude of perihelion ϖ, degrees.
    perihelion: [f64; 3],
}

#[rustfmt::skip]
static MERCURY: OrbitalElements = OrbitalElements {
    mean_longitude:  [252.250_906, 149_472.674_635_8, -0.000_005_36],
    semi_major_axis: [0.387_098_310, 0.0],
    eccentricity:    [0.205_631_75, 0.000_020_406, -0.000_000_028_4],
    inclination:     [7.004_986, -0.005_951_6, 0.000_000_81],
    node:            [48.330_893, -0.125_422_9, -0.000_088_33],
    perihelion:      [77.456_119, 0.158_864_3, -0.000_013_43],
};

#[rustfmt::skip]
static VENUS: OrbitalElements = OrbitalElements {
    mean_longitude:  [181.979_801, 58_517.815_676_0, 0.000_001_65],
    semi_major_axis: [0.723_329_820, 0.0],
    eccentricity:    [0.006_771_88, -0.000_047_766, 0.000_000_097_5],
    inclination:     [3.394_662, -0.000_856_8, -0.000_032_44],
    node:            [76.679_920, -0.278_008_0, -0.000_142_56],
    perihelion:      [131.563_707, 0.004_864_6, -0.001_382_32],
};

#[rustfmt::skip]
static MARS: OrbitalElements = OrbitalElements {
    mean_longitude:  [355.433_275, 19_140.299_331_3, 0.000_002_61],
    semi_major_axis: [1.523_679_342, 0.0],
    eccentricity:    [0.093_400_62, 0.000_090_483, -0.000_000_080_6],
    inclination:     [1.849_726, -0.008_147_9, -0.000_022_55],
    node:            [49.558_093, -0.294_984_6, -0.000_639_93],
    perihelion:      [336.060_234, 0.443_889_8, -0.000_173_21],
};

#[rustfmt::skip]
static JUPITER: OrbitalElements = OrbitalElements {
    mean_longitude:  [34.351_484, 3_034.905_674_6, -0.000_085_01],
    semi_major_axis: [5.202_603_191, 0.000_000_191_3],
    eccentricity:    [0.048_494_85, 0.000_163_244, -0.000_000_471_9],
    inclination:     [1.303_270, -0.001_987_2, 0.000_033_18],
    node:            [100.464_441, 0.176_682_8, 0.000_903_87],
    perihelion:      [14.331_309, 0.215_552_5, 0.000_722_52],
};

#[rustfmt::skip]
static SATURN: OrbitalElements = OrbitalElements {
    mean_longitude:  [50.077_471, 1_222.113_794_3, 0.000_210_04],
    semi_major_axis: [9.554_909_596, -0.000_002_138_9],
    eccentricity:    [0.055_508_62, -0.000_346_818, -0.000_000_645_6],
    inclination:     [2.488_878, 0.002_551_5, -0.000_049_03],
    node:            [113.665_524, -0.256_664_9, -0.000_183_45],
    perihelion:      [93.056_787, 0.566_549_6, 0.000_528_09],
};

fn elements_for(body: Body) -> Option<&'static OrbitalElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        _ => None,
    }
}

fn quadratic(c: &[f64; 3], t: f64) -> f64 {
    c[0] + c[1] * t + c[2] * t * t
}

/// Solve Kepler's equation E − e·sin E = M (radians) by Newton iteration.
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> f64 {
    let m = mean_anomaly_rad;
    let mut ecc_anom = m + e * m.sin();
    for _ in 0..30 {
        let delta = (m - ecc_anom + e * ecc_anom.sin()) / (1.0 - e * ecc_anom.cos());
        ecc_anom += delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric ecliptic coordinates (mean equinox of date).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricCoords {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub radius_au: f64,
}

/// Heliocentric position of a planet, `t` in Julian centuries (TT).
///
/// Returns `None` for the Sun, Moon and the nodes.
pub fn heliocentric(body: Body, t: f64) -> Option<HeliocentricCoords> {
    let el = elements_for(body)?;
    let l = quadratic(&el.mean_longitude, t);
    let a = el.semi_major_axis[0] + el.semi_major_axis[1] * t;
    let e = quadratic(&el.eccentricity, t);
    let inc = quadratic(&el.inclination, t).to_radians();
    let node = quadratic(&el.node, t);
    let peri = quadratic(&el.perihelion, t);

    let mean_anomaly = normalize_deg(l - peri).to_radians();
    let ecc_anom = solve_kepler(mean_anomaly, e);
    let true_anom = 2.0
        * ((1.0 + e).sqrt() * (ecc_anom / 2.0).sin())
            .atan2((1.0 - e).sqrt() * (ecc_anom / 2.0).cos());
    let r = a * (1.0 - e * ecc_anom.cos());

    // Argument of latitude u = v + ω, with ω = ϖ − Ω.
    let u = true_anom + (peri - node).to_radians();
    let om = node.to_radians();
    let x = r * (om.cos() * u.cos() - om.sin() * u.sin() * inc.cos());
    let y = r * (om.sin() * u.cos() + om.cos() * u.sin() * inc.cos());
    let z = r * u.sin() * inc.sin();

    let mut lon = y.atan2(x).to_degrees();
    let mut lat = (z / r).asin().to_degrees();

    if matches!(body, Body::Jupiter | Body::Saturn) {
        let (dl, db) = great_inequality(body, t);
        lon += dl;
        lat += db;
    }

    Some(HeliocentricCoords {
        longitude_deg: normalize_deg(lon + general_precession_longitude_deg(t)),
        latitude_deg: lat,
        radius_au: r,
    })
}

/// Jupiter–Saturn mutual perturbations in heliocentric longitude/latitude, degrees.
fn great_inequality(body: Body, t: f64) -> (f64, f64) {
    let mj = quadratic(&JUPITER.mean_longitude, t) - quadratic(&JUPITER.perihelion, t);
    let ms = quadratic(&SATURN.mean_longitude, t) - quadratic(&SATURN.perihelion, t);
    let s = |deg: f64| deg.to_radians().sin();
    let c = |deg: f64| deg.to_radians().cos();

    match body {
        Body::Jupiter => (
            -0.332 * s(2.0 * mj - 5.0 * ms - 67.6) - 0.056 * s(2.0 * mj - 2.0 * ms + 21.0)
                + 0.042 * s(3.0 * mj - 5.0 * ms + 21.0)
                - 0.036 * s(mj - 2.0 * ms)
                + 0.022 * c(mj - ms)
                + 0.023 * s(2.0 * mj - 3.0 * ms + 52.0)
                - 0.016 * s(mj - 5.0 * ms - 69.0),
            0.0,
        ),
        Body::Saturn => (
            0.812 * s(2.0 * mj - 5.0 * ms - 67.6) - 0.229 * c(2.0 * mj - 4.0 * ms - 2.0)
                + 0.119 * s(mj - 2.0 * ms - 3.0)
                + 0.046 * s(2.0 * mj - 6.0 * ms - 69.0)
                + 0.014 * s(mj - 3.0 * ms + 32.0),
            -0.020 * c(2.0 * mj - 4.0 * ms - 2.0) + 0.018 * s(2.0 * mj - 6.0 * ms - 49.0),
        ),
        _ => (0.0, 0.0),
    }
}

/// Geocentric geometric coordinates: (longitude°, latitude°, distance AU).
fn to_geocentric(helio: &HeliocentricCoords, earth_sun: &SolarCoords) -> (f64, f64, f64) {
    let (lp, bp) = (helio.longitude_deg.to_radians(), helio.latitude_deg.to_radians());
    // Earth's heliocentric longitude is the Sun's geocentric longitude + 180°.
    let le = (earth_sun.longitude_deg + 180.0).to_radians();
    let re = earth_sun.radius_au;

    let x = helio.radius_au * bp.cos() * lp.cos() - re * le.cos();
    let y = helio.radius_au * bp.cos() * lp.sin() - re * le.sin();
    let z = helio.radius_au * bp.sin();

    let lon = normalize_deg(y.atan2(x).to_degrees());
    let lat = z.atan2(x.hypot(y)).to_degrees();
    (lon, lat, (x * x + y * y + z * z).sqrt())
}

/// Geocentric position of a planet corrected for light time.
///
/// `earth_sun` is the geometric Sun at `t`. Returns `None` for non-planets.
pub fn geocentric(body: Body, t: f64, earth_sun: &SolarCoords) -> Option<(f64, f64, f64)> {
    let first = to_geocentric(&heliocentric(body, t)?, earth_sun);
    let tau_centuries = first.2 * LIGHT_TIME_DAYS_PER_AU / 36_525.0;
    Some(to_geocentric(&heliocentric(body, t - tau_centuries)?, earth_sun))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::sun_geometric;
    use approx::assert_abs_diff_eq;

    #[test]
    fn kepler_circular_orbit() {
        assert_abs_diff_eq!(solve_kepler(1.234, 0.0), 1.234, epsilon = 1e-15);
    }

    #[test]
    fn kepler_satisfies_equation() {
        for &e in &[0.0068, 0.0934, 0.2056, 0.7] {
            for i in 0..36 {
                let m = i as f64 * 10.0_f64.to_radians();
                let ea = solve_kepler(m, e);
                assert_abs_diff_eq!(ea - e * ea.sin(), m, epsilon = 1e-11);
            }
        }
    }

    #[test]
    fn non_planets_have_no_elements() {
        assert!(heliocentric(Body::Sun, 0.0).is_none());
        assert!(heliocentric(Body::Rahu, 0.0).is_none());
    }

    #[test]
    fn radius_within_orbit_bounds() {
        let t = 0.1;
        let mercury = heliocentric(Body::Mercury, t).unwrap();
        assert!((0.30..0.47).contains(&mercury.radius_au));
        let saturn = heliocentric(Body::Saturn, t).unwrap();
        assert!((9.0..10.1).contains(&saturn.radius_au));
    }

    #[test]
    fn meeus_example_33a_venus() {
        // 1992 Dec 20, 0h TD: geometric λ ≈ 313.08°, β ≈ -2.08°
        let t = (2_448_976.5 - 2_451_545.0) / 36_525.0;
        let sun = sun_geometric(t);
        let (lon, lat, dist) = geocentric(Body::Venus, t, &sun).unwrap();
        assert_abs_diff_eq!(lon, 313.08, epsilon = 0.02);
        assert_abs_diff_eq!(lat, -2.08, epsilon = 0.02);
        assert_abs_diff_eq!(dist, 0.91, epsilon = 0.01);
    }
}
