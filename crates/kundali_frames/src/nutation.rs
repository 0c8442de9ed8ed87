//! IAU 1980 nutation, truncated to the 40 largest terms.
//!
//! Computes nutation in longitude (Δψ) and obliquity (Δε). The truncation
//! error is below 0.01″, far inside the arcminute budget of the
//! truncated-series ephemeris.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 22,
//! Table 22.A. Fundamental arguments from the same chapter.

/// Arcseconds to degrees.
const AS2DEG: f64 = 1.0 / 3600.0;

/// Nutation at an epoch, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ.
    pub longitude_deg: f64,
    /// Nutation in obliquity Δε.
    pub obliquity_deg: f64,
}

/// Compute the five fundamental arguments in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
///
/// Returns `[D, M, M', F, Ω]`:
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M'` = mean anomaly of the Moon
/// - `F`  = Moon's argument of latitude
/// - `Ω`  = longitude of the Moon's mean ascending node
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;

    let d = 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0;
    let m = 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0;
    let mp = 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0;
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0;
    let om = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;

    [
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
        om.to_radians(),
    ]
}

/// Each row: `[nD, nM, nM', nF, nΩ, S, S', C, C']`.
/// Δψ term = (S + S'·T)·sin(arg), Δε term = (C + C'·T)·cos(arg), units 0.0001″.
#[rustfmt::skip]
static NUTATION_TERMS: [[f64; 9]; 40] = [
    [ 0.0,  0.0,  0.0,  0.0,  1.0, -171_996.0, -174.2, 92_025.0,  8.9],
    [-2.0,  0.0,  0.0,  2.0,  2.0,  -13_187.0,   -1.6,  5_736.0, -3.1],
    [ 0.0,  0.0,  0.0,  2.0,  2.0,   -2_274.0,   -0.2,    977.0, -0.5],
    [ 0.0,  0.0,  0.0,  0.0,  2.0,    2_062.0,    0.2,   -895.0,  0.5],
    [ 0.0,  1.0,  0.0,  0.0,  0.0,    1_426.0,   -3.4,     54.0, -0.1],
    [ 0.0,  0.0,  1.0,  0.0,  0.0,      712.0,    0.1,     -7.0,  0.0],
    [-2.0,  1.0,  0.0,  2.0,  2.0,     -517.0,    1.2,    224.0, -0.6],
    [ 0.0,  0.0,  0.0,  2.0,  1.0,     -386.0,   -0.4,    200.0,  0.0],
    [ 0.0,  0.0,  1.0,  2.0,  2.0,     -301.0,    0.0,    129.0, -0.1],
    [-2.0, -1.0,  0.0,  2.0,  2.0,      217.0,   -0.5,    -95.0,  0.3],
    [-2.0,  0.0,  1.0,  0.0,  0.0,     -158.0,    0.0,      0.0,  0.0],
    [-2.0,  0.0,  0.0,  2.0,  1.0,      129.0,    0.1,    -70.0,  0.0],
    [ 0.0,  0.0, -1.0,  2.0,  2.0,      123.0,    0.0,    -53.0,  0.0],
    [ 2.0,  0.0,  0.0,  0.0,  0.0,       63.0,    0.0,      0.0,  0.0],
    [ 0.0,  0.0,  1.0,  0.0,  1.0,       63.0,    0.1,    -33.0,  0.0],
    [ 2.0,  0.0, -1.0,  2.0,  2.0,      -59.0,    0.0,     26.0,  0.0],
    [ 0.0,  0.0, -1.0,  0.0,  1.0,      -58.0,   -0.1,     32.0,  0.0],
    [ 0.0,  0.0,  1.0,  2.0,  1.0,      -51.0,    0.0,     27.0,  0.0],
    [-2.0,  0.0,  2.0,  0.0,  0.0,       48.0,    0.0,      0.0,  0.0],
    [ 0.0,  0.0, -2.0,  2.0,  1.0,       46.0,    0.0,    -24.0,  0.0],
    [ 2.0,  0.0,  0.0,  2.0,  2.0,      -38.0,    0.0,     16.0,  0.0],
    [ 0.0,  0.0,  2.0,  2.0,  2.0,      -31.0,    0.0,     13.0,  0.0],
    [ 0.0,  0.0,  2.0,  0.0,  0.0,       29.0,    0.0,      0.0,  0.0],
    [-2.0,  0.0,  1.0,  2.0,  2.0,       29.0,    0.0,    -12.0,  0.0],
    [ 0.0,  0.0,  0.0,  2.0,  0.0,       26.0,    0.0,      0.0,  0.0],
    [-2.0,  0.0,  0.0,  2.0,  0.0,      -22.0,    0.0,      0.0,  0.0],
    [ 0.0,  0.0, -1.0,  2.0,  1.0,       21.0,    0.0,    -10.0,  0.0],
    [ 0.0,  2.0,  0.0,  0.0,  0.0,       17.0,   -0.1,      0.0,  0.0],
    [ 2.0,  0.0, -1.0,  0.0,  1.0,       16.0,    0.0,     -8.0,  0.0],
    [-2.0,  2.0,  0.0,  2.0,  2.0,      -16.0,    0.1,      7.0,  0.0],
    [ 0.0,  1.0,  0.0,  0.0,  1.0,      -15.0,    0.0,      9.0,  0.0],
    [-2.0,  0.0,  1.0,  0.0,  1.0,      -13.0,    0.0,      7.0,  0.0],
    [ 0.0, -1.0,  0.0,  0.0,  1.0,      -12.0,    0.0,      6.0,  0.0],
    [ 0.0,  0.0,  2.0, -2.0,  0.0,       11.0,    0.0,      0.0,  0.0],
    [ 2.0,  0.0, -1.0,  2.0,  1.0,      -10.0,    0.0,      5.0,  0.0],
    [ 2.0,  0.0,  1.0,  2.0,  2.0,       -8.0,    0.0,      3.0,  0.0],
    [ 0.0,  1.0,  0.0,  2.0,  2.0,        7.0,    0.0,     -3.0,  0.0],
    [-2.0,  1.0,  1.0,  0.0,  0.0,       -7.0,    0.0,      0.0,  0.0],
    [ 0.0, -1.0,  0.0,  2.0,  2.0,       -7.0,    0.0,      3.0,  0.0],
    [ 2.0,  0.0,  0.0,  2.0,  1.0,       -7.0,    0.0,      3.0,  0.0],
];

/// Nutation in longitude and obliquity at `t` Julian centuries (TT) from J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let args = fundamental_arguments(t);

    let mut dpsi = 0.0_f64;
    let mut deps = 0.0_f64;
    for row in &NUTATION_TERMS {
        let arg = row[0] * args[0]
            + row[1] * args[1]
            + row[2] * args[2]
            + row[3] * args[3]
            + row[4] * args[4];
        dpsi += (row[5] + row[6] * t) * arg.sin();
        deps += (row[7] + row[8] * t) * arg.cos();
    }

    // 0.0001″ units
    Nutation {
        longitude_deg: dpsi * 1e-4 * AS2DEG,
        obliquity_deg: deps * 1e-4 * AS2DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn meeus_example_22a() {
        // 1987 Apr 10, 0h TD: Δψ = -3.788″, Δε = +9.443″
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let n = nutation(t);
        assert_abs_diff_eq!(n.longitude_deg * 3600.0, -3.788, epsilon = 0.01);
        assert_abs_diff_eq!(n.obliquity_deg * 3600.0, 9.443, epsilon = 0.01);
    }

    #[test]
    fn amplitude_bounded() {
        for i in 0..200 {
            let t = -2.0 + i as f64 * 0.02;
            let n = nutation(t);
            assert!(n.longitude_deg.abs() * 3600.0 < 20.0);
            assert!(n.obliquity_deg.abs() * 3600.0 < 10.5);
        }
    }

    #[test]
    fn node_argument_matches_mean_node() {
        let args = fundamental_arguments(0.0);
        assert_abs_diff_eq!(args[4].to_degrees(), 125.044_52, epsilon = 1e-9);
    }
}
