//! Geocentric Moon, Meeus Chapter 47 (truncated ELP-2000/82).
//!
//! 60 periodic terms each for longitude/distance and latitude, plus the
//! additive Venus, Jupiter and flattening terms. Accuracy ~10″ in
//! longitude and ~4″ in latitude.

use crate::normalize_deg;

/// Geometric Moon referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarCoords {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    /// Earth–Moon center distance in km.
    pub distance_km: f64,
}

/// Table 47.A: `[D, M, M', F, Σl coeff, Σr coeff]`. Units: 1e-6 deg, 1e-3 km.
#[rustfmt::skip]
static LONGITUDE_DISTANCE_TERMS: [[f64; 6]; 60] = [
    [0.0,  0.0,  1.0,  0.0,  6_288_774.0, -20_905_355.0],
    [2.0,  0.0, -1.0,  0.0,  1_274_027.0,  -3_699_111.0],
    [2.0,  0.0,  0.0,  0.0,    658_314.0,  -2_955_968.0],
    [0.0,  0.0,  2.0,  0.0,    213_618.0,    -569_925.0],
    [0.0,  1.0,  0.0,  0.0,   -185_116.0,      48_888.0],
    [0.0,  0.0,  0.0,  2.0,   -114_332.0,      -3_149.0],
    [2.0,  0.0, -2.0,  0.0,     58_793.0,     246_158.0],
    [2.0, -1.0, -1.0,  0.0,     57_066.0,    -152_138.0],
    [2.0,  0.0,  1.0,  0.0,     53_322.0,    -170_733.0],
    [2.0, -1.0,  0.0,  0.0,     45_758.0,    -204_586.0],
    [0.0,  1.0, -1.0,  0.0,    -40_923.0,    -129_620.0],
    [1.0,  0.0,  0.0,  0.0,    -34_720.0,     108_743.0],
    [0.0,  1.0,  1.0,  0.0,    -30_383.0,     104_755.0],
    [2.0,  0.0,  0.0, -2.0,     15_327.0,      10_321.0],
    [0.0,  0.0,  1.0,  2.0,    -12_528.0,           0.0],
    [0.0,  0.0,  1.0, -2.0,     10_980.0,      79_661.0],
    [4.0,  0.0, -1.0,  0.0,     10_675.0,     -34_782.0],
    [0.0,  0.0,  3.0,  0.0,     10_034.0,     -23_210.0],
    [4.0,  0.0, -2.0,  0.0,      8_548.0,     -21_636.0],
    [2.0,  1.0, -1.0,  0.0,     -7_888.0,      24_208.0],
    [2.0,  1.0,  0.0,  0.0,     -6_766.0,      30_824.0],
    [1.0,  0.0, -1.0,  0.0,     -5_163.0,      -8_379.0],
    [1.0,  1.0,  0.0,  0.0,      4_987.0,     -16_675.0],
    [2.0, -1.0,  1.0,  0.0,      4_036.0,     -12_831.0],
    [2.0,  0.0,  2.0,  0.0,      3_994.0,     -10_445.0],
    [4.0,  0.0,  0.0,  0.0,      3_861.0,     -11_650.0],
    [2.0,  0.0, -3.0,  0.0,      3_665.0,      14_403.0],
    [0.0,  1.0, -2.0,  0.0,     -2_689.0,      -7_003.0],
    [2.0,  0.0, -1.0,  2.0,     -2_602.0,           0.0],
    [2.0, -1.0, -2.0,  0.0,      2_390.0,      10_056.0],
    [1.0,  0.0,  1.0,  0.0,     -2_348.0,       6_322.0],
    [2.0, -2.0,  0.0,  0.0,      2_236.0,      -9_884.0],
    [0.0,  1.0,  2.0,  0.0,     -2_120.0,       5_751.0],
    [0.0,  2.0,  0.0,  0.0,     -2_069.0,           0.0],
    [2.0, -2.0, -1.0,  0.0,      2_048.0,      -4_950.0],
    [2.0,  0.0,  1.0, -2.0,     -1_773.0,       4_130.0],
    [2.0,  0.0,  0.0,  2.0,     -1_595.0,           0.0],
    [4.0, -1.0, -1.0,  0.0,      1_215.0,      -3_958.0],
    [0.0,  0.0,  2.0,  2.0,     -1_110.0,           0.0],
    [3.0,  0.0, -1.0,  0.0,       -892.0,       3_258.0],
    [2.0,  1.0,  1.0,  0.0,       -810.0,       2_616.0],
    [4.0, -1.0, -2.0,  0.0,        759.0,      -1_897.0],
    [0.0,  2.0, -1.0,  0.0,       -713.0,      -2_117.0],
    [2.0,  2.0, -1.0,  0.0,       -700.0,       2_354.0],
    [2.0,  1.0, -2.0,  0.0,        691.0,           0.0],
    [2.0, -1.0,  0.0, -2.0,        596.0,           0.0],
    [4.0,  0.0,  1.0,  0.0,        549.0,      -1_423.0],
    [0.0,  0.0,  4.0,  0.0,        537.0,      -1_117.0],
    [4.0, -1.0,  0.0,  0.0,        520.0,      -1_571.0],
    [1.0,  0.0, -2.0,  0.0,       -487.0,      -1_739.0],
    [2.0,  1.0,  0.0, -2.0,       -399.0,           0.0],
    [0.0,  0.0,  2.0, -2.0,       -381.0,      -4_421.0],
    [1.0,  1.0,  1.0,  0.0,        351.0,           0.0],
    [3.0,  0.0, -2.0,  0.0,       -340.0,           0.0],
    [4.0,  0.0, -3.0,  0.0,        330.0,           0.0],
    [2.0, -1.0,  2.0,  0.0,        327.0,           0.0],
    [0.0,  2.0,  1.0,  0.0,       -323.0,       1_165.0],
    [1.0,  1.0, -1.0,  0.0,        299.0,           0.0],
    [2.0,  0.0,  3.0,  0.0,        294.0,           0.0],
    [2.0,  0.0, -1.0, -2.0,          0.0,       8_752.0],
];

/// Table 47.B: `[D, M, M', F, Σb coeff]`. Unit: 1e-6 deg.
#[rustfmt::skip]
static LATITUDE_TERMS: [[f64; 5]; 60] = [
    [0.0,  0.0,  0.0,  1.0, 5_128_122.0],
    [0.0,  0.0,  1.0,  1.0,   280_602.0],
    [0.0,  0.0,  1.0, -1.0,   277_693.0],
    [2.0,  0.0,  0.0, -1.0,   173_237.0],
    [2.0,  0.0, -1.0,  1.0,    55_413.0],
    [2.0,  0.0, -1.0, -1.0,    46_271.0],
    [2.0,  0.0,  0.0,  1.0,    32_573.0],
    [0.0,  0.0,  2.0,  1.0,    17_198.0],
    [2.0,  0.0,  1.0, -1.0,     9_266.0],
    [0.0,  0.0,  2.0, -1.0,     8_822.0],
    [2.0, -1.0,  0.0, -1.0,     8_216.0],
    [2.0,  0.0, -2.0, -1.0,     4_324.0],
    [2.0,  0.0,  1.0,  1.0,     4_200.0],
    [2.0,  1.0,  0.0, -1.0,    -3_359.0],
    [2.0, -1.0, -1.0,  1.0,     2_463.0],
    [2.0, -1.0,  0.0,  1.0,     2_211.0],
    [2.0, -1.0, -1.0, -1.0,     2_065.0],
    [0.0,  1.0, -1.0, -1.0,    -1_870.0],
    [4.0,  0.0, -1.0, -1.0,     1_828.0],
    [0.0,  1.0,  0.0,  1.0,    -1_794.0],
    [0.0,  0.0,  0.0,  3.0,    -1_749.0],
    [0.0,  1.0, -1.0,  1.0,    -1_565.0],
    [1.0,  0.0,  0.0,  1.0,    -1_491.0],
    [0.0,  1.0,  1.0,  1.0,    -1_475.0],
    [0.0,  1.0,  1.0, -1.0,    -1_410.0],
    [0.0,  1.0,  0.0, -1.0,    -1_344.0],
    [1.0,  0.0,  0.0, -1.0,    -1_335.0],
    [0.0,  0.0,  3.0,  1.0,     1_107.0],
    [4.0,  0.0,  0.0, -1.0,     1_021.0],
    [4.0,  0.0, -1.0,  1.0,       833.0],
    [0.0,  0.0,  1.0, -3.0,       777.0],
    [4.0,  0.0, -2.0,  1.0,       671.0],
    [2.0,  0.0,  0.0, -3.0,       607.0],
    [2.0,  0.0,  2.0, -1.0,       596.0],
    [2.0, -1.0,  1.0, -1.0,       491.0],
    [2.0,  0.0, -2.0,  1.0,      -451.0],
    [0.0,  0.0,  3.0, -1.0,       439.0],
    [2.0,  0.0,  2.0,  1.0,       422.0],
    [2.0,  0.0, -3.0, -1.0,       421.0],
    [2.0,  1.0, -1.0,  1.0,      -366.0],
    [2.0,  1.0,  0.0,  1.0,      -351.0],
    [4.0,  0.0,  0.0,  1.0,       331.0],
    [2.0, -1.0,  1.0,  1.0,       315.0],
    [2.0, -2.0,  0.0, -1.0,       302.0],
    [0.0,  0.0,  1.0,  3.0,      -283.0],
    [2.0,  1.0,  1.0, -1.0,      -229.0],
    [1.0,  1.0,  0.0, -1.0,       223.0],
    [1.0,  1.0,  0.0,  1.0,       223.0],
    [0.0,  1.0, -2.0, -1.0,      -220.0],
    [2.0,  1.0, -1.0, -1.0,      -220.0],
    [1.0,  0.0,  1.0,  1.0,      -185.0],
    [2.0, -1.0, -2.0, -1.0,       181.0],
    [0.0,  1.0,  2.0,  1.0,      -177.0],
    [4.0,  0.0, -2.0, -1.0,       176.0],
    [4.0, -1.0, -1.0, -1.0,       166.0],
    [1.0,  0.0,  1.0, -1.0,      -164.0],
    [4.0,  0.0,  1.0, -1.0,       132.0],
    [1.0,  0.0, -1.0, -1.0,      -119.0],
    [4.0, -1.0,  0.0, -1.0,       115.0],
    [2.0, -2.0,  0.0,  1.0,       107.0],
];

/// Geometric lunar coordinates, `t` in Julian centuries (TT).
pub fn moon_position(t: f64) -> LunarCoords {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    let a3 = 313.45 + 481_266.484 * t;
    // Eccentricity of Earth's orbit scales terms containing M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let eccentricity_factor = |m_mult: f64| match m_mult.abs() as u8 {
        0 => 1.0,
        1 => e,
        _ => e * e,
    };

    let mut sum_l = 0.0_f64;
    let mut sum_r = 0.0_f64;
    for row in &LONGITUDE_DISTANCE_TERMS {
        let arg = (row[0] * d + row[1] * m + row[2] * mp + row[3] * f).to_radians();
        let ef = eccentricity_factor(row[1]);
        sum_l += row[4] * ef * arg.sin();
        sum_r += row[5] * ef * arg.cos();
    }

    let mut sum_b = 0.0_f64;
    for row in &LATITUDE_TERMS {
        let arg = (row[0] * d + row[1] * m + row[2] * mp + row[3] * f).to_radians();
        sum_b += row[4] * eccentricity_factor(row[1]) * arg.sin();
    }

    let sind = |deg: f64| deg.to_radians().sin();
    sum_l += 3958.0 * sind(a1) + 1962.0 * sind(lp - f) + 318.0 * sind(a2);
    sum_b += -2235.0 * sind(lp) + 382.0 * sind(a3) + 175.0 * sind(a1 - f) + 175.0 * sind(a1 + f)
        + 127.0 * sind(lp - mp)
        - 115.0 * sind(lp + mp);

    LunarCoords {
        longitude_deg: normalize_deg(lp + sum_l / 1_000_000.0),
        latitude_deg: sum_b / 1_000_000.0,
        distance_km: 385_000.56 + sum_r / 1000.0,
    }
}
