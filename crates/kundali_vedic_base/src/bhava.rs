//! Bhava (house) system computation for 4 house division methods.
//!
//! Implements Whole Sign, Equal, Placidus and Koch. Cusps are computed in
//! the tropical frame of date and shifted to the sidereal zodiac at the end.
//!
//! Sources: Meeus Ch. 13-14 (Ascendant, MC); Placidus semi-arc trisection
//! solved by fixed-point iteration on right ascension; Koch (1971) closed
//! form in oblique ascension of the MC's ascensional difference.

use log::debug;

use crate::bhava_types::{Bhava, BhavaInput, BhavaResult, BhavaSystem};
use crate::error::VedicError;
use crate::lagna::{
    ascendant_deg, ascendant_from_oblique_ascension_deg, ecliptic_declination_deg,
    ecliptic_longitude_of_ra_deg, midheaven_deg, rising_point_deg,
};
use crate::util::{arc_forward, normalize_360, segment_index};

/// Convergence threshold on right ascension for Placidus cusps.
const PLACIDUS_TOLERANCE_DEG: f64 = 1e-9;

/// Iteration cap for Placidus cusps.
const PLACIDUS_MAX_ITER: usize = 50;

/// Compute bhava cusps for the given input.
///
/// Whole Sign and Equal are defined everywhere. Placidus and Koch fail with
/// [`VedicError::HouseSystemUndefined`] when |latitude| >= 90° − ε, where
/// some ecliptic points never rise or set.
pub fn compute_bhavas(input: &BhavaInput) -> Result<BhavaResult, VedicError> {
    let ramc = normalize_360(input.lst_deg);
    let eps = input.obliquity_deg;
    let lat = input.latitude_deg;

    let asc = ascendant_deg(ramc, eps, lat);
    let rising = rising_point_deg(ramc, eps, lat);
    let mc = midheaven_deg(ramc, eps);
    // Lagna on the western horizon: quadrant cusps are counted from it.
    let from_west = arc_forward(rising, asc).min(arc_forward(asc, rising)) > 90.0;
    let sid_asc = normalize_360(asc - input.ayanamsha_deg);
    let sid_mc = normalize_360(mc - input.ayanamsha_deg);

    let cusps = match input.system {
        BhavaSystem::WholeSign => compute_whole_sign(sid_asc),
        BhavaSystem::Equal => compute_equal(sid_asc),
        BhavaSystem::Placidus => {
            check_latitude(lat, eps)?;
            let cusps = compute_placidus(rising, mc, ramc, lat, eps)?;
            to_sidereal(oriented(cusps, from_west), input.ayanamsha_deg)
        }
        BhavaSystem::Koch => {
            check_latitude(lat, eps)?;
            let cusps = compute_koch(rising, mc, ramc, lat, eps);
            to_sidereal(oriented(cusps, from_west), input.ayanamsha_deg)
        }
    };
    debug!(
        "{} houses: RAMC {ramc:.4}°, Asc {asc:.4}° (sidereal {sid_asc:.4}°)",
        input.system
    );

    Ok(BhavaResult {
        system: input.system,
        bhavas: build_bhavas(&cusps),
        lagna_deg: sid_asc,
        mc_deg: sid_mc,
        tropical_lagna_deg: asc,
        tropical_mc_deg: mc,
    })
}

/// House (1-12) containing a sidereal longitude.
///
/// House N spans [cusp N, cusp N+1) measured forward around the zodiac,
/// wrapping at 360°. Equivalently, N is the cusp with the shortest forward
/// arc to the point, so every longitude lands in exactly one house even
/// when a cusp set is degenerate.
pub fn house_of(longitude_deg: f64, cusps: &[f64; 12]) -> u8 {
    let mut best = 0;
    let mut best_arc = f64::INFINITY;
    for (i, &cusp) in cusps.iter().enumerate() {
        let arc = arc_forward(cusp, longitude_deg);
        if arc < best_arc {
            best_arc = arc;
            best = i;
        }
    }
    best as u8 + 1
}

/// Time-based systems need every ecliptic degree to rise and set.
fn check_latitude(lat: f64, eps: f64) -> Result<(), VedicError> {
    if lat.abs() >= 90.0 - eps {
        return Err(VedicError::HouseSystemUndefined(
            "latitude within the polar circle: ecliptic degrees exist that never rise",
        ));
    }
    Ok(())
}

/// Start the cusp list at the Lagna: when it is the western point, cusp 7
/// of the eastern-horizon layout becomes cusp 1.
fn oriented(mut cusps: [f64; 12], from_west: bool) -> [f64; 12] {
    if from_west {
        cusps.rotate_left(6);
    }
    cusps
}

fn to_sidereal(tropical: [f64; 12], ayanamsha_deg: f64) -> [f64; 12] {
    tropical.map(|c| normalize_360(c - ayanamsha_deg))
}

/// Whole sign: cusp 1 is 0° of the sign holding the (sidereal) Lagna.
fn compute_whole_sign(sid_asc: f64) -> [f64; 12] {
    compute_equal(segment_index(sid_asc, 30.0, 12) as f64 * 30.0)
}

fn compute_equal(start_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(start_deg + i as f64 * 30.0);
    }
    cusps
}

/// Fill the angular cusps and mirror 11, 12, 2, 3 into 5, 6, 8, 9.
fn quadrant_cusps(asc: f64, mc: f64, c11: f64, c12: f64, c2: f64, c3: f64) -> [f64; 12] {
    [
        asc,
        c2,
        c3,
        normalize_360(mc + 180.0),
        normalize_360(c11 + 180.0),
        normalize_360(c12 + 180.0),
        normalize_360(asc + 180.0),
        normalize_360(c2 + 180.0),
        normalize_360(c3 + 180.0),
        mc,
        c11,
        c12,
    ]
}

/// Placidus: each intermediate cusp sits at one or two thirds of its own
/// semi-arc from the meridian.
///
/// Above the horizon: RA = RAMC + f·SA_d(δ), f = 1/3 (11), 2/3 (12).
/// Below the horizon: RA = RAMC + 180° − f·SA_n(δ), f = 2/3 (2), 1/3 (3).
fn compute_placidus(
    asc: f64,
    mc: f64,
    ramc: f64,
    lat: f64,
    eps: f64,
) -> Result<[f64; 12], VedicError> {
    let c11 = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, true)?;
    let c12 = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, true)?;
    let c2 = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, false)?;
    let c3 = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, false)?;
    Ok(quadrant_cusps(asc, mc, c11, c12, c2, c3))
}

/// Solve one Placidus cusp by fixed-point iteration on right ascension.
fn placidus_cusp(
    ramc: f64,
    lat: f64,
    eps: f64,
    fraction: f64,
    above_horizon: bool,
) -> Result<f64, VedicError> {
    let target = |ra: f64| {
        let lon = ecliptic_longitude_of_ra_deg(ra, eps);
        let dec = ecliptic_declination_deg(lon, eps);
        let diurnal = diurnal_semi_arc_deg(dec, lat);
        if above_horizon {
            ramc + fraction * diurnal
        } else {
            ramc + 180.0 - fraction * (180.0 - diurnal)
        }
    };

    // Equator start: every semi-arc is 90°.
    let mut ra = if above_horizon {
        ramc + fraction * 90.0
    } else {
        ramc + 180.0 - fraction * 90.0
    };
    for _ in 0..PLACIDUS_MAX_ITER {
        let next = target(ra);
        let delta = (next - ra + 180.0).rem_euclid(360.0) - 180.0;
        ra = next;
        if delta.abs() < PLACIDUS_TOLERANCE_DEG {
            return Ok(ecliptic_longitude_of_ra_deg(ra, eps));
        }
    }
    Err(VedicError::NonConvergence("placidus cusp iteration"))
}

/// Diurnal semi-arc in degrees: `acos(−tan δ tan φ)`.
///
/// Callers guarantee |φ| < 90° − ε, so the argument stays inside [−1, 1]
/// for every ecliptic declination; the clamp only absorbs rounding.
fn diurnal_semi_arc_deg(dec: f64, lat: f64) -> f64 {
    let cos_h = -(dec.to_radians().tan() * lat.to_radians().tan());
    cos_h.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Koch (birthplace): the MC's ascensional difference, trisected, fixes the
/// oblique ascensions of the intermediate cusps.
///
/// With `ad = asin(tan δ_MC tan φ)`:
/// OA(11) = RAMC + 30° − 2ad/3, OA(12) = RAMC + 60° − ad/3,
/// OA(2) = RAMC + 120° + ad/3, OA(3) = RAMC + 150° + 2ad/3.
fn compute_koch(asc: f64, mc: f64, ramc: f64, lat: f64, eps: f64) -> [f64; 12] {
    let dec_mc = ecliptic_declination_deg(mc, eps);
    let sin_ad = dec_mc.to_radians().tan() * lat.to_radians().tan();
    let ad = sin_ad.clamp(-1.0, 1.0).asin().to_degrees();

    let cusp = |oa: f64| ascendant_from_oblique_ascension_deg(oa, eps, lat);
    let c11 = cusp(ramc + 30.0 - 2.0 * ad / 3.0);
    let c12 = cusp(ramc + 60.0 - ad / 3.0);
    let c2 = cusp(ramc + 120.0 + ad / 3.0);
    let c3 = cusp(ramc + 150.0 + 2.0 * ad / 3.0);
    quadrant_cusps(asc, mc, c11, c12, c2, c3)
}

fn build_bhavas(cusps_deg: &[f64; 12]) -> [Bhava; 12] {
    std::array::from_fn(|i| Bhava {
        number: i as u8 + 1,
        cusp_deg: cusps_deg[i],
        end_deg: cusps_deg[(i + 1) % 12],
    })
}
