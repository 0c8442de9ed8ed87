//! Sunrise/sunset computation.
//!
//! Iterative algorithm based on standard spherical astronomy formulas.
//! Computes the time when the Sun's geocentric altitude equals the target
//! depression angle, for a given observer location and date.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 15; USNO
//! sunrise/sunset algorithm.

use kundali_ephem::{Body, Ephemeris};
use kundali_frames::ecliptic_to_equatorial_deg;
use log::debug;

use crate::error::VedicError;
use crate::lagna::{local_apparent_sidereal_time_deg, obliquity_of_date_deg};
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SunTimes};
use crate::util::wrap_180;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Hour angle advance in degrees per day of UT.
const SIDEREAL_RATE_DEG: f64 = 360.0 * 1.002_737_811_911_354_6;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Sun's apparent right ascension and declination in degrees at `jd_ut`.
fn sun_ra_dec_deg<E: Ephemeris + ?Sized>(eph: &E, jd_ut: f64) -> Result<(f64, f64), VedicError> {
    let pos = eph.position(jd_ut, Body::Sun)?;
    let eps = obliquity_of_date_deg(jd_ut);
    Ok(ecliptic_to_equatorial_deg(
        pos.longitude_deg,
        pos.latitude_deg.unwrap_or(0.0),
        eps,
    ))
}

/// Local hour angle of the Sun in degrees, (-180, 180].
fn sun_hour_angle_deg<E: Ephemeris + ?Sized>(
    eph: &E,
    location: &GeoLocation,
    jd_ut: f64,
) -> Result<(f64, f64), VedicError> {
    let (ra, dec) = sun_ra_dec_deg(eph, jd_ut)?;
    let lst = local_apparent_sidereal_time_deg(jd_ut, location.longitude_deg);
    Ok((wrap_180(lst - ra), dec))
}

/// Cosine of the hour angle at which the Sun's centre reaches altitude `h0`.
fn cos_hour_angle(h0_deg: f64, latitude_deg: f64, dec_deg: f64) -> f64 {
    let (h0, phi, dec) = (
        h0_deg.to_radians(),
        latitude_deg.to_radians(),
        dec_deg.to_radians(),
    );
    (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Upper meridian transit of the Sun nearest `jd_ut_noon`.
pub fn solar_transit_jd<E: Ephemeris + ?Sized>(
    eph: &E,
    location: &GeoLocation,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<f64, VedicError> {
    let mut jd = jd_ut_noon;
    for _ in 0..config.max_iterations {
        let (ha, _) = sun_hour_angle_deg(eph, location, jd)?;
        let correction = -ha / SIDEREAL_RATE_DEG;
        jd += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            return Ok(jd);
        }
    }
    Err(VedicError::NonConvergence("solar transit exceeded iteration cap"))
}

/// Compute a single rise/set event for the Sun.
///
/// # Arguments
/// * `eph`: ephemeris backend for the Sun's position
/// * `location`: observer geographic location
/// * `event`: sunrise or sunset
/// * `jd_ut_noon`: approximate local noon on the desired date (UT JD).
///   Use [`approximate_local_noon_jd`] to compute from calendar date + longitude.
/// * `config`: refraction, limb, altitude and iteration parameters
///
/// # Returns
/// * `RiseSetResult::Event` with the event time in JD UT
/// * `RiseSetResult::NeverRises` if the Sun stays below the horizon (polar night)
/// * `RiseSetResult::NeverSets` if the Sun stays above the horizon (midnight sun)
///
/// Fails with [`VedicError::NonConvergence`] if the refinement does not
/// settle within `config.max_iterations`.
pub fn compute_rise_set<E: Ephemeris + ?Sized>(
    eph: &E,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, VedicError> {
    let phi = location.latitude_deg;
    let h0_deg = -config.horizon_depression_deg(location.altitude_m);

    let (ha_noon, dec) = sun_hour_angle_deg(eph, location, jd_ut_noon)?;
    let cos_h0 = cos_hour_angle(h0_deg, phi, dec);
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    // Transit time (when HA = 0): correct noon by the offset.
    let jd_transit = jd_ut_noon - ha_noon / SIDEREAL_RATE_DEG;
    let h0_days = cos_h0.acos().to_degrees() / SIDEREAL_RATE_DEG;
    let mut jd_event = if event.is_rising() {
        jd_transit - h0_days
    } else {
        jd_transit + h0_days
    };

    for iteration in 0..config.max_iterations {
        let (ha_actual, dec_i) = sun_hour_angle_deg(eph, location, jd_event)?;
        let cos_h_i = cos_hour_angle(h0_deg, phi, dec_i);
        if cos_h_i > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h_i < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let h_target = cos_h_i.acos().to_degrees();

        // For rising events, target HA is negative; for setting, positive.
        let ha_target = if event.is_rising() { -h_target } else { h_target };
        let correction = wrap_180(ha_target - ha_actual) / SIDEREAL_RATE_DEG;
        jd_event += correction;

        if correction.abs() < CONVERGENCE_DAYS {
            debug!("{event:?} converged after {} iterations: JD {jd_event:.6}", iteration + 1);
            return Ok(RiseSetResult::Event {
                jd_ut: jd_event,
                event,
            });
        }
    }
    Err(VedicError::NonConvergence(
        "sunrise/sunset refinement exceeded iteration cap",
    ))
}

/// Sunrise, sunset and solar noon around `jd_ut_local_noon`.
///
/// Polar day and polar night have no event to return and are reported as
/// [`VedicError::NonConvergence`].
pub fn sun_times<E: Ephemeris + ?Sized>(
    eph: &E,
    location: &GeoLocation,
    jd_ut_local_noon: f64,
    config: &RiseSetConfig,
) -> Result<SunTimes, VedicError> {
    let event_jd = |event: RiseSetEvent| -> Result<f64, VedicError> {
        match compute_rise_set(eph, location, event, jd_ut_local_noon, config)? {
            RiseSetResult::Event { jd_ut, .. } => Ok(jd_ut),
            RiseSetResult::NeverRises => Err(VedicError::NonConvergence(
                "sun never rises on this date at this latitude",
            )),
            RiseSetResult::NeverSets => Err(VedicError::NonConvergence(
                "sun never sets on this date at this latitude",
            )),
        }
    };
    let sunrise_jd = event_jd(RiseSetEvent::Sunrise)?;
    let sunset_jd = event_jd(RiseSetEvent::Sunset)?;
    let solar_noon_jd = solar_transit_jd(eph, location, jd_ut_local_noon, config)?;
    Ok(SunTimes {
        sunrise_jd,
        sunset_jd,
        solar_noon_jd,
    })
}
