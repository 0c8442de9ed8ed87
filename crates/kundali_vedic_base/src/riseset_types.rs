//! Types for sunrise/sunset calculations.
//!
//! Provides geographic location, event types, configuration, and result types
//! used by the rise/set computation module.

use std::f64::consts::PI;

use crate::error::VedicError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a validated geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(VedicError::InvalidLocation("longitude must be within [-180, 180]"));
        }
        if !altitude_m.is_finite() {
            return Err(VedicError::InvalidLocation("altitude must be finite"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Rise/set event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Sunrise: upper limb of the Sun at the horizon, accounting for
    /// atmospheric refraction and solar semidiameter.
    Sunrise,
    /// Sunset: upper limb disappears below the horizon.
    Sunset,
}

impl RiseSetEvent {
    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip correction for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
    /// Refinement iterations allowed before giving up. Default: 10.
    pub max_iterations: u32,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
            max_iterations: 10,
        }
    }
}

impl RiseSetConfig {
    /// Total horizon depression for sunrise/sunset in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad * (180.0 / PI)
        } else {
            base
        }
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Day (UT).
    Event { jd_ut: f64, event: RiseSetEvent },
    /// Sun never rises during this solar day (polar night).
    NeverRises,
    /// Sun never sets during this solar day (midnight sun).
    NeverSets,
}

/// Sunrise, sunset and transit for one civil day, all JD (UT).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise_jd: f64,
    pub sunset_jd: f64,
    /// Upper meridian transit of the Sun.
    pub solar_noon_jd: f64,
}

impl SunTimes {
    /// Length of daylight in days.
    pub fn day_length_days(&self) -> f64 {
        self.sunset_jd - self.sunrise_jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_rising_correct() {
        assert!(RiseSetEvent::Sunrise.is_rising());
        assert!(!RiseSetEvent::Sunset.is_rising());
    }

    #[test]
    fn default_config() {
        let c = RiseSetConfig::default();
        assert_eq!(c.refraction_arcmin, 34.0);
        assert_eq!(c.semidiameter_arcmin, 16.0);
        assert!(c.altitude_correction);
        assert_eq!(c.max_iterations, 10);
    }

    #[test]
    fn depression_sea_level() {
        let d = RiseSetConfig::default().horizon_depression_deg(0.0);
        assert!((d - 0.8333).abs() < 0.001, "sunrise depression = {d}");
    }

    #[test]
    fn depression_with_altitude() {
        let c = RiseSetConfig::default();
        let d = c.horizon_depression_deg(1000.0);
        // dip at 1 km ≈ 1.02°
        assert!((d - 0.8333 - 1.015).abs() < 0.01, "depression at 1 km = {d}");
        let flat = RiseSetConfig {
            altitude_correction: false,
            ..c
        };
        assert_eq!(flat.horizon_depression_deg(1000.0), flat.horizon_depression_deg(0.0));
    }

    #[test]
    fn location_validation() {
        assert!(GeoLocation::new(28.6139, 77.2090, 0.0).is_ok());
        assert!(GeoLocation::new(90.0, -180.0, 0.0).is_ok());
        assert_eq!(
            GeoLocation::new(91.0, 0.0, 0.0),
            Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"))
        );
        assert!(GeoLocation::new(0.0, 181.0, 0.0).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0, 0.0).is_err());
    }
}
