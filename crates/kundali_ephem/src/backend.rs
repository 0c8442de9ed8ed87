//! The ephemeris capability interface.

use crate::body::Body;
use crate::error::EphemError;

/// Geocentric ecliptic position referred to the true equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Tropical longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees, when the backend provides it.
    pub latitude_deg: Option<f64>,
    /// Geocentric distance in AU, when the backend provides it.
    pub distance_au: Option<f64>,
}

impl EclipticPosition {
    pub fn longitude_only(longitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg: None,
            distance_au: None,
        }
    }
}

/// A source of planetary positions.
///
/// Implementations must be pure: the same `(jd_ut, body)` always yields the
/// same position, and longitudes are normalized to [0, 360). Ketu must be
/// exactly Rahu + 180° (normalized).
pub trait Ephemeris {
    /// Position of `body` at Julian Day `jd_ut` (Universal Time).
    fn position(&self, jd_ut: f64, body: Body) -> Result<EclipticPosition, EphemError>;

    /// Tropical longitude only.
    fn longitude_deg(&self, jd_ut: f64, body: Body) -> Result<f64, EphemError> {
        Ok(self.position(jd_ut, body)?.longitude_deg)
    }

    /// Short human-readable name and accuracy statement.
    fn describe(&self) -> &'static str;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn position(&self, jd_ut: f64, body: Body) -> Result<EclipticPosition, EphemError> {
        (**self).position(jd_ut, body)
    }

    fn describe(&self) -> &'static str {
        (**self).describe()
    }
}
