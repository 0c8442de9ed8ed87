//! Built-in analytical ephemeris.

use kundali_frames::nutation;
use kundali_time::{jd_ut_to_jde, julian_centuries};
use log::trace;

use crate::backend::{EclipticPosition, Ephemeris};
use crate::body::Body;
use crate::error::EphemError;
use crate::lunar::moon_position;
use crate::nodes::{NodeMode, rahu_deg};
use crate::planetary::geocentric;
use crate::solar::{sun_apparent_longitude_deg, sun_geometric};
use crate::{AU_KM, normalize_deg};

/// Beyond ±10 centuries from J2000 the truncated series are meaningless.
const MAX_ABS_CENTURIES: f64 = 10.0;

/// Truncated-series ephemeris (Meeus).
///
/// Sun ~0.01°, Moon ~0.003°, planets a few arcminutes over 1800–2100.
/// All longitudes are apparent: nutation is applied to every body and
/// aberration to the Sun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesEphemeris {
    node_mode: NodeMode,
}

impl SeriesEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_mode(node_mode: NodeMode) -> Self {
        Self { node_mode }
    }

    pub fn node_mode(&self) -> NodeMode {
        self.node_mode
    }
}

impl Ephemeris for SeriesEphemeris {
    fn position(&self, jd_ut: f64, body: Body) -> Result<EclipticPosition, EphemError> {
        if !jd_ut.is_finite() {
            return Err(EphemError::EpochOutOfRange { jd: jd_ut });
        }
        let t = julian_centuries(jd_ut_to_jde(jd_ut));
        if t.abs() > MAX_ABS_CENTURIES {
            return Err(EphemError::EpochOutOfRange { jd: jd_ut });
        }

        let pos = match body {
            Body::Rahu | Body::Ketu => {
                let rahu = rahu_deg(t, self.node_mode);
                let lon = if body == Body::Ketu {
                    normalize_deg(rahu + 180.0)
                } else {
                    rahu
                };
                EclipticPosition {
                    longitude_deg: lon,
                    latitude_deg: Some(0.0),
                    distance_au: None,
                }
            }
            Body::Sun => {
                let dpsi = nutation(t).longitude_deg;
                let sun = sun_geometric(t);
                EclipticPosition {
                    longitude_deg: sun_apparent_longitude_deg(&sun, dpsi),
                    latitude_deg: Some(0.0),
                    distance_au: Some(sun.radius_au),
                }
            }
            Body::Moon => {
                let dpsi = nutation(t).longitude_deg;
                let moon = moon_position(t);
                EclipticPosition {
                    longitude_deg: normalize_deg(moon.longitude_deg + dpsi),
                    latitude_deg: Some(moon.latitude_deg),
                    distance_au: Some(moon.distance_km / AU_KM),
                }
            }
            Body::Mercury | Body::Venus | Body::Mars | Body::Jupiter | Body::Saturn => {
                let dpsi = nutation(t).longitude_deg;
                let earth_sun = sun_geometric(t);
                let (lon, lat, dist) = geocentric(body, t, &earth_sun)
                    .ok_or_else(|| EphemError::UnknownBody(body.name().to_string()))?;
                EclipticPosition {
                    longitude_deg: normalize_deg(lon + dpsi),
                    latitude_deg: Some(lat),
                    distance_au: Some(dist),
                }
            }
        };
        trace!("{body} at JD {jd_ut}: {:.6}°", pos.longitude_deg);
        Ok(pos)
    }

    fn describe(&self) -> &'static str {
        match self.node_mode {
            NodeMode::Mean => "series (Meeus truncated theories, mean node)",
            NodeMode::True => "series (Meeus truncated theories, true node)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::ALL_BODIES;

    #[test]
    fn rejects_far_epochs() {
        let eph = SeriesEphemeris::new();
        assert!(matches!(
            eph.position(1_000_000.0, Body::Sun),
            Err(EphemError::EpochOutOfRange { .. })
        ));
        assert!(eph.position(f64::NAN, Body::Moon).is_err());
    }

    #[test]
    fn all_longitudes_normalized() {
        let eph = SeriesEphemeris::new();
        for i in 0..50 {
            let jd = 2_415_020.5 + i as f64 * 1_461.37;
            for body in ALL_BODIES {
                let lon = eph.longitude_deg(jd, body).unwrap();
                assert!((0.0..360.0).contains(&lon), "{body} at {jd}: {lon}");
            }
        }
    }

    #[test]
    fn nodes_have_no_distance() {
        let eph = SeriesEphemeris::new();
        let rahu = eph.position(2_451_545.0, Body::Rahu).unwrap();
        assert_eq!(rahu.latitude_deg, Some(0.0));
        assert_eq!(rahu.distance_au, None);
    }

    #[test]
    fn moon_distance_in_au() {
        let eph = SeriesEphemeris::new();
        let d = eph.position(2_451_545.0, Body::Moon).unwrap().distance_au.unwrap();
        assert!((0.0023..0.0028).contains(&d));
    }

    #[test]
    fn node_mode_is_reported() {
        assert!(SeriesEphemeris::new().describe().contains("mean"));
        assert!(SeriesEphemeris::with_node_mode(NodeMode::True).describe().contains("true"));
    }
}
