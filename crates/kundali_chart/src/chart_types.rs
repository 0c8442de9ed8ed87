//! Serializable chart output.
//!
//! Field names are the JSON keys. Angles are degrees; every instant is
//! reported as a Julian Day (UT) together with local civil time.

use serde::ser::{Serialize, SerializeMap, Serializer};

use kundali_time::CivilTime;

/// Keyed entries that serialize as a JSON object in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(&'static str, V)>);

impl<V> OrderedMap<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// An instant as JD (UT) and local ISO-8601 time.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Instant {
    pub jd: f64,
    pub local: String,
}

impl Instant {
    pub fn new(jd_ut: f64, tz_offset_hours: f64) -> Self {
        Self {
            jd: jd_ut,
            local: CivilTime::from_jd_ut(jd_ut, tz_offset_hours).to_string(),
        }
    }
}

/// Echo of the request that produced a chart.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct InputEcho {
    pub date: String,
    pub time: String,
    pub local_time: String,
    pub timezone_offset: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub house_system: &'static str,
    pub ayanamsa: &'static str,
    pub unknown_birth_time: bool,
}

/// Astronomical quantities shared by every section of the chart.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChartMeta {
    pub input: InputEcho,
    pub julian_day: f64,
    /// Centuries of dynamical time since J2000.0.
    pub julian_centuries: f64,
    pub delta_t_seconds: f64,
    /// True obliquity of the ecliptic.
    pub obliquity: f64,
    /// Nutation in longitude (Δψ).
    pub nutation_longitude: f64,
    /// Local apparent sidereal time.
    pub lst_degrees: f64,
    pub ayanamsha_value: f64,
    pub ephemeris: &'static str,
}

/// A sensitive point of the chart (Lagna or Midheaven).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PointEntry {
    pub sign: &'static str,
    pub rashi: &'static str,
    pub sidereal_longitude: f64,
    pub tropical_longitude: f64,
    pub degree_in_sign: f64,
    pub degree_formatted: String,
    pub nakshatra: &'static str,
    pub nakshatra_pada: u8,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlanetEntry {
    pub graha: &'static str,
    pub tropical_longitude: f64,
    pub sidereal_longitude: f64,
    /// Ecliptic latitude, when the ephemeris provides it.
    pub latitude: Option<f64>,
    /// Geocentric distance in AU, when the ephemeris provides it.
    pub distance_au: Option<f64>,
    pub sign: &'static str,
    pub rashi: &'static str,
    pub degree_in_sign: f64,
    pub degree_formatted: String,
    pub nakshatra: &'static str,
    pub nakshatra_pada: u8,
    /// House 1-12 under the selected house system.
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HouseEntry {
    pub house: u8,
    pub sidereal_longitude: f64,
    pub sign: &'static str,
    pub rashi: &'static str,
    pub degree_formatted: String,
    /// Lord of the cusp's sign.
    pub lord: &'static str,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TithiEntry {
    /// 1-30 from Shukla Pratipada.
    pub number: u8,
    pub name: &'static str,
    pub paksha: &'static str,
    pub number_in_paksha: u8,
    pub elapsed_pct: f64,
}

/// A named element of the panchang with its 1-based position in its cycle.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LimbEntry {
    pub number: u8,
    pub name: &'static str,
    pub elapsed_pct: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NakshatraLimbEntry {
    pub number: u8,
    pub name: &'static str,
    pub pada: u8,
    pub elapsed_pct: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RahuKalaEntry {
    /// Eighth of daylight, 1-8.
    pub slot: u8,
    pub start: Instant,
    pub end: Instant,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PanchangEntry {
    pub vaar: &'static str,
    pub weekday: &'static str,
    pub tithi: TithiEntry,
    pub nakshatra: NakshatraLimbEntry,
    pub yoga: LimbEntry,
    pub karana: LimbEntry,
    pub sunrise: Instant,
    pub sunset: Instant,
    pub solar_noon: Instant,
    pub rahu_kala: RahuKalaEntry,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PeriodEntry {
    pub lord: &'static str,
    pub start: Instant,
    pub end: Instant,
    pub years: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MahadashaEntry {
    #[serde(flatten)]
    pub period: PeriodEntry,
    pub antardashas: Vec<PeriodEntry>,
}

/// Active periods at the query moment.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CurrentDashaEntry {
    pub at: Instant,
    pub mahadasha: PeriodEntry,
    pub antardasha: PeriodEntry,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DashaEntry {
    pub system: &'static str,
    pub birth_nakshatra: &'static str,
    pub birth_lord: &'static str,
    /// Years of the first Mahadasha remaining after birth.
    pub balance_years: f64,
    /// `None` when the query moment lies outside the timeline.
    pub current: Option<CurrentDashaEntry>,
    pub periods: Vec<MahadashaEntry>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DivisionalEntry {
    pub sign: &'static str,
    pub rashi: &'static str,
    /// Degrees within the divisional sign.
    pub degree: f64,
}

/// A complete birth chart.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Chart {
    pub meta: ChartMeta,
    pub lagna: PointEntry,
    pub midheaven: PointEntry,
    pub moon_sign: &'static str,
    pub moon_nakshatra: &'static str,
    pub moon_nakshatra_pada: u8,
    /// Keyed by English graha name, Sun to Ketu.
    pub planets: OrderedMap<PlanetEntry>,
    pub houses: Vec<HouseEntry>,
    pub panchang: PanchangEntry,
    pub dasha: DashaEntry,
    /// Division code, then point name (grahas and "Lagna").
    pub divisional_charts: OrderedMap<OrderedMap<DivisionalEntry>>,
}

impl Chart {
    pub fn planet(&self, english_name: &str) -> Option<&PlanetEntry> {
        self.planets.get(english_name)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct UnknownTimeVariants {
    pub sunrise: Chart,
    pub noon: Chart,
    pub sunset: Chart,
}

/// Three candidate charts for a birth date without a time of day.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct UnknownTimeCharts {
    pub unknown_birth_time: bool,
    pub note: &'static str,
    pub date: String,
    pub timezone_offset: f64,
    pub variants: UnknownTimeVariants,
}

/// Where the Muntha falls in the annual chart.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MunthaEntry {
    pub sign: &'static str,
    pub rashi: &'static str,
    pub longitude: f64,
    pub lord: &'static str,
    pub annual_house: u8,
    pub natal_house: u8,
    pub in_good_house: bool,
}

/// Pancha-vargiya bala of one graha, in virupas.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BalaEntry {
    pub kshetra: f64,
    pub kshetra_dignity: &'static str,
    pub uccha: f64,
    pub hora: f64,
    pub dreshkana: f64,
    pub navamsha: f64,
    pub total: f64,
    pub strength: &'static str,
}

/// Lord of the year with its strength.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct VarsheshEntry {
    pub lord: &'static str,
    pub sign: &'static str,
    pub house: u8,
    pub bala: BalaEntry,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SahamEntry {
    pub meaning: &'static str,
    pub longitude: f64,
    pub sign: &'static str,
    pub degree_formatted: String,
    pub house: u8,
}

/// One Mudda dasha period; durations are in days.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MuddaEntry {
    pub lord: &'static str,
    pub start: Instant,
    pub end: Instant,
    pub days: f64,
}

/// Annual chart cast for the solar return in one year of life.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Varshphal {
    pub meta: ChartMeta,
    pub target_year: i32,
    /// Completed years since birth.
    pub years_elapsed: i32,
    pub solar_return: Instant,
    pub natal_sun_longitude: f64,
    pub is_day_chart: bool,
    pub lagna: PointEntry,
    pub planets: OrderedMap<PlanetEntry>,
    pub houses: Vec<HouseEntry>,
    pub muntha: MunthaEntry,
    pub varshesh: VarsheshEntry,
    pub pancha_vargiya_bala: OrderedMap<BalaEntry>,
    /// Keyed by saham name.
    pub sahams: OrderedMap<SahamEntry>,
    pub mudda_dasha: Vec<MuddaEntry>,
    /// `None` when the query moment lies outside the annual year.
    pub current_mudda: Option<MuddaEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_map_keeps_insertion_order() {
        let m = OrderedMap(vec![("Sun", 1), ("Moon", 2), ("Mars", 3)]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"Sun":1,"Moon":2,"Mars":3}"#);
        assert_eq!(m.get("Moon"), Some(&2));
        assert_eq!(m.get("Venus"), None);
        assert_eq!(m.keys().collect::<Vec<_>>(), ["Sun", "Moon", "Mars"]);
    }

    #[test]
    fn instant_renders_local_time() {
        let jd = CivilTime::new(1990, 6, 15, 10, 30, 0.0, 5.5).unwrap().to_jd_ut();
        let i = Instant::new(jd, 5.5);
        assert_eq!(i.local, "1990-06-15T10:30:00+05:30");
        assert_eq!(Instant::new(jd, 0.0).local, "1990-06-15T05:00:00+00:00");
    }

    #[test]
    fn flattened_mahadasha() {
        let p = PeriodEntry {
            lord: "Rahu",
            start: Instant::new(2_451_545.0, 0.0),
            end: Instant::new(2_451_546.0, 0.0),
            years: 1.0 / 365.25,
        };
        let m = MahadashaEntry {
            period: p,
            antardashas: Vec::new(),
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["lord"], "Rahu");
        assert_eq!(v["start"]["local"], "2000-01-01T12:00:00+00:00");
        assert!(v["antardashas"].as_array().unwrap().is_empty());
    }
}
