//! Types for panchang classification results.
//!
//! Tithi, Karana, Yoga, Vaar and Rahu Kala, plus the combined daily
//! [`PanchangInfo`]. Times are Julian Days (UT).

use crate::ayanamsha::AyanamshaSystem;
use crate::nakshatra::NakshatraInfo;
use crate::riseset_types::{GeoLocation, RiseSetConfig, SunTimes};

/// Angular width of one tithi in degrees of Moon−Sun elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Angular width of one karana (half tithi) in degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Angular width of one yoga in degrees of Sun+Moon longitude.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// Tithi names by 0-based index; Shukla paksha first.
pub const TITHI_NAMES: [&str; 30] = [
    "Pratipada",
    "Dvitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dvadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
    "Pratipada",
    "Dvitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dvadashi",
    "Trayodashi",
    "Chaturdashi",
    "Amavasya",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half: tithis 1-15.
    Shukla,
    /// Waning half: tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 27 luni-solar yogas, from Vishkumbha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Vishkumbha,
    Preeti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order.
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Preeti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbha => "Vishkumbha",
            Self::Preeti => "Preeti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyana => "Variyana",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (Vishkumbha=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// The 11 karanas: 7 movable (chara) followed by 4 fixed (sthira).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garija,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Nagava,
    Kimstughna,
}

/// All 11 karanas, movable first.
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garija,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Nagava,
    Karana::Kimstughna,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garija => "Garija",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Nagava => "Nagava",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether the karana recurs through the month (the 7 chara karanas).
    pub const fn is_movable(self) -> bool {
        (self as u8) < 7
    }
}

/// Weekday, 0 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All 7 vaars from Sunday.
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    /// English weekday name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0-based index, Sunday = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based eighth of daylight ruled by Rahu on this weekday.
    pub const fn rahu_kala_slot(self) -> u8 {
        match self {
            Self::Ravivaar => 8,
            Self::Somvaar => 2,
            Self::Mangalvaar => 7,
            Self::Budhvaar => 5,
            Self::Guruvaar => 6,
            Self::Shukravaar => 4,
            Self::Shanivaar => 3,
        }
    }
}

/// Tithi (lunar day) classification result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// 0-based tithi index (0..29).
    pub tithi_index: u8,
    /// Tithi name, e.g. "Ekadashi".
    pub name: &'static str,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Percent of the 12° segment already covered, [0, 100).
    pub elapsed_pct: f64,
}

/// Karana (half-tithi) classification result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    /// The karana name.
    pub karana: Karana,
    /// 0-based karana sequence index within the synodic month (0..59).
    pub karana_index: u8,
    /// Percent of the 6° segment already covered, [0, 100).
    pub elapsed_pct: f64,
}

/// Yoga (luni-solar yoga) classification result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    /// The yoga.
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
    /// Percent of the 13°20' segment already covered, [0, 100).
    pub elapsed_pct: f64,
}

/// Rahu Kala window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RahuKala {
    /// 1-based eighth of daylight (1-8).
    pub slot: u8,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Inputs for a full panchang.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangInput {
    /// Moment of interest, JD (UT).
    pub jd_ut: f64,
    /// Civil time zone offset in hours east of UTC; fixes the local date.
    pub tz_offset_hours: f64,
    pub location: GeoLocation,
    pub ayanamsha: AyanamshaSystem,
    pub riseset: RiseSetConfig,
}

/// Combined panchang for a single moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangInfo {
    /// Vaar (weekday of the local civil date).
    pub vaar: Vaar,
    /// Tithi (lunar day).
    pub tithi: TithiInfo,
    /// Moon's nakshatra.
    pub nakshatra: NakshatraInfo,
    /// Yoga (luni-solar yoga).
    pub yoga: YogaInfo,
    /// Karana (half-tithi).
    pub karana: KaranaInfo,
    /// Sunrise, sunset and solar noon of the local civil date.
    pub sun_times: SunTimes,
    pub rahu_kala: RahuKala,
    /// Sidereal longitudes the elements were derived from.
    pub sun_sidereal_deg: f64,
    pub moon_sidereal_deg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tithi_names_close_each_paksha() {
        assert_eq!(TITHI_NAMES[14], "Purnima");
        assert_eq!(TITHI_NAMES[29], "Amavasya");
        assert_eq!(TITHI_NAMES[0], TITHI_NAMES[15]);
    }

    #[test]
    fn yoga_order() {
        assert_eq!(ALL_YOGAS.len(), 27);
        for (i, y) in ALL_YOGAS.iter().enumerate() {
            assert_eq!(y.index() as usize, i);
        }
        assert_eq!(ALL_YOGAS[26].name(), "Vaidhriti");
    }

    #[test]
    fn karana_partition() {
        assert_eq!(ALL_KARANAS.iter().filter(|k| k.is_movable()).count(), 7);
        assert!(!Karana::Kimstughna.is_movable());
        assert!(Karana::Vishti.is_movable());
    }

    #[test]
    fn rahu_kala_slots_are_distinct() {
        let mut slots: Vec<u8> = ALL_VAARS.iter().map(|v| v.rahu_kala_slot()).collect();
        slots.sort_unstable();
        assert_eq!(slots, vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Vaar::Ravivaar.english_name(), "Sunday");
    }
}
