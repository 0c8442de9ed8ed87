//! Nakshatra (lunar mansion) and pada computation.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of 3 deg 20'.

use crate::util::{normalize_360, segment_index};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati (uniform 13 deg 20' each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vimshottari lord index: nakshatras cycle through the nine lords three times.
    pub const fn lord_cycle_index(self) -> u8 {
        self.index() % 9
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
    /// Share of the nakshatra already traversed, percent [0, 100).
    pub elapsed_pct: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
///
/// Lower bounds are inclusive and upper bounds exclusive, for both the
/// nakshatra and its padas.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = segment_index(lon, NAKSHATRA_SPAN_27, 27);
    let degrees_in_nakshatra = (lon - nak_idx as f64 * NAKSHATRA_SPAN_27).max(0.0);
    let pada_idx = segment_index(degrees_in_nakshatra, PADA_SPAN, 4);
    let degrees_in_pada = (degrees_in_nakshatra - pada_idx as f64 * PADA_SPAN).max(0.0);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
        elapsed_pct: degrees_in_nakshatra / NAKSHATRA_SPAN_27 * 100.0,
    }
}
