//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Given a sidereal longitude, we identify which rashi the point falls in
//! and express the position as degrees-minutes-seconds within that sign.

use crate::util::{normalize_360, segment_index};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Sign modality, which fixes the Navamsha starting sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    /// Chara: Mesha, Karka, Tula, Makara.
    Movable,
    /// Sthira: Vrishabha, Simha, Vrischika, Kumbha.
    Fixed,
    /// Dwiswabhava: Mithuna, Kanya, Dhanu, Meena.
    Dual,
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Odd signs (1-based) are Mesha, Mithuna, Simha, …
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    /// `D°M'S.f"`, seconds to one decimal place.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{}'{:.1}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value. Seconds are carried
/// into minutes (and minutes into degrees) when they would print as 60.0.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let mut degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let mut minutes = remainder.floor() as u8;
    let mut seconds = (remainder - minutes as f64) * 60.0;
    if seconds >= 59.95 {
        seconds = 0.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes = 0;
        degrees += 1;
    }
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_idx = segment_index(lon, 30.0, 12);
    let degrees_in_rashi = (lon - rashi_idx as f64 * 30.0).max(0.0);
    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        dms: dms_within_sign(degrees_in_rashi),
        degrees_in_rashi,
    }
}

/// DMS of a position inside a sign; a carry never rolls over to 30°.
fn dms_within_sign(degrees_in_rashi: f64) -> Dms {
    let dms = deg_to_dms(degrees_in_rashi);
    if dms.degrees < 30 {
        return dms;
    }
    Dms {
        degrees: 29,
        minutes: 59,
        seconds: 59.9,
    }
}

/// Format the position within its sign as `D°M'S.f"`.
pub fn format_degrees_in_sign(sidereal_lon_deg: f64) -> String {
    rashi_from_longitude(sidereal_lon_deg).dms.to_string()
}
