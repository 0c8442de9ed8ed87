//! Amsha (divisional chart / varga chart) calculations.
//!
//! Each amsha divides the 30-degree rashi span into N equal parts and maps
//! each part to a target rashi by a fixed table. The position inside the
//! part is stretched to 0-30 degrees within the target rashi.
//!
//! Implemented from the BPHS varga definitions for D1, D2, D3, D9, D10,
//! D12 and D60.

use std::str::FromStr;

use crate::error::VedicError;
use crate::rashi::{Modality, Rashi};
use crate::util::{normalize_360, segment_index};

/// Largest representable offset below the next rashi boundary.
const MAX_DEGREES_IN_RASHI: f64 = 30.0 - 1e-12;

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Amsha {
    /// Rashi chart (identity).
    D1,
    /// Hora.
    D2,
    /// Drekkana.
    D3,
    /// Navamsha.
    D9,
    /// Dashamsha.
    D10,
    /// Dwadashamsha.
    D12,
    /// Shashtyamsha.
    D60,
}

/// All supported amshas in ascending order.
pub const ALL_AMSHAS: [Amsha; 7] = [
    Amsha::D1,
    Amsha::D2,
    Amsha::D3,
    Amsha::D9,
    Amsha::D10,
    Amsha::D12,
    Amsha::D60,
];

impl Amsha {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u8 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D60 => 60,
        }
    }

    /// Code string, e.g. "D9".
    pub const fn code(self) -> &'static str {
        match self {
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3 => "D3",
            Self::D9 => "D9",
            Self::D10 => "D10",
            Self::D12 => "D12",
            Self::D60 => "D60",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D60 => "Shashtyamsha",
        }
    }

    pub const fn all() -> &'static [Amsha; 7] {
        &ALL_AMSHAS
    }
}

impl std::fmt::Display for Amsha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Amsha {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_AMSHAS
            .iter()
            .copied()
            .find(|a| a.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VedicError::UnknownDivision(s.to_string()))
    }
}

/// Position of a point in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmshaPosition {
    pub rashi: Rashi,
    /// Degrees within the target rashi, [0, 30).
    pub degrees_in_rashi: f64,
}

impl AmshaPosition {
    /// Equivalent longitude in the divisional zodiac, [0, 360).
    pub fn longitude_deg(&self) -> f64 {
        normalize_360(self.rashi.index() as f64 * 30.0 + self.degrees_in_rashi)
    }
}

/// Target rashi index for a natal rashi and a 0-based division index.
fn amsha_target_rashi(amsha: Amsha, natal: Rashi, div_idx: u8) -> u8 {
    let natal_idx = natal.index();
    let start = match amsha {
        Amsha::D1 => natal_idx,
        // Sun's hora (Simha) first in odd signs, Moon's (Karka) first in even.
        Amsha::D2 => {
            let (first, second) = if natal.is_odd() { (4, 3) } else { (3, 4) };
            return if div_idx == 0 { first } else { second };
        }
        // Trines: the sign, its 5th, its 9th.
        Amsha::D3 => return (natal_idx + div_idx * 4) % 12,
        // Movable: from itself; fixed: from its 9th; dual: from its 5th.
        Amsha::D9 => match natal.modality() {
            Modality::Movable => natal_idx,
            Modality::Fixed => natal_idx + 8,
            Modality::Dual => natal_idx + 4,
        },
        // Odd: from itself; even: from its 9th.
        Amsha::D10 => {
            if natal.is_odd() {
                natal_idx
            } else {
                natal_idx + 8
            }
        }
        Amsha::D12 | Amsha::D60 => natal_idx,
    };
    ((start as u16 + div_idx as u16) % 12) as u8
}

/// Full divisional position of a sidereal longitude.
pub fn amsha_position(sidereal_lon: f64, amsha: Amsha) -> AmshaPosition {
    let lon = normalize_360(sidereal_lon);
    let natal_idx = segment_index(lon, 30.0, 12);
    let pos_in_rashi = (lon - natal_idx as f64 * 30.0).max(0.0);

    let divisions = amsha.divisions();
    let deg_per_div = 30.0 / divisions as f64;
    let div_idx = segment_index(pos_in_rashi, deg_per_div, divisions);

    let target = amsha_target_rashi(amsha, Rashi::from_index(natal_idx), div_idx);
    let pos_in_div = (pos_in_rashi - div_idx as f64 * deg_per_div).max(0.0);
    let mut degrees_in_rashi = pos_in_div / deg_per_div * 30.0;
    if degrees_in_rashi >= 30.0 {
        degrees_in_rashi = MAX_DEGREES_IN_RASHI;
    }
    AmshaPosition {
        rashi: Rashi::from_index(target),
        degrees_in_rashi,
    }
}

/// Rashi occupied in the divisional chart.
pub fn amsha_rashi(sidereal_lon: f64, amsha: Amsha) -> Rashi {
    amsha_position(sidereal_lon, amsha).rashi
}
