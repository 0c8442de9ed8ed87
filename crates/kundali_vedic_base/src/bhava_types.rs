//! Types for bhava (house) system computation.
//!
//! Provides the house-system selector, the computation input and the
//! result types used by the bhava computation module.

use std::str::FromStr;

use crate::error::VedicError;

/// The 4 supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BhavaSystem {
    /// Whole sign: house 1 is the sign holding the Lagna, from its 0°.
    #[default]
    WholeSign,
    /// Equal houses: each house spans exactly 30 degrees from the Lagna.
    Equal,
    /// Placidus: trisection of each cusp's own diurnal/nocturnal semi-arc.
    Placidus,
    /// Koch (birthplace): trisection of the MC's semi-arc in oblique ascension.
    Koch,
}

/// All 4 bhava systems in enum order.
pub const ALL_BHAVA_SYSTEMS: [BhavaSystem; 4] = [
    BhavaSystem::WholeSign,
    BhavaSystem::Equal,
    BhavaSystem::Placidus,
    BhavaSystem::Koch,
];

impl BhavaSystem {
    /// All defined bhava systems.
    pub const fn all() -> &'static [BhavaSystem] {
        &ALL_BHAVA_SYSTEMS
    }

    /// Whether this system depends on geographic latitude.
    ///
    /// Latitude-dependent systems are undefined for |lat| >= 90° − ε.
    pub const fn latitude_dependent(self) -> bool {
        matches!(self, Self::Placidus | Self::Koch)
    }

    /// Canonical snake_case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::WholeSign => "whole_sign",
            Self::Equal => "equal",
            Self::Placidus => "placidus",
            Self::Koch => "koch",
        }
    }
}

impl std::fmt::Display for BhavaSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BhavaSystem {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "whole_sign" | "wholesign" => Ok(Self::WholeSign),
            "equal" => Ok(Self::Equal),
            "placidus" => Ok(Self::Placidus),
            "koch" => Ok(Self::Koch),
            _ => Err(VedicError::UnknownHouseSystem(s.to_string())),
        }
    }
}

/// Inputs for a bhava computation.
///
/// `lst_deg` is the local apparent sidereal time (RAMC); all outputs are
/// converted to the sidereal zodiac with `ayanamsha_deg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BhavaInput {
    pub system: BhavaSystem,
    /// Local apparent sidereal time in degrees.
    pub lst_deg: f64,
    /// True obliquity of the ecliptic in degrees.
    pub obliquity_deg: f64,
    /// Geographic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Ayanamsha subtracted from every tropical cusp.
    pub ayanamsha_deg: f64,
}

/// A single bhava (house) result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bhava {
    /// House number, 1-12.
    pub number: u8,
    /// Sidereal longitude of the cusp in degrees, [0, 360).
    pub cusp_deg: f64,
    /// End of this bhava in degrees, [0, 360). Equals the next bhava's cusp.
    pub end_deg: f64,
}

/// Full result of a bhava computation: 12 bhavas plus Lagna/MC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BhavaResult {
    pub system: BhavaSystem,
    /// The 12 bhavas, indexed 0..12 (bhavas[0] = house 1).
    pub bhavas: [Bhava; 12],
    /// Sidereal longitude of the Lagna (Ascendant) in degrees, [0, 360).
    pub lagna_deg: f64,
    /// Sidereal longitude of the MC in degrees, [0, 360).
    pub mc_deg: f64,
    /// Tropical Lagna in degrees, [0, 360).
    pub tropical_lagna_deg: f64,
    /// Tropical MC in degrees, [0, 360).
    pub tropical_mc_deg: f64,
}

impl BhavaResult {
    /// The 12 sidereal cusp longitudes, house 1 first.
    pub fn cusps(&self) -> [f64; 12] {
        self.bhavas.map(|b| b.cusp_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_systems_count() {
        assert_eq!(BhavaSystem::all().len(), 4);
    }

    #[test]
    fn default_is_whole_sign() {
        assert_eq!(BhavaSystem::default(), BhavaSystem::WholeSign);
    }

    #[test]
    fn latitude_dependent_systems() {
        assert!(BhavaSystem::Placidus.latitude_dependent());
        assert!(BhavaSystem::Koch.latitude_dependent());
        assert!(!BhavaSystem::Equal.latitude_dependent());
        assert!(!BhavaSystem::WholeSign.latitude_dependent());
    }

    #[test]
    fn parse_names() {
        assert_eq!("whole_sign".parse(), Ok(BhavaSystem::WholeSign));
        assert_eq!("Whole-Sign".parse(), Ok(BhavaSystem::WholeSign));
        assert_eq!("PLACIDUS".parse(), Ok(BhavaSystem::Placidus));
        assert_eq!(
            "regiomontanus".parse::<BhavaSystem>(),
            Err(VedicError::UnknownHouseSystem("regiomontanus".into()))
        );
        for &sys in BhavaSystem::all() {
            assert_eq!(sys.name().parse::<BhavaSystem>(), Ok(sys));
        }
    }
}
