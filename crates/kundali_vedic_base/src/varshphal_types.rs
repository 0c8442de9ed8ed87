//! Types for the Varshphal (annual solar-return) chart.

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Annual houses in which the Muntha is considered well placed.
pub const MUNTHA_GOOD_HOUSES: [u8; 7] = [1, 2, 3, 5, 9, 10, 11];

/// Length of a Mudda dasha year in days.
pub const MUDDA_YEAR_DAYS: f64 = 360.0;

/// Configuration for the solar-return search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarReturnConfig {
    /// Coarse scan step in days.
    pub step_size_days: f64,
    /// Longest scan from January 1 of the target year, in days.
    pub max_scan_days: f64,
    /// Maximum bisection iterations.
    pub max_iterations: u32,
    /// Convergence threshold in days (default 1e-6, ~0.09 s).
    pub convergence_days: f64,
}

impl Default for SolarReturnConfig {
    fn default() -> Self {
        Self {
            step_size_days: 1.0,
            max_scan_days: 370.0,
            max_iterations: 60,
            convergence_days: 1e-6,
        }
    }
}

impl SolarReturnConfig {
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_size_days.is_finite() || self.step_size_days <= 0.0 {
            return Err("step_size_days must be positive");
        }
        if !self.max_scan_days.is_finite() || self.max_scan_days < self.step_size_days {
            return Err("max_scan_days must cover at least one step");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}

/// Moment the Sun returns to its natal sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarReturn {
    /// JD (UT) of the return.
    pub jd_ut: f64,
    /// Sidereal Sun at the return, degrees.
    pub sun_sidereal_deg: f64,
    /// Residual `sun - natal` folded to (-180, 180], degrees.
    pub residual_deg: f64,
}

/// The Muntha: natal Lagna progressed one sign per completed year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Muntha {
    pub longitude_deg: f64,
    pub rashi: Rashi,
    pub lord: Graha,
    /// House counted from the annual Lagna sign, 1-12.
    pub annual_house: u8,
    /// House counted from the natal Lagna sign, 1-12.
    pub natal_house: u8,
}

impl Muntha {
    pub fn in_good_house(&self) -> bool {
        MUNTHA_GOOD_HOUSES.contains(&self.annual_house)
    }
}

/// The 16 Tajika sahams (sensitive points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Saham {
    Punya,
    Vidya,
    Yashas,
    Mitra,
    Mahatmya,
    Aasha,
    Samarthya,
    Bhratru,
    Pitru,
    Raja,
    Vivaha,
    Santana,
    Jeeva,
    Karma,
    Kali,
    Paradesa,
}

/// All sahams in output order.
pub const ALL_SAHAMS: [Saham; 16] = [
    Saham::Punya,
    Saham::Vidya,
    Saham::Yashas,
    Saham::Mitra,
    Saham::Mahatmya,
    Saham::Aasha,
    Saham::Samarthya,
    Saham::Bhratru,
    Saham::Pitru,
    Saham::Raja,
    Saham::Vivaha,
    Saham::Santana,
    Saham::Jeeva,
    Saham::Karma,
    Saham::Kali,
    Saham::Paradesa,
];

impl Saham {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Punya => "Punya",
            Self::Vidya => "Vidya",
            Self::Yashas => "Yashas",
            Self::Mitra => "Mitra",
            Self::Mahatmya => "Mahatmya",
            Self::Aasha => "Aasha",
            Self::Samarthya => "Samarthya",
            Self::Bhratru => "Bhratru",
            Self::Pitru => "Pitru",
            Self::Raja => "Raja",
            Self::Vivaha => "Vivaha",
            Self::Santana => "Santana",
            Self::Jeeva => "Jeeva",
            Self::Karma => "Karma",
            Self::Kali => "Kali",
            Self::Paradesa => "Paradesa",
        }
    }

    /// What the saham signifies.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Punya => "Fortune",
            Self::Vidya => "Knowledge",
            Self::Yashas => "Fame",
            Self::Mitra => "Friends",
            Self::Mahatmya => "Authority",
            Self::Aasha => "Ambition",
            Self::Samarthya => "Power",
            Self::Bhratru => "Siblings",
            Self::Pitru => "Father",
            Self::Raja => "Leadership",
            Self::Vivaha => "Marriage",
            Self::Santana => "Children",
            Self::Jeeva => "Health",
            Self::Karma => "Career",
            Self::Kali => "Obstacles",
            Self::Paradesa => "Travel",
        }
    }

    /// `(A, B)` in `Lagna + A - B`, for a day chart.
    ///
    /// Punya and Vivaha swap the pair at night.
    pub(crate) const fn terms(self, day: bool) -> (Graha, Graha) {
        use Graha::*;
        match self {
            Self::Punya if day => (Chandra, Surya),
            Self::Punya => (Surya, Chandra),
            Self::Vidya => (Buddh, Chandra),
            Self::Yashas => (Guru, Surya),
            Self::Mitra => (Chandra, Buddh),
            Self::Mahatmya => (Mangal, Surya),
            Self::Aasha => (Guru, Shani),
            Self::Samarthya => (Mangal, Chandra),
            Self::Bhratru => (Guru, Mangal),
            Self::Pitru => (Shani, Surya),
            Self::Raja => (Chandra, Guru),
            Self::Vivaha if day => (Shukra, Shani),
            Self::Vivaha => (Shani, Shukra),
            Self::Santana => (Guru, Chandra),
            Self::Jeeva => (Shani, Mangal),
            Self::Karma => (Mangal, Buddh),
            Self::Kali => (Shani, Chandra),
            Self::Paradesa => (Shani, Surya),
        }
    }
}

/// A computed saham.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SahamPoint {
    pub saham: Saham,
    /// Sidereal longitude, [0, 360).
    pub longitude_deg: f64,
    pub rashi: Rashi,
    pub degrees_in_rashi: f64,
}

/// Dignity of a graha's sign for Kshetra bala.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignDignity {
    Own,
    Friendly,
    Other,
}

impl SignDignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Friendly => "friendly",
            Self::Other => "enemy",
        }
    }
}

/// Overall rating of a Pancha-vargiya total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BalaStrength {
    Weak,
    Moderate,
    Strong,
}

impl BalaStrength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }
}

/// Five-fold Tajika strength of a graha in the annual chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchaVargiyaBala {
    pub graha: Graha,
    pub kshetra: f64,
    pub kshetra_dignity: SignDignity,
    pub uccha: f64,
    pub hora: f64,
    pub dreshkana: f64,
    pub navamsha: f64,
}

impl PanchaVargiyaBala {
    pub fn total(&self) -> f64 {
        self.kshetra + self.uccha + self.hora + self.dreshkana + self.navamsha
    }

    pub fn strength(&self) -> BalaStrength {
        match self.total() {
            t if t >= 30.0 => BalaStrength::Strong,
            t if t >= 15.0 => BalaStrength::Moderate,
            _ => BalaStrength::Weak,
        }
    }
}
