//! Lunar node (Rahu/Ketu) longitudes.
//!
//! Mean node: Meeus Eq. 47.7. True node: mean node plus the five largest
//! periodic terms (Meeus, Chapter 47, p. 344).

use kundali_frames::fundamental_arguments;

use crate::error::EphemError;
use crate::normalize_deg;

/// Mean or true (perturbed) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    #[default]
    Mean,
    /// Mean node plus short-period corrections.
    True,
}

impl NodeMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }
}

impl std::str::FromStr for NodeMode {
    type Err = EphemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "true" => Ok(Self::True),
            _ => Err(EphemError::UnknownNodeMode(s.to_string())),
        }
    }
}

/// Mean ascending node longitude in degrees [0, 360), `t` in Julian centuries (TT).
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    normalize_deg(125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t2 * t / 450_000.0)
}

/// True ascending node longitude in degrees [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    let [d, m, mp, f, _] = fundamental_arguments(t);
    let correction = -1.4979 * (2.0 * (d - f)).sin() - 0.1500 * m.sin() - 0.1226 * (2.0 * d).sin()
        + 0.1176 * (2.0 * f).sin()
        - 0.0801 * (2.0 * (mp - f)).sin();
    normalize_deg(mean_rahu_deg(t) + correction)
}

/// Rahu in the requested mode.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    }
}

/// Ketu: Rahu + 180°, normalized.
pub fn ketu_deg(t: f64, mode: NodeMode) -> f64 {
    normalize_deg(rahu_deg(t, mode) + 180.0)
}
