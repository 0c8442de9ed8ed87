//! Core types for Vimshottari dasha periods.

use crate::graha::Graha;

/// Year length for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Depth of a period in the dasha hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    /// Annual Vimshottari period of the Varshphal year.
    Mudda,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Mudda => "Mudda",
        }
    }
}

/// A single dasha period, `[start_jd, end_jd)` in JD (UT).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// The ruling graha.
    pub graha: Graha,
    pub level: DashaLevel,
    /// Inclusive.
    pub start_jd: f64,
    /// Exclusive.
    pub end_jd: f64,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Whether `jd` lies in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// A Mahadasha with its nine Antardashas.
#[derive(Debug, Clone, PartialEq)]
pub struct Mahadasha {
    pub period: DashaPeriod,
    pub antardashas: Vec<DashaPeriod>,
}

/// Active Mahadasha and Antardasha at a query date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentDasha {
    pub query_jd: f64,
    pub mahadasha: DashaPeriod,
    pub antardasha: DashaPeriod,
}

/// Complete Vimshottari timeline for one birth.
///
/// The first Mahadasha starts at `birth_jd` and lasts `balance_days`, the
/// share of its lord's period left when the Moon's remaining nakshatra arc
/// is mapped onto it. `cycle_start_jd` is where that period would have begun
/// at nakshatra entry; one full cycle is measured from there.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaTimeline {
    pub birth_jd: f64,
    /// Moon's entry into the birth nakshatra, mapped onto the first lord's period.
    pub cycle_start_jd: f64,
    /// 0-based birth nakshatra of the Moon.
    pub birth_nakshatra_index: u8,
    /// Fraction of the birth nakshatra traversed at birth, [0, 1).
    pub elapsed_fraction: f64,
    /// Days of the first Mahadasha remaining at birth.
    pub balance_days: f64,
    pub mahadashas: Vec<Mahadasha>,
}

impl DashaTimeline {
    /// Start of the first Mahadasha (birth).
    pub fn start_jd(&self) -> f64 {
        self.mahadashas
            .first()
            .map_or(self.birth_jd, |m| m.period.start_jd)
    }

    /// End of the last generated Mahadasha.
    pub fn end_jd(&self) -> f64 {
        self.mahadashas
            .last()
            .map_or(self.birth_jd, |m| m.period.end_jd)
    }

    /// Lord whose Mahadasha is running at birth.
    pub fn birth_lord(&self) -> Option<Graha> {
        self.mahadashas.first().map(|m| m.period.graha)
    }

    /// Active Mahadasha and Antardasha at `query_jd`.
    ///
    /// Returns `None` outside `[start_jd(), end_jd())`.
    pub fn current(&self, query_jd: f64) -> Option<CurrentDasha> {
        let idx = self
            .mahadashas
            .partition_point(|m| m.period.end_jd <= query_jd);
        let maha = self.mahadashas.get(idx)?;
        if !maha.period.contains(query_jd) {
            return None;
        }
        let antar = maha.antardashas.iter().find(|a| a.contains(query_jd))?;
        Some(CurrentDasha {
            query_jd,
            mahadasha: maha.period,
            antardasha: *antar,
        })
    }
}
