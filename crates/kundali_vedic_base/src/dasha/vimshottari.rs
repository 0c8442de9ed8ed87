//! Vimshottari Mahadasha and Antardasha timeline generation.

use log::{debug, warn};

use crate::graha::Graha;

use super::balance::nakshatra_birth_balance;
use super::subperiod::{proportional_children, years_to_days};
use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaTimeline, Mahadasha};

/// Lord order and full periods in years; nakshatra `n` is ruled by entry `n % 9`.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Upper bound on generated cycles (1200 years for the classical table).
/// A timeline asked to reach further stops here and logs a warning.
pub const MAX_CYCLES: usize = 10;

/// Slack in days when testing whether the span is already covered.
const SPAN_EPSILON_DAYS: f64 = 1e-6;

/// Read-only Vimshottari parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VimshottariConfig {
    /// Lords in dasha order with their full periods in years.
    pub sequence: [(Graha, f64); 9],
    /// Minimum span of the generated timeline in years. Never less than one
    /// full cycle.
    pub min_span_years: f64,
}

impl Default for VimshottariConfig {
    fn default() -> Self {
        Self {
            sequence: VIMSHOTTARI_SEQUENCE,
            min_span_years: 120.0,
        }
    }
}

impl VimshottariConfig {
    /// Length of one full cycle in years (120 for the classical table).
    pub fn total_years(&self) -> f64 {
        self.sequence.iter().map(|&(_, y)| y).sum()
    }

    /// Position in `sequence` of the lord ruling nakshatra `nakshatra_index`.
    pub fn lord_index(&self, nakshatra_index: u8) -> usize {
        nakshatra_index as usize % self.sequence.len()
    }

    /// Full period of `graha` in years, if it appears in the sequence.
    pub fn years_of(&self, graha: Graha) -> Option<f64> {
        self.sequence
            .iter()
            .find(|&&(g, _)| g == graha)
            .map(|&(_, y)| y)
    }

    /// The sequence rotated to start at position `start`.
    fn rotated(&self, start: usize) -> [(Graha, f64); 9] {
        let mut out = self.sequence;
        out.rotate_left(start % self.sequence.len());
        out
    }
}

/// Generate the Vimshottari timeline for a birth.
///
/// `moon_sidereal_lon` selects the birth nakshatra. The first Mahadasha runs
/// from `birth_jd` for the birth balance only; its Antardashas are those of
/// the full period laid out from the nakshatra entry, with the ones already
/// over at birth dropped and the running one clipped to start at birth.
/// Mahadashas continue cyclically until the timeline spans
/// `config.min_span_years` (at least one full cycle, counted from the
/// nakshatra entry) and reaches `until_jd`, capped at [`MAX_CYCLES`] cycles.
/// Each later Mahadasha holds nine Antardashas starting from its own lord,
/// each `parent × years / total` long.
pub fn vimshottari_timeline(
    moon_sidereal_lon: f64,
    birth_jd: f64,
    config: &VimshottariConfig,
    until_jd: f64,
) -> DashaTimeline {
    let total_years = config.total_years();
    let n = config.sequence.len();

    let entry_idx = nakshatra_birth_balance(moon_sidereal_lon, 0.0).0;
    let start_idx = config.lord_index(entry_idx);
    let entry_days = years_to_days(config.sequence[start_idx].1);
    let (nak_idx, balance_days, elapsed_fraction) =
        nakshatra_birth_balance(moon_sidereal_lon, entry_days);

    let cycle_start = birth_jd - elapsed_fraction * entry_days;
    let mut span_end = cycle_start + years_to_days(config.min_span_years.max(total_years));
    if until_jd.is_finite() && until_jd > span_end {
        span_end = until_jd;
    }

    let mut mahadashas = Vec::with_capacity(n * 2);
    let mut cursor = cycle_start;
    let mut offset = 0;
    while (cursor + SPAN_EPSILON_DAYS < span_end || offset < n) && offset < n * MAX_CYCLES {
        let seq_idx = (start_idx + offset) % n;
        let (graha, years) = config.sequence[seq_idx];
        let period = DashaPeriod {
            graha,
            level: DashaLevel::Mahadasha,
            start_jd: cursor,
            end_jd: cursor + years_to_days(years),
        };
        let antardashas = proportional_children(
            &period,
            &config.rotated(seq_idx),
            total_years,
            DashaLevel::Antardasha,
        );
        cursor = period.end_jd;
        mahadashas.push(Mahadasha {
            period,
            antardashas,
        });
        offset += 1;
    }

    if cursor + SPAN_EPSILON_DAYS < span_end {
        warn!(
            "vimshottari: stopped after {MAX_CYCLES} cycles at JD {cursor:.1}, {:.1} y short of JD {span_end:.1}",
            (span_end - cursor) / DAYS_PER_YEAR
        );
    }

    if let Some(first) = mahadashas.first_mut() {
        clip_to_birth(first, birth_jd);
    }

    debug!(
        "vimshottari: nakshatra {nak_idx}, lord {}, elapsed {elapsed_fraction:.4}, balance {:.3} y, {} mahadashas",
        config.sequence[start_idx].0.english_name(),
        balance_days / DAYS_PER_YEAR,
        mahadashas.len()
    );

    DashaTimeline {
        birth_jd,
        cycle_start_jd: cycle_start,
        birth_nakshatra_index: nak_idx,
        elapsed_fraction,
        balance_days,
        mahadashas,
    }
}

/// Start `maha` at `birth_jd`, dropping the Antardashas that ended before it.
fn clip_to_birth(maha: &mut Mahadasha, birth_jd: f64) {
    if maha.period.start_jd >= birth_jd {
        return;
    }
    maha.period.start_jd = birth_jd;
    maha.antardashas.retain(|a| a.end_jd > birth_jd);
    if let Some(running) = maha.antardashas.first_mut() {
        running.start_jd = running.start_jd.max(birth_jd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN_27;
    use proptest::prelude::*;

    const BIRTH: f64 = 2_448_057.708_333;

    #[test]
    fn classical_cycle_is_120_years() {
        let c = VimshottariConfig::default();
        assert_eq!(c.total_years(), 120.0);
        assert_eq!(c.years_of(Graha::Shukra), Some(20.0));
        assert_eq!(c.lord_index(23), 5);
        assert_eq!(c.rotated(7)[0].0, Graha::Shani);
        assert_eq!(c.rotated(7)[2].0, Graha::Ketu);
    }

    #[test]
    fn shatabhisha_moon_starts_rahu() {
        // Moon at 317.7562° sidereal: Shatabhisha, 83% traversed.
        let t = vimshottari_timeline(317.7562, BIRTH, &VimshottariConfig::default(), BIRTH);
        assert_eq!(t.birth_nakshatra_index, 23);
        assert_eq!(t.birth_lord(), Some(Graha::Rahu));
        let frac = (317.7562 - 23.0 * NAKSHATRA_SPAN_27) / NAKSHATRA_SPAN_27;
        assert!((t.elapsed_fraction - frac).abs() < 1e-12);
        let balance_years = t.balance_days / DAYS_PER_YEAR;
        assert!((balance_years - 18.0 * (1.0 - frac)).abs() < 1e-9);
        assert_eq!(t.mahadashas[0].period.start_jd, BIRTH);
        assert!((t.mahadashas[0].period.duration_years() - balance_years).abs() < 1e-9);
        let order: Vec<Graha> = t.mahadashas[..4].iter().map(|m| m.period.graha).collect();
        assert_eq!(order, [Graha::Rahu, Graha::Guru, Graha::Shani, Graha::Buddh]);
    }

    #[test]
    fn antardashas_start_from_maha_lord() {
        let t = vimshottari_timeline(100.0, BIRTH, &VimshottariConfig::default(), BIRTH);
        for m in &t.mahadashas[1..] {
            assert_eq!(m.antardashas.len(), 9);
            assert_eq!(m.antardashas[0].graha, m.period.graha);
            assert_eq!(m.antardashas[0].start_jd, m.period.start_jd);
            assert_eq!(m.antardashas[8].end_jd, m.period.end_jd);
        }
        // Shukra-Shukra antardasha: 20 * 20 / 120 years.
        let venus = t
            .mahadashas
            .iter()
            .find(|m| m.period.graha == Graha::Shukra)
            .unwrap();
        assert!((venus.antardashas[0].duration_years() - 20.0 * 20.0 / 120.0).abs() < 1e-9);
        assert_eq!(venus.antardashas[1].graha, Graha::Surya);
    }

    #[test]
    fn timeline_extends_to_until_jd() {
        let until = BIRTH + 300.0 * DAYS_PER_YEAR;
        let t = vimshottari_timeline(10.0, BIRTH, &VimshottariConfig::default(), until);
        assert!(t.end_jd() >= until);
        assert!(t.current(until - 1.0).is_some());
        // An unbounded query falls back to the minimum span.
        let t = vimshottari_timeline(10.0, BIRTH, &VimshottariConfig::default(), f64::INFINITY);
        assert_eq!(t.mahadashas.len(), 9);
    }

    #[test]
    fn far_until_jd_is_capped() {
        let until = BIRTH + 2000.0 * DAYS_PER_YEAR;
        let t = vimshottari_timeline(10.0, BIRTH, &VimshottariConfig::default(), until);
        assert_eq!(t.mahadashas.len(), 9 * MAX_CYCLES);
        assert!(t.end_jd() < until);
        let span = t.end_jd() - t.cycle_start_jd;
        assert!((span - 120.0 * MAX_CYCLES as f64 * DAYS_PER_YEAR).abs() < 1e-3);
        assert!(t.current(until - 1.0).is_none());
    }

    #[test]
    fn first_mahadasha_clips_running_antardasha() {
        // Moon at 10°: Ashwini 75% traversed, so 5.25 of Ketu's 7 years are gone.
        let t = vimshottari_timeline(10.0, BIRTH, &VimshottariConfig::default(), BIRTH);
        let first = &t.mahadashas[0];
        assert_eq!(first.period.graha, Graha::Ketu);
        assert_eq!(first.period.start_jd, BIRTH);
        assert!((first.period.duration_years() - 1.75).abs() < 1e-9);

        // Ketu antardashas in years: Ke 0.408, Ve 1.167, Su 0.35, Mo 0.583,
        // Ma 0.408, Ra 1.05, Ju 0.933, Sa 1.108, Me 0.992. Cumulative 5.25
        // falls inside Saturn's.
        let lords: Vec<Graha> = first.antardashas.iter().map(|a| a.graha).collect();
        assert_eq!(lords, [Graha::Shani, Graha::Buddh]);
        assert_eq!(first.antardashas[0].start_jd, BIRTH);
        assert_eq!(first.antardashas[1].end_jd, first.period.end_jd);
        let sum: f64 = first.antardashas.iter().map(|a| a.duration_days()).sum();
        assert!((sum - first.period.duration_days()).abs() < 1e-6);
    }

    #[test]
    fn current_at_birth() {
        let t = vimshottari_timeline(317.7562, BIRTH, &VimshottariConfig::default(), BIRTH);
        let c = t.current(BIRTH).unwrap();
        assert_eq!(c.mahadasha.graha, Graha::Rahu);
        assert!(c.antardasha.contains(BIRTH));
        assert_eq!(t.start_jd(), BIRTH);
        assert!(t.current(BIRTH - 1.0).is_none());
    }

    proptest! {
        #[test]
        fn mahadashas_cover_120_years(moon in 0.0f64..360.0) {
            let t = vimshottari_timeline(moon, BIRTH, &VimshottariConfig::default(), BIRTH);
            prop_assert!(t.mahadashas.len() >= 9);
            // Counted from the nakshatra entry, nine Mahadashas make one cycle.
            let ninth_end = t.mahadashas[8].period.end_jd;
            prop_assert!((ninth_end - t.cycle_start_jd - 120.0 * DAYS_PER_YEAR).abs() < 1e-6);
            let total: f64 = t.mahadashas[..9].iter().map(|m| m.period.duration_days()).sum();
            prop_assert!((total - (120.0 * DAYS_PER_YEAR - (BIRTH - t.cycle_start_jd))).abs() < 1e-6);
            for pair in t.mahadashas.windows(2) {
                prop_assert_eq!(pair[0].period.end_jd, pair[1].period.start_jd);
            }
        }

        #[test]
        fn antardashas_sum_to_parent(moon in 0.0f64..360.0) {
            let t = vimshottari_timeline(moon, BIRTH, &VimshottariConfig::default(), BIRTH);
            for m in &t.mahadashas {
                let sum: f64 = m.antardashas.iter().map(|a| a.duration_days()).sum();
                prop_assert!((sum - m.period.duration_days()).abs() < 1e-6);
            }
        }

        #[test]
        fn birth_lies_in_first_mahadasha(moon in 0.0f64..360.0) {
            let t = vimshottari_timeline(moon, BIRTH, &VimshottariConfig::default(), BIRTH);
            let first = &t.mahadashas[0];
            prop_assert_eq!(first.period.start_jd, BIRTH);
            prop_assert!((first.period.duration_days() - t.balance_days).abs() < 1e-6);
            prop_assert!(t.cycle_start_jd <= BIRTH);
            prop_assert!(!first.antardashas.is_empty());
            prop_assert_eq!(first.antardashas[0].start_jd, BIRTH);
            prop_assert!(first.antardashas[0].end_jd > BIRTH);
        }
    }
}
