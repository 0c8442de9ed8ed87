//! Panchang classification: Tithi, Karana, Yoga, Nakshatra, Vaar and
//! Rahu Kala.
//!
//! The pure classifiers take sidereal angles; [`compute_panchang`] queries
//! the ephemeris once for the Sun and Moon and derives all five limbs plus
//! the sunrise-based windows for the local civil date.

use kundali_ephem::{Body, Ephemeris};
use log::debug;

use crate::ayanamsha::{ayanamsha_deg, tropical_to_sidereal};
use crate::error::VedicError;
use crate::nakshatra::nakshatra_from_longitude;
use crate::panchang_types::{
    ALL_KARANAS, ALL_VAARS, ALL_YOGAS, KARANA_SEGMENT_DEG, KaranaInfo, Paksha, PanchangInfo,
    PanchangInput, RahuKala, TITHI_NAMES, TITHI_SEGMENT_DEG, TithiInfo, Vaar, YOGA_SEGMENT_DEG,
    YogaInfo,
};
use crate::riseset::sun_times;
use crate::util::{normalize_360, segment_index};

/// Karanas 1..=56 cycle through the 7 movable ones, starting at Bava.
const MOVABLE_KARANA_COUNT: u8 = 7;

/// Percent of segment `idx` covered at `value`.
fn elapsed_pct(value: f64, idx: u8, span: f64) -> f64 {
    ((value - idx as f64 * span) / span * 100.0).clamp(0.0, 100.0)
}

/// Tithi from Moon−Sun elongation in degrees.
///
/// Index = floor(elongation / 12°), 0-29. Indices 0-14 are Shukla paksha.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let elong = normalize_360(elongation_deg);
    let idx = segment_index(elong, TITHI_SEGMENT_DEG, 30);
    let paksha = if idx < 15 { Paksha::Shukla } else { Paksha::Krishna };
    TithiInfo {
        tithi_index: idx,
        name: TITHI_NAMES[idx as usize],
        paksha,
        tithi_in_paksha: idx % 15 + 1,
        elapsed_pct: elapsed_pct(elong, idx, TITHI_SEGMENT_DEG),
    }
}

/// Karana from Moon−Sun elongation in degrees.
///
/// 60 half-tithis per synodic month: index 0 is Kimstughna, 1-56 cycle
/// Bava..Vishti eight times, 57-59 are Shakuni, Chatushpada, Nagava.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let elong = normalize_360(elongation_deg);
    let idx = segment_index(elong, KARANA_SEGMENT_DEG, 60);
    let karana = match idx {
        0 => ALL_KARANAS[10],
        1..=56 => ALL_KARANAS[((idx - 1) % MOVABLE_KARANA_COUNT) as usize],
        _ => ALL_KARANAS[(idx - 57 + MOVABLE_KARANA_COUNT) as usize],
    };
    KaranaInfo {
        karana,
        karana_index: idx,
        elapsed_pct: elapsed_pct(elong, idx, KARANA_SEGMENT_DEG),
    }
}

/// Yoga from the sum of sidereal Sun and Moon longitudes in degrees.
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sum_deg);
    let idx = segment_index(sum, YOGA_SEGMENT_DEG, 27);
    YogaInfo {
        yoga: ALL_YOGAS[idx as usize],
        yoga_index: idx,
        elapsed_pct: elapsed_pct(sum, idx, YOGA_SEGMENT_DEG),
    }
}

/// Weekday of the local civil date containing `jd_ut`.
///
/// `floor(JD + offset/24 + 1.5) mod 7`, 0 = Sunday.
pub fn vaar_from_jd(jd_ut: f64, tz_offset_hours: f64) -> Vaar {
    let day = (jd_ut + tz_offset_hours / 24.0 + 1.5).floor();
    ALL_VAARS[day.rem_euclid(7.0) as usize]
}

/// Rahu Kala: the weekday's eighth of the interval from sunrise to sunset.
pub fn rahu_kala(sunrise_jd: f64, sunset_jd: f64, vaar: Vaar) -> RahuKala {
    let slot = vaar.rahu_kala_slot();
    let part = (sunset_jd - sunrise_jd) / 8.0;
    let start_jd = sunrise_jd + (slot - 1) as f64 * part;
    RahuKala {
        slot,
        start_jd,
        end_jd: start_jd + part,
    }
}

/// JD (UT) of 12:00 local civil time on the local date containing `jd_ut`.
pub fn local_civil_noon_jd(jd_ut: f64, tz_offset_hours: f64) -> f64 {
    let local = jd_ut + tz_offset_hours / 24.0;
    (local - 0.5).floor() + 1.0 - tz_offset_hours / 24.0
}

/// Compute the complete panchang at `input.jd_ut`.
///
/// Tithi, nakshatra, yoga and karana use the sidereal Sun and Moon at the
/// given moment; sunrise, sunset and Rahu Kala belong to the local civil
/// date, whose weekday is the vaar.
pub fn compute_panchang<E: Ephemeris + ?Sized>(
    eph: &E,
    input: &PanchangInput,
) -> Result<PanchangInfo, VedicError> {
    let aya = ayanamsha_deg(input.ayanamsha, input.jd_ut);
    let sun = tropical_to_sidereal(eph.longitude_deg(input.jd_ut, Body::Sun)?, aya);
    let moon = tropical_to_sidereal(eph.longitude_deg(input.jd_ut, Body::Moon)?, aya);
    let elongation = normalize_360(moon - sun);

    let vaar = vaar_from_jd(input.jd_ut, input.tz_offset_hours);
    let noon = local_civil_noon_jd(input.jd_ut, input.tz_offset_hours);
    let times = sun_times(eph, &input.location, noon, &input.riseset)?;

    let info = PanchangInfo {
        vaar,
        tithi: tithi_from_elongation(elongation),
        nakshatra: nakshatra_from_longitude(moon),
        yoga: yoga_from_sum(sun + moon),
        karana: karana_from_elongation(elongation),
        sun_times: times,
        rahu_kala: rahu_kala(times.sunrise_jd, times.sunset_jd, vaar),
        sun_sidereal_deg: sun,
        moon_sidereal_deg: moon,
    };
    debug!(
        "panchang at JD {}: tithi {} ({:?}), yoga {}, karana {}",
        input.jd_ut,
        info.tithi.name,
        info.tithi.paksha,
        info.yoga.yoga.name(),
        info.karana.karana.name()
    );
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panchang_types::{Karana, Yoga};
    use proptest::prelude::*;

    #[test]
    fn tithi_boundaries() {
        let t = tithi_from_elongation(0.0);
        assert_eq!(t.tithi_index, 0);
        assert_eq!(t.name, "Pratipada");
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(tithi_from_elongation(11.999_999).tithi_index, 0);
        assert_eq!(tithi_from_elongation(12.0).tithi_index, 1);
        assert_eq!(tithi_from_elongation(179.999).name, "Purnima");
        let k = tithi_from_elongation(180.0);
        assert_eq!(k.paksha, Paksha::Krishna);
        assert_eq!(k.tithi_in_paksha, 1);
        assert_eq!(tithi_from_elongation(359.9).name, "Amavasya");
        assert_eq!(tithi_from_elongation(360.0).tithi_index, 0);
    }

    #[test]
    fn tithi_elapsed() {
        let t = tithi_from_elongation(18.0);
        assert_eq!(t.tithi_index, 1);
        assert!((t.elapsed_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn karana_layout() {
        assert_eq!(karana_from_elongation(0.0).karana, Karana::Kimstughna);
        assert_eq!(karana_from_elongation(6.0).karana, Karana::Bava);
        assert_eq!(karana_from_elongation(12.0).karana, Karana::Balava);
        assert_eq!(karana_from_elongation(42.0).karana, Karana::Vishti);
        assert_eq!(karana_from_elongation(48.0).karana, Karana::Bava);
        // k = 56 is the eighth Vishti
        assert_eq!(karana_from_elongation(336.0).karana, Karana::Vishti);
        assert_eq!(karana_from_elongation(342.0).karana, Karana::Shakuni);
        assert_eq!(karana_from_elongation(348.0).karana, Karana::Chatushpada);
        assert_eq!(karana_from_elongation(354.0).karana, Karana::Nagava);
        assert_eq!(karana_from_elongation(359.999).karana_index, 59);
    }

    #[test]
    fn karana_counts_per_month() {
        let mut counts = [0u8; 11];
        for k in 0..60 {
            let info = karana_from_elongation(k as f64 * 6.0 + 3.0);
            assert_eq!(info.karana_index, k);
            counts[info.karana as usize] += 1;
        }
        assert_eq!(&counts[..7], &[8; 7]);
        assert_eq!(&counts[7..], &[1; 4]);
    }

    #[test]
    fn yoga_boundaries() {
        assert_eq!(yoga_from_sum(0.0).yoga, Yoga::Vishkumbha);
        assert_eq!(yoga_from_sum(YOGA_SEGMENT_DEG).yoga, Yoga::Preeti);
        assert_eq!(yoga_from_sum(359.99).yoga, Yoga::Vaidhriti);
        assert_eq!(yoga_from_sum(370.0).yoga, Yoga::Vishkumbha);
    }

    #[test]
    fn weekdays() {
        // 2000-01-01 12:00 UT was a Saturday.
        assert_eq!(vaar_from_jd(2_451_545.0, 0.0), Vaar::Shanivaar);
        // 1990-06-15 10:30 IST was a Friday.
        assert_eq!(vaar_from_jd(2_448_057.708_333, 5.5), Vaar::Shukravaar);
        // 23:30 UT on a Saturday is already Sunday in IST.
        assert_eq!(vaar_from_jd(2_451_545.479_2, 5.5), Vaar::Ravivaar);
    }

    #[test]
    fn rahu_kala_window() {
        let rk = rahu_kala(100.0, 100.5, Vaar::Ravivaar);
        assert_eq!(rk.slot, 8);
        assert!((rk.start_jd - (100.0 + 7.0 * 0.0625)).abs() < 1e-12);
        assert!((rk.end_jd - 100.5).abs() < 1e-12);
        let rk = rahu_kala(100.0, 100.5, Vaar::Somvaar);
        assert!((rk.start_jd - 100.0625).abs() < 1e-12);
    }

    #[test]
    fn civil_noon() {
        // 10:30 IST on 1990-06-15 → 12:00 IST = 06:30 UT.
        let noon = local_civil_noon_jd(2_448_057.708_333, 5.5);
        assert!((noon - 2_448_057.770_833).abs() < 1e-5);
        // 20:00 UT Jun 14 at UTC+5.5 is already Jun 15 locally.
        let noon = local_civil_noon_jd(2_448_057.333_333, 5.5);
        assert!((noon - 2_448_057.770_833).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn tithi_upper_boundary_is_exclusive(k in 0u8..30) {
            let t = tithi_from_elongation(k as f64 * TITHI_SEGMENT_DEG);
            prop_assert_eq!(t.tithi_index, k);
        }

        #[test]
        fn karana_is_half_tithi(e in 0.0f64..360.0) {
            let t = tithi_from_elongation(e);
            let k = karana_from_elongation(e);
            prop_assert_eq!(k.karana_index / 2, t.tithi_index);
        }

        #[test]
        fn elapsed_in_range(e in -720.0f64..720.0) {
            let y = yoga_from_sum(e);
            prop_assert!((0.0..=100.0).contains(&y.elapsed_pct));
            prop_assert!(y.yoga_index < 27);
        }
    }
}
