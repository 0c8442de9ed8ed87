//! Panchang for the 1990-06-15 10:30 IST Delhi birth, using the built-in
//! series ephemeris.

use kundali_ephem::SeriesEphemeris;
use kundali_vedic_base::{
    AyanamshaSystem, GeoLocation, Karana, Nakshatra, Paksha, PanchangInput, RiseSetConfig, Vaar,
    Yoga, compute_panchang,
};

const BIRTH_JD_UT: f64 = 2_448_057.708_333;
const IST: f64 = 5.5;

fn delhi_input() -> PanchangInput {
    PanchangInput {
        jd_ut: BIRTH_JD_UT,
        tz_offset_hours: IST,
        location: GeoLocation::new(28.6139, 77.2090, 0.0).unwrap(),
        ayanamsha: AyanamshaSystem::Lahiri,
        riseset: RiseSetConfig::default(),
    }
}

/// Local clock hours of a JD (UT).
fn local_hours(jd_ut: f64) -> f64 {
    (jd_ut + 0.5 + IST / 24.0).fract() * 24.0
}

#[test]
fn five_limbs() {
    let eph = SeriesEphemeris::new();
    let p = compute_panchang(&eph, &delhi_input()).unwrap();

    assert_eq!(p.vaar, Vaar::Shukravaar);

    // Elongation ~257.6°: Krishna Saptami.
    assert_eq!(p.tithi.tithi_index, 21);
    assert_eq!(p.tithi.name, "Saptami");
    assert_eq!(p.tithi.paksha, Paksha::Krishna);
    assert_eq!(p.tithi.tithi_in_paksha, 7);

    assert_eq!(p.karana.karana_index, 42);
    assert_eq!(p.karana.karana, Karana::Vishti);

    assert_eq!(p.yoga.yoga, Yoga::Preeti);
    assert_eq!(p.nakshatra.nakshatra, Nakshatra::Shatabhisha);
    assert_eq!(p.nakshatra.pada, 4);

    assert!((p.sun_sidereal_deg - 60.1337).abs() < 0.02);
    assert!((p.moon_sidereal_deg - 317.7562).abs() < 0.02);
}

#[test]
fn elapsed_percentages() {
    let eph = SeriesEphemeris::new();
    let p = compute_panchang(&eph, &delhi_input()).unwrap();
    // Elongation 257.62° is 5.62° into its tithi and 5.62° into its 6° karana.
    assert!((p.tithi.elapsed_pct - 46.9).abs() < 1.0, "{}", p.tithi.elapsed_pct);
    assert!((p.karana.elapsed_pct - 93.7).abs() < 2.0, "{}", p.karana.elapsed_pct);
    assert!((p.nakshatra.elapsed_pct - 83.2).abs() < 1.0);
}

#[test]
fn sun_times_and_rahu_kala() {
    let eph = SeriesEphemeris::new();
    let p = compute_panchang(&eph, &delhi_input()).unwrap();
    let t = p.sun_times;
    assert!((local_hours(t.sunrise_jd) - 5.38).abs() < 0.05);
    assert!((local_hours(t.sunset_jd) - 19.34).abs() < 0.05);
    assert!(t.sunrise_jd < t.solar_noon_jd && t.solar_noon_jd < t.sunset_jd);

    // Friday: fourth eighth of the day.
    assert_eq!(p.rahu_kala.slot, 4);
    let eighth = t.day_length_days() / 8.0;
    assert!((p.rahu_kala.start_jd - (t.sunrise_jd + 3.0 * eighth)).abs() < 1e-9);
    assert!((local_hours(p.rahu_kala.start_jd) - 10.61).abs() < 0.1);
    assert!((p.rahu_kala.end_jd - p.rahu_kala.start_jd - eighth).abs() < 1e-9);
}

#[test]
fn late_evening_utc_keeps_local_date() {
    // 23:00 IST on the same day: still Friday, same sunrise.
    let eph = SeriesEphemeris::new();
    let evening = PanchangInput {
        jd_ut: BIRTH_JD_UT + 12.5 / 24.0,
        ..delhi_input()
    };
    let p = compute_panchang(&eph, &evening).unwrap();
    let morning = compute_panchang(&eph, &delhi_input()).unwrap();
    assert_eq!(p.vaar, Vaar::Shukravaar);
    assert!((p.sun_times.sunrise_jd - morning.sun_times.sunrise_jd).abs() < 1e-6);
}
