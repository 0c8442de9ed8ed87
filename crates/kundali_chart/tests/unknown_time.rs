use kundali_chart::{ChartOptions, UnknownTimeInput, generate_unknown_time};
use kundali_ephem::SeriesEphemeris;
use kundali_vedic_base::GeoLocation;

fn chennai_1975() -> UnknownTimeInput {
    UnknownTimeInput {
        year: 1975,
        month: 4,
        day: 1,
        tz_offset_hours: 5.5,
        location: GeoLocation::new(13.0827, 80.2707, 0.0).unwrap(),
    }
}

#[test]
fn three_variants_in_daylight_order() {
    let opts = ChartOptions::default().with_dasha_query_jd(2_442_504.0);
    let out = generate_unknown_time(&SeriesEphemeris::new(), &chennai_1975(), &opts).unwrap();

    assert!(out.unknown_birth_time);
    assert_eq!(out.date, "1975-04-01");
    let v = &out.variants;
    assert!(v.sunrise.meta.julian_day < v.noon.meta.julian_day);
    assert!(v.noon.meta.julian_day < v.sunset.meta.julian_day);

    // The noon variant sits midway between sunrise and sunset.
    let mid = 0.5 * (v.sunrise.meta.julian_day + v.sunset.meta.julian_day);
    assert!((v.noon.meta.julian_day - mid).abs() < 1e-9);

    for chart in [&v.sunrise, &v.noon, &v.sunset] {
        assert!(chart.meta.input.unknown_birth_time);
        assert_eq!(chart.meta.input.date, "1975-04-01");
        assert_eq!(chart.planet("Sun").unwrap().sign, "Pisces");
        assert_eq!(chart.planets.len(), 9);
        assert_eq!(chart.houses.len(), 12);
    }
    assert!(v.sunrise.meta.input.time.starts_with("06:"));
    assert!(v.sunset.meta.input.time.starts_with("18:"));
}

#[test]
fn sunrise_lagna_is_near_the_sun() {
    let out = generate_unknown_time(
        &SeriesEphemeris::new(),
        &chennai_1975(),
        &ChartOptions::default().with_dasha_query_jd(2_442_504.0),
    )
    .unwrap();
    let sunrise = &out.variants.sunrise;
    let sun = sunrise.planet("Sun").unwrap().sidereal_longitude;
    let gap = (sunrise.lagna.sidereal_longitude - sun + 540.0) % 360.0 - 180.0;
    assert!(gap.abs() < 2.0, "Lagna-Sun gap at sunrise = {gap}°");
}

#[test]
fn serializes_with_variant_keys() {
    let out = generate_unknown_time(
        &SeriesEphemeris::new(),
        &chennai_1975(),
        &ChartOptions::default().with_dasha_query_jd(2_442_504.0),
    )
    .unwrap();
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["unknown_birth_time"], true);
    for key in ["sunrise", "noon", "sunset"] {
        assert!(v["variants"][key]["lagna"]["sign"].is_string(), "{key}");
    }
}
