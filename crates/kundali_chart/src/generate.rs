//! Chart orchestration.
//!
//! One pass over the ephemeris per chart: the nine grahas are queried once
//! and every section (houses, panchang, dasha, divisional charts) is built
//! from the shared intermediates.

use std::thread;

use kundali_ephem::Ephemeris;
use kundali_frames::nutation;
use kundali_time::{
    CivilTime, decimal_year, delta_t_seconds, jd_ut_to_jde, julian_centuries, now_jd_ut,
};
use kundali_vedic_base::{
    ALL_GRAHAS, ALL_NAKSHATRAS_27, BhavaInput, BhavaResult, DAYS_PER_YEAR, DashaPeriod,
    DashaTimeline, GeoLocation, Graha, PanchangInfo, PanchangInput, amsha_position, ayanamsha_deg,
    compute_bhavas, compute_panchang, format_degrees_in_sign, house_of,
    local_apparent_sidereal_time_deg, nakshatra_from_longitude, obliquity_of_date_deg,
    rashi_from_longitude, rashi_lord, sun_times, tropical_to_sidereal, vimshottari_timeline,
};
use log::{debug, info, warn};

use crate::chart_types::{
    Chart, ChartMeta, CurrentDashaEntry, DashaEntry, DivisionalEntry, HouseEntry, InputEcho,
    Instant, LimbEntry, MahadashaEntry, NakshatraLimbEntry, OrderedMap, PanchangEntry,
    PeriodEntry, PlanetEntry, PointEntry, RahuKalaEntry, TithiEntry, UnknownTimeCharts,
    UnknownTimeVariants,
};
use crate::error::ChartError;
use crate::input::{BirthInput, ChartOptions, UnknownTimeInput};

/// Years over which the series ephemeris is within its stated accuracy.
const ACCURATE_YEARS: std::ops::RangeInclusive<f64> = 1800.0..=2100.0;

const UNKNOWN_TIME_NOTE: &str = "Birth time unknown: charts cast for sunrise, \
     local solar midday and sunset. Lagna, houses and divisional placements \
     differ between variants; planetary signs rarely do.";

/// Sidereal position of one graha with the raw ephemeris output.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GrahaPoint {
    pub(crate) graha: Graha,
    pub(crate) tropical: f64,
    pub(crate) sidereal: f64,
    latitude: Option<f64>,
    distance_au: Option<f64>,
}

/// Generate a full chart for a birth moment.
pub fn generate_chart<E: Ephemeris + ?Sized>(
    eph: &E,
    input: &BirthInput,
    options: &ChartOptions,
) -> Result<Chart, ChartError> {
    build_chart(
        eph,
        input.jd_ut(),
        input.civil.offset_hours,
        &input.location,
        options,
        false,
    )
}

/// Generate sunrise, noon and sunset charts for a date without a birth time.
///
/// Sunrise and sunset are found around 12:00 local civil time; the noon
/// variant is their midpoint. The three charts are independent and are
/// computed on scoped threads.
pub fn generate_unknown_time<E: Ephemeris + Sync + ?Sized>(
    eph: &E,
    input: &UnknownTimeInput,
    options: &ChartOptions,
) -> Result<UnknownTimeCharts, ChartError> {
    let tz = input.tz_offset_hours;
    let civil_noon = CivilTime::local_noon(input.year, input.month, input.day, tz)?;
    let times = sun_times(eph, &input.location, civil_noon.to_jd_ut(), &options.riseset)?;
    let midday = 0.5 * (times.sunrise_jd + times.sunset_jd);
    debug!(
        "unknown-time variants for {}: sunrise JD {:.6}, noon JD {midday:.6}, sunset JD {:.6}",
        civil_noon.date_string(),
        times.sunrise_jd,
        times.sunset_jd
    );

    let location = &input.location;
    let [sunrise, noon, sunset] = thread::scope(|s| {
        let handles = [times.sunrise_jd, midday, times.sunset_jd]
            .map(|jd| s.spawn(move || build_chart(eph, jd, tz, location, options, true)));
        handles.map(|h| h.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload)))
    });

    Ok(UnknownTimeCharts {
        unknown_birth_time: true,
        note: UNKNOWN_TIME_NOTE,
        date: civil_noon.date_string(),
        timezone_offset: tz,
        variants: UnknownTimeVariants {
            sunrise: sunrise?,
            noon: noon?,
            sunset: sunset?,
        },
    })
}

/// Panchang block alone for a birth moment.
pub fn generate_panchang<E: Ephemeris + ?Sized>(
    eph: &E,
    input: &BirthInput,
    options: &ChartOptions,
) -> Result<PanchangEntry, ChartError> {
    let tz = input.civil.offset_hours;
    let panchang = compute_panchang(
        eph,
        &PanchangInput {
            jd_ut: input.jd_ut(),
            tz_offset_hours: tz,
            location: input.location,
            ayanamsha: options.ayanamsha,
            riseset: options.riseset,
        },
    )?;
    Ok(panchang_entry(&panchang, tz))
}

/// Vimshottari timeline alone for a birth moment.
pub fn generate_dasha<E: Ephemeris + ?Sized>(
    eph: &E,
    input: &BirthInput,
    options: &ChartOptions,
) -> Result<DashaEntry, ChartError> {
    let jd_ut = input.jd_ut();
    let aya = ayanamsha_deg(options.ayanamsha, jd_ut);
    let moon = tropical_to_sidereal(eph.longitude_deg(jd_ut, Graha::Chandra.body())?, aya);
    let query_jd = options.dasha_query_jd.unwrap_or_else(now_jd_ut);
    let timeline = vimshottari_timeline(moon, jd_ut, &options.dasha, query_jd.max(jd_ut));
    Ok(dasha_entry(&timeline, query_jd, input.civil.offset_hours))
}

/// Houses and sidereal graha positions at one moment, with the
/// astronomical quantities they were derived from.
pub(crate) struct Cast {
    pub(crate) jd_ut: f64,
    pub(crate) t: f64,
    pub(crate) delta_t: f64,
    pub(crate) obliquity: f64,
    pub(crate) lst: f64,
    pub(crate) aya: f64,
    pub(crate) bhavas: BhavaResult,
    pub(crate) points: Vec<GrahaPoint>,
}

impl Cast {
    pub(crate) fn sidereal_of(&self, graha: Graha) -> f64 {
        sidereal_of(&self.points, graha)
    }

    /// Sidereal longitudes indexed by [`Graha::index`].
    pub(crate) fn sidereal_longitudes(&self) -> [f64; 9] {
        let mut out = [0.0; 9];
        for p in &self.points {
            out[p.graha.index() as usize] = p.sidereal;
        }
        out
    }
}

/// Query the ephemeris once for all grahas and divide the houses.
pub(crate) fn cast<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
    location: &GeoLocation,
    options: &ChartOptions,
) -> Result<Cast, ChartError> {
    let year = decimal_year(jd_ut);
    if !ACCURATE_YEARS.contains(&year) {
        warn!(
            "epoch {year:.1} lies outside 1800-2100; {} may be degraded",
            eph.describe()
        );
    }

    let t = julian_centuries(jd_ut_to_jde(jd_ut));
    let delta_t = delta_t_seconds(year);
    let obliquity = obliquity_of_date_deg(jd_ut);
    let lst = local_apparent_sidereal_time_deg(jd_ut, location.longitude_deg);
    let aya = ayanamsha_deg(options.ayanamsha, jd_ut);
    debug!(
        "JD {jd_ut:.6}: ΔT {delta_t:.1}s, ε {obliquity:.6}°, LAST {lst:.4}°, ayanamsha {aya:.6}°"
    );

    let bhavas = compute_bhavas(&BhavaInput {
        system: options.house_system,
        lst_deg: lst,
        obliquity_deg: obliquity,
        latitude_deg: location.latitude_deg,
        ayanamsha_deg: aya,
    })?;

    let mut points = Vec::with_capacity(ALL_GRAHAS.len());
    for graha in ALL_GRAHAS {
        let pos = eph.position(jd_ut, graha.body())?;
        points.push(GrahaPoint {
            graha,
            tropical: pos.longitude_deg,
            sidereal: tropical_to_sidereal(pos.longitude_deg, aya),
            latitude: pos.latitude_deg,
            distance_au: pos.distance_au,
        });
    }

    Ok(Cast {
        jd_ut,
        t,
        delta_t,
        obliquity,
        lst,
        aya,
        bhavas,
        points,
    })
}

fn build_chart<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
    tz_offset_hours: f64,
    location: &GeoLocation,
    options: &ChartOptions,
    unknown_birth_time: bool,
) -> Result<Chart, ChartError> {
    let cast = cast(eph, jd_ut, location, options)?;

    let panchang = compute_panchang(
        eph,
        &PanchangInput {
            jd_ut,
            tz_offset_hours,
            location: *location,
            ayanamsha: options.ayanamsha,
            riseset: options.riseset,
        },
    )?;

    let moon = cast.sidereal_of(Graha::Chandra);
    let query_jd = options.dasha_query_jd.unwrap_or_else(now_jd_ut);
    let timeline = vimshottari_timeline(moon, jd_ut, &options.dasha, query_jd.max(jd_ut));

    let moon_rashi = rashi_from_longitude(moon);
    let moon_nak = nakshatra_from_longitude(moon);

    let bhavas = &cast.bhavas;
    let chart = Chart {
        meta: chart_meta(eph, &cast, tz_offset_hours, location, options, unknown_birth_time),
        lagna: point_entry(bhavas.lagna_deg, bhavas.tropical_lagna_deg),
        midheaven: point_entry(bhavas.mc_deg, bhavas.tropical_mc_deg),
        moon_sign: moon_rashi.rashi.western_name(),
        moon_nakshatra: moon_nak.nakshatra.name(),
        moon_nakshatra_pada: moon_nak.pada,
        planets: planet_entries(&cast.points, bhavas),
        houses: house_entries(bhavas),
        panchang: panchang_entry(&panchang, tz_offset_hours),
        dasha: dasha_entry(&timeline, query_jd, tz_offset_hours),
        divisional_charts: divisional_entries(&cast.points, bhavas.lagna_deg, options),
    };
    info!(
        "chart at {}: Lagna {} {}, Moon {} ({})",
        chart.meta.input.local_time,
        chart.lagna.sign,
        chart.lagna.degree_formatted,
        chart.moon_sign,
        chart.moon_nakshatra
    );
    Ok(chart)
}

pub(crate) fn chart_meta<E: Ephemeris + ?Sized>(
    eph: &E,
    cast: &Cast,
    tz_offset_hours: f64,
    location: &GeoLocation,
    options: &ChartOptions,
    unknown_birth_time: bool,
) -> ChartMeta {
    let civil = CivilTime::from_jd_ut(cast.jd_ut, tz_offset_hours);
    ChartMeta {
        input: InputEcho {
            date: civil.date_string(),
            time: civil.time_string(),
            local_time: civil.to_string(),
            timezone_offset: tz_offset_hours,
            latitude: location.latitude_deg,
            longitude: location.longitude_deg,
            altitude: location.altitude_m,
            house_system: options.house_system.name(),
            ayanamsa: options.ayanamsha.name(),
            unknown_birth_time,
        },
        julian_day: cast.jd_ut,
        julian_centuries: cast.t,
        delta_t_seconds: cast.delta_t,
        obliquity: cast.obliquity,
        nutation_longitude: nutation(cast.t).longitude_deg,
        lst_degrees: cast.lst,
        ayanamsha_value: cast.aya,
        ephemeris: eph.describe(),
    }
}

fn sidereal_of(points: &[GrahaPoint], graha: Graha) -> f64 {
    points
        .iter()
        .find(|p| p.graha == graha)
        .map_or(0.0, |p| p.sidereal)
}

pub(crate) fn point_entry(sidereal: f64, tropical: f64) -> PointEntry {
    let rashi = rashi_from_longitude(sidereal);
    let nak = nakshatra_from_longitude(sidereal);
    PointEntry {
        sign: rashi.rashi.western_name(),
        rashi: rashi.rashi.name(),
        sidereal_longitude: sidereal,
        tropical_longitude: tropical,
        degree_in_sign: rashi.degrees_in_rashi,
        degree_formatted: format_degrees_in_sign(sidereal),
        nakshatra: nak.nakshatra.name(),
        nakshatra_pada: nak.pada,
    }
}

pub(crate) fn planet_entries(
    points: &[GrahaPoint],
    bhavas: &BhavaResult,
) -> OrderedMap<PlanetEntry> {
    let cusps = bhavas.cusps();
    OrderedMap(
        points
            .iter()
            .map(|p| {
                let rashi = rashi_from_longitude(p.sidereal);
                let nak = nakshatra_from_longitude(p.sidereal);
                let entry = PlanetEntry {
                    graha: p.graha.name(),
                    tropical_longitude: p.tropical,
                    sidereal_longitude: p.sidereal,
                    latitude: p.latitude,
                    distance_au: p.distance_au,
                    sign: rashi.rashi.western_name(),
                    rashi: rashi.rashi.name(),
                    degree_in_sign: rashi.degrees_in_rashi,
                    degree_formatted: format_degrees_in_sign(p.sidereal),
                    nakshatra: nak.nakshatra.name(),
                    nakshatra_pada: nak.pada,
                    house: house_of(p.sidereal, &cusps),
                };
                (p.graha.english_name(), entry)
            })
            .collect(),
    )
}

pub(crate) fn house_entries(bhavas: &BhavaResult) -> Vec<HouseEntry> {
    bhavas
        .bhavas
        .iter()
        .map(|b| {
            let rashi = rashi_from_longitude(b.cusp_deg).rashi;
            HouseEntry {
                house: b.number,
                sidereal_longitude: b.cusp_deg,
                sign: rashi.western_name(),
                rashi: rashi.name(),
                degree_formatted: format_degrees_in_sign(b.cusp_deg),
                lord: rashi_lord(rashi).english_name(),
            }
        })
        .collect()
}

fn panchang_entry(p: &PanchangInfo, tz: f64) -> PanchangEntry {
    PanchangEntry {
        vaar: p.vaar.name(),
        weekday: p.vaar.english_name(),
        tithi: TithiEntry {
            number: p.tithi.tithi_index + 1,
            name: p.tithi.name,
            paksha: p.tithi.paksha.name(),
            number_in_paksha: p.tithi.tithi_in_paksha,
            elapsed_pct: p.tithi.elapsed_pct,
        },
        nakshatra: NakshatraLimbEntry {
            number: p.nakshatra.nakshatra_index + 1,
            name: p.nakshatra.nakshatra.name(),
            pada: p.nakshatra.pada,
            elapsed_pct: p.nakshatra.elapsed_pct,
        },
        yoga: LimbEntry {
            number: p.yoga.yoga_index + 1,
            name: p.yoga.yoga.name(),
            elapsed_pct: p.yoga.elapsed_pct,
        },
        karana: LimbEntry {
            number: p.karana.karana_index + 1,
            name: p.karana.karana.name(),
            elapsed_pct: p.karana.elapsed_pct,
        },
        sunrise: Instant::new(p.sun_times.sunrise_jd, tz),
        sunset: Instant::new(p.sun_times.sunset_jd, tz),
        solar_noon: Instant::new(p.sun_times.solar_noon_jd, tz),
        rahu_kala: RahuKalaEntry {
            slot: p.rahu_kala.slot,
            start: Instant::new(p.rahu_kala.start_jd, tz),
            end: Instant::new(p.rahu_kala.end_jd, tz),
        },
    }
}

fn period_entry(p: &DashaPeriod, tz: f64) -> PeriodEntry {
    PeriodEntry {
        lord: p.graha.english_name(),
        start: Instant::new(p.start_jd, tz),
        end: Instant::new(p.end_jd, tz),
        years: p.duration_years(),
    }
}

fn dasha_entry(timeline: &DashaTimeline, query_jd: f64, tz: f64) -> DashaEntry {
    let current = timeline.current(query_jd).map(|c| CurrentDashaEntry {
        at: Instant::new(c.query_jd, tz),
        mahadasha: period_entry(&c.mahadasha, tz),
        antardasha: period_entry(&c.antardasha, tz),
    });
    if current.is_none() {
        debug!("dasha query JD {query_jd:.6} outside the generated timeline");
    }
    let birth_nakshatra = ALL_NAKSHATRAS_27[timeline.birth_nakshatra_index as usize % 27].name();
    DashaEntry {
        system: "Vimshottari",
        birth_nakshatra,
        birth_lord: timeline.birth_lord().map_or("", Graha::english_name),
        balance_years: timeline.balance_days / DAYS_PER_YEAR,
        current,
        periods: timeline
            .mahadashas
            .iter()
            .map(|m| MahadashaEntry {
                period: period_entry(&m.period, tz),
                antardashas: m.antardashas.iter().map(|a| period_entry(a, tz)).collect(),
            })
            .collect(),
    }
}

fn divisional_entries(
    points: &[GrahaPoint],
    lagna_sidereal: f64,
    options: &ChartOptions,
) -> OrderedMap<OrderedMap<DivisionalEntry>> {
    let placements = points
        .iter()
        .map(|p| (p.graha.english_name(), p.sidereal))
        .chain(std::iter::once(("Lagna", lagna_sidereal)));
    OrderedMap(
        options
            .amshas
            .iter()
            .map(|&amsha| {
                let chart = placements
                    .clone()
                    .map(|(name, lon)| {
                        let pos = amsha_position(lon, amsha);
                        let entry = DivisionalEntry {
                            sign: pos.rashi.western_name(),
                            rashi: pos.rashi.name(),
                            degree: pos.degrees_in_rashi,
                        };
                        (name, entry)
                    })
                    .collect();
                (amsha.code(), OrderedMap(chart))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_ephem::SeriesEphemeris;
    use kundali_vedic_base::{Amsha, BhavaSystem};

    fn delhi_birth() -> BirthInput {
        BirthInput::new(
            CivilTime::new(1990, 6, 15, 10, 30, 0.0, 5.5).unwrap(),
            GeoLocation::new(28.6139, 77.2090, 0.0).unwrap(),
        )
    }

    fn options() -> ChartOptions {
        ChartOptions::default().with_dasha_query_jd(2_448_057.708_333)
    }

    #[test]
    fn planets_are_ordered_sun_to_ketu() {
        let chart = generate_chart(&SeriesEphemeris::new(), &delhi_birth(), &options()).unwrap();
        let names: Vec<_> = chart.planets.keys().collect();
        assert_eq!(
            names,
            ["Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn", "Rahu", "Ketu"]
        );
        assert_eq!(chart.houses.len(), 12);
    }

    #[test]
    fn whole_sign_houses_follow_signs() {
        let chart = generate_chart(&SeriesEphemeris::new(), &delhi_birth(), &options()).unwrap();
        let lagna_sign = rashi_from_longitude(chart.lagna.sidereal_longitude).rashi_index;
        for p in chart.planets.values() {
            let sign = rashi_from_longitude(p.sidereal_longitude).rashi_index;
            assert_eq!(p.house, (sign + 12 - lagna_sign) % 12 + 1);
        }
    }

    #[test]
    fn divisional_selection_is_honored() {
        let mut opts = options();
        opts.amshas = vec![Amsha::D9];
        let chart = generate_chart(&SeriesEphemeris::new(), &delhi_birth(), &opts).unwrap();
        assert_eq!(chart.divisional_charts.keys().collect::<Vec<_>>(), ["D9"]);
        let d9 = chart.divisional_charts.get("D9").unwrap();
        assert_eq!(d9.len(), 10);
        assert!(d9.get("Lagna").is_some());
    }

    #[test]
    fn polar_latitude_rejects_placidus() {
        let input = BirthInput::new(
            CivilTime::new(2000, 1, 1, 12, 0, 0.0, 0.0).unwrap(),
            GeoLocation::new(80.0, 0.0, 0.0).unwrap(),
        );
        let opts = options().with_house_system(BhavaSystem::Placidus);
        assert!(matches!(
            generate_chart(&SeriesEphemeris::new(), &input, &opts),
            Err(ChartError::Vedic(kundali_vedic_base::VedicError::HouseSystemUndefined(_)))
        ));
    }

    #[test]
    fn single_sections_match_full_chart() {
        let eph = SeriesEphemeris::new();
        let chart = generate_chart(&eph, &delhi_birth(), &options()).unwrap();
        let panchang = generate_panchang(&eph, &delhi_birth(), &options()).unwrap();
        let dasha = generate_dasha(&eph, &delhi_birth(), &options()).unwrap();
        assert_eq!(panchang, chart.panchang);
        assert_eq!(dasha, chart.dasha);
    }

    #[test]
    fn meta_echoes_input() {
        let chart = generate_chart(&SeriesEphemeris::new(), &delhi_birth(), &options()).unwrap();
        let m = &chart.meta;
        assert_eq!(m.input.date, "1990-06-15");
        assert_eq!(m.input.time, "10:30:00");
        assert_eq!(m.input.local_time, "1990-06-15T10:30:00+05:30");
        assert_eq!(m.input.house_system, "whole_sign");
        assert_eq!(m.input.ayanamsa, "lahiri");
        assert!(!m.input.unknown_birth_time);
        assert!((m.delta_t_seconds - 56.9).abs() < 1.0);
        assert!((m.obliquity - 23.442).abs() < 0.01);
    }
}
