//! Annual (Varshphal) chart generation.

use kundali_ephem::Ephemeris;
use kundali_time::now_jd_ut;
use kundali_vedic_base::{
    ALL_GRAHAS, DashaPeriod, Graha, PanchaVargiyaBala, annual_house, current_mudda,
    format_degrees_in_sign, is_day_chart, mudda_dasha, muntha, pancha_vargiya_bala,
    rashi_from_longitude, sahams, solar_return, varshesh,
};
use log::info;

use crate::chart_types::{
    BalaEntry, Instant, MuddaEntry, MunthaEntry, OrderedMap, SahamEntry, Varshphal, VarsheshEntry,
};
use crate::error::ChartError;
use crate::generate::{cast, chart_meta, house_entries, planet_entries, point_entry};
use crate::input::{BirthInput, ChartOptions};

/// Generate the annual chart for `target_year` of a native's life.
///
/// The natal chart supplies the Sun's sidereal longitude and the Lagna;
/// the annual chart is cast at the solar return for the birth location.
/// The current Mudda period is taken at `options.dasha_query_jd`, or now.
pub fn generate_varshphal<E: Ephemeris + ?Sized>(
    eph: &E,
    input: &BirthInput,
    target_year: i32,
    options: &ChartOptions,
) -> Result<Varshphal, ChartError> {
    let birth_year = input.civil.year;
    if target_year < birth_year {
        return Err(ChartError::YearBeforeBirth {
            target_year,
            birth_year,
        });
    }
    let years_elapsed = target_year - birth_year;
    let tz = input.civil.offset_hours;

    let natal = cast(eph, input.jd_ut(), &input.location, options)?;
    let natal_sun = natal.sidereal_of(Graha::Surya);
    let natal_lagna = natal.bhavas.lagna_deg;

    let sr = solar_return(
        eph,
        natal_sun,
        target_year,
        options.ayanamsha,
        &options.solar_return,
    )?;
    let annual = cast(eph, sr.jd_ut, &input.location, options)?;
    let lagna = annual.bhavas.lagna_deg;
    let longitudes = annual.sidereal_longitudes();
    let lon_of = |g: Graha| longitudes[g.index() as usize];

    let day_chart = is_day_chart(lon_of(Graha::Surya), lagna);
    let m = muntha(natal_lagna, years_elapsed, lagna);

    let bala: Vec<PanchaVargiyaBala> = ALL_GRAHAS
        .iter()
        .map(|&g| pancha_vargiya_bala(g, lon_of(g)))
        .collect();
    let lord = varshesh(lagna);
    let lord_bala = pancha_vargiya_bala(lord, lon_of(lord));

    let mudda = mudda_dasha(lon_of(Graha::Chandra), sr.jd_ut, &options.dasha);
    let query_jd = options.dasha_query_jd.unwrap_or_else(now_jd_ut);

    let out = Varshphal {
        meta: chart_meta(eph, &annual, tz, &input.location, options, false),
        target_year,
        years_elapsed,
        solar_return: Instant::new(sr.jd_ut, tz),
        natal_sun_longitude: natal_sun,
        is_day_chart: day_chart,
        lagna: point_entry(lagna, annual.bhavas.tropical_lagna_deg),
        planets: planet_entries(&annual.points, &annual.bhavas),
        houses: house_entries(&annual.bhavas),
        muntha: MunthaEntry {
            sign: m.rashi.western_name(),
            rashi: m.rashi.name(),
            longitude: m.longitude_deg,
            lord: m.lord.english_name(),
            annual_house: m.annual_house,
            natal_house: m.natal_house,
            in_good_house: m.in_good_house(),
        },
        varshesh: VarsheshEntry {
            lord: lord.english_name(),
            sign: rashi_from_longitude(lon_of(lord)).rashi.western_name(),
            house: annual_house(lon_of(lord), lagna),
            bala: bala_entry(&lord_bala),
        },
        pancha_vargiya_bala: OrderedMap(
            bala.iter()
                .map(|b| (b.graha.english_name(), bala_entry(b)))
                .collect(),
        ),
        sahams: OrderedMap(
            sahams(lagna, &longitudes, day_chart)
                .iter()
                .map(|s| {
                    let entry = SahamEntry {
                        meaning: s.saham.meaning(),
                        longitude: s.longitude_deg,
                        sign: s.rashi.western_name(),
                        degree_formatted: format_degrees_in_sign(s.longitude_deg),
                        house: annual_house(s.longitude_deg, lagna),
                    };
                    (s.saham.name(), entry)
                })
                .collect(),
        ),
        mudda_dasha: mudda.iter().map(|p| mudda_entry(p, tz)).collect(),
        current_mudda: current_mudda(&mudda, query_jd).map(|p| mudda_entry(p, tz)),
    };
    info!(
        "varshphal {target_year}: return {}, Lagna {} {}, Muntha {} (house {}), Varshesh {}",
        out.solar_return.local,
        out.lagna.sign,
        out.lagna.degree_formatted,
        out.muntha.sign,
        out.muntha.annual_house,
        out.varshesh.lord
    );
    Ok(out)
}

fn bala_entry(b: &PanchaVargiyaBala) -> BalaEntry {
    BalaEntry {
        kshetra: b.kshetra,
        kshetra_dignity: b.kshetra_dignity.name(),
        uccha: b.uccha,
        hora: b.hora,
        dreshkana: b.dreshkana,
        navamsha: b.navamsha,
        total: b.total(),
        strength: b.strength().name(),
    }
}

fn mudda_entry(p: &DashaPeriod, tz: f64) -> MuddaEntry {
    MuddaEntry {
        lord: p.graha.english_name(),
        start: Instant::new(p.start_jd, tz),
        end: Instant::new(p.end_jd, tz),
        days: p.end_jd - p.start_jd,
    }
}
