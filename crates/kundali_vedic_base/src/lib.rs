//! Vedic calculations built on the ephemeris outputs.
//!
//! This crate provides:
//! - Ayanamsha computation (Lahiri, Raman, Krishnamurti, Fagan-Bradley)
//! - Rashi, nakshatra and graha classification
//! - Lagna and bhava (house) division
//! - Sunrise/sunset and the panchang limbs
//! - Vimshottari dasha and divisional (amsha) charts
//! - Varshphal: solar return, Muntha, sahams, Pancha-vargiya bala, Mudda dasha
//!
//! Every computation is a pure function of its inputs.

pub mod amsha;
pub mod ayanamsha;
pub mod bhava;
pub mod bhava_types;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod panchang;
pub mod panchang_types;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod util;
pub mod varshphal;
pub mod varshphal_types;

pub use amsha::{ALL_AMSHAS, Amsha, AmshaPosition, amsha_position, amsha_rashi};
pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg, tropical_to_sidereal};
pub use bhava::{compute_bhavas, house_of};
pub use bhava_types::{ALL_BHAVA_SYSTEMS, Bhava, BhavaInput, BhavaResult, BhavaSystem};
pub use dasha::{
    CurrentDasha, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaTimeline, Mahadasha,
    VIMSHOTTARI_SEQUENCE, VimshottariConfig, nakshatra_birth_balance, vimshottari_timeline,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use lagna::{
    ascendant_deg, local_apparent_sidereal_time_deg, midheaven_deg, obliquity_of_date_deg,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use panchang::{
    compute_panchang, karana_from_elongation, local_civil_noon_jd, rahu_kala, tithi_from_elongation,
    vaar_from_jd, yoga_from_sum,
};
pub use panchang_types::{
    ALL_KARANAS, ALL_VAARS, ALL_YOGAS, Karana, KaranaInfo, Paksha, PanchangInfo, PanchangInput,
    RahuKala, TithiInfo, Vaar, Yoga, YogaInfo,
};
pub use rashi::{
    ALL_RASHIS, Dms, Modality, Rashi, RashiInfo, deg_to_dms, dms_to_deg, format_degrees_in_sign,
    rashi_from_longitude,
};
pub use riseset::{approximate_local_noon_jd, compute_rise_set, solar_transit_jd, sun_times};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SunTimes};
pub use util::{arc_forward, normalize_360};
pub use varshphal::{
    annual_house, current_mudda, is_day_chart, mudda_dasha, muntha, pancha_vargiya_bala, sahams,
    solar_return, varshesh,
};
pub use varshphal_types::{
    ALL_SAHAMS, BalaStrength, MUDDA_YEAR_DAYS, MUNTHA_GOOD_HOUSES, Muntha, PanchaVargiyaBala, Saham,
    SahamPoint, SignDignity, SolarReturn, SolarReturnConfig,
};
