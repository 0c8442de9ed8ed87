//! Civil time, Julian Day and sidereal time conversions.
//!
//! This crate provides:
//! - Proleptic Gregorian calendar ↔ Julian Day conversion
//! - `CivilTime`, a validated local date/time with a fixed UTC offset
//! - ΔT (TT − UT) for evaluating ephemerides in dynamical time
//! - Greenwich mean and local sidereal time

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilTime, now_jd_ut};
pub use delta_t::{decimal_year, delta_t_seconds, jd_ut_to_jde};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year,
    jd_to_calendar, julian_centuries,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
