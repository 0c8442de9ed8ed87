//! Local civil date/time with a fixed UTC offset.

use chrono::Utc;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, civil_from_day_number, days_in_month};

const MS_PER_DAY: i64 = 86_400_000;

/// Local civil date/time at a fixed offset from UTC.
///
/// Always validated on construction; the offset is in hours east of
/// Greenwich and may be fractional (5.5 for IST, -3.5 for NST).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    pub offset_hours: f64,
}

impl CivilTime {
    /// Validate and build a civil time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        offset_hours: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate("day outside the month"));
        }
        if hour > 23 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        if !(-12.0..=14.0).contains(&offset_hours) {
            return Err(TimeError::InvalidTimezone(offset_hours));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset_hours,
        })
    }

    /// Local midday of a calendar date; the usual anchor when the time of day is unknown.
    pub fn local_noon(year: i32, month: u32, day: u32, offset_hours: f64) -> Result<Self, TimeError> {
        Self::new(year, month, day, 12, 0, 0.0, offset_hours)
    }

    /// Julian Day (UT) of this instant.
    pub fn to_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac) - self.offset_hours / 24.0
    }

    /// Civil time at `offset_hours` for a Julian Day (UT), rounded to the millisecond.
    pub fn from_jd_ut(jd_ut: f64, offset_hours: f64) -> Self {
        let local = jd_ut + offset_hours / 24.0 + 0.5;
        let ms_total = (local * MS_PER_DAY as f64).round() as i64;
        let day_number = ms_total.div_euclid(MS_PER_DAY);
        let ms_of_day = ms_total.rem_euclid(MS_PER_DAY);

        let (year, month, day) = civil_from_day_number(day_number);
        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset_hours,
        }
    }

    /// Same instant expressed at another offset.
    pub fn with_offset(&self, offset_hours: f64) -> Self {
        Self::from_jd_ut(self.to_jd_ut(), offset_hours)
    }

    /// `YYYY-MM-DD` of the local date.
    pub fn date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `hh:mm:ss` of the local time (seconds truncated).
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second as u32)
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let millis = ((self.second - whole as f64) * 1000.0).round() as u32;
        write!(f, "{}T{:02}:{:02}:{:02}", self.date_string(), self.hour, self.minute, whole)?;
        if millis > 0 {
            write!(f, ".{millis:03}")?;
        }
        let sign = if self.offset_hours < 0.0 { '-' } else { '+' };
        let offset_min = (self.offset_hours.abs() * 60.0).round() as u32;
        write!(f, "{sign}{:02}:{:02}", offset_min / 60, offset_min % 60)
    }
}

/// Current instant as a Julian Day (UT).
pub fn now_jd_ut() -> f64 {
    let now = Utc::now();
    let unix_s = now.timestamp() as f64 + now.timestamp_subsec_millis() as f64 / 1000.0;
    2_440_587.5 + unix_s / SECONDS_PER_DAY
}
