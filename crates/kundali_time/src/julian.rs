//! Julian Day ↔ proleptic Gregorian calendar.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7. The Gregorian
//! rule is applied to every date; there is no Julian-calendar cutover.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a calendar date to a Julian Date.
///
/// `day` may carry a fractional part (e.g. 15.4375 = 10:30 on the 15th).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let (year, month, day) = civil_from_day_number(z as i64);
    (year, month, day as f64 + f)
}

/// Calendar date of the civil day whose noon is Julian Day number `z`.
pub(crate) fn civil_from_day_number(z: i64) -> (i32, u32, u32) {
    let z = z as f64;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day as u32)
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn j2000_epoch() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 Oct 4.81 (Sputnik 1)
        assert_abs_diff_eq!(calendar_to_jd(1957, 10, 4.81), 2_436_116.31, epsilon = 1e-9);
    }

    #[test]
    fn january_february_shift() {
        assert_eq!(calendar_to_jd(1988, 1, 27.0), 2_447_187.5);
        assert_eq!(calendar_to_jd(2000, 2, 29.0) + 1.0, calendar_to_jd(2000, 3, 1.0));
    }

    #[test]
    fn proleptic_before_1582() {
        // No cutover: 1582-10-04 and 1582-10-15 are 11 days apart.
        let d = calendar_to_jd(1582, 10, 15.0) - calendar_to_jd(1582, 10, 4.0);
        assert_eq!(d, 11.0);
    }

    #[test]
    fn inverse_recovers_date() {
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert_abs_diff_eq!(d, 4.81, epsilon = 1e-6);

        let (y, m, d) = jd_to_calendar(calendar_to_jd(1600, 12, 31.25));
        assert_eq!((y, m), (1600, 12));
        assert_abs_diff_eq!(d, 31.25, epsilon = 1e-9);
    }

    #[test]
    fn centuries() {
        assert_eq!(julian_centuries(J2000_JD), 0.0);
        assert_abs_diff_eq!(julian_centuries(J2000_JD + 36_525.0), 1.0);
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(1996));
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2001, 2), 28);
        assert_eq!(days_in_month(2001, 13), 0);
    }

    proptest! {
        #[test]
        fn calendar_survives_jd(year in 1000i32..3000, month in 1u32..=12, day in 1u32..=31, frac in 0.0f64..0.99) {
            let day = day.min(days_in_month(year, month));
            let (y, m, d) = jd_to_calendar(calendar_to_jd(year, month, day as f64 + frac));
            prop_assert_eq!((y, m), (year, month));
            prop_assert!((d - (day as f64 + frac)).abs() < 1e-6);
        }
    }
}
