//! `Date` type — a whole calendar day.
//!
//! Dates are stored as a **day number**: a count of days on the proleptic
//! Gregorian calendar where day 1 is January 1, 1900.  Unlike spreadsheet
//! serial numbers there is no fictitious February 29, 1900, so the day number
//! is a true day count and the weekday follows from it directly.  Mapping to
//! and from spreadsheet serials is the job of [`crate::serial`].
//!
//! # Day number convention
//! * Day 0 = December 31, 1899 (the earliest representable date).
//! * Day 1 = January 1, 1900 (a Monday).
//! * Day 2 958 464 = December 31, 9999 (the latest representable date).

use crate::weekday::Weekday;
use wd_core::ensure;
use wd_core::errors::{Error, Result};

/// A calendar date represented as a day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: December 31, 1899.
    pub const MIN: Date = Date(0);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(2_958_464);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a day number.
    ///
    /// Returns an error if `n` lies outside [`Date::MIN`]..=[`Date::MAX`].
    pub fn from_day_number(n: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&n) {
            return Err(Error::Date(format!(
                "day number {n} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(n))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        ensure!((1..=12).contains(&month), "month {month} out of range [1, 12]");
        if !(1899..=9999).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1899, 9999]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Self::from_day_number(day_number_from_ymd(year, month, day))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the day number (days since December 31, 1899).
    pub fn day_number(&self) -> i32 {
        self.0
    }

    /// Return the year (1899–9999).
    pub fn year(&self) -> u16 {
        ymd_from_day_number(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_day_number(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_day_number(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_day_number(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_day_number(self.0);
        let mut doy = d as u16;
        for mon in 1..m {
            doy += days_in_month(y, mon) as u16;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // day 1 (1900-01-01) is a Monday
        Weekday::ALL[(self.0 - 1).rem_euclid(7) as usize]
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let n = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {} + {n} overflows", self.0))
        })?;
        Self::from_day_number(n)
    }

    /// The next calendar day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// The previous calendar day.
    pub fn pred(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_day_number(self.0);
        let mon = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ][m as usize - 1];
        write!(f, "{d} {mon} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_day_number(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Convert (year, month, day) to a day number.
///
/// Day 1 = 1900-01-01.  Valid for years 1899 and later.
fn day_number_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year
    let mut n = (y - 1900) * 365;
    // Leap years in [1900, year); 1900 itself is not one
    n += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    n += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        n += 1;
    }
    n + d
}

/// Decompose a day number into (year, month, day).
fn ymd_from_day_number(n: i32) -> (u16, u8, u8) {
    // Estimate year, then adjust until `n` falls within it
    let mut y = (n / 365 + 1900) as u16;
    loop {
        if n < day_number_from_ymd(y, 1, 1) {
            y -= 1;
        } else if n >= day_number_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = n - day_number_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.day_number(), 1);
        assert_eq!(d.weekday(), Weekday::Monday);
        assert_eq!(Date::MIN.ymd(), (1899, 12, 31));
        assert_eq!(Date::MIN.weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Date::from_ymd(9999, 12, 31).unwrap(), Date::MAX);
        assert_eq!(Date::from_ymd(1899, 12, 31).unwrap(), Date::MIN);
        assert!(Date::from_ymd(1899, 12, 30).is_err());
        assert!(Date::MAX.succ().is_err());
        assert!(Date::MIN.pred().is_err());
        assert!(Date::from_day_number(-1).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 2, 28),
            (1900, 3, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2023, 1, 2),
            (2024, 6, 15),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.year(), y);
            assert_eq!(date.month(), m);
            assert_eq!(date.day_of_month(), d);
        }
    }

    #[test]
    fn test_1900_is_not_leap() {
        assert!(Date::from_ymd(1900, 2, 29).is_err());
        let feb28 = Date::from_ymd(1900, 2, 28).unwrap();
        assert_eq!(feb28.succ().unwrap(), Date::from_ymd(1900, 3, 1).unwrap());
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 2024-01-06 is a Saturday
        let d2 = Date::from_ymd(2024, 1, 6).unwrap();
        assert_eq!(d2.weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_invalid_components() {
        assert!(matches!(
            Date::from_ymd(2024, 13, 1),
            Err(Error::Precondition(_))
        ));
        assert!(matches!(Date::from_ymd(2023, 2, 29), Err(Error::Date(_))));
        assert!(matches!(Date::from_ymd(2024, 4, 0), Err(Error::Date(_))));
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.month(), 2);
        assert_eq!(d2.day_of_month(), 1);
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
        assert_eq!(d.days_between(d2), 31);
        assert_eq!(d2.day_of_year(), 32);
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(2023, 1, 2).unwrap();
        assert_eq!(d.to_string(), "2 January 2023");
        assert_eq!(format!("{d:?}"), "Date(2023-01-02)");
    }
}
