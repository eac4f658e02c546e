//! `WorkdayCalculator` — workday counting and advancing over serial dates.
//!
//! The calculator answers the two questions behind the `NETWORKDAYS` and
//! `WORKDAY` spreadsheet functions:
//!
//! * [`count_workdays`](WorkdayCalculator::count_workdays): how many working
//!   days fall in an inclusive range of serial dates;
//! * [`advance_workdays`](WorkdayCalculator::advance_workdays): which serial
//!   date is reached after stepping a number of working days.
//!
//! A working day is any day whose weekday is not in the active [`Weekend`]
//! and that is not listed as a holiday.  All serial ↔ calendar conversion
//! goes through a [`SerialConverter`].
//!
//! # Example
//! ```
//! use wd_time::{SerialConverter, WorkdayCalculator};
//!
//! let calc = WorkdayCalculator::new();
//! let monday = calc.converter().serial_from_ymd(2023, 1, 2).unwrap();
//! let sunday = calc.converter().serial_from_ymd(2023, 1, 8).unwrap();
//! assert_eq!(calc.count_workdays(monday, sunday, &[]).unwrap(), 5);
//! ```

use tracing::{debug, trace};

use crate::date::Date;
use crate::serial::{DateSystem, SerialConverter};
use crate::weekday::Weekday;
use crate::weekend::Weekend;
use wd_core::errors::Result;
use wd_core::Serial;

/// Stateless workday arithmetic over spreadsheet serial dates.
///
/// The value only carries configuration (the serial converter and the
/// weekend pattern) and is `Copy` when the converter is, so it can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdayCalculator<C = DateSystem> {
    converter: C,
    weekend: Weekend,
}

impl WorkdayCalculator<DateSystem> {
    /// A calculator for the 1900 date system and the Saturday + Sunday weekend.
    pub const fn new() -> Self {
        Self {
            converter: DateSystem::Excel1900,
            weekend: Weekend::STANDARD,
        }
    }

    /// A calculator for the date system selected in the global settings.
    pub fn from_settings() -> Self {
        Self::with_converter(DateSystem::from_settings())
    }
}

impl Default for WorkdayCalculator<DateSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SerialConverter> WorkdayCalculator<C> {
    /// A calculator using `converter` and the Saturday + Sunday weekend.
    pub fn with_converter(converter: C) -> Self {
        Self {
            converter,
            weekend: Weekend::STANDARD,
        }
    }

    /// Replace the weekend pattern.
    pub fn with_weekend(mut self, weekend: Weekend) -> Self {
        self.weekend = weekend;
        self
    }

    /// The serial converter in use.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// The weekend pattern in use.
    pub fn weekend(&self) -> Weekend {
        self.weekend
    }

    /// Count the working days in the inclusive range between `start` and `end`.
    ///
    /// The bounds may be given in either order.  The result is positive (or
    /// zero) when `start <= end` and negated otherwise, so
    /// `count_workdays(a, b, h) == -count_workdays(b, a, h)`.
    ///
    /// A holiday reduces the count only if it lies within the range and does
    /// not already fall on a weekend day.  Duplicate holidays are counted once
    /// per entry.
    ///
    /// # Errors
    /// Fails if `start`, `end`, or an in-range holiday is not a valid serial
    /// for the converter.
    pub fn count_workdays(&self, start: Serial, end: Serial, holidays: &[Serial]) -> Result<i32> {
        trace!(start, end, holidays = holidays.len(), "count_workdays");
        let from = self.converter.to_date(start)?;
        let to = self.converter.to_date(end)?;
        let span = (start.max(end).floor() - start.min(end).floor()) as i32 + 1;
        let total = if start <= end { span } else { -span };

        let weekend_days = self
            .weekend
            .days()
            .iter()
            .map(|&day| self.past_days_of_week(start, end, day))
            .sum::<Result<i32>>()?;
        let holidays_off = self.non_weekend_holidays(start, end, holidays)?;

        let workdays = total - weekend_days - holidays_off;
        debug!(
            %from,
            %to,
            total,
            weekend_days,
            holidays_off,
            workdays,
            "counted workdays"
        );
        Ok(workdays)
    }

    /// Return the serial reached by stepping `count` working days from `start`.
    ///
    /// Steps go forward for a positive `count` and backward for a negative
    /// one.  The start day itself is never tested, so `count == 0` returns
    /// `start` truncated to its whole day.
    ///
    /// # Errors
    /// Fails if `start` is not a valid serial, or if the walk leaves the
    /// representable date range.
    pub fn advance_workdays(&self, start: Serial, count: i32, holidays: &[Serial]) -> Result<Serial> {
        let reached = self.advance_workdays_to_date(start, count, holidays)?;
        self.converter.to_serial(reached)
    }

    /// Like [`advance_workdays`](Self::advance_workdays), but return the
    /// calendar date reached.
    pub fn advance_workdays_to_date(
        &self,
        start: Serial,
        count: i32,
        holidays: &[Serial],
    ) -> Result<Date> {
        trace!(start, count, holidays = holidays.len(), "advance_workdays");
        let step: i32 = if count < 0 { -1 } else { 1 };
        let mut cursor = self.converter.to_date(start)?;
        let mut serial = self.converter.to_serial(cursor)?;
        let mut remaining = count;
        while remaining != 0 {
            cursor = cursor.add_days(step)?;
            serial += step as Serial;
            if !self.weekend.contains(cursor.weekday()) && !Self::is_holiday(serial, holidays) {
                remaining -= step;
            }
        }
        debug!(start, count, reached = %cursor, "advanced workdays");
        Ok(cursor)
    }

    /// Count the days equal to `day` in the inclusive range of whole days
    /// between `start` and `end`, negated when `start > end`.
    pub(crate) fn past_days_of_week(&self, start: Serial, end: Serial, day: Weekday) -> Result<i32> {
        let first = start.min(end).floor() as i32;
        let last = start.max(end).floor() as i32;
        let mut past = 0;
        for serial in first..=last {
            if self.converter.to_date(serial as Serial)?.weekday() == day {
                past += 1;
            }
        }
        Ok(if start <= end { past } else { -past })
    }

    /// Count the holidays inside the closed range between `start` and `end`
    /// that do not fall on a weekend day, negated when `start > end`.
    pub(crate) fn non_weekend_holidays(
        &self,
        start: Serial,
        end: Serial,
        holidays: &[Serial],
    ) -> Result<i32> {
        let (lo, hi) = (start.min(end), start.max(end));
        let mut count = 0;
        for &holiday in holidays {
            if Self::is_in_range(lo, hi, holiday) && !self.is_weekend(holiday)? {
                count += 1;
            }
        }
        Ok(if start <= end { count } else { -count })
    }

    /// Return `true` if `serial` falls on a day of the active weekend.
    pub fn is_weekend(&self, serial: Serial) -> Result<bool> {
        Ok(self.weekend.contains(self.converter.to_date(serial)?.weekday()))
    }

    /// Return `true` if any holiday rounds to the same whole day as `serial`.
    ///
    /// Rounding is to the nearest integer with ties away from zero
    /// ([`f64::round`]).
    pub fn is_holiday(serial: Serial, holidays: &[Serial]) -> bool {
        let day = serial.round();
        holidays.iter().any(|h| h.round() == day)
    }

    /// Return `true` if `start <= serial <= end`.  The bounds must already be
    /// ordered.
    pub(crate) fn is_in_range(start: Serial, end: Serial, serial: Serial) -> bool {
        (start..=end).contains(&serial)
    }
}
