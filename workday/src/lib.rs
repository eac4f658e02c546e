//! # workday
//!
//! Workday arithmetic for spreadsheet `NETWORKDAYS` / `WORKDAY` functions.
//!
//! This crate is a **façade** over the workspace crates.  Dates are
//! spreadsheet serial numbers; the two free functions below use the 1900 date
//! system and the Saturday + Sunday weekend.  Build a
//! [`WorkdayCalculator`](time::WorkdayCalculator) for the 1904 system or a
//! different weekend.
//!
//! ## Quick start
//!
//! ```rust
//! // 2023-01-02 (Monday) through 2023-01-08 (Sunday)
//! assert_eq!(workday::count_workdays(44_928.0, 44_934.0, &[]).unwrap(), 5);
//!
//! // one workday after Monday, with Tuesday a holiday, is Wednesday
//! assert_eq!(workday::advance_workdays(44_928.0, 1, &[44_929.0]).unwrap(), 44_930.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and settings.
pub use wd_core as core;

/// Dates, serial conversion, weekends, and the workday calculator.
pub use wd_time as time;

pub use wd_core::{Error, Result, Serial};

use wd_time::WorkdayCalculator;

/// Count the working days between `start` and `end` inclusive, skipping
/// Saturdays, Sundays, and `holidays`.
///
/// Negative when `start > end`.  See
/// [`WorkdayCalculator::count_workdays`].
pub fn count_workdays(start: Serial, end: Serial, holidays: &[Serial]) -> Result<i32> {
    WorkdayCalculator::new().count_workdays(start, end, holidays)
}

/// Return the serial date `count` working days away from `start`, skipping
/// Saturdays, Sundays, and `holidays`.
///
/// See [`WorkdayCalculator::advance_workdays`].
pub fn advance_workdays(start: Serial, count: i32, holidays: &[Serial]) -> Result<Serial> {
    WorkdayCalculator::new().advance_workdays(start, count, holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn free_functions_use_standard_weekend() {
        // 2024-03-29 (Good Friday) as a holiday, Thursday through Tuesday
        let thu = 45_379.0;
        let tue = 45_384.0;
        assert_eq!(count_workdays(thu, tue, &[thu + 1.0]).unwrap(), 3);
        assert_relative_eq!(advance_workdays(thu, 1, &[thu + 1.0]).unwrap(), thu + 4.0);
    }

    #[test]
    fn errors_surface_from_conversion() {
        assert!(matches!(
            count_workdays(f64::NAN, 1.0, &[]),
            Err(Error::InvalidSerial(_))
        ));
    }
}
