//! Spreadsheet serial-date conversion.
//!
//! Spreadsheets store dates as a real-valued day count from a workbook epoch.
//! The integer part selects the day, the fractional part is a time of day.
//! [`SerialConverter`] is the boundary between those serials and [`Date`];
//! [`DateSystem`] implements it for the two epochs spreadsheets use.
//!
//! # The 1900 date system
//! Serial 1 is January 1, 1900.  The system inherits the Lotus 1-2-3 leap
//! year bug: serial 60 is the fictitious February 29, 1900.  Serial 60 resolves
//! to March 1, 1900 (the same day as serial 61), so it is the one whole-day
//! serial that does not round-trip.  Serial 0 is December 31, 1899.
//!
//! # The 1904 date system
//! Serial 0 is January 1, 1904.  There is no fictitious day.

use crate::date::Date;
use wd_core::errors::{Error, Result};
use wd_core::{Serial, Settings};

/// Converts between spreadsheet serial dates and calendar dates.
///
/// Implementations must be deterministic and must not depend on a time zone
/// or on "now".
pub trait SerialConverter: std::fmt::Debug + Send + Sync {
    /// Resolve `serial` to the calendar day it falls on.
    ///
    /// The fractional part is truncated (`floor`).  Non-finite, negative, and
    /// out-of-range serials are rejected with [`Error::InvalidSerial`].
    fn to_date(&self, serial: Serial) -> Result<Date>;

    /// Return the whole-day serial of `date`.
    fn to_serial(&self, date: Date) -> Result<Serial>;

    /// Return the serial of the given calendar day.
    fn serial_from_ymd(&self, year: u16, month: u8, day: u8) -> Result<Serial> {
        self.to_serial(Date::from_ymd(year, month, day)?)
    }
}

/// Day number of 1904-01-01, the 1904 system's serial 0.
const EPOCH_1904: i32 = 1461;

/// Workbook date system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateSystem {
    /// Serial 1 = 1900-01-01, with the fictitious 1900-02-29 at serial 60.
    #[default]
    Excel1900,
    /// Serial 0 = 1904-01-01.
    Excel1904,
}

impl DateSystem {
    /// The date system selected in the global [`Settings`].
    pub fn from_settings() -> Self {
        if Settings::instance().uses_1904_date_system() {
            DateSystem::Excel1904
        } else {
            DateSystem::Excel1900
        }
    }

    /// The largest valid serial (December 31, 9999).
    pub fn max_serial(&self) -> Serial {
        match self {
            DateSystem::Excel1900 => 2_958_465.0,
            DateSystem::Excel1904 => 2_957_003.0,
        }
    }
}

impl SerialConverter for DateSystem {
    fn to_date(&self, serial: Serial) -> Result<Date> {
        if !serial.is_finite() || serial < 0.0 || serial >= self.max_serial() + 1.0 {
            return Err(Error::InvalidSerial(serial));
        }
        let whole = serial.floor() as i32;
        let day_number = match self {
            DateSystem::Excel1900 if whole > 60 => whole - 1,
            DateSystem::Excel1900 => whole,
            DateSystem::Excel1904 => whole + EPOCH_1904,
        };
        Date::from_day_number(day_number)
    }

    fn to_serial(&self, date: Date) -> Result<Serial> {
        let n = date.day_number();
        let serial = match self {
            DateSystem::Excel1900 if n >= 60 => n + 1,
            DateSystem::Excel1900 => n,
            DateSystem::Excel1904 => {
                if n < EPOCH_1904 {
                    return Err(Error::Date(format!(
                        "{date} precedes the 1904 date system epoch"
                    )));
                }
                n - EPOCH_1904
            }
        };
        Ok(serial as Serial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;
    use approx::assert_relative_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn excel_1900_known_serials() {
        let sys = DateSystem::Excel1900;
        assert_relative_eq!(sys.to_serial(date(1900, 1, 1)).unwrap(), 1.0);
        assert_relative_eq!(sys.to_serial(date(1900, 2, 28)).unwrap(), 59.0);
        assert_relative_eq!(sys.to_serial(date(1900, 3, 1)).unwrap(), 61.0);
        assert_relative_eq!(sys.to_serial(date(2023, 1, 2)).unwrap(), 44_928.0);
        assert_relative_eq!(sys.to_serial(date(9999, 12, 31)).unwrap(), 2_958_465.0);
    }

    #[test]
    fn excel_1900_fictitious_leap_day() {
        let sys = DateSystem::Excel1900;
        assert_eq!(sys.to_date(59.0).unwrap(), date(1900, 2, 28));
        assert_eq!(sys.to_date(60.0).unwrap(), date(1900, 3, 1));
        assert_eq!(sys.to_date(61.0).unwrap(), date(1900, 3, 1));
        assert_relative_eq!(sys.to_serial(sys.to_date(60.0).unwrap()).unwrap(), 61.0);
    }

    #[test]
    fn excel_1904_epoch() {
        let sys = DateSystem::Excel1904;
        assert_eq!(sys.to_date(0.0).unwrap(), date(1904, 1, 1));
        assert_relative_eq!(sys.to_serial(date(2023, 1, 2)).unwrap(), 43_466.0);
        assert!(sys.to_serial(date(1903, 12, 31)).is_err());
    }

    #[test]
    fn fraction_is_truncated() {
        let sys = DateSystem::Excel1900;
        assert_eq!(sys.to_date(44_928.99).unwrap(), date(2023, 1, 2));
        assert_eq!(sys.to_date(44_928.99).unwrap().weekday(), Weekday::Monday);
    }

    #[test]
    fn invalid_serials_rejected() {
        let sys = DateSystem::Excel1900;
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0, -0.5, 2_958_466.0] {
            assert!(
                matches!(sys.to_date(bad), Err(Error::InvalidSerial(_))),
                "{bad} should be rejected"
            );
        }
        assert!(sys.to_date(2_958_465.5).is_ok());
    }

    #[test]
    fn serial_from_ymd_uses_system() {
        assert_relative_eq!(
            DateSystem::Excel1900.serial_from_ymd(1904, 1, 1).unwrap(),
            1_462.0
        );
        assert_relative_eq!(
            DateSystem::Excel1904.serial_from_ymd(1904, 1, 1).unwrap(),
            0.0
        );
    }
}
