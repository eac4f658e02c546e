//! `Weekend` — the non-working days of a 7-day week.
//!
//! Spreadsheet "weekend number" codes select one of fourteen fixed patterns:
//!
//! | code | days                | code | days      |
//! |------|---------------------|------|-----------|
//! | 1    | Saturday, Sunday    | 11   | Sunday    |
//! | 2    | Sunday, Monday      | 12   | Monday    |
//! | 3    | Monday, Tuesday     | 13   | Tuesday   |
//! | 4    | Tuesday, Wednesday  | 14   | Wednesday |
//! | 5    | Wednesday, Thursday | 15   | Thursday  |
//! | 6    | Thursday, Friday    | 16   | Friday    |
//! | 7    | Friday, Saturday    | 17   | Saturday  |

use crate::weekday::Weekday;
use wd_core::errors::{Error, Result};

use crate::weekday::Weekday::{Friday, Monday, Saturday, Sunday, Thursday, Tuesday, Wednesday};

/// A weekend pattern: one or two distinct non-working weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weekend {
    /// Saturday and Sunday (code 1).
    #[default]
    SaturdaySunday,
    /// Sunday and Monday (code 2).
    SundayMonday,
    /// Monday and Tuesday (code 3).
    MondayTuesday,
    /// Tuesday and Wednesday (code 4).
    TuesdayWednesday,
    /// Wednesday and Thursday (code 5).
    WednesdayThursday,
    /// Thursday and Friday (code 6).
    ThursdayFriday,
    /// Friday and Saturday (code 7).
    FridaySaturday,
    /// Sunday only (code 11).
    SundayOnly,
    /// Monday only (code 12).
    MondayOnly,
    /// Tuesday only (code 13).
    TuesdayOnly,
    /// Wednesday only (code 14).
    WednesdayOnly,
    /// Thursday only (code 15).
    ThursdayOnly,
    /// Friday only (code 16).
    FridayOnly,
    /// Saturday only (code 17).
    SaturdayOnly,
}

impl Weekend {
    /// The standard Saturday + Sunday weekend.
    pub const STANDARD: Weekend = Weekend::SaturdaySunday;

    /// Every pattern, in code order.
    pub const ALL: [Weekend; 14] = [
        Weekend::SaturdaySunday,
        Weekend::SundayMonday,
        Weekend::MondayTuesday,
        Weekend::TuesdayWednesday,
        Weekend::WednesdayThursday,
        Weekend::ThursdayFriday,
        Weekend::FridaySaturday,
        Weekend::SundayOnly,
        Weekend::MondayOnly,
        Weekend::TuesdayOnly,
        Weekend::WednesdayOnly,
        Weekend::ThursdayOnly,
        Weekend::FridayOnly,
        Weekend::SaturdayOnly,
    ];

    /// Look up a weekend number code.
    ///
    /// Returns [`Error::InvalidArgument`] for codes outside 1–7 and 11–17.
    pub fn from_code(code: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|w| w.code() == code)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown weekend code {code}")))
    }

    /// The weekend number code of this pattern.
    pub fn code(&self) -> u8 {
        match self {
            Weekend::SaturdaySunday => 1,
            Weekend::SundayMonday => 2,
            Weekend::MondayTuesday => 3,
            Weekend::TuesdayWednesday => 4,
            Weekend::WednesdayThursday => 5,
            Weekend::ThursdayFriday => 6,
            Weekend::FridaySaturday => 7,
            Weekend::SundayOnly => 11,
            Weekend::MondayOnly => 12,
            Weekend::TuesdayOnly => 13,
            Weekend::WednesdayOnly => 14,
            Weekend::ThursdayOnly => 15,
            Weekend::FridayOnly => 16,
            Weekend::SaturdayOnly => 17,
        }
    }

    /// The non-working days of this pattern.
    pub fn days(&self) -> &'static [Weekday] {
        match self {
            Weekend::SaturdaySunday => &[Saturday, Sunday],
            Weekend::SundayMonday => &[Sunday, Monday],
            Weekend::MondayTuesday => &[Monday, Tuesday],
            Weekend::TuesdayWednesday => &[Tuesday, Wednesday],
            Weekend::WednesdayThursday => &[Wednesday, Thursday],
            Weekend::ThursdayFriday => &[Thursday, Friday],
            Weekend::FridaySaturday => &[Friday, Saturday],
            Weekend::SundayOnly => &[Sunday],
            Weekend::MondayOnly => &[Monday],
            Weekend::TuesdayOnly => &[Tuesday],
            Weekend::WednesdayOnly => &[Wednesday],
            Weekend::ThursdayOnly => &[Thursday],
            Weekend::FridayOnly => &[Friday],
            Weekend::SaturdayOnly => &[Saturday],
        }
    }

    /// Return `true` if `day` is a non-working day in this pattern.
    pub fn contains(&self, day: Weekday) -> bool {
        self.days().contains(&day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_is_saturday_sunday() {
        assert_eq!(Weekend::default(), Weekend::STANDARD);
        assert_eq!(Weekend::STANDARD.code(), 1);
        for wd in Weekday::ALL {
            assert_eq!(Weekend::STANDARD.contains(wd), wd.is_weekend());
        }
    }

    #[test]
    fn codes_roundtrip() {
        for w in Weekend::ALL {
            assert_eq!(Weekend::from_code(w.code()).unwrap(), w);
        }
        for bad in [0, 8, 10, 18, 255] {
            assert!(matches!(
                Weekend::from_code(bad),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn patterns_have_distinct_members() {
        let mut seen = HashSet::new();
        for w in Weekend::ALL {
            let days = w.days();
            assert!((1..=2).contains(&days.len()), "{w:?}");
            let unique: HashSet<_> = days.iter().collect();
            assert_eq!(unique.len(), days.len(), "{w:?} repeats a day");
            let mut key: Vec<_> = days.to_vec();
            key.sort();
            assert!(seen.insert(key), "{w:?} duplicates another pattern");
        }
    }

    #[test]
    fn two_day_codes_are_consecutive() {
        for code in 1..=7 {
            let days = Weekend::from_code(code).unwrap().days();
            assert_eq!(days[0].succ(), days[1]);
        }
    }
}
