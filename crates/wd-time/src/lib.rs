//! # wd-time
//!
//! Date, serial-date, weekend, and workday calculator types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Spreadsheet serial-date conversion (`SerialConverter`, `DateSystem`).
pub mod serial;

/// `Weekday` — day of the week.
pub mod weekday;

/// `Weekend` — weekend patterns and their weekend-number codes.
pub mod weekend;

/// `WorkdayCalculator` — workday counting and advancing.
pub mod workday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use serial::{DateSystem, SerialConverter};
pub use weekday::Weekday;
pub use weekend::Weekend;
pub use workday::WorkdayCalculator;
