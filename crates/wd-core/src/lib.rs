//! # wd-core
//!
//! Core types, error definitions, and settings for workday-rs.
//!
//! This crate provides the building blocks shared across the workspace:
//! primitive type aliases, the error hierarchy with its `ensure!` macro, and
//! the process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (workbook date system).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A spreadsheet serial date: a day count from the workbook epoch.
///
/// The fractional part, if any, is a time of day and is ignored by whole-day
/// calculations.
pub type Serial = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedDateSystem, Settings};
