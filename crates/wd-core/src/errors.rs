//! Error types for workday-rs.
//!
//! All fallible operations in the workspace return the single
//! `thiserror`-derived [`Error`] enum defined here.  The [`ensure!`] macro
//! is the early-return shorthand for a violated precondition.
//!
//! [`ensure!`]: crate::ensure

use thiserror::Error;

/// The top-level error type used throughout workday-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Calendar-date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// A serial date that the active date system cannot represent
    /// (non-finite, negative, or past 9999-12-31).
    #[error("invalid serial date: {0}")]
    InvalidSerial(f64),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout workday-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn positive(x: f64) -> wd_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
