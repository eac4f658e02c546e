//! Global library settings.
//!
//! [`Settings`] holds the **workbook date system** flag — whether serial
//! dates are read against the 1904 epoch instead of the default 1900 one.
//! It is a process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the flag is stored behind a `Mutex` so that it can be
//! changed from any thread.  Tests that change it should use
//! [`ScopedDateSystem`] so the previous value is restored.

use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by the workday-rs library.
///
/// Only calculators built with `from_settings()` consult these values; the
/// plain constructors never read global state.
pub struct Settings {
    uses_1904_date_system: Mutex<bool>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            uses_1904_date_system: Mutex::new(false),
        })
    }

    /// Return `true` if serial dates should be read in the 1904 date system.
    pub fn uses_1904_date_system(&self) -> bool {
        *self
            .uses_1904_date_system
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Select the 1904 (`true`) or 1900 (`false`) date system.
    pub fn set_1904_date_system(&self, enabled: bool) {
        *self
            .uses_1904_date_system
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = enabled;
    }

    /// Restore the default (1900) date system.
    pub fn reset(&self) {
        self.set_1904_date_system(false);
    }
}

/// RAII guard that overrides the date-system flag and restores the previous
/// value when dropped.
///
/// ```
/// use wd_core::{ScopedDateSystem, Settings};
///
/// {
///     let _guard = ScopedDateSystem::new(true);
///     assert!(Settings::instance().uses_1904_date_system());
/// }
/// ```
#[must_use = "the previous date system is restored as soon as the guard is dropped"]
pub struct ScopedDateSystem {
    previous: bool,
}

impl ScopedDateSystem {
    /// Set the flag to `uses_1904` for the lifetime of the guard.
    pub fn new(uses_1904: bool) -> Self {
        let settings = Settings::instance();
        let previous = settings.uses_1904_date_system();
        settings.set_1904_date_system(uses_1904);
        Self { previous }
    }
}

impl Drop for ScopedDateSystem {
    fn drop(&mut self) {
        Settings::instance().set_1904_date_system(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_guard_restores_previous_value() {
        let before = Settings::instance().uses_1904_date_system();
        {
            let _guard = ScopedDateSystem::new(!before);
            assert_eq!(Settings::instance().uses_1904_date_system(), !before);
        }
        assert_eq!(Settings::instance().uses_1904_date_system(), before);
    }
}
