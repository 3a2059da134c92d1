//! Clock port.
//!
//! The current-week path depends on "today"; keeping the date behind a
//! port makes week resolution deterministic in tests.

use chrono::NaiveDate;

/// Calendar date provider.
pub trait Clock: Send + Sync {
    /// Returns today's date in the service's local timezone.
    fn today(&self) -> NaiveDate;
}
