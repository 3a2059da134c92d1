//! School-week resolution.
//!
//! Pure mapping from calendar dates to academic week indexes and
//! human-readable week range labels. No state, no I/O.

mod academic_week;

pub use academic_week::{
    month_name, resolve_week, week_range_label, AcademicWeek, WEEKS_PER_YEAR,
};
