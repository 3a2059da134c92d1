//! Academic week derivation.
//!
//! The school year is anchored at September 15 and modeled as exactly
//! 40 seven-day weeks. Every calendar date resolves to a week in [1, 40];
//! out-of-year dates clamp to the boundary weeks instead of failing.

use chrono::{Datelike, Duration, NaiveDate};

/// Number of weeks in a modeled school year.
pub const WEEKS_PER_YEAR: u8 = 40;

/// Month of the school-year anchor date.
const ANCHOR_MONTH: u32 = 9;

/// Day of the school-year anchor date.
const ANCHOR_DAY: u32 = 15;

/// A derived academic week: the bounded index plus its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcademicWeek {
    week_number: u8,
    range_label: String,
}

impl AcademicWeek {
    /// Derives the academic week containing the given date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            week_number: resolve_week(date),
            range_label: week_range_label(date),
        }
    }

    /// Returns the week index in [1, 40].
    pub fn week_number(&self) -> u8 {
        self.week_number
    }

    /// Returns the display label for the week's calendar range.
    pub fn range_label(&self) -> &str {
        &self.range_label
    }
}

/// Resolves the academic week index for a calendar date.
///
/// The anchor is September 15 of the school year containing `date`:
/// dates before September 15 count against the previous year's anchor.
/// Dates that still fall before the anchor clamp to week 1; dates past
/// the modeled year clamp to week 40.
pub fn resolve_week(date: NaiveDate) -> u8 {
    let anchor = anchor_for(date);
    let days_since_anchor = (date - anchor).num_days();

    if days_since_anchor < 0 {
        // Tail of the previous reckoning, clamp instead of signaling.
        return 1;
    }

    let week_number = days_since_anchor / 7 + 1;
    week_number.min(i64::from(WEEKS_PER_YEAR)) as u8
}

/// Renders the calendar range of `date`'s week.
///
/// The week runs Monday through the following Sunday; a Sunday input
/// belongs to the span starting the next day. The label carries the start
/// day, the end day, and the END date's month name, so a week spanning a
/// month boundary is labeled with the later month.
pub fn week_range_label(date: NaiveDate) -> String {
    let shift = 1 - i64::from(date.weekday().num_days_from_sunday());
    let week_start = date + Duration::days(shift);
    let week_end = week_start + Duration::days(6);

    format!(
        "{}–{} {}",
        week_start.day(),
        week_end.day(),
        month_name(week_end.month())
    )
}

/// Turkish month name for a 1-based month index, empty for out of range.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Ocak",
        2 => "Şubat",
        3 => "Mart",
        4 => "Nisan",
        5 => "Mayıs",
        6 => "Haziran",
        7 => "Temmuz",
        8 => "Ağustos",
        9 => "Eylül",
        10 => "Ekim",
        11 => "Kasım",
        12 => "Aralık",
        _ => "",
    }
}

/// September 15 of the school year containing `date`.
fn anchor_for(date: NaiveDate) -> NaiveDate {
    let year = if (date.month(), date.day()) < (ANCHOR_MONTH, ANCHOR_DAY) {
        date.year() - 1
    } else {
        date.year()
    };

    NaiveDate::from_ymd_opt(year, ANCHOR_MONTH, ANCHOR_DAY)
        .expect("September 15 is a valid date in every year")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Week resolution

    #[test]
    fn anchor_date_is_week_one() {
        assert_eq!(resolve_week(date(2024, 9, 15)), 1);
        assert_eq!(resolve_week(date(2023, 9, 15)), 1);
    }

    #[test]
    fn seventh_day_after_anchor_is_still_week_one() {
        assert_eq!(resolve_week(date(2024, 9, 21)), 1);
    }

    #[test]
    fn eighth_day_after_anchor_is_week_two() {
        assert_eq!(resolve_week(date(2024, 9, 22)), 2);
    }

    #[test]
    fn dates_before_september_use_previous_year_anchor() {
        // 2025-01-06 is 113 days after 2024-09-15, so week 17.
        assert_eq!(resolve_week(date(2025, 1, 6)), 17);
    }

    #[test]
    fn early_september_uses_previous_year_anchor() {
        // 2024-09-14 counts against 2023-09-15, far past week 40.
        assert_eq!(resolve_week(date(2024, 9, 14)), 40);
    }

    #[test]
    fn far_future_dates_clamp_to_week_forty() {
        assert_eq!(resolve_week(date(2025, 8, 1)), 40);
        assert_eq!(resolve_week(date(2025, 9, 1)), 40);
    }

    #[test]
    fn week_forty_boundary_is_exact() {
        // Week 40 starts 273 days after the anchor: 2025-06-15.
        assert_eq!(resolve_week(date(2025, 6, 14)), 39);
        assert_eq!(resolve_week(date(2025, 6, 15)), 40);
    }

    // Range labels

    #[test]
    fn anchor_sunday_labels_the_following_week() {
        assert_eq!(week_range_label(date(2024, 9, 15)), "16–22 Eylül");
    }

    #[test]
    fn weekdays_label_their_own_week() {
        // 2024-09-18 is a Wednesday in the 16-22 week.
        assert_eq!(week_range_label(date(2024, 9, 18)), "16–22 Eylül");
        assert_eq!(week_range_label(date(2024, 9, 16)), "16–22 Eylül");
        assert_eq!(week_range_label(date(2024, 9, 21)), "16–22 Eylül");
    }

    #[test]
    fn month_spanning_week_uses_end_month() {
        // 2024-09-30 is a Monday; the week ends 2024-10-06.
        assert_eq!(week_range_label(date(2024, 9, 30)), "30–6 Ekim");
    }

    #[test]
    fn month_names_cover_all_twelve_months() {
        assert_eq!(month_name(1), "Ocak");
        assert_eq!(month_name(9), "Eylül");
        assert_eq!(month_name(12), "Aralık");
    }

    #[test]
    fn month_name_out_of_range_is_empty() {
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    // Derived value

    #[test]
    fn academic_week_combines_number_and_label() {
        let week = AcademicWeek::for_date(date(2024, 9, 15));
        assert_eq!(week.week_number(), 1);
        assert_eq!(week.range_label(), "16–22 Eylül");
    }

    // Properties

    proptest! {
        #[test]
        fn every_september_fifteenth_is_week_one(year in 1990i32..2100) {
            prop_assert_eq!(resolve_week(date(year, 9, 15)), 1);
        }

        #[test]
        fn resolved_week_is_always_in_bounds(days in 0i64..200_000) {
            let d = date(1970, 1, 1) + Duration::days(days);
            let week = resolve_week(d);
            prop_assert!((1..=WEEKS_PER_YEAR).contains(&week));
        }

        #[test]
        fn week_is_monotonic_within_an_academic_year(
            year in 1990i32..2100,
            a in 0i64..365,
            b in 0i64..365,
        ) {
            let anchor = date(year, 9, 15);
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                resolve_week(anchor + Duration::days(early))
                    <= resolve_week(anchor + Duration::days(late))
            );
        }
    }
}
