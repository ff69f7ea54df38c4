//! Date difference in whole days.

use chrono::NaiveDate;

/// Returns `end - start` in whole calendar days.
///
/// The result is negative when `end` precedes `start`; callers decide how to
/// treat that.
///
/// # Examples
///
/// ```
/// use aguinaldo_engine::calculation::whole_days_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
/// assert_eq!(whole_days_between(start, end), 354);
/// ```
pub fn whole_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}
