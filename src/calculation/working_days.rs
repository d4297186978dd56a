//! Chargeable working-day counting.
//!
//! This module counts the days of a leave range that would be charged
//! against a balance: working days under the work calendar that are not
//! already covered by existing leave.
//!
//! All arithmetic is on calendar dates. There is no time of day involved,
//! so daylight-saving transitions cannot shift a count.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DayKind, LeaveConflictIndex, WorkCalendarPolicy};

/// Per-category day counts for a date range.
///
/// Every date of the range lands in exactly one category. Rest days take
/// precedence over holidays, and holidays over existing leave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysBreakdown {
    /// Working days not already on leave.
    pub chargeable_days: u32,
    /// Days excluded by the work week.
    pub rest_days: u32,
    /// Configured holidays on working weekdays.
    pub holidays: u32,
    /// Working days already covered by existing leave.
    pub already_on_leave: u32,
    /// The chargeable dates, in order.
    pub chargeable_dates: Vec<NaiveDate>,
}

/// Iterates every calendar date from `from` to `to` inclusive.
///
/// Yields nothing when `from > to`.
pub(crate) fn dates_between(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take_while(move |d| *d <= to)
}

/// Counts the chargeable working days between two dates, inclusive.
///
/// A date is counted when it is a working day under `policy` and is not
/// covered by any leave in `conflicts`. Returns 0 when `from > to`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{count_working_days, LeaveConflictIndex, WorkCalendarPolicy};
/// use chrono::NaiveDate;
///
/// let policy = WorkCalendarPolicy::default();
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(); // Monday
/// let to = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(); // Sunday
///
/// assert_eq!(count_working_days(from, to, &policy, &LeaveConflictIndex::empty()), 5);
/// assert_eq!(count_working_days(to, from, &policy, &LeaveConflictIndex::empty()), 0);
/// ```
pub fn count_working_days(
    from: NaiveDate,
    to: NaiveDate,
    policy: &WorkCalendarPolicy,
    conflicts: &LeaveConflictIndex,
) -> u32 {
    dates_between(from, to)
        .filter(|d| policy.is_working_day(*d) && !conflicts.is_date_covered(*d))
        .count() as u32
}

/// Counts the days of a range by category.
///
/// `chargeable_days` always equals [`count_working_days`] for the same input.
pub fn working_days_breakdown(
    from: NaiveDate,
    to: NaiveDate,
    policy: &WorkCalendarPolicy,
    conflicts: &LeaveConflictIndex,
) -> WorkingDaysBreakdown {
    let mut breakdown = WorkingDaysBreakdown::default();

    for date in dates_between(from, to) {
        match policy.classify(date) {
            DayKind::RestDay => breakdown.rest_days += 1,
            DayKind::Holiday => breakdown.holidays += 1,
            DayKind::Working if conflicts.is_date_covered(date) => {
                breakdown.already_on_leave += 1
            }
            DayKind::Working => {
                breakdown.chargeable_days += 1;
                breakdown.chargeable_dates.push(date);
            }
        }
    }

    breakdown
}
