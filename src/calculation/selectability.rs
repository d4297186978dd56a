//! Date-picker selectability.
//!
//! This module decides which calendar dates a leave date picker may offer.
//! An excluded date is not an error, it is simply not offered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DayKind, LeaveConflictIndex, WorkCalendarPolicy, dates_between};

/// Why a date cannot be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateExclusion {
    /// The date is before today.
    Past,
    /// The weekday is excluded by the work week.
    RestDay,
    /// The date is a configured holiday.
    Holiday,
    /// Existing non-rejected leave already covers the date.
    ExistingLeave,
}

/// Returns the first reason `date` cannot be picked, or `None` if it can.
///
/// Reasons are checked in order: past, rest day, holiday, existing leave.
pub fn date_exclusion(
    date: NaiveDate,
    policy: &WorkCalendarPolicy,
    conflicts: &LeaveConflictIndex,
    today: NaiveDate,
) -> Option<DateExclusion> {
    if date < today {
        return Some(DateExclusion::Past);
    }

    match policy.classify(date) {
        DayKind::RestDay => Some(DateExclusion::RestDay),
        DayKind::Holiday => Some(DateExclusion::Holiday),
        DayKind::Working if conflicts.is_date_covered(date) => Some(DateExclusion::ExistingLeave),
        DayKind::Working => None,
    }
}

/// Returns true if `date` may be offered in a leave date picker.
///
/// A date is selectable when it is not before `today`, is a working day,
/// and is not covered by existing leave.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{is_selectable, LeaveConflictIndex, WorkCalendarPolicy};
/// use chrono::NaiveDate;
///
/// let policy = WorkCalendarPolicy::default();
/// let conflicts = LeaveConflictIndex::empty();
/// let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(); // Wednesday
///
/// assert!(is_selectable(today, &policy, &conflicts, today));
/// assert!(!is_selectable(today.pred_opt().unwrap(), &policy, &conflicts, today));
/// // Saturday
/// assert!(!is_selectable(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(), &policy, &conflicts, today));
/// ```
pub fn is_selectable(
    date: NaiveDate,
    policy: &WorkCalendarPolicy,
    conflicts: &LeaveConflictIndex,
    today: NaiveDate,
) -> bool {
    date_exclusion(date, policy, conflicts, today).is_none()
}

/// Lists every selectable date between `from` and `to`, inclusive.
pub fn selectable_dates(
    from: NaiveDate,
    to: NaiveDate,
    policy: &WorkCalendarPolicy,
    conflicts: &LeaveConflictIndex,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    dates_between(from, to)
        .filter(|d| is_selectable(*d, policy, conflicts, today))
        .collect()
}
