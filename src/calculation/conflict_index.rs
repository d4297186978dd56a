//! Existing-leave conflict lookups.
//!
//! This module provides [`LeaveConflictIndex`], a snapshot of the date ranges
//! already claimed by an applicant's non-rejected leave.

use chrono::NaiveDate;

use crate::models::LeaveRecord;

/// Date ranges covered by existing, non-rejected leave.
///
/// The index is an immutable snapshot of one fetch of the leave history.
/// When the history changes, build a new index instead of patching this one.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::LeaveConflictIndex;
/// use leave_engine::models::{LeaveRecord, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let leaves = vec![
///     LeaveRecord {
///         id: 1,
///         leave_type: LeaveType::Casual,
///         from_date: date(3),
///         to_date: date(3),
///         status: LeaveStatus::Approved,
///     },
///     LeaveRecord {
///         id: 2,
///         leave_type: LeaveType::Sick,
///         from_date: date(10),
///         to_date: date(12),
///         status: LeaveStatus::Rejected,
///     },
/// ];
///
/// let index = LeaveConflictIndex::new(&leaves);
/// assert!(index.is_date_covered(date(3)));
/// assert!(!index.is_date_covered(date(11)));
/// assert!(index.ranges_overlap(date(1), date(5)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveConflictIndex {
    /// Active records, ordered by start date.
    records: Vec<LeaveRecord>,
}

impl LeaveConflictIndex {
    /// Builds an index from a leave history, skipping rejected records.
    pub fn new(records: &[LeaveRecord]) -> Self {
        let mut records: Vec<LeaveRecord> =
            records.iter().filter(|r| r.is_active()).cloned().collect();
        records.sort_by_key(|r| (r.from_date, r.to_date));
        Self { records }
    }

    /// An index with no leave, for use before the history has been fetched.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if `date` lies inside any indexed range.
    pub fn is_date_covered(&self, date: NaiveDate) -> bool {
        self.records.iter().any(|r| r.covers(date))
    }

    /// Returns true if `[from, to]` shares at least one day with any indexed range.
    pub fn ranges_overlap(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.records.iter().any(|r| r.overlaps(from, to))
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no leave is indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
