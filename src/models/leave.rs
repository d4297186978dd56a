//! Leave record model and related types.
//!
//! This module defines the [`LeaveType`] and [`LeaveStatus`] enums and the
//! read-only [`LeaveRecord`] fetched from the leave history of an applicant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of leave being requested.
///
/// Each type carries its own yearly balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Casual leave.
    Casual,
    /// Sick leave.
    Sick,
    /// Earned (annual) leave.
    Earned,
}

impl LeaveType {
    /// Every leave type, in picker order.
    pub const ALL: [LeaveType; 3] = [LeaveType::Casual, LeaveType::Sick, LeaveType::Earned];

    /// Returns the wire name of the leave type (e.g. `"casual"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Casual => "casual",
            LeaveType::Sick => "sick",
            LeaveType::Earned => "earned",
        }
    }

    /// Returns the human-readable label shown in a picker.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::LeaveType;
    ///
    /// assert_eq!(LeaveType::Earned.display_name(), "Earned Leave");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            LeaveType::Casual => "Casual Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Earned => "Earned Leave",
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a manager decision.
    Pending,
    /// Approved by a manager.
    Approved,
    /// Rejected or cancelled. Frees its dates.
    Rejected,
}

/// An existing leave request belonging to the applicant.
///
/// `from_date` and `to_date` are both inclusive.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveRecord, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
///
/// let record = LeaveRecord {
///     id: 7,
///     leave_type: LeaveType::Sick,
///     from_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
///     status: LeaveStatus::Approved,
/// };
/// assert!(record.covers(NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Identifier assigned by the backend.
    pub id: u64,
    /// The kind of leave.
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    #[serde(with = "super::serde_iso_date")]
    pub from_date: NaiveDate,
    /// Last day of leave (inclusive).
    #[serde(with = "super::serde_iso_date")]
    pub to_date: NaiveDate,
    /// Current approval state.
    pub status: LeaveStatus,
}

impl LeaveRecord {
    /// Returns true unless the record was rejected.
    pub fn is_active(&self) -> bool {
        self.status != LeaveStatus::Rejected
    }

    /// Returns true if `date` falls within the record's inclusive range.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.from_date <= date && date <= self.to_date
    }

    /// Returns true if `[from, to]` shares at least one day with this record.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        !(to < self.from_date || from > self.to_date)
    }
}
