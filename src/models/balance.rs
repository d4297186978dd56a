//! Leave balance models.
//!
//! This module contains [`LeaveBalance`], the per-type yearly allowance of an
//! applicant, and [`LeaveBalances`], the collection the validator and the
//! leave type picker read from.

use serde::{Deserialize, Serialize};

use super::LeaveType;

/// The yearly allowance for one leave type.
///
/// Well-formed data satisfies `remaining == total - used` and
/// `remaining >= 0`. Readers go through [`LeaveBalance::available`], which
/// never reports a negative figure.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveBalance, LeaveType};
///
/// let balance = LeaveBalance::new(LeaveType::Casual, 12, 5);
/// assert_eq!(balance.remaining, 7);
/// assert_eq!(balance.available(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The leave type this balance applies to.
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    /// Days granted for the year.
    pub total: i32,
    /// Days already consumed.
    pub used: i32,
    /// Days still available.
    pub remaining: i32,
}

impl LeaveBalance {
    /// Creates a balance, deriving `remaining` from `total` and `used`.
    pub fn new(leave_type: LeaveType, total: i32, used: i32) -> Self {
        Self {
            leave_type,
            total,
            used,
            remaining: total - used,
        }
    }

    /// Remaining days, clamped at zero.
    pub fn available(&self) -> u32 {
        self.remaining.max(0) as u32
    }
}

/// The balances of one applicant, one entry per leave type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveBalances(Vec<LeaveBalance>);

impl LeaveBalances {
    /// Creates a collection from a list of balances.
    pub fn new(balances: Vec<LeaveBalance>) -> Self {
        Self(balances)
    }

    /// Returns the balance row for `leave_type`, if one exists.
    pub fn get(&self, leave_type: LeaveType) -> Option<&LeaveBalance> {
        self.0.iter().find(|b| b.leave_type == leave_type)
    }

    /// Remaining days for `leave_type`, or zero when no row exists.
    pub fn available(&self, leave_type: LeaveType) -> u32 {
        self.get(leave_type).map(LeaveBalance::available).unwrap_or(0)
    }

    /// Returns true if `leave_type` can be offered in a picker.
    ///
    /// A type with nothing left, or without a balance row, is disabled.
    /// This is advisory; the authoritative balance check is part of
    /// [`crate::calculation::validate`].
    pub fn is_type_available(&self, leave_type: LeaveType) -> bool {
        self.available(leave_type) > 0
    }

    /// Leave types that still have days available, in picker order.
    pub fn available_types(&self) -> Vec<LeaveType> {
        LeaveType::ALL
            .into_iter()
            .filter(|t| self.is_type_available(*t))
            .collect()
    }

    /// Returns true if there are no balances or none has days left.
    pub fn all_exhausted(&self) -> bool {
        self.0.iter().all(|b| b.remaining <= 0)
    }

    /// Returns true if the collection holds no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the balance rows.
    pub fn iter(&self) -> impl Iterator<Item = &LeaveBalance> {
        self.0.iter()
    }
}

impl From<Vec<LeaveBalance>> for LeaveBalances {
    fn from(balances: Vec<LeaveBalance>) -> Self {
        Self(balances)
    }
}

impl FromIterator<LeaveBalance> for LeaveBalances {
    fn from_iter<I: IntoIterator<Item = LeaveBalance>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
