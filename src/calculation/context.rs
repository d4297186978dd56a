//! Eligibility context.
//!
//! This module bundles the three snapshots every eligibility question is
//! asked against: the work calendar, the existing-leave index and the
//! applicant's balances.

use chrono::NaiveDate;

use crate::models::{LeaveApplicationDraft, LeaveBalances, LeaveRecord, ValidationResult};

use super::{
    LeaveConflictIndex, WorkCalendarPolicy, WorkingDaysBreakdown, count_working_days,
    is_selectable, validate, working_days_breakdown,
};

/// Immutable inputs for eligibility calculations.
///
/// A context may be built before the leave history has been fetched; the
/// answers simply reflect an empty history. Once fresher data arrives,
/// build a new context. Nothing is cached, so answers never go stale.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{EligibilityContext, WorkCalendarPolicy};
/// use leave_engine::models::LeaveBalances;
/// use chrono::NaiveDate;
///
/// let context = EligibilityContext::new(
///     WorkCalendarPolicy::default(),
///     &[],
///     LeaveBalances::default(),
/// );
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(context.working_days(from, to), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EligibilityContext {
    policy: WorkCalendarPolicy,
    conflicts: LeaveConflictIndex,
    balances: LeaveBalances,
}

impl EligibilityContext {
    /// Builds a context from a calendar, a leave history and balances.
    pub fn new(policy: WorkCalendarPolicy, leaves: &[LeaveRecord], balances: LeaveBalances) -> Self {
        Self {
            policy,
            conflicts: LeaveConflictIndex::new(leaves),
            balances,
        }
    }

    /// Returns a new context with the leave history replaced.
    pub fn with_leave_history(self, leaves: &[LeaveRecord]) -> Self {
        Self {
            conflicts: LeaveConflictIndex::new(leaves),
            ..self
        }
    }

    /// Returns a new context with the balances replaced.
    pub fn with_balances(self, balances: LeaveBalances) -> Self {
        Self { balances, ..self }
    }

    /// Returns the work calendar.
    pub fn policy(&self) -> &WorkCalendarPolicy {
        &self.policy
    }

    /// Returns the existing-leave index.
    pub fn conflicts(&self) -> &LeaveConflictIndex {
        &self.conflicts
    }

    /// Returns the balances.
    pub fn balances(&self) -> &LeaveBalances {
        &self.balances
    }

    /// Chargeable working days between `from` and `to`, inclusive.
    pub fn working_days(&self, from: NaiveDate, to: NaiveDate) -> u32 {
        count_working_days(from, to, &self.policy, &self.conflicts)
    }

    /// Per-category day counts between `from` and `to`, inclusive.
    pub fn working_days_breakdown(&self, from: NaiveDate, to: NaiveDate) -> WorkingDaysBreakdown {
        working_days_breakdown(from, to, &self.policy, &self.conflicts)
    }

    /// Returns true if `date` may be offered in a date picker.
    pub fn is_selectable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        is_selectable(date, &self.policy, &self.conflicts, today)
    }

    /// Validates a draft against this context.
    pub fn validate(&self, draft: &LeaveApplicationDraft) -> ValidationResult {
        validate(draft, &self.policy, &self.conflicts, &self.balances)
    }
}
