//! Leave application form state.
//!
//! [`LeaveForm`] wraps a [`LeaveApplicationDraft`] with the bookkeeping a
//! form needs between keystrokes: which errors are currently displayed,
//! whether a confirmation is pending and whether the applicant's leave
//! history still has to be fetched. All eligibility answers are delegated
//! to an [`EligibilityContext`] passed in at call time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{
    EligibilityContext, FROM_DATE_REQUIRED, REASON_REQUIRED, TO_DATE_BEFORE_FROM_DATE,
    TO_DATE_REQUIRED,
};
use crate::models::{
    Applicant, FieldErrors, FormField, LeaveApplication, LeaveApplicationDraft, LeaveBalances,
    LeaveType, ValidationResult,
};

/// Whether the applicant may use the leave form at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormAvailability {
    /// The form can be filled in.
    Available,
    /// The applicant has no manager to approve requests.
    ManagerRequired,
    /// Every balance is exhausted or no balances exist.
    NoBalanceAvailable,
}

impl FormAvailability {
    /// Decides whether `applicant` may apply for leave.
    ///
    /// The manager check comes first; an applicant without an approver is
    /// told so even if their balances are also empty.
    pub fn assess(applicant: &Applicant, balances: &LeaveBalances) -> Self {
        if !applicant.has_manager() {
            FormAvailability::ManagerRequired
        } else if balances.all_exhausted() {
            FormAvailability::NoBalanceAvailable
        } else {
            FormAvailability::Available
        }
    }

    /// Returns true if the form can be filled in.
    pub fn is_available(&self) -> bool {
        matches!(self, FormAvailability::Available)
    }
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// The applicant is editing fields.
    #[default]
    Editing,
    /// Validation passed; waiting for the applicant to confirm.
    AwaitingConfirmation {
        /// The request that will be sent on confirmation.
        payload: LeaveApplication,
    },
    /// The request has been handed off for creation.
    Submitting {
        /// The request being sent.
        payload: LeaveApplication,
    },
}

/// A leave application form.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::EligibilityContext;
/// use leave_engine::form::{FormPhase, LeaveForm};
/// use leave_engine::models::{LeaveBalance, LeaveBalances, LeaveType};
/// use chrono::NaiveDate;
///
/// let context = EligibilityContext::default().with_balances(LeaveBalances::new(vec![
///     LeaveBalance::new(LeaveType::Casual, 12, 2),
/// ]));
///
/// let mut form = LeaveForm::new();
/// form.set_leave_type(Some(LeaveType::Casual));
/// form.set_from_date(NaiveDate::from_ymd_opt(2024, 1, 1));
/// form.set_to_date(NaiveDate::from_ymd_opt(2024, 1, 3));
/// form.set_reason("Family visit");
///
/// assert_eq!(form.calculated_days(&context), 3);
/// assert!(form.submit(&context));
/// assert!(matches!(form.phase(), FormPhase::AwaitingConfirmation { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeaveForm {
    draft: LeaveApplicationDraft,
    errors: FieldErrors,
    phase: FormPhase,
    date_field_touched: bool,
    leave_history_loaded: bool,
}

impl LeaveForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current draft.
    pub fn draft(&self) -> &LeaveApplicationDraft {
        &self.draft
    }

    /// Returns the errors currently displayed.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the displayed error for `field`, if any.
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns the submit phase.
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Sets the leave type.
    ///
    /// Like every setter, this is ignored while a submission is in flight,
    /// so the draft always matches the payload being sent.
    pub fn set_leave_type(&mut self, leave_type: Option<LeaveType>) {
        self.edit(|draft| draft.leave_type = leave_type);
    }

    /// Sets the first day of leave.
    pub fn set_from_date(&mut self, date: Option<NaiveDate>) {
        self.edit(|draft| draft.from_date = date);
    }

    /// Sets the last day of leave.
    pub fn set_to_date(&mut self, date: Option<NaiveDate>) {
        self.edit(|draft| draft.to_date = date);
    }

    /// Sets the free-text reason.
    pub fn set_reason(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        self.edit(|draft| draft.reason = reason);
    }

    /// Records that a date field received focus.
    pub fn focus_date_field(&mut self) {
        self.date_field_touched = true;
    }

    /// Returns true if the caller should fetch the applicant's leave
    /// history before relying on conflict checks.
    ///
    /// History is wanted once a date field has been focused or filled, and
    /// only until [`mark_leave_history_loaded`](Self::mark_leave_history_loaded)
    /// is called.
    pub fn needs_leave_history(&self) -> bool {
        let dates_touched = self.date_field_touched
            || self.draft.from_date.is_some()
            || self.draft.to_date.is_some();
        dates_touched && !self.leave_history_loaded
    }

    /// Records that the leave history has been fetched.
    pub fn mark_leave_history_loaded(&mut self) {
        self.leave_history_loaded = true;
    }

    /// Chargeable working days for the chosen range, or 0 until both dates
    /// are set.
    pub fn calculated_days(&self, context: &EligibilityContext) -> u32 {
        match (self.draft.from_date, self.draft.to_date) {
            (Some(from), Some(to)) => context.working_days(from, to),
            _ => 0,
        }
    }

    /// Validates the draft.
    ///
    /// On success the form waits for confirmation and returns true. On
    /// failure every collected error replaces the displayed errors and the
    /// form stays in [`FormPhase::Editing`].
    pub fn submit(&mut self, context: &EligibilityContext) -> bool {
        match context.validate(&self.draft) {
            ValidationResult::Valid { payload } => {
                debug!(leave_type = %payload.leave_type, "Leave form awaiting confirmation");
                self.errors.clear();
                self.phase = FormPhase::AwaitingConfirmation { payload };
                true
            }
            ValidationResult::Invalid { field_errors } => {
                debug!(errors = field_errors.len(), "Leave form failed validation");
                self.errors = field_errors;
                self.phase = FormPhase::Editing;
                false
            }
        }
    }

    /// Confirms a pending request and returns the payload to send.
    ///
    /// Returns `None` if no confirmation is pending.
    pub fn confirm(&mut self) -> Option<LeaveApplication> {
        match std::mem::take(&mut self.phase) {
            FormPhase::AwaitingConfirmation { payload } => {
                self.phase = FormPhase::Submitting {
                    payload: payload.clone(),
                };
                Some(payload)
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Abandons a pending confirmation.
    pub fn cancel_confirmation(&mut self) {
        if matches!(self.phase, FormPhase::AwaitingConfirmation { .. }) {
            self.phase = FormPhase::Editing;
        }
    }

    /// The request was created; the form starts over.
    pub fn submission_succeeded(&mut self) {
        if matches!(self.phase, FormPhase::Submitting { .. }) {
            self.reset();
        }
    }

    /// The request was refused; the draft is kept for another attempt.
    pub fn submission_failed(&mut self) {
        if matches!(self.phase, FormPhase::Submitting { .. }) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Clears the draft and every displayed error.
    ///
    /// The leave history flag survives, since the fetched history is still
    /// current.
    pub fn reset(&mut self) {
        self.draft = LeaveApplicationDraft::default();
        self.errors.clear();
        self.phase = FormPhase::Editing;
        self.date_field_touched = false;
    }

    fn edit(&mut self, apply: impl FnOnce(&mut LeaveApplicationDraft)) {
        match self.phase {
            FormPhase::Submitting { .. } => {
                debug!("Ignoring edit while submitting");
                return;
            }
            FormPhase::AwaitingConfirmation { .. } => self.phase = FormPhase::Editing,
            FormPhase::Editing => {}
        }
        apply(&mut self.draft);
        self.reconcile_errors();
    }

    /// Drops errors the latest edit has resolved.
    fn reconcile_errors(&mut self) {
        let draft = &self.draft;
        let errors = &mut self.errors;

        if draft.from_date.is_some() {
            remove_if(errors, FormField::FromDate, FROM_DATE_REQUIRED);
        }
        if draft.to_date.is_some() {
            remove_if(errors, FormField::ToDate, TO_DATE_REQUIRED);
        }
        if !draft.reason.trim().is_empty() {
            remove_if(errors, FormField::Reason, REASON_REQUIRED);
        }

        if let (Some(from), Some(to)) = (draft.from_date, draft.to_date) {
            if from > to {
                errors.insert(FormField::ToDate, TO_DATE_BEFORE_FROM_DATE.to_string());
            } else {
                errors.remove(&FormField::FromDate);
                errors.remove(&FormField::ToDate);
            }
        }
    }
}

fn remove_if(errors: &mut FieldErrors, field: FormField, message: &str) {
    if errors.get(&field).is_some_and(|current| current == message) {
        errors.remove(&field);
    }
}
