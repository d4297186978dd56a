//! Leave request validation.
//!
//! This module turns a [`LeaveApplicationDraft`] into either a normalized
//! [`LeaveApplication`] or the complete set of field errors. Every check
//! runs on every call so a form can show all problems at once.

use crate::models::{
    FieldErrors, FormField, LeaveApplication, LeaveApplicationDraft, LeaveBalances, LeaveType,
    ValidationResult,
};

use super::{LeaveConflictIndex, WorkCalendarPolicy, count_working_days};

/// Message shown when no leave type is chosen.
pub const TYPE_REQUIRED: &str = "Leave type is required";
/// Message shown when no from-date is chosen.
pub const FROM_DATE_REQUIRED: &str = "From date is required";
/// Message shown when no to-date is chosen.
pub const TO_DATE_REQUIRED: &str = "To date is required";
/// Message shown when the to-date precedes the from-date.
pub const TO_DATE_BEFORE_FROM_DATE: &str = "To date must be after from date";
/// Message shown when the reason is blank.
pub const REASON_REQUIRED: &str = "Reason is required";
/// Message shown on both date fields when the range overlaps existing leave.
pub const OVERLAPS_EXISTING_LEAVE: &str = "Selected dates overlap with existing leave requests";

/// Builds the insufficient-balance message for `leave_type`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::insufficient_balance_message;
/// use leave_engine::models::LeaveType;
///
/// assert_eq!(
///     insufficient_balance_message(LeaveType::Casual, 2),
///     "Insufficient casual leave balance. You have 2 days remaining."
/// );
/// ```
pub fn insufficient_balance_message(leave_type: LeaveType, remaining: u32) -> String {
    format!(
        "Insufficient {} leave balance. You have {} days remaining.",
        leave_type, remaining
    )
}

/// Validates a leave application draft.
///
/// Checks, all evaluated and accumulated:
///
/// 1. a leave type is chosen
/// 2. a from-date is chosen
/// 3. a to-date is chosen
/// 4. the from-date is not after the to-date
/// 5. the trimmed reason is not empty
/// 6. the chargeable days do not exceed the remaining balance of the type
/// 7. the range does not overlap existing non-rejected leave, reported on
///    both date fields
///
/// When a later check targets a field that already carries a message, the
/// later message replaces it. The balance check is skipped when there is no
/// balance row for the chosen type.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{validate, LeaveConflictIndex, WorkCalendarPolicy};
/// use leave_engine::models::{
///     FormField, LeaveApplicationDraft, LeaveBalance, LeaveBalances, LeaveType,
/// };
/// use chrono::NaiveDate;
///
/// let balances = LeaveBalances::new(vec![LeaveBalance::new(LeaveType::Casual, 12, 0)]);
/// let draft = LeaveApplicationDraft {
///     leave_type: Some(LeaveType::Casual),
///     from_date: NaiveDate::from_ymd_opt(2024, 1, 1),
///     to_date: NaiveDate::from_ymd_opt(2024, 1, 2),
///     reason: "  Family event ".to_string(),
/// };
///
/// let result = validate(
///     &draft,
///     &WorkCalendarPolicy::default(),
///     &LeaveConflictIndex::empty(),
///     &balances,
/// );
/// assert_eq!(result.payload().unwrap().reason, "Family event");
///
/// let blank = LeaveApplicationDraft::default();
/// let result = validate(
///     &blank,
///     &WorkCalendarPolicy::default(),
///     &LeaveConflictIndex::empty(),
///     &balances,
/// );
/// assert_eq!(result.error(FormField::Reason), Some("Reason is required"));
/// ```
pub fn validate(
    draft: &LeaveApplicationDraft,
    policy: &WorkCalendarPolicy,
    conflicts: &LeaveConflictIndex,
    balances: &LeaveBalances,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if draft.leave_type.is_none() {
        errors.insert(FormField::Type, TYPE_REQUIRED.to_string());
    }

    if draft.from_date.is_none() {
        errors.insert(FormField::FromDate, FROM_DATE_REQUIRED.to_string());
    }

    if draft.to_date.is_none() {
        errors.insert(FormField::ToDate, TO_DATE_REQUIRED.to_string());
    }

    if let Some((from, to)) = draft.date_range() {
        if from > to {
            errors.insert(FormField::ToDate, TO_DATE_BEFORE_FROM_DATE.to_string());
        }
    }

    let reason = draft.reason.trim();
    if reason.is_empty() {
        errors.insert(FormField::Reason, REASON_REQUIRED.to_string());
    }

    let chargeable_days = draft
        .date_range()
        .map(|(from, to)| count_working_days(from, to, policy, conflicts))
        .unwrap_or(0);

    if let Some(leave_type) = draft.leave_type {
        if chargeable_days > 0 {
            if let Some(balance) = balances.get(leave_type) {
                let remaining = balance.available();
                if chargeable_days > remaining {
                    errors.insert(
                        FormField::Type,
                        insufficient_balance_message(leave_type, remaining),
                    );
                }
            }
        }
    }

    if let Some((from, to)) = draft.date_range() {
        if conflicts.ranges_overlap(from, to) {
            errors.insert(FormField::FromDate, OVERLAPS_EXISTING_LEAVE.to_string());
            errors.insert(FormField::ToDate, OVERLAPS_EXISTING_LEAVE.to_string());
        }
    }

    match (draft.leave_type, draft.date_range()) {
        (Some(leave_type), Some((from_date, to_date))) if errors.is_empty() => {
            ValidationResult::Valid {
                payload: LeaveApplication {
                    leave_type,
                    from_date,
                    to_date,
                    reason: reason.to_string(),
                },
            }
        }
        _ => ValidationResult::Invalid {
            field_errors: errors,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkWeek;
    use crate::models::{LeaveBalance, LeaveRecord, LeaveStatus};
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn leave(from: &str, to: &str, status: LeaveStatus) -> LeaveRecord {
        LeaveRecord {
            id: 99,
            leave_type: LeaveType::Sick,
            from_date: make_date(from),
            to_date: make_date(to),
            status,
        }
    }

    fn draft(leave_type: LeaveType, from: &str, to: &str, reason: &str) -> LeaveApplicationDraft {
        LeaveApplicationDraft {
            leave_type: Some(leave_type),
            from_date: Some(make_date(from)),
            to_date: Some(make_date(to)),
            reason: reason.to_string(),
        }
    }

    fn balances(casual_remaining: i32) -> LeaveBalances {
        LeaveBalances::new(vec![
            LeaveBalance::new(LeaveType::Casual, 12, 12 - casual_remaining),
            LeaveBalance::new(LeaveType::Sick, 10, 0),
            LeaveBalance::new(LeaveType::Earned, 15, 0),
        ])
    }

    fn policy() -> WorkCalendarPolicy {
        WorkCalendarPolicy::new(WorkWeek::FiveDays, [])
    }

    #[test]
    fn test_valid_draft_produces_normalized_payload() {
        let result = validate(
            &draft(LeaveType::Casual, "2024-01-01", "2024-01-02", "  Wedding  "),
            &policy(),
            &LeaveConflictIndex::empty(),
            &balances(5),
        );

        assert_eq!(
            result,
            ValidationResult::Valid {
                payload: LeaveApplication {
                    leave_type: LeaveType::Casual,
                    from_date: make_date("2024-01-01"),
                    to_date: make_date("2024-01-02"),
                    reason: "Wedding".to_string(),
                }
            }
        );
    }

    #[test]
    fn test_missing_dates_and_reason_accumulate() {
        let draft = LeaveApplicationDraft {
            leave_type: Some(LeaveType::Casual),
            from_date: None,
            to_date: None,
            reason: "   ".to_string(),
        };

        let result = validate(&draft, &policy(), &LeaveConflictIndex::empty(), &balances(5));
        let errors = result.field_errors().unwrap();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&FormField::FromDate], FROM_DATE_REQUIRED);
        assert_eq!(errors[&FormField::ToDate], TO_DATE_REQUIRED);
        assert_eq!(errors[&FormField::Reason], REASON_REQUIRED);
    }

    #[test]
    fn test_empty_draft_reports_all_four_fields() {
        let result = validate(
            &LeaveApplicationDraft::default(),
            &policy(),
            &LeaveConflictIndex::empty(),
            &balances(5),
        );
        let errors = result.field_errors().unwrap();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&FormField::Type], TYPE_REQUIRED);
    }

    #[test]
    fn test_inverted_range() {
        let result = validate(
            &draft(LeaveType::Casual, "2024-01-05", "2024-01-02", "Trip"),
            &policy(),
            &LeaveConflictIndex::empty(),
            &balances(5),
        );

        assert_eq!(result.error(FormField::ToDate), Some(TO_DATE_BEFORE_FROM_DATE));
        assert_eq!(result.error(FormField::FromDate), None);
        // Nothing is chargeable in an inverted range, so no balance error
        assert_eq!(result.error(FormField::Type), None);
    }

    #[test]
    fn test_insufficient_balance() {
        // 2024-01-01..03 is Mon..Wed: 3 working days
        let result = validate(
            &draft(LeaveType::Casual, "2024-01-01", "2024-01-03", "Trip"),
            &policy(),
            &LeaveConflictIndex::empty(),
            &balances(2),
        );

        let message = result.error(FormField::Type).unwrap();
        assert!(message.contains("2 days remaining"));
        assert_eq!(
            message,
            "Insufficient casual leave balance. You have 2 days remaining."
        );
    }

    #[test]
    fn test_balance_exactly_sufficient() {
        let result = validate(
            &draft(LeaveType::Casual, "2024-01-01", "2024-01-02", "Trip"),
            &policy(),
            &LeaveConflictIndex::empty(),
            &balances(2),
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_weekend_days_do_not_consume_balance() {
        // Fri..Mon is 2 working days
        let result = validate(
            &draft(LeaveType::Casual, "2024-01-05", "2024-01-08", "Long weekend"),
            &policy(),
            &LeaveConflictIndex::empty(),
            &balances(2),
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_range_of_only_rest_days_skips_balance_check() {
        let result = validate(
            &draft(LeaveType::Casual, "2024-01-06", "2024-01-07", "Weekend"),
            &policy(),
            &LeaveConflictIndex::empty(),
            &balances(0),
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_missing_balance_row_is_not_checked() {
        let only_sick = LeaveBalances::new(vec![LeaveBalance::new(LeaveType::Sick, 10, 0)]);
        let result = validate(
            &draft(LeaveType::Earned, "2024-01-01", "2024-01-05", "Trip"),
            &policy(),
            &LeaveConflictIndex::empty(),
            &only_sick,
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_negative_remaining_is_reported_as_zero() {
        let overdrawn = LeaveBalances::new(vec![LeaveBalance {
            leave_type: LeaveType::Casual,
            total: 5,
            used: 8,
            remaining: -3,
        }]);
        let result = validate(
            &draft(LeaveType::Casual, "2024-01-01", "2024-01-01", "Trip"),
            &policy(),
            &LeaveConflictIndex::empty(),
            &overdrawn,
        );
        assert_eq!(
            result.error(FormField::Type),
            Some("Insufficient casual leave balance. You have 0 days remaining.")
        );
    }

    #[test]
    fn test_overlap_marks_both_date_fields() {
        let conflicts =
            LeaveConflictIndex::new(&[leave("2024-01-03", "2024-01-04", LeaveStatus::Pending)]);
        let result = validate(
            &draft(LeaveType::Casual, "2024-01-01", "2024-01-03", "Trip"),
            &policy(),
            &conflicts,
            &balances(5),
        );

        assert_eq!(result.error(FormField::FromDate), Some(OVERLAPS_EXISTING_LEAVE));
        assert_eq!(result.error(FormField::ToDate), Some(OVERLAPS_EXISTING_LEAVE));
    }

    #[test]
    fn test_overlap_replaces_inverted_range_message() {
        let conflicts =
            LeaveConflictIndex::new(&[leave("2024-01-01", "2024-01-31", LeaveStatus::Approved)]);
        let result = validate(
            &draft(LeaveType::Casual, "2024-01-10", "2024-01-05", "Trip"),
            &policy(),
            &conflicts,
            &balances(5),
        );
        assert_eq!(result.error(FormField::ToDate), Some(OVERLAPS_EXISTING_LEAVE));
    }

    #[test]
    fn test_overlap_uses_range_not_working_days() {
        // Existing leave on a Saturday still blocks a range containing it
        let conflicts =
            LeaveConflictIndex::new(&[leave("2024-01-06", "2024-01-06", LeaveStatus::Approved)]);
        let result = validate(
            &draft(LeaveType::Casual, "2024-01-05", "2024-01-08", "Trip"),
            &policy(),
            &conflicts,
            &balances(5),
        );
        assert!(!result.is_valid());
        assert_eq!(result.error(FormField::FromDate), Some(OVERLAPS_EXISTING_LEAVE));
    }

    #[test]
    fn test_rejected_leave_does_not_overlap() {
        let conflicts =
            LeaveConflictIndex::new(&[leave("2024-01-01", "2024-01-05", LeaveStatus::Rejected)]);
        let result = validate(
            &draft(LeaveType::Casual, "2024-01-01", "2024-01-02", "Trip"),
            &policy(),
            &conflicts,
            &balances(5),
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let conflicts =
            LeaveConflictIndex::new(&[leave("2024-01-03", "2024-01-03", LeaveStatus::Pending)]);
        let draft = draft(LeaveType::Casual, "2024-01-01", "2024-01-05", "");
        let balances = balances(1);

        let first = validate(&draft, &policy(), &conflicts, &balances);
        let second = validate(&draft, &policy(), &conflicts, &balances);
        assert_eq!(first, second);
    }
}
