//! Leave application models.
//!
//! This module contains the user-entered [`LeaveApplicationDraft`], the
//! normalized [`LeaveApplication`] payload that is submitted to the backend,
//! and the [`ValidationResult`] that decides between the two.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::LeaveType;

/// A leave application as it is being filled in.
///
/// Every field stays optional until the user picks it. The number of
/// chargeable days is derived from the dates on demand and is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplicationDraft {
    /// The chosen leave type.
    #[serde(rename = "type", default)]
    pub leave_type: Option<LeaveType>,
    /// The first day of leave.
    #[serde(default, with = "super::serde_iso_date::option")]
    pub from_date: Option<NaiveDate>,
    /// The last day of leave.
    #[serde(default, with = "super::serde_iso_date::option")]
    pub to_date: Option<NaiveDate>,
    /// Free-text reason, untrimmed.
    #[serde(default)]
    pub reason: String,
}

impl LeaveApplicationDraft {
    /// Returns both dates once the user has chosen them.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.from_date.zip(self.to_date)
    }
}

/// The normalized payload posted to the leave creation endpoint.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveApplication, LeaveType};
/// use chrono::NaiveDate;
///
/// let payload = LeaveApplication {
///     leave_type: LeaveType::Casual,
///     from_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
///     reason: "Family event".to_string(),
/// };
/// let json = serde_json::to_string(&payload).unwrap();
/// assert_eq!(
///     json,
///     r#"{"type":"casual","from_date":"2024-01-01","to_date":"2024-01-02","reason":"Family event"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// The requested leave type.
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    /// The first day of leave.
    #[serde(with = "super::serde_iso_date")]
    pub from_date: NaiveDate,
    /// The last day of leave.
    #[serde(with = "super::serde_iso_date")]
    pub to_date: NaiveDate,
    /// The trimmed reason.
    pub reason: String,
}

/// A field of the leave application form that can carry an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// The leave type selector.
    Type,
    /// The from-date picker.
    FromDate,
    /// The to-date picker.
    ToDate,
    /// The reason text box.
    Reason,
}

impl FormField {
    /// Returns the wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Type => "type",
            FormField::FromDate => "from_date",
            FormField::ToDate => "to_date",
            FormField::Reason => "reason",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error messages keyed by form field, at most one per field.
pub type FieldErrors = BTreeMap<FormField, String>;

/// The outcome of validating a draft.
///
/// A draft is never partially valid: either every check passed and a
/// payload is produced, or every violated check is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    /// Every check passed.
    Valid {
        /// The normalized request to submit.
        payload: LeaveApplication,
    },
    /// At least one check failed.
    Invalid {
        /// Every violation, keyed by the field it is displayed on.
        field_errors: FieldErrors,
    },
}

impl ValidationResult {
    /// Returns true for [`ValidationResult::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// Returns the payload of a valid result.
    pub fn payload(&self) -> Option<&LeaveApplication> {
        match self {
            ValidationResult::Valid { payload } => Some(payload),
            ValidationResult::Invalid { .. } => None,
        }
    }

    /// Returns the errors of an invalid result.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Valid { .. } => None,
            ValidationResult::Invalid { field_errors } => Some(field_errors),
        }
    }

    /// Returns the message attached to `field`, if any.
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.field_errors()
            .and_then(|errors| errors.get(&field))
            .map(String::as_str)
    }
}
