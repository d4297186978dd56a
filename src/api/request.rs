//! Request types for the Leave Eligibility Engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints. Dates are `YYYY-MM-DD` strings on the wire.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{LeaveApplicationDraft, LeaveBalances, LeaveRecord, serde_iso_date};

/// Request body for the `/working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysRequest {
    /// Calendar year whose work week and holidays apply. Without it, the
    /// calendars of every year the range touches are combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// The first day of the range (inclusive).
    #[serde(with = "serde_iso_date")]
    pub from_date: NaiveDate,
    /// The last day of the range (inclusive).
    #[serde(with = "serde_iso_date")]
    pub to_date: NaiveDate,
    /// The applicant's existing leave.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
}

impl WorkingDaysRequest {
    /// The calendar year reported back: the explicit year, else the year of
    /// `from_date`.
    pub fn policy_year(&self) -> i32 {
        self.year.unwrap_or_else(|| self.from_date.year())
    }
}

/// Request body for the `/selectable-dates` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectableDatesRequest {
    /// Calendar year whose work week and holidays apply. Without it, the
    /// calendars of every year the window touches are combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// The first day of the window (inclusive).
    #[serde(with = "serde_iso_date")]
    pub from_date: NaiveDate,
    /// The last day of the window (inclusive).
    #[serde(with = "serde_iso_date")]
    pub to_date: NaiveDate,
    /// The date treated as today. Defaults to the server's local date.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_iso_date::option"
    )]
    pub today: Option<NaiveDate>,
    /// The applicant's existing leave.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
}

impl SelectableDatesRequest {
    /// The calendar year reported back: the explicit year, else the year of
    /// `from_date`.
    pub fn policy_year(&self) -> i32 {
        self.year.unwrap_or_else(|| self.from_date.year())
    }
}

/// Request body for the `/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// Calendar year whose work week and holidays apply. Without it, the
    /// calendars of every year in [`calendar_span`](Self::calendar_span)
    /// are combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// The application as entered.
    pub draft: LeaveApplicationDraft,
    /// The applicant's existing leave.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
    /// The applicant's balances.
    #[serde(default)]
    pub balances: LeaveBalances,
}

impl ValidationRequest {
    /// The dates whose calendars apply to the draft.
    ///
    /// Both draft dates when set, otherwise whichever one is set, otherwise
    /// `today` alone.
    pub fn calendar_span(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match (self.draft.from_date, self.draft.to_date) {
            (Some(from), Some(to)) => (from, to),
            (Some(date), None) | (None, Some(date)) => (date, date),
            (None, None) => (today, today),
        }
    }

    /// The calendar year reported in logs: the explicit year, else the year
    /// the calendar span starts in.
    pub fn policy_year(&self, today: NaiveDate) -> i32 {
        self.year.unwrap_or_else(|| self.calendar_span(today).0.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveStatus, LeaveType};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_deserialize_working_days_request() {
        let json = r#"{
            "from_date": "2026-01-05",
            "to_date": "2026-01-09",
            "leaves": [
                {"id": 4, "type": "sick", "from_date": "2026-01-07", "to_date": "2026-01-07", "status": "pending"}
            ]
        }"#;

        let request: WorkingDaysRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.from_date, make_date("2026-01-05"));
        assert_eq!(request.leaves.len(), 1);
        assert_eq!(request.leaves[0].leave_type, LeaveType::Sick);
        assert_eq!(request.leaves[0].status, LeaveStatus::Pending);
        assert_eq!(request.policy_year(), 2026);
    }

    #[test]
    fn test_explicit_year_wins() {
        let json = r#"{"year": 2025, "from_date": "2026-01-05", "to_date": "2026-01-09"}"#;
        let request: SelectableDatesRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.policy_year(), 2025);
        assert!(request.leaves.is_empty());
        assert!(request.today.is_none());
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let json = r#"{"from_date": "2026/01/05", "to_date": "2026-01-09"}"#;
        assert!(serde_json::from_str::<WorkingDaysRequest>(json).is_err());
    }

    #[test]
    fn test_validation_request_year_fallbacks() {
        let json = r#"{
            "draft": {"type": "casual", "reason": "Trip"},
            "balances": [{"type": "casual", "total": 12, "used": 2, "remaining": 10}]
        }"#;

        let request: ValidationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.draft.from_date, None);
        assert_eq!(request.balances.available(LeaveType::Casual), 10);
        assert_eq!(request.policy_year(make_date("2027-03-01")), 2027);

        let with_date = ValidationRequest {
            draft: LeaveApplicationDraft {
                from_date: Some(make_date("2026-12-30")),
                ..request.draft.clone()
            },
            ..request
        };
        assert_eq!(with_date.policy_year(make_date("2027-03-01")), 2026);
    }

    #[test]
    fn test_validation_request_calendar_span() {
        let today = make_date("2026-06-01");
        let mut request: ValidationRequest =
            serde_json::from_str(r#"{"draft": {"to_date": "2027-01-04"}}"#).unwrap();
        assert_eq!(
            request.calendar_span(today),
            (make_date("2027-01-04"), make_date("2027-01-04"))
        );
        assert_eq!(request.policy_year(today), 2027);

        request.draft.from_date = Some(make_date("2026-12-28"));
        assert_eq!(
            request.calendar_span(today),
            (make_date("2026-12-28"), make_date("2027-01-04"))
        );

        request.draft = LeaveApplicationDraft::default();
        assert_eq!(request.calendar_span(today), (today, today));
    }

    #[test]
    fn test_extended_year_is_rejected() {
        let json = r#"{"from_date": "-20000-01-01", "to_date": "+20000-12-31"}"#;
        assert!(serde_json::from_str::<WorkingDaysRequest>(json).is_err());

        let json = r#"{"draft": {"from_date": "+20000-01-01"}}"#;
        assert!(serde_json::from_str::<ValidationRequest>(json).is_err());
    }
}
