//! Response types for the Leave Eligibility Engine API.
//!
//! This module defines the success payloads, the error response structures
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{DateExclusion, WorkingDaysBreakdown};
use crate::error::EngineError;

/// Response body for the `/working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysResponse {
    /// The calendar year that was applied.
    pub year: i32,
    /// Chargeable working days in the range.
    pub working_days: u32,
    /// Per-category counts for the range.
    pub breakdown: WorkingDaysBreakdown,
}

/// A date the picker must not offer, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcludedDate {
    /// The excluded date.
    pub date: NaiveDate,
    /// Why it is excluded.
    pub reason: DateExclusion,
}

/// Response body for the `/selectable-dates` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectableDatesResponse {
    /// The calendar year that was applied.
    pub year: i32,
    /// Selectable dates, ascending.
    pub dates: Vec<NaiveDate>,
    /// Every other date of the window, ascending.
    pub excluded: Vec<ExcludedDate>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a calendar not found error response.
    pub fn calendar_not_found(year: i32) -> Self {
        Self::with_details(
            "CALENDAR_NOT_FOUND",
            format!("No work calendar configured for year {}", year),
            "Ask an administrator to configure the work week and holidays for this year",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::CalendarNotFound { year } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::calendar_not_found(year),
            },
            EngineError::InvalidWorkingDays { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WORKING_DAYS",
                    format!("Unsupported working days per week: {}", value),
                    "Working days per week must be 4, 5 or 6",
                ),
            },
            EngineError::InvalidDate { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{}'", value),
                    message,
                ),
            },
        }
    }
}
