//! HTTP request handlers for the Leave Eligibility Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    EligibilityContext, LeaveConflictIndex, WorkCalendarPolicy, date_exclusion, dates_between,
};
use crate::error::EngineResult;
use crate::models::LeaveBalances;

use super::request::{SelectableDatesRequest, ValidationRequest, WorkingDaysRequest};
use super::response::{
    ApiError, ApiErrorResponse, ExcludedDate, SelectableDatesResponse, WorkingDaysResponse,
};
use super::state::AppState;

/// Longest date range any endpoint will walk, in days.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/working-days", post(working_days_handler))
        .route("/selectable-dates", post(selectable_dates_handler))
        .route("/validate", post(validate_handler))
        .route("/calendars/:year", get(calendar_handler))
        .with_state(state)
}

/// Handler for POST /working-days.
///
/// Counts chargeable working days in a range and reports the breakdown.
async fn working_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working days request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(error) = check_range(correlation_id, request.from_date, request.to_date) {
        return error_response(correlation_id, error);
    }

    let start_time = Instant::now();
    let year = request.policy_year();
    let policy = match resolve_policy(&state, request.year, request.from_date, request.to_date) {
        Ok(policy) => policy,
        Err(err) => return error_response(correlation_id, err.into()),
    };

    let context = EligibilityContext::new(policy, &request.leaves, LeaveBalances::default());
    let breakdown = context.working_days_breakdown(request.from_date, request.to_date);
    let working_days = breakdown.chargeable_days;

    info!(
        correlation_id = %correlation_id,
        year,
        from_date = %request.from_date,
        to_date = %request.to_date,
        leaves_count = request.leaves.len(),
        working_days,
        duration_us = start_time.elapsed().as_micros(),
        "Working days calculated"
    );

    json_response(
        StatusCode::OK,
        WorkingDaysResponse {
            year,
            working_days,
            breakdown,
        },
    )
}

/// Handler for POST /selectable-dates.
///
/// Lists the dates of a window that a leave date picker may offer.
async fn selectable_dates_handler(
    State(state): State<AppState>,
    payload: Result<Json<SelectableDatesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing selectable dates request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(error) = check_range(correlation_id, request.from_date, request.to_date) {
        return error_response(correlation_id, error);
    }

    let start_time = Instant::now();
    let year = request.policy_year();
    let policy = match resolve_policy(&state, request.year, request.from_date, request.to_date) {
        Ok(policy) => policy,
        Err(err) => return error_response(correlation_id, err.into()),
    };
    let conflicts = LeaveConflictIndex::new(&request.leaves);
    let today = request.today.unwrap_or_else(|| state.today());

    let mut dates = Vec::new();
    let mut excluded = Vec::new();
    for date in dates_between(request.from_date, request.to_date) {
        match date_exclusion(date, &policy, &conflicts, today) {
            None => dates.push(date),
            Some(reason) => excluded.push(ExcludedDate { date, reason }),
        }
    }

    info!(
        correlation_id = %correlation_id,
        year,
        today = %today,
        selectable = dates.len(),
        excluded = excluded.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Selectable dates calculated"
    );

    json_response(
        StatusCode::OK,
        SelectableDatesResponse {
            year,
            dates,
            excluded,
        },
    )
}

/// Handler for POST /validate.
///
/// Returns the validation outcome with 200 whether the draft is valid or not.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let today = state.today();
    let (from, to) = request.calendar_span(today);
    if let Err(error) = check_range(correlation_id, from, to) {
        return error_response(correlation_id, error);
    }

    let start_time = Instant::now();
    let year = request.policy_year(today);
    let policy = match resolve_policy(&state, request.year, from, to) {
        Ok(policy) => policy,
        Err(err) => return error_response(correlation_id, err.into()),
    };

    let context = EligibilityContext::new(policy, &request.leaves, request.balances);
    let result = context.validate(&request.draft);

    info!(
        correlation_id = %correlation_id,
        year,
        valid = result.is_valid(),
        errors = result.field_errors().map_or(0, |errors| errors.len()),
        duration_us = start_time.elapsed().as_micros(),
        "Validation completed"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for GET /calendars/{year}.
async fn calendar_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let year = match path {
        Ok(Path(year)) => year,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "Invalid calendar year");
            return error_response(
                correlation_id,
                ApiErrorResponse::bad_request(ApiError::validation_error(format!(
                    "Calendar year must be an integer: {}",
                    body_text
                ))),
            );
        }
    };
    info!(correlation_id = %correlation_id, year, "Processing calendar request");

    match state.config().calendar(year) {
        Ok(calendar) => json_response(StatusCode::OK, calendar),
        Err(err) => {
            warn!(correlation_id = %correlation_id, year, error = %err, "Calendar lookup failed");
            error_response(correlation_id, err.into())
        }
    }
}

/// Builds the calendar for a request.
///
/// An explicitly requested year must be configured and applies to every
/// date. Otherwise the calendars of all years from `from` to `to` are
/// combined, with the organisation's default work week for missing years.
fn resolve_policy(
    state: &AppState,
    requested: Option<i32>,
    from: NaiveDate,
    to: NaiveDate,
) -> EngineResult<WorkCalendarPolicy> {
    match requested {
        Some(year) => state.config().work_calendar(year),
        None => state.config().work_calendar_for_range(from, to),
    }
}

/// Rejects ranges longer than [`MAX_RANGE_DAYS`]. Inverted ranges pass.
fn check_range(
    correlation_id: Uuid,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<(), ApiErrorResponse> {
    let range_days = (to - from).num_days() + 1;
    if range_days > MAX_RANGE_DAYS {
        warn!(correlation_id = %correlation_id, range_days, "Date range too large");
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            format!(
                "Date range spans {} days; at most {} are allowed",
                range_days, MAX_RANGE_DAYS
            ),
        )));
    }
    Ok(())
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, error: ApiErrorResponse) -> Response {
    warn!(
        correlation_id = %correlation_id,
        status = error.status.as_u16(),
        code = %error.error.code,
        "Request failed"
    );
    error.into_response()
}

/// Maps a JSON extraction failure onto a 400 error body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::ValidationResult;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: &str) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_working_days_skips_holiday() {
        // 2026-01-26 (Republic Day) falls on a Monday
        let response = post_json(
            "/working-days",
            r#"{"from_date": "2026-01-26", "to_date": "2026-01-30"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let result: WorkingDaysResponse = body_json(response).await;
        assert_eq!(result.year, 2026);
        assert_eq!(result.working_days, 4);
        assert_eq!(result.breakdown.holidays, 1);
    }

    #[tokio::test]
    async fn test_working_days_explicit_unknown_year_is_404() {
        let response = post_json(
            "/working-days",
            r#"{"year": 2031, "from_date": "2031-01-06", "to_date": "2031-01-10"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "CALENDAR_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_working_days_derived_unknown_year_uses_default_week() {
        // 2031-01-06 is a Monday
        let response = post_json(
            "/working-days",
            r#"{"from_date": "2031-01-06", "to_date": "2031-01-12"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let result: WorkingDaysResponse = body_json(response).await;
        assert_eq!(result.working_days, 5);
    }

    #[tokio::test]
    async fn test_selectable_window_too_large() {
        let response = post_json(
            "/selectable-dates",
            r#"{"from_date": "2026-01-01", "to_date": "2027-12-31", "today": "2026-01-01"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_working_days_range_too_large() {
        let response = post_json(
            "/working-days",
            r#"{"from_date": "2025-01-01", "to_date": "2026-12-31"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("730 days"));
    }

    #[tokio::test]
    async fn test_working_days_extended_years_are_malformed() {
        let response = post_json(
            "/working-days",
            r#"{"from_date": "-20000-01-01", "to_date": "+20000-12-31"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_working_days_across_year_boundary() {
        // 2026-01-01 is a holiday in the 2026 calendar only
        let response = post_json(
            "/working-days",
            r#"{"from_date": "2025-12-29", "to_date": "2026-01-02"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let result: WorkingDaysResponse = body_json(response).await;
        assert_eq!(result.year, 2025);
        assert_eq!(result.working_days, 4);
        assert_eq!(result.breakdown.holidays, 1);
    }

    #[tokio::test]
    async fn test_validate_range_too_large() {
        let response = post_json(
            "/validate",
            r#"{"draft": {"type": "earned", "from_date": "2026-01-01", "to_date": "2027-06-30", "reason": "Sabbatical"}}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_validate_missing_draft_is_validation_error() {
        let response = post_json("/validate", r#"{"leaves": []}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_validate_returns_invalid_with_200() {
        let response = post_json("/validate", r#"{"draft": {}}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        let result: ValidationResult = body_json(response).await;
        assert!(!result.is_valid());
        assert_eq!(result.field_errors().map(|errors| errors.len()), Some(4));
    }

    #[tokio::test]
    async fn test_calendar_year_must_be_integer() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .uri("/calendars/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("integer"));
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/working-days")
                    .body(Body::from(r#"{"from_date": "2026-01-05", "to_date": "2026-01-09"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }
}
