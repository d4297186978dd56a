//! HTTP API module for the Leave Eligibility Engine.
//!
//! This module exposes working-day counting, date-picker selectability,
//! leave request validation and calendar lookup as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_RANGE_DAYS, create_router};
pub use request::{SelectableDatesRequest, ValidationRequest, WorkingDaysRequest};
pub use response::{
    ApiError, ApiErrorResponse, ExcludedDate, SelectableDatesResponse, WorkingDaysResponse,
};
pub use state::AppState;
