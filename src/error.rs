//! Error types for the Leave Eligibility Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur while loading calendars or parsing
//! dates at the boundary. Leave request validation failures are not errors;
//! they are reported as [`crate::models::ValidationResult`] data.

use thiserror::Error;

/// The main error type for the Leave Eligibility Engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::CalendarNotFound { year: 2031 };
/// assert_eq!(error.to_string(), "No work calendar configured for year 2031");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No calendar is configured for the requested year.
    #[error("No work calendar configured for year {year}")]
    CalendarNotFound {
        /// The year that was requested.
        year: i32,
    },

    /// The number of working days per week is not one of 4, 5 or 6.
    #[error("Unsupported working days per week: {value} (expected 4, 5 or 6)")]
    InvalidWorkingDays {
        /// The rejected value.
        value: u8,
    },

    /// A date string was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// A description of what made the date invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
