//! Core data models for the Leave Eligibility Engine.
//!
//! This module contains the domain models exchanged with the backend and
//! the form layer.

mod applicant;
mod application;
mod balance;
mod iso_date;
mod leave;

pub use applicant::{Applicant, Role};
pub use application::{
    FieldErrors, FormField, LeaveApplication, LeaveApplicationDraft, ValidationResult,
};
pub use balance::{LeaveBalance, LeaveBalances};
pub use iso_date::{ISO_DATE_FORMAT, format_iso_date, parse_iso_date, serde_iso_date};
pub use leave::{LeaveRecord, LeaveStatus, LeaveType};
