//! Calculation logic for the Leave Eligibility Engine.
//!
//! This module contains the pure eligibility rules: the work calendar
//! policy, the existing-leave conflict index, chargeable working-day
//! counting, date-picker selectability and leave request validation.
//! None of these functions perform I/O or hold state between calls.

mod conflict_index;
mod context;
mod selectability;
mod validator;
mod work_calendar;
mod working_days;

pub use conflict_index::LeaveConflictIndex;
pub use context::EligibilityContext;
pub use selectability::{DateExclusion, date_exclusion, is_selectable, selectable_dates};
pub use validator::{
    FROM_DATE_REQUIRED, OVERLAPS_EXISTING_LEAVE, REASON_REQUIRED, TO_DATE_BEFORE_FROM_DATE,
    TO_DATE_REQUIRED, TYPE_REQUIRED, insufficient_balance_message, validate,
};
pub use work_calendar::{DayKind, WorkCalendarPolicy};
pub(crate) use working_days::dates_between;
pub use working_days::{WorkingDaysBreakdown, count_working_days, working_days_breakdown};
