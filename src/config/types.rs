//! Configuration types for work calendars.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveType, parse_iso_date};

/// How many days of the week are working days.
///
/// Serialized as the plain integer `4`, `5` or `6`.
///
/// | Days | Rest days |
/// |------|-----------|
/// | 6    | Sunday |
/// | 5    | Saturday, Sunday |
/// | 4    | Friday, Saturday, Sunday |
///
/// # Example
///
/// ```
/// use leave_engine::config::WorkWeek;
/// use chrono::Weekday;
///
/// let week = WorkWeek::try_from(4).unwrap();
/// assert!(week.is_rest_day(Weekday::Fri));
/// assert!(WorkWeek::try_from(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WorkWeek {
    /// Monday to Thursday.
    FourDays,
    /// Monday to Friday.
    #[default]
    FiveDays,
    /// Monday to Saturday.
    SixDays,
}

impl WorkWeek {
    /// Number of working days in the week.
    pub fn days(&self) -> u8 {
        match self {
            WorkWeek::FourDays => 4,
            WorkWeek::FiveDays => 5,
            WorkWeek::SixDays => 6,
        }
    }

    /// Returns true if `weekday` is never a working day under this week.
    pub fn is_rest_day(&self, weekday: Weekday) -> bool {
        match self {
            WorkWeek::FourDays => matches!(weekday, Weekday::Fri | Weekday::Sat | Weekday::Sun),
            WorkWeek::FiveDays => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WorkWeek::SixDays => weekday == Weekday::Sun,
        }
    }
}

impl TryFrom<u8> for WorkWeek {
    type Error = EngineError;

    fn try_from(value: u8) -> EngineResult<Self> {
        match value {
            4 => Ok(WorkWeek::FourDays),
            5 => Ok(WorkWeek::FiveDays),
            6 => Ok(WorkWeek::SixDays),
            _ => Err(EngineError::InvalidWorkingDays { value }),
        }
    }
}

impl From<WorkWeek> for u8 {
    fn from(week: WorkWeek) -> Self {
        week.days()
    }
}

/// Metadata about the organisation the calendars belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationMetadata {
    /// Display name of the organisation.
    pub name: String,
    /// The timezone in which "today" is reckoned (informational).
    pub timezone: String,
    /// Work week assumed for years without a calendar file.
    #[serde(default)]
    pub default_working_days_per_week: WorkWeek,
}

/// The admin-configured calendar for one year.
///
/// Holiday keys stay `YYYY-MM-DD` strings on the wire and are parsed by
/// [`CalendarConfig::holiday_dates`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// The calendar year.
    pub year: i32,
    /// The configured work week.
    pub working_days_per_week: WorkWeek,
    /// Map of holiday date to its label.
    #[serde(default)]
    pub holidays: BTreeMap<String, String>,
    /// Yearly allotment of days per leave type.
    #[serde(default)]
    pub leave_types: BTreeMap<LeaveType, u32>,
}

impl CalendarConfig {
    /// Parses the holiday keys into calendar dates.
    ///
    /// Returns `InvalidDate` for the first key that is not `YYYY-MM-DD`.
    pub fn holiday_dates(&self) -> EngineResult<BTreeMap<NaiveDate, String>> {
        self.holidays
            .iter()
            .map(|(date, label)| Ok((parse_iso_date(date)?, label.clone())))
            .collect()
    }
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Organisation metadata.
    organization: OrganizationMetadata,
    /// Calendars keyed by year.
    calendars: BTreeMap<i32, CalendarConfig>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    ///
    /// When two calendars share a year the later one wins.
    pub fn new(organization: OrganizationMetadata, calendars: Vec<CalendarConfig>) -> Self {
        let calendars = calendars.into_iter().map(|c| (c.year, c)).collect();
        Self {
            organization,
            calendars,
        }
    }

    /// Returns the organisation metadata.
    pub fn organization(&self) -> &OrganizationMetadata {
        &self.organization
    }

    /// Returns all calendars keyed by year.
    pub fn calendars(&self) -> &BTreeMap<i32, CalendarConfig> {
        &self.calendars
    }
}
