//! Work calendar policy.
//!
//! This module provides [`WorkCalendarPolicy`], which answers whether a
//! calendar date is a working day given the configured work week and the
//! holiday list for the year.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::{CalendarConfig, WorkWeek};
use crate::error::{EngineError, EngineResult};

/// The kind of a calendar date under a work calendar.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::DayKind;
///
/// assert_eq!(format!("{}", DayKind::RestDay), "Rest day");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A working day.
    Working,
    /// A weekday excluded by the work week.
    RestDay,
    /// A configured holiday that would otherwise be a working day.
    Holiday,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Working => write!(f, "Working day"),
            DayKind::RestDay => write!(f, "Rest day"),
            DayKind::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Working-day rules for one or more years.
///
/// Built once from admin-configured data and never mutated afterwards.
/// A holiday is never a working day, whatever its weekday. A policy that
/// spans several years applies each year's own work week, see
/// [`with_year`](Self::with_year).
///
/// # Example
///
/// ```
/// use leave_engine::calculation::WorkCalendarPolicy;
/// use leave_engine::config::WorkWeek;
/// use chrono::NaiveDate;
///
/// let republic_day = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
/// let policy = WorkCalendarPolicy::new(
///     WorkWeek::FiveDays,
///     [(republic_day, "Republic Day".to_string())],
/// );
///
/// // 2026-01-26 is a Monday, but a holiday
/// assert!(!policy.is_working_day(republic_day));
/// // 2026-01-27 is an ordinary Tuesday
/// assert!(policy.is_working_day(NaiveDate::from_ymd_opt(2026, 1, 27).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkCalendarPolicy {
    work_week: WorkWeek,
    year_weeks: BTreeMap<i32, WorkWeek>,
    holidays: BTreeMap<NaiveDate, String>,
}

impl WorkCalendarPolicy {
    /// Creates a policy from a work week and a list of labelled holidays.
    pub fn new(
        work_week: WorkWeek,
        holidays: impl IntoIterator<Item = (NaiveDate, String)>,
    ) -> Self {
        Self {
            work_week,
            year_weeks: BTreeMap::new(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Extends the policy with the calendar of another year.
    ///
    /// Dates in `year` follow `other`'s work week, and `other`'s holidays
    /// are added to this policy's.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::calculation::WorkCalendarPolicy;
    /// use leave_engine::config::WorkWeek;
    /// use chrono::NaiveDate;
    ///
    /// let new_year = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
    /// let policy = WorkCalendarPolicy::new(WorkWeek::FiveDays, []).with_year(
    ///     2027,
    ///     WorkCalendarPolicy::new(WorkWeek::SixDays, [(new_year, "New Year's Day".to_string())]),
    /// );
    ///
    /// assert!(!policy.is_working_day(new_year));
    /// // Saturdays are working days in 2027 only
    /// assert!(policy.is_working_day(NaiveDate::from_ymd_opt(2027, 1, 2).unwrap()));
    /// assert!(!policy.is_working_day(NaiveDate::from_ymd_opt(2026, 12, 26).unwrap()));
    /// ```
    pub fn with_year(mut self, year: i32, other: WorkCalendarPolicy) -> Self {
        self.year_weeks.extend(other.year_weeks);
        self.year_weeks.insert(year, other.work_week);
        self.holidays.extend(other.holidays);
        self
    }

    /// Returns the base work week.
    pub fn work_week(&self) -> WorkWeek {
        self.work_week
    }

    /// Returns the work week that applies on `date`.
    pub fn work_week_on(&self, date: NaiveDate) -> WorkWeek {
        self.year_weeks
            .get(&date.year())
            .copied()
            .unwrap_or(self.work_week)
    }

    /// Returns the holidays, ordered by date.
    pub fn holidays(&self) -> &BTreeMap<NaiveDate, String> {
        &self.holidays
    }

    /// Returns true if `date` is a configured holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the label of the holiday on `date`, if there is one.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    /// Returns true if the weekday of `date` is excluded by the work week.
    pub fn is_rest_day(&self, date: NaiveDate) -> bool {
        self.work_week_on(date).is_rest_day(date.weekday())
    }

    /// Returns true if `date` is neither a rest day nor a holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_rest_day(date) && !self.is_holiday(date)
    }

    /// Classifies `date`. Rest days take precedence over holidays.
    pub fn classify(&self, date: NaiveDate) -> DayKind {
        if self.is_rest_day(date) {
            DayKind::RestDay
        } else if self.is_holiday(date) {
            DayKind::Holiday
        } else {
            DayKind::Working
        }
    }
}

impl TryFrom<&CalendarConfig> for WorkCalendarPolicy {
    type Error = EngineError;

    fn try_from(calendar: &CalendarConfig) -> EngineResult<Self> {
        Ok(Self::new(
            calendar.working_days_per_week,
            calendar.holiday_dates()?,
        ))
    }
}
