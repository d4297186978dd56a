//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading organisation
//! metadata and yearly work calendars from YAML files.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::calculation::WorkCalendarPolicy;
use crate::error::{EngineError, EngineResult};

use super::types::{CalendarConfig, EngineConfig, OrganizationMetadata};

/// Loads and provides access to work calendar configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── organization.yaml   # Organisation metadata and default work week
/// └── calendars/
///     ├── 2025.yaml       # Work week, holidays and leave allotments
///     └── 2026.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let policy = loader.work_calendar(2026).unwrap();
/// println!("{} holidays in 2026", policy.holidays().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `organization.yaml` or the `calendars` directory
    /// is missing, if any file is not valid YAML for its type, or if any
    /// holiday key is not a `YYYY-MM-DD` date.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let organization_path = path.join("organization.yaml");
        let organization = Self::load_yaml::<OrganizationMetadata>(&organization_path)?;

        let calendars_dir = path.join("calendars");
        let calendars = Self::load_calendars(&calendars_dir)?;

        Ok(Self {
            config: EngineConfig::new(organization, calendars),
        })
    }

    /// Creates a loader from configuration already in memory.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every calendar file from the calendars directory.
    fn load_calendars(calendars_dir: &Path) -> EngineResult<Vec<CalendarConfig>> {
        let calendars_dir_str = calendars_dir.display().to_string();

        let entries = fs::read_dir(calendars_dir).map_err(|_| EngineError::ConfigNotFound {
            path: calendars_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: calendars_dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut calendars = Vec::with_capacity(paths.len());
        for path in paths {
            let calendar = Self::load_yaml::<CalendarConfig>(&path)?;
            // Surface malformed holiday keys at load time, not on first use
            calendar.holiday_dates()?;

            debug!(
                year = calendar.year,
                working_days_per_week = calendar.working_days_per_week.days(),
                holidays = calendar.holidays.len(),
                path = %path.display(),
                "Loaded work calendar"
            );
            calendars.push(calendar);
        }

        if calendars.is_empty() {
            warn!(path = %calendars_dir_str, "No calendar files found; using default work week");
        }

        Ok(calendars)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the organisation metadata.
    pub fn organization(&self) -> &OrganizationMetadata {
        self.config.organization()
    }

    /// Returns the configured years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.config.calendars().keys().copied().collect()
    }

    /// Gets the calendar for a year.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// let calendar = loader.calendar(2026)?;
    /// println!("{} working days per week", calendar.working_days_per_week.days());
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn calendar(&self, year: i32) -> EngineResult<&CalendarConfig> {
        self.config
            .calendars()
            .get(&year)
            .ok_or(EngineError::CalendarNotFound { year })
    }

    /// Builds the work calendar policy for a configured year.
    pub fn work_calendar(&self, year: i32) -> EngineResult<WorkCalendarPolicy> {
        WorkCalendarPolicy::try_from(self.calendar(year)?)
    }

    /// Builds the work calendar policy for a year, falling back to the
    /// organisation's default work week with no holidays when the year has
    /// no calendar file.
    pub fn work_calendar_or_default(&self, year: i32) -> EngineResult<WorkCalendarPolicy> {
        match self.work_calendar(year) {
            Err(EngineError::CalendarNotFound { .. }) => {
                debug!(year, "No calendar configured; using default work week");
                Ok(WorkCalendarPolicy::new(
                    self.organization().default_working_days_per_week,
                    [],
                ))
            }
            other => other,
        }
    }

    /// Builds one policy covering every year from `from` to `to`.
    ///
    /// Holidays of all those years are merged, and each date follows the
    /// work week of its own year. Years without a calendar file use the
    /// organisation default. An inverted range covers `from`'s year only.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// let from = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
    /// let to = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
    /// let policy = loader.work_calendar_for_range(from, to)?;
    ///
    /// assert!(policy.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn work_calendar_for_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<WorkCalendarPolicy> {
        let first = from.year();
        let last = to.year().max(first);

        let mut policy = self.work_calendar_or_default(first)?;
        for year in (first + 1)..=last {
            policy = policy.with_year(year, self.work_calendar_or_default(year)?);
        }
        Ok(policy)
    }
}
