//! Application state for the Leave Eligibility Engine API.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded calendars, which are immutable for the life of the
/// server.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// The server's local calendar date.
    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
