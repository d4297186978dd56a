//! Configuration loading and management for the Leave Eligibility Engine.
//!
//! This module provides functionality to load organisation metadata and
//! yearly work calendars (work week, holidays, leave allotments) from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded calendars for {}", config.organization().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, EngineConfig, OrganizationMetadata, WorkWeek};
