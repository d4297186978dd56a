//! Leave Eligibility Engine
//!
//! This crate provides the working-day and eligibility rules behind a leave
//! application form: which dates may be picked, how many chargeable working
//! days a range costs, and whether a leave request is acceptable given the
//! applicant's balances and existing leave.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
