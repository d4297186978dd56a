//! `YYYY-MM-DD` date parsing and formatting.
//!
//! Dates cross every boundary of the engine as plain calendar-date strings
//! with no time of day and no offset. The year is always four digits;
//! chrono's own `NaiveDate` parser also accepts signed extended years such
//! as `+20000-12-31`, so wire fields go through [`serde_iso_date`] instead.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// The wire format for calendar dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// Surrounding whitespace is ignored. Anything other than four year
/// digits, two month digits and two day digits is rejected.
///
/// # Example
///
/// ```
/// use leave_engine::models::parse_iso_date;
/// use chrono::NaiveDate;
///
/// let date = parse_iso_date("2024-01-01").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert!(parse_iso_date("01/01/2024").is_err());
/// assert!(parse_iso_date("+20000-01-01").is_err());
/// ```
pub fn parse_iso_date(value: &str) -> EngineResult<NaiveDate> {
    let trimmed = value.trim();
    if !has_iso_shape(trimmed) {
        return Err(EngineError::InvalidDate {
            value: value.to_string(),
            message: "expected YYYY-MM-DD".to_string(),
        });
    }

    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|e| EngineError::InvalidDate {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Formats a calendar date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

fn has_iso_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Strict `YYYY-MM-DD` serde representation for `NaiveDate` fields.
///
/// Use with `#[serde(with = "crate::models::serde_iso_date")]`, or the
/// [`option`](serde_iso_date::option) submodule for `Option<NaiveDate>`.
pub mod serde_iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::{format_iso_date, parse_iso_date};

    /// Serializes a date as `YYYY-MM-DD`.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_iso_date(*date))
    }

    /// Deserializes a strict `YYYY-MM-DD` date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse_iso_date(&value).map_err(D::Error::custom)
    }

    /// The same representation for optional dates; `null` maps to `None`.
    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        use super::super::{format_iso_date, parse_iso_date};

        /// Serializes an optional date as `YYYY-MM-DD` or `null`.
        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => serializer.serialize_some(&format_iso_date(*date)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional strict `YYYY-MM-DD` date.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|value| parse_iso_date(&value).map_err(D::Error::custom))
                .transpose()
        }
    }
}
