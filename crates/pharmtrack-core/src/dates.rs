//! Calendar date handling for records
//!
//! Datasets carry dates in two shapes: ISO (`2023-07-15`) on inventory rows
//! and the display form (`Jul 25, 2023`) on deliveries. Both decode to
//! [`NaiveDate`]; encoding always writes ISO.

use crate::error::CatalogError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const ISO_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_PARSE_FORMAT: &str = "%b %d, %Y";
const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Parse a date in either ISO or display form
///
/// # Errors
/// Returns [`CatalogError::InvalidDate`] when neither format matches
pub fn parse_date(value: &str) -> Result<NaiveDate, CatalogError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, DISPLAY_PARSE_FORMAT))
        .map_err(|_| CatalogError::InvalidDate(value.to_string()))
}

/// Render a date the way cards show it (`Jul 5, 2023`)
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Serde adapter: `#[serde(with = "crate::dates")]`
pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(ISO_FORMAT))
}

/// Serde adapter: `#[serde(with = "crate::dates")]`
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}
