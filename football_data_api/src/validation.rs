//! Checks and normalization for caller-supplied filter values.
//!
//! Each function takes the raw value and returns the string to place in the
//! query, or a [`ValidationError`]. Nothing here touches the network.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::ValidationError;
use crate::query::Venue;

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[1-9][0-9]{3}-[0-9]{2}-[0-9]{2}$").expect("date pattern"))
}

fn season_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}$").expect("season pattern"))
}

fn limit_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+$").expect("limit pattern"))
}

/// Validate a date against the literal `YYYY-MM-DD` shape.
///
/// Only the digit layout is checked: `2020-13-40` is accepted.
pub fn validate_date(field: &'static str, value: &str) -> Result<String, ValidationError> {
    if date_pattern().is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        })
    }
}

/// Validate a `dateFrom`/`dateTo` pair. Both or neither must be given.
pub fn validate_date_range(
    from: Option<&str>,
    to: Option<&str>,
) -> Result<Option<(String, String)>, ValidationError> {
    match (from, to) {
        (None, None) => Ok(None),
        (Some(from), Some(to)) => Ok(Some((
            validate_date("dateFrom", from)?,
            validate_date("dateTo", to)?,
        ))),
        _ => Err(ValidationError::IncompleteDateRange),
    }
}

/// Validate a venue code: case-insensitive, normalized to upper case.
pub fn validate_venue(input: &str) -> Result<String, ValidationError> {
    input.parse::<Venue>().map(|venue| venue.to_string())
}

/// Validate a result limit: decimal digits only, forwarded as given.
pub fn validate_limit(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if limit_pattern().is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidLimit(input.to_string()))
    }
}

/// Validate a season: the starting year of the season, as four digits.
pub fn validate_season(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if season_pattern().is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidSeason(input.to_string()))
    }
}

/// Stage, status, matchday, group and competition lists are forwarded as-is;
/// the API decides whether they are valid.
pub fn passthrough(input: &str) -> String {
    input.to_string()
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
