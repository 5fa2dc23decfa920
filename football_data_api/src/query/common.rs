//! Shared query infrastructure: the [`Query`] and [`DateFiltered`] traits,
//! the [`DateRange`] fields, and the [`Venue`] and [`Status`] codes.

use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::url_builder::Params;
use crate::validation::validate_date_range;

/// Trait implemented by all query builders.
pub trait Query {
    /// Validates the stored values and returns the query parameters in the
    /// order the endpoint documents them.
    fn to_params(&self) -> Result<Params, ValidationError>;
}

/// Builder methods for queries that accept a `dateFrom`/`dateTo` range.
///
/// Dates are stored as given and checked by [`Query::to_params`]. Anything
/// implementing `Display` works, including `chrono::NaiveDate`.
pub trait DateFiltered: Query {
    /// Returns a mutable reference to the date range fields.
    fn get_dates(&mut self) -> &mut DateRange;

    fn with_date_from(mut self, date: impl ToString) -> Self
    where
        Self: Sized,
    {
        self.get_dates().from = Some(date.to_string());
        self
    }

    fn with_date_to(mut self, date: impl ToString) -> Self
    where
        Self: Sized,
    {
        self.get_dates().to = Some(date.to_string());
        self
    }

    fn with_date_range(self, from: impl ToString, to: impl ToString) -> Self
    where
        Self: Sized,
    {
        self.with_date_from(from).with_date_to(to)
    }
}

/// Raw `dateFrom`/`dateTo` values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateRange {
    /// Appends `dateFrom` and `dateTo`, or nothing when neither is set.
    pub fn add_to_params(&self, params: &mut Params) -> Result<(), ValidationError> {
        if let Some((from, to)) = validate_date_range(self.from.as_deref(), self.to.as_deref())? {
            params.insert("dateFrom", from);
            params.insert("dateTo", to);
        }
        Ok(())
    }
}

/// Whether a team played at home or away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Venue::Home => "HOME",
            Venue::Away => "AWAY",
        })
    }
}

impl FromStr for Venue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HOME" => Ok(Venue::Home),
            "AWAY" => Ok(Venue::Away),
            _ => Err(ValidationError::InvalidVenue(s.to_string())),
        }
    }
}

/// Match status codes understood by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Scheduled,
    Timed,
    Live,
    InPlay,
    Paused,
    Finished,
    Postponed,
    Suspended,
    Cancelled,
    Awarded,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Scheduled => "SCHEDULED",
            Status::Timed => "TIMED",
            Status::Live => "LIVE",
            Status::InPlay => "IN_PLAY",
            Status::Paused => "PAUSED",
            Status::Finished => "FINISHED",
            Status::Postponed => "POSTPONED",
            Status::Suspended => "SUSPENDED",
            Status::Cancelled => "CANCELLED",
            Status::Awarded => "AWARDED",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_adds_nothing() {
        let mut params = Params::new();
        DateRange::default().add_to_params(&mut params).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn half_range_is_rejected() {
        let range = DateRange {
            from: Some("2018-07-08".to_string()),
            to: None,
        };
        let mut params = Params::new();
        assert_eq!(
            range.add_to_params(&mut params).unwrap_err(),
            ValidationError::IncompleteDateRange
        );
        assert!(params.is_empty());
    }

    #[test]
    fn venue_round_trip() {
        assert_eq!("away".parse::<Venue>().unwrap(), Venue::Away);
        assert_eq!(Venue::Home.to_string(), "HOME");
        assert!("INVALID".parse::<Venue>().is_err());
    }

    #[test]
    fn status_codes() {
        assert_eq!(Status::InPlay.to_string(), "IN_PLAY");
        assert_eq!(Status::Finished.to_string(), "FINISHED");
    }
}
