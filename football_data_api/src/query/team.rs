//! Query for the `teams/{id}/matches` endpoint.

use crate::errors::ValidationError;
use crate::url_builder::Params;
use crate::validation::{passthrough, validate_limit, validate_season, validate_venue};

use super::common::{DateFiltered, DateRange, Query};

/// Filters for a team's matches.
#[derive(Clone, Debug, Default)]
pub struct TeamMatchesQuery {
    pub dates: DateRange,
    pub status: Option<String>,
    pub venue: Option<String>,
    pub limit: Option<String>,
    pub season: Option<String>,
}

impl Query for TeamMatchesQuery {
    fn to_params(&self) -> Result<Params, ValidationError> {
        let mut params = Params::new();
        self.dates.add_to_params(&mut params)?;
        if let Some(status) = &self.status {
            params.insert("status", passthrough(status));
        }
        if let Some(venue) = &self.venue {
            params.insert("venue", validate_venue(venue)?);
        }
        if let Some(limit) = &self.limit {
            params.insert("limit", validate_limit(limit)?);
        }
        if let Some(season) = &self.season {
            params.insert("season", validate_season(season)?);
        }
        Ok(params)
    }
}

impl DateFiltered for TeamMatchesQuery {
    fn get_dates(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl TeamMatchesQuery {
    pub fn with_status(mut self, status: impl ToString) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// `HOME` or `AWAY`; accepts [`super::Venue`].
    pub fn with_venue(mut self, venue: impl ToString) -> Self {
        self.venue = Some(venue.to_string());
        self
    }

    /// Maximum number of matches; accepts integers or their text.
    pub fn with_limit(mut self, limit: impl ToString) -> Self {
        self.limit = Some(limit.to_string());
        self
    }

    pub fn with_season(mut self, season: impl ToString) -> Self {
        self.season = Some(season.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Venue;

    #[test]
    fn venue_and_limit() {
        let params = TeamMatchesQuery::default()
            .with_limit(5)
            .with_venue(Venue::Away)
            .to_params()
            .unwrap();
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("venue", "AWAY"), ("limit", "5")]);
    }

    #[test]
    fn invalid_venue_rejected() {
        assert_eq!(
            TeamMatchesQuery::default()
                .with_venue("INVALID")
                .to_params()
                .unwrap_err(),
            ValidationError::InvalidVenue("INVALID".to_string())
        );
    }

    #[test]
    fn invalid_limit_rejected() {
        assert!(TeamMatchesQuery::default()
            .with_limit("a")
            .to_params()
            .is_err());
    }
}
