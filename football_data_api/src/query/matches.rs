//! Query for the cross-competition `matches` endpoint.

use crate::errors::ValidationError;
use crate::url_builder::Params;
use crate::validation::passthrough;

use super::common::{DateFiltered, DateRange, Query};

/// Filters for matches across competitions.
#[derive(Clone, Debug, Default)]
pub struct MatchesQuery {
    /// Competition ids or codes, sent comma-separated.
    pub competitions: Vec<String>,
    pub dates: DateRange,
    pub status: Option<String>,
}

impl Query for MatchesQuery {
    fn to_params(&self) -> Result<Params, ValidationError> {
        let mut params = Params::new();
        if !self.competitions.is_empty() {
            params.insert("competitions", passthrough(&self.competitions.join(",")));
        }
        self.dates.add_to_params(&mut params)?;
        if let Some(status) = &self.status {
            params.insert("status", passthrough(status));
        }
        Ok(params)
    }
}

impl DateFiltered for MatchesQuery {
    fn get_dates(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl MatchesQuery {
    pub fn with_competition(mut self, competition: impl ToString) -> Self {
        self.competitions.push(competition.to_string());
        self
    }

    pub fn with_competitions<T: ToString>(mut self, competitions: &[T]) -> Self {
        self.competitions
            .extend(competitions.iter().map(ToString::to_string));
        self
    }

    pub fn with_status(mut self, status: impl ToString) -> Self {
        self.status = Some(status.to_string());
        self
    }
}
