//! Queries for the `competitions/{id}/teams` and `competitions/{id}/matches` endpoints.

use crate::errors::ValidationError;
use crate::url_builder::Params;
use crate::validation::{passthrough, validate_season};

use super::common::{DateFiltered, DateRange, Query};

/// Filters for a competition's teams.
#[derive(Clone, Debug, Default)]
pub struct CompetitionTeamsQuery {
    pub season: Option<String>,
    pub stage: Option<String>,
}

impl Query for CompetitionTeamsQuery {
    fn to_params(&self) -> Result<Params, ValidationError> {
        let mut params = Params::new();
        if let Some(season) = &self.season {
            params.insert("season", validate_season(season)?);
        }
        if let Some(stage) = &self.stage {
            params.insert("stage", passthrough(stage));
        }
        Ok(params)
    }
}

impl CompetitionTeamsQuery {
    /// Starting year of the season, e.g. `2020` for 2020/21.
    pub fn with_season(mut self, season: impl ToString) -> Self {
        self.season = Some(season.to_string());
        self
    }

    pub fn with_stage(mut self, stage: impl ToString) -> Self {
        self.stage = Some(stage.to_string());
        self
    }
}

/// Filters for a competition's matches.
#[derive(Clone, Debug, Default)]
pub struct CompetitionMatchesQuery {
    pub dates: DateRange,
    pub stage: Option<String>,
    pub status: Option<String>,
    pub matchday: Option<String>,
    pub group: Option<String>,
    pub season: Option<String>,
}

impl Query for CompetitionMatchesQuery {
    fn to_params(&self) -> Result<Params, ValidationError> {
        let mut params = Params::new();
        self.dates.add_to_params(&mut params)?;
        if let Some(stage) = &self.stage {
            params.insert("stage", passthrough(stage));
        }
        if let Some(status) = &self.status {
            params.insert("status", passthrough(status));
        }
        if let Some(matchday) = &self.matchday {
            params.insert("matchday", passthrough(matchday));
        }
        if let Some(group) = &self.group {
            params.insert("group", passthrough(group));
        }
        if let Some(season) = &self.season {
            params.insert("season", validate_season(season)?);
        }
        Ok(params)
    }
}

impl DateFiltered for CompetitionMatchesQuery {
    fn get_dates(&mut self) -> &mut DateRange {
        &mut self.dates
    }
}

impl CompetitionMatchesQuery {
    pub fn with_stage(mut self, stage: impl ToString) -> Self {
        self.stage = Some(stage.to_string());
        self
    }

    /// A status code such as `FINISHED`; accepts [`super::Status`].
    pub fn with_status(mut self, status: impl ToString) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_matchday(mut self, matchday: impl ToString) -> Self {
        self.matchday = Some(matchday.to_string());
        self
    }

    pub fn with_group(mut self, group: impl ToString) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_season(mut self, season: impl ToString) -> Self {
        self.season = Some(season.to_string());
        self
    }
}
