//! HTTP client for the football-data.org v4 API.

use std::fmt::Display;
use std::sync::Mutex;

use serde_json::Value;

use crate::{
    config::Config,
    errors::{LastError, ValidationError},
    gateway::{Classified, Gateway},
    mapper::{self, Mapped, Shape},
    outcome::Outcome,
    query::{CompetitionMatchesQuery, CompetitionTeamsQuery, MatchesQuery, Query, TeamMatchesQuery},
    types::{Competition, Match, Team},
    url_builder::{Params, UrlBuilder},
    Error,
};

/// HTTP client for the football-data.org API.
///
/// Every operation validates its filters, sends at most one GET, and returns
/// an [`Outcome`]: the data (empty or `None` on failure) plus the error that
/// caused it. Nothing is retried or cached.
///
/// [`Client::last_error`] mirrors the most recent API or transport failure
/// for strictly sequential callers. Concurrent callers should read
/// [`Outcome::error`] instead.
pub struct Client {
    api_key: String,
    urls: UrlBuilder,
    gateway: Gateway,
    /// Reset at the start of every operation.
    last_error: Mutex<Option<LastError>>,
}

impl Client {
    /// Creates a client for the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(Config::new(api_key)?)
    }

    /// Creates a client from `FOOTBALL_API_KEY` (and `FOOTBALL_DATA_BASE_URL`).
    pub fn from_env() -> Result<Self, Error> {
        Self::with_config(Config::from_env()?)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(Config::new(api_key)?.with_base_url(base_url))
    }

    pub fn with_config(config: Config) -> Result<Self, Error> {
        let gateway = Gateway::new(config.timeout()).map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Client(e)
        })?;
        Ok(Self {
            api_key: config.api_key().to_string(),
            urls: UrlBuilder::new(config.base_url()),
            gateway,
            last_error: Mutex::new(None),
        })
    }

    /// The most recent API or transport failure, if the last call had one.
    pub fn last_error(&self) -> Option<LastError> {
        self.last_error
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Builds the URL a request to `path` with `params` would use.
    pub fn build_url(&self, path: &str, params: &Params) -> String {
        self.urls.build(path, params)
    }

    fn set_last_error(&self, value: Option<LastError>) {
        *self.last_error.lock().unwrap_or_else(|e| e.into_inner()) = value;
    }

    async fn fetch(
        &self,
        path: &str,
        params: Result<Params, ValidationError>,
        shape: Shape,
    ) -> Result<Mapped, Error> {
        self.set_last_error(None);

        let params = params.map_err(|e| {
            tracing::warn!("Not requesting {}: {}", path, e);
            Error::InvalidParameter(e)
        })?;
        let url = self.urls.build(path, &params);

        let err = match self.gateway.execute(&url, &self.api_key).await {
            Classified::Success(body) => return Ok(mapper::map(shape, body.into_json())),
            Classified::ApiError { code, message } => Error::Api { code, message },
            Classified::TransportError(e) => Error::Transport(e),
        };
        self.set_last_error(Some(LastError::from(&err)));
        Err(err)
    }

    async fn get_list<T: From<crate::types::Entity>>(
        &self,
        path: &str,
        params: Result<Params, ValidationError>,
        field: &'static str,
    ) -> Outcome<Vec<T>> {
        Outcome::from_result(
            self.fetch(path, params, Shape::List(field))
                .await
                .map(Mapped::into_list::<T>),
        )
    }

    async fn get_one<T: From<crate::types::Entity>>(&self, path: &str) -> Outcome<Option<T>> {
        Outcome::from_result(
            self.fetch(path, Ok(Params::new()), Shape::Single)
                .await
                .map(Mapped::into_single::<T>),
        )
    }

    /// Lists all available competitions.
    pub async fn competitions(&self) -> Outcome<Vec<Competition>> {
        self.get_list("competitions", Ok(Params::new()), "competitions")
            .await
    }

    /// Fetches one competition by numeric id or code (e.g. `2001` or `"CL"`).
    pub async fn competition(&self, competition: impl Display) -> Outcome<Option<Competition>> {
        self.get_one(&format!("competitions/{}", competition)).await
    }

    /// Lists the teams in a competition.
    pub async fn competition_teams(
        &self,
        competition: impl Display,
        query: &CompetitionTeamsQuery,
    ) -> Outcome<Vec<Team>> {
        self.get_list(
            &format!("competitions/{}/teams", competition),
            query.to_params(),
            "teams",
        )
        .await
    }

    /// Lists the matches of a competition.
    pub async fn competition_matches(
        &self,
        competition: impl Display,
        query: &CompetitionMatchesQuery,
    ) -> Outcome<Vec<Match>> {
        self.get_list(
            &format!("competitions/{}/matches", competition),
            query.to_params(),
            "matches",
        )
        .await
    }

    /// Lists matches across competitions.
    pub async fn matches(&self, query: &MatchesQuery) -> Outcome<Vec<Match>> {
        self.get_list("matches", query.to_params(), "matches").await
    }

    /// Fetches one match by id.
    pub async fn get_match(&self, match_id: u64) -> Outcome<Option<Match>> {
        self.get_one(&format!("matches/{}", match_id)).await
    }

    /// Lists the matches of a team.
    pub async fn team_matches(&self, team_id: u64, query: &TeamMatchesQuery) -> Outcome<Vec<Match>> {
        self.get_list(
            &format!("teams/{}/matches", team_id),
            query.to_params(),
            "matches",
        )
        .await
    }

    /// Fetches one team by id.
    pub async fn team(&self, team_id: u64) -> Outcome<Option<Team>> {
        self.get_one(&format!("teams/{}", team_id)).await
    }

    /// Fetches any resource under the API root and returns the body untouched.
    pub async fn raw(&self, path: &str, params: &Params) -> Outcome<Option<Value>> {
        Outcome::from_result(
            self.fetch(path, Ok(params.clone()), Shape::Raw)
                .await
                .map(Mapped::into_raw),
        )
    }
}
