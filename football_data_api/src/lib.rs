//! Client for the football-data.org v4 REST API.
//!
//! Requests go through a fixed pipeline: filters are validated locally,
//! the URL is built, one GET is sent, the reply is classified as data, API
//! error or transport error, and data is mapped into lossless [`types`].

mod client;
mod config;
mod errors;
pub mod gateway;
pub mod mapper;
mod outcome;
mod query;
pub mod types;
pub mod url_builder;
pub mod validation;
pub use self::client::Client;
pub use self::config::{Config, API_KEY_VAR, BASE_URL_VAR};
pub use self::errors::{Error, ErrorKind, LastError, ValidationError};
pub use self::outcome::Outcome;
pub use self::query::{
    CompetitionMatchesQuery, CompetitionTeamsQuery, DateFiltered, DateRange, MatchesQuery, Query,
    Status, TeamMatchesQuery, Venue,
};
pub use self::url_builder::{Params, UrlBuilder, API_ROOT};
