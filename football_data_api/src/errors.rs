//! Error types for the API client.

use std::fmt;

use crate::gateway::TransportError;

/// A caller-supplied filter value that cannot be sent to the API.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Only one side of a `dateFrom`/`dateTo` pair was given.
    #[error("dateFrom and dateTo must be given together")]
    IncompleteDateRange,
    #[error("{field} '{value}' does not match YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("unknown venue '{0}'. Valid venues: HOME, AWAY")]
    InvalidVenue(String),
    #[error("limit '{0}' is not a non-negative integer")]
    InvalidLimit(String),
    #[error("season '{0}' is not a 4-digit year")]
    InvalidSeason(String),
}

/// Errors that can occur when building a client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No API key was passed and the environment variable is unset or empty.
    #[error("No API key given and FOOTBALL_API_KEY is not set")]
    MissingApiKey,
    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    /// A filter value was rejected locally; no request was sent.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ValidationError),
    /// The API answered with an error payload.
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },
    /// The request could not be completed or the body was not JSON.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Validation,
    Api,
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Config => "config",
            ErrorKind::Validation => "validation",
            ErrorKind::Api => "api",
            ErrorKind::Transport => "transport",
        };
        f.write_str(name)
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingApiKey | Error::Client(_) => ErrorKind::Config,
            Error::InvalidParameter(_) => ErrorKind::Validation,
            Error::Api { .. } => ErrorKind::Api,
            Error::Transport(_) => ErrorKind::Transport,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// The upstream error code, for [`Error::Api`].
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }
}

/// Snapshot of the most recent API or transport failure seen by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastError {
    pub kind: ErrorKind,
    /// Upstream error code. `None` for transport failures.
    pub code: Option<String>,
    pub message: String,
}

impl From<&Error> for LastError {
    fn from(err: &Error) -> Self {
        match err {
            Error::Api { code, message } => LastError {
                kind: ErrorKind::Api,
                code: Some(code.clone()),
                message: message.clone(),
            },
            other => LastError {
                kind: other.kind(),
                code: None,
                message: other.to_string(),
            },
        }
    }
}

impl fmt::Display for LastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} error {}: {}", self.kind, code, self.message),
            None => write!(f, "{} error: {}", self.kind, self.message),
        }
    }
}
