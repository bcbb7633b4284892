use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

/// Everything that can go wrong between issuing a request and producing a record.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),

    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("missing data from the game: {0}")]
    NoGame(String),

    #[error("API has no such resource: {0}")]
    NotFound(String),

    #[error("team {0} has no entry in the color table")]
    UnknownTeamColor(u32),

    #[error("team {0} is missing from the team directory")]
    UnknownTeam(u32),

    #[error("invalid game date {value:?}: {source}")]
    BadTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl FetchError {
    pub(crate) fn no_game(what: impl Into<String>) -> Self {
        Self::NoGame(what.into())
    }
}

/// Outcome of one public API operation.
///
/// `NotScheduled` means the API answered but the requested game or team is absent
/// (no game today, game not begun, unknown id answered with 404). `Unreachable` covers transport
/// failures and responses that could not be turned into a record.
///
/// Serializes as `{"status": "ok", "data": ...}`, `{"status": "not_scheduled"}`
/// or `{"status": "unreachable"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Fetch<T> {
    Ok(T),
    NotScheduled,
    Unreachable,
}

impl<T> Fetch<T> {
    /// Collapse an internal result into the public tag, logging the failure once.
    pub(crate) fn settle(operation: &'static str, result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Fetch::Ok(value),
            Err(FetchError::NoGame(what)) => {
                info!(operation, missing = %what, "Game has not begun or is not scheduled today");
                Fetch::NotScheduled
            }
            Err(FetchError::NotFound(url)) => {
                info!(operation, url = %url, "API answered 404 Not Found");
                Fetch::NotScheduled
            }
            Err(e) => {
                error!(operation, error = %e, "Error encountered, can't reach the NHL API");
                Fetch::Unreachable
            }
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Fetch::Ok(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Fetch::Ok(_))
    }

    pub fn is_not_scheduled(&self) -> bool {
        matches!(self, Fetch::NotScheduled)
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Fetch::Unreachable)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetch<U> {
        match self {
            Fetch::Ok(value) => Fetch::Ok(f(value)),
            Fetch::NotScheduled => Fetch::NotScheduled,
            Fetch::Unreachable => Fetch::Unreachable,
        }
    }
}
