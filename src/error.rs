use thiserror::Error as ThisError;

#[derive(ThisError, Debug, Clone)]
pub enum Error {
    /// Upstream returned zero events, or the selected event carries no
    /// competition sub-record. Retrying the fetch is the caller's call.
    #[error("no tournament data available")]
    NoData,
    /// An event-scoped lookup found nothing at all to fall back to.
    #[error("event {0} not found")]
    EventNotFound(String),
    #[error("player {0} not found in competition")]
    PlayerNotFound(String),
    #[error("no scorecard data available for this player")]
    NoScorecardData,
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
