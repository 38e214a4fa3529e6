use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PoolError {
    #[error("score feed unavailable: {0}")]
    FeedUnavailable(String),
    #[error("roster unavailable: {0}")]
    RosterUnavailable(String),
    #[error("invalid roster: {0}")]
    InvalidRoster(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for PoolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<csv::Error> for PoolError {
    fn from(err: csv::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for PoolError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<reqwest::Error> for PoolError {
    fn from(err: reqwest::Error) -> Self {
        Self::FeedUnavailable(err.to_string())
    }
}
