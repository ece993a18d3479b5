// Error types for the gitfolio data layer.
// Cloneable: a failure is delivered to every caller joined on one in-flight fetch.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitfolioError {
    #[error("GitHub API error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GitfolioError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, GitfolioError>;
