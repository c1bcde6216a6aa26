//! Error taxonomy of the client.
//!
//! Nothing is retried or recovered inside the crate: local validation errors are raised before any
//! network call, everything else is surfaced as reported by the transport.

use std::time::Duration;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
#[must_use]
pub enum Error {
    /// Invalid combination or value of the method parameters, detected locally.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The bot token is malformed or revoked.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The token is fine, but the endpoint does not exist.
    #[error("endpoint not found: {0}")]
    EndpointNotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Another `getUpdates` poller or a webhook is active.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("too many requests, retry after {retry_after_secs} secs")]
    TooManyRequests { retry_after_secs: u64 },

    /// The group has been migrated to a supergroup.
    #[error("chat migrated to {new_chat_id}")]
    ChatMigrated { new_chat_id: i64 },

    /// Any other API error reported with `"ok": false`.
    #[error("({error_code}) {description}")]
    Api { error_code: i64, description: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("timed out")]
    Timeout,

    /// The payload could not be encoded, or the response could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Suggested pause before the next attempt, if the API asked for one.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::TooManyRequests { retry_after_secs } => Some(Duration::from_secs(*retry_after_secs)),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            // The URL contains the bot token.
            Self::Network(format!("{:#}", error.without_url()))
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Reqwest(error) => error.into(),
            reqwest_middleware::Error::Middleware(error) => Self::Network(format!("{error:#}")),
        }
    }
}
