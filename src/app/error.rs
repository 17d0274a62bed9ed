use thiserror::Error;

/// Message shown to the user when a search query is too short.
pub const SHORT_QUERY_MESSAGE: &str =
    "Запит має містити щонайменше 3 символи / The query must contain at least 3 characters";

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("{0}")]
    InvalidQuery(String),

    #[error("Failed to parse response: {0}")]
    ParseFailure(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConnectorError {
    pub fn short_query() -> Self {
        Self::InvalidQuery(SHORT_QUERY_MESSAGE.to_string())
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
