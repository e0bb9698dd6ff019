use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Navigation to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("No hotel found for search '{query}'")]
    NoResult { query: String },
    #[error("Malformed search result: {0}")]
    MalformedResult(String),
    #[error("Review score not available on {url}")]
    ReviewUnavailable { url: String },
    #[error("Invalid number format: {0:?}")]
    InvalidNumberFormat(String),
    #[error("Hotel {0} not found")]
    HotelNotFound(i64),
    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("HTTP client error: {0}")]
    Client(reqwest::Error),
    #[error("Invalid config: {0}")]
    Config(String),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HotelError {
    pub(crate) fn transport(url: &str, reason: impl ToString) -> Self {
        Self::Transport {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HotelError>;
