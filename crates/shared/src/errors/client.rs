use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Too many requests")]
    RateLimited,

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("API error: {0}")]
    Api(String),
}
