use thiserror::Error;

/// Result type for EPIAS client operations
pub type Result<T> = std::result::Result<T, EpiasError>;

/// Errors that can occur when using the EPIAS client
#[derive(Error, Debug)]
pub enum EpiasError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// API returned an error response
    #[error("API error: {0}")]
    ApiError(String),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid query (bad dates, reversed range)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Login rejected or ticket not accepted
    #[error("Authentication failed")]
    AuthenticationFailed,
}
