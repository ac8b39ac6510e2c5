use thiserror::Error;

/// Startup configuration failures. These abort process initialization and
/// are never produced per-request.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("environment variable {0} is set but empty")]
    EmptyVar(&'static str),
}

/// Failures while talking to the Pexels API.
///
/// The gallery adapter collapses all of these to the same empty state;
/// the variants exist so diagnostics can tell a dead upstream apart from
/// a search with no matches.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response payload: {0}")]
    Validation(String),
    #[error("no results")]
    Empty,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
