//! API Errors

/// Failures of a movies API request
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("browser window unavailable")]
    NoWindow,

    #[error("network error requesting {url}: {message}")]
    Network { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("empty play url for item {0}")]
    EmptyPlayUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
