use thiserror::Error;

/// Failures talking to the listing API.
///
/// The repository and service layers hand these through untouched; only the
/// application layer turns them into user-facing messages.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Property not found")]
    NotFound,

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Messages shown to the user when a load fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("Failed to load properties. Please try again later.")]
    LoadProperties,

    #[error("Property not found")]
    PropertyNotFound,

    #[error("Failed to load property details. Please try again later.")]
    LoadPropertyDetails,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}
