//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Forward geocoding found no match for the origin text
    #[error("Origin not found: {0}")]
    OriginNotFound(String),

    /// The directions service returned no route candidates
    #[error("No route found")]
    NoRouteFound,

    /// Network failure reaching an external service
    #[error("Network failure: {0}")]
    Network(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Access token rejected
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Preference storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::RateLimited | Self::ExternalService(_)
        )
    }

    /// Message suitable for showing to the person using the widget
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::OriginNotFound(_) => "Unable to find the address",
            Self::NoRouteFound => "Unable to calculate directions",
            Self::Network(_) | Self::ExternalService(_) | Self::RateLimited => {
                "The map service is unavailable, please try again"
            },
            Self::NotAuthorized(_) | Self::Configuration(_) => {
                "The map service is not configured correctly"
            },
            Self::Domain(_) | Self::Storage(_) | Self::Internal(_) => "Something went wrong",
        }
    }
}
