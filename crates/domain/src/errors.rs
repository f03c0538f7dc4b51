//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinate outside the valid longitude/latitude range
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Unknown travel mode identifier
    #[error("Invalid travel mode: {0}. Use 'driving', 'walking' or 'cycling'")]
    InvalidTravelMode(String),

    /// Unknown map style identifier
    #[error("Invalid map style: {0}. Use 'streets' or 'satellite'")]
    InvalidMapStyle(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
