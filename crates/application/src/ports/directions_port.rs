//! Directions port

use async_trait::async_trait;
use domain::{Coordinate, Route, TravelMode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for route calculation between two coordinates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Route candidates from `origin` to `destination`, best first
    ///
    /// An empty list means the service found no route; errors are reserved
    /// for failures to obtain an answer at all.
    async fn routes(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<Vec<Route>, ApplicationError>;
}
