//! Geocoding port
//!
//! Converts free text into place candidates. Adapters in the infrastructure
//! layer implement this port on top of a places-search API.

use async_trait::async_trait;
use domain::PlaceSuggestion;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Ranked autocomplete candidates for partially typed text, best first
    async fn suggest(&self, query: &str) -> Result<Vec<PlaceSuggestion>, ApplicationError>;

    /// Single best match for the text, `None` when nothing matches
    async fn forward_geocode(
        &self,
        query: &str,
    ) -> Result<Option<PlaceSuggestion>, ApplicationError>;
}
