//! Durable key/value preference storage port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisting small string preferences across sessions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    /// Read a stored value
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    /// Insert or replace a value
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError>;
}
