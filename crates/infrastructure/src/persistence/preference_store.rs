//! SQLite implementation of the preference store

use std::sync::Arc;

use application::{ApplicationError, PreferenceStorePort};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;
use super::error::DatabaseError;

/// Key/value preferences in the `preferences` table
#[derive(Debug, Clone)]
pub struct SqlitePreferenceStore {
    pool: Arc<ConnectionPool>,
}

impl SqlitePreferenceStore {
    /// Create a store over a migrated pool
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceStorePort for SqlitePreferenceStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let key = key.to_string();

        let value = task::spawn_blocking(move || -> Result<Option<String>, DatabaseError> {
            let conn = pool.get()?;
            let value = conn
                .query_row(
                    "SELECT value FROM preferences WHERE key = ?1",
                    [&key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value)
        })
        .await
        .map_err(|e| DatabaseError::Task(e.to_string()))??;

        debug!(found = value.is_some(), "Read preference");
        Ok(value)
    }

    #[instrument(skip(self))]
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let key = key.to_string();
        let value = value.to_string();
        let now = Utc::now().to_rfc3339();

        task::spawn_blocking(move || -> Result<(), DatabaseError> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO preferences (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value, now],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| DatabaseError::Task(e.to_string()))??;

        debug!("Stored preference");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::persistence::create_pool;

    fn store() -> SqlitePreferenceStore {
        let pool = create_pool(&DatabaseConfig::in_memory()).unwrap();
        SqlitePreferenceStore::new(Arc::new(pool))
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        assert_eq!(store().get("mode").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get() {
        let store = store();
        store.set("fromLocation", "Bidhannagar, West Bengal, India").await.unwrap();
        assert_eq!(
            store.get("fromLocation").await.unwrap().as_deref(),
            Some("Bidhannagar, West Bengal, India")
        );
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = store();
        store.set("mode", "driving").await.unwrap();
        store.set("mode", "cycling").await.unwrap();
        assert_eq!(store.get("mode").await.unwrap().as_deref(), Some("cycling"));
    }

    #[tokio::test]
    async fn unmigrated_database_reports_storage_error() {
        let config = DatabaseConfig {
            run_migrations: false,
            ..DatabaseConfig::in_memory()
        };
        let store = SqlitePreferenceStore::new(Arc::new(create_pool(&config).unwrap()));

        let err = store.get("mode").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Storage(_)));
    }
}
