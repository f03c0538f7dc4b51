//! User preferences
//!
//! Travel mode and last origin, read from durable storage once at startup and
//! written back only through [`UserPreferences::set_preference`].

use std::sync::Arc;

use domain::TravelMode;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::ApplicationError;
use crate::ports::PreferenceStorePort;

/// Storage key of the travel mode
pub const MODE_KEY: &str = "mode";

/// Storage key of the last resolved origin label
pub const FROM_LOCATION_KEY: &str = "fromLocation";

/// A single preference update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preference {
    /// Travel mode
    Mode(TravelMode),
    /// Last resolved origin label
    FromLocation(String),
}

impl Preference {
    /// Storage key
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Mode(_) => MODE_KEY,
            Self::FromLocation(_) => FROM_LOCATION_KEY,
        }
    }

    /// Stored string value
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Mode(mode) => mode.as_str(),
            Self::FromLocation(label) => label,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Values {
    mode: TravelMode,
    from_location: Option<String>,
}

/// Loaded preferences plus the store they came from
pub struct UserPreferences {
    store: Arc<dyn PreferenceStorePort>,
    values: RwLock<Values>,
}

impl std::fmt::Debug for UserPreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserPreferences")
            .field("values", &*self.values.read())
            .finish_non_exhaustive()
    }
}

impl UserPreferences {
    /// Read every preference from `store`
    ///
    /// Missing, unreadable or invalid values fall back to their defaults
    /// (driving, no origin).
    pub async fn load(store: Arc<dyn PreferenceStorePort>) -> Self {
        let mode = match store.get(MODE_KEY).await {
            Ok(Some(raw)) => raw.parse::<TravelMode>().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "Ignoring stored travel mode");
                TravelMode::default()
            }),
            Ok(None) => TravelMode::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read travel mode preference");
                TravelMode::default()
            },
        };

        let from_location = match store.get(FROM_LOCATION_KEY).await {
            Ok(value) => value.filter(|v| !v.trim().is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read origin preference");
                None
            },
        };

        debug!(%mode, ?from_location, "Preferences loaded");

        Self {
            store,
            values: RwLock::new(Values {
                mode,
                from_location,
            }),
        }
    }

    /// Current travel mode
    #[must_use]
    pub fn mode(&self) -> TravelMode {
        self.values.read().mode
    }

    /// Last resolved origin label, if any
    #[must_use]
    pub fn from_location(&self) -> Option<String> {
        self.values.read().from_location.clone()
    }

    /// Persist `preference` and update the loaded value
    ///
    /// # Errors
    ///
    /// Returns the store's error; the loaded value is left unchanged then.
    pub async fn set_preference(&self, preference: Preference) -> Result<(), ApplicationError> {
        self.store
            .set(preference.key(), preference.value())
            .await?;

        let mut values = self.values.write();
        match preference {
            Preference::Mode(mode) => values.mode = mode,
            Preference::FromLocation(label) => values.from_location = Some(label),
        }
        Ok(())
    }
}
