//! Persistence module
//!
//! SQLite-backed preference storage plus an in-memory variant.

pub mod connection;
pub mod error;
pub mod memory_store;
pub mod migrations;
pub mod preference_store;

pub use connection::{ConnectionPool, create_pool};
pub use error::DatabaseError;
pub use memory_store::InMemoryPreferenceStore;
pub use preference_store::SqlitePreferenceStore;
