//! Domain layer for the map & directions widget
//!
//! Contains the route model, geographic value objects and viewport math.
//! This layer has no I/O and defines the ubiquitous language shared by the
//! application and infrastructure layers.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
