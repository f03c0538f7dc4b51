//! Application layer - Use cases and orchestration
//!
//! Contains the widget's use cases (suggestions, route resolution, direction
//! panel, map presentation) and the port definitions adapters implement.
//! The [`WidgetController`] ties them together and owns the widget state.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
