//! Headless map rendering

pub mod scene;
mod scene_renderer;

pub use scene::{MapScene, MarkerKind};
pub use scene_renderer::SceneMapRenderer;
