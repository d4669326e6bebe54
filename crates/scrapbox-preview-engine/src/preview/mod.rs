//! # Nested previews
//!
//! - **`manager`**: `PreviewManager`, the per-level show/hide state machine
//! - **`level`**: `LevelState` and the per-level timer bookkeeping
//! - **`surface`**: the contract a host implements for each preview surface
//! - **`placement`**: pointer-relative positioning clamped to the viewport
//! - **`timing`**: delays and nesting limit

mod level;
pub mod manager;
pub mod placement;
pub mod surface;
pub mod timing;

pub use level::LevelState;
pub use manager::PreviewManager;
pub use placement::place;
pub use surface::{Point, PreviewSurface, Size, SurfaceContent, Viewport, z_index};
pub use timing::Timing;
