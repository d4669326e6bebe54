pub mod content;
pub mod events;
pub mod io;
pub mod models;
pub mod parsing;
pub mod preview;
pub mod render;
mod sync;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use content::{ContentCache, ContentFetcher, PreviewBlock, PreviewTree};
pub use events::{EventRouter, PointerEvent, PointerTarget};
pub use io::{FetchError, HttpTransport, PageTransport};
pub use models::{Anchor, ContentKey, PageData, PageLine};
pub use parsing::{Image, InlineNode, Link, LinkKind, parse_line};
pub use preview::{
    LevelState, Point, PreviewManager, PreviewSurface, Size, SurfaceContent, Timing, Viewport,
};
