//! # Inline Kinds
//!
//! Marker types owning the delimiters the hand-written scanners and node
//! builders look for.

pub mod bracket;
pub mod emphasis;
pub mod image;
pub mod url;

pub use bracket::Bracket;
pub use emphasis::Strong;
pub use image::ImageUrl;
pub use url::Url;
