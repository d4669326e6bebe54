//! # Content
//!
//! - **`tree`**: `PreviewTree`, the rendered form of one page
//! - **`cache`**: time-bounded `ContentCache` keyed by `ContentKey`
//! - **`fetch`**: `ContentFetcher`, cache-first page resolution over a transport

pub mod cache;
pub mod fetch;
pub mod tree;

pub use cache::ContentCache;
pub use fetch::ContentFetcher;
pub use tree::{PreviewBlock, PreviewTree};
