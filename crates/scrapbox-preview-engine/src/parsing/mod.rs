//! # Parsing
//!
//! - **`inline`**: line-level markup parser producing [`InlineNode`]s
//! - **`encode`**: percent-encoding used when building link attributes

pub mod encode;
pub mod inline;

pub use inline::{Image, InlineNode, Link, LinkKind, parse_line};
