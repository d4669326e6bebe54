//! # Inline Parsing
//!
//! Turns one line of Scrapbox-style markup into typed inline nodes.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` and the `Link` / `Image` payloads
//! - **`kinds`**: marker types owning the scanned delimiters
//! - **`cursor`**: `Cursor` for the hand-written scanners
//! - **`rules`**: the ordered rule table and each rule's matcher
//! - **`builders`**: pure functions building a node from a rule match
//! - **`parser`**: `parse_line()`, the leftmost-earliest-wins scan
//!
//! ## Precedence
//!
//! Rules are tried against the remaining text and the earliest match wins.
//! Only exact ties fall back to rule order, which puts images first and the
//! bare `[Title]` link last. Code spans are raw: `` `[[x]]` `` is one code
//! node, not a link.

pub mod builders;
pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rules;
pub mod types;

pub use parser::parse_line;
pub use types::{Image, InlineNode, Link, LinkKind};
