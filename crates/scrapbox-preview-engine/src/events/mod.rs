//! # Pointer events
//!
//! Hosts translate their native pointer events into [`PointerEvent`]s and
//! feed them to an [`EventRouter`], which turns them into show and hide
//! requests on the [`PreviewManager`](crate::preview::PreviewManager).

pub mod router;

pub use router::{EventRouter, PointerEvent, PointerTarget};
