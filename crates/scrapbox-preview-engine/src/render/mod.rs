//! # Rendering
//!
//! Serialises surface content for hosts: [`html`] produces the escaped
//! fragment a browser host inserts, [`text`] a plain-text form for
//! terminals and logs.

pub mod html;
pub mod text;

pub use html::{render_content_html, render_html};
pub use text::{render_content_text, render_text};
