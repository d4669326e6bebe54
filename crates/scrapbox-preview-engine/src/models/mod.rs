pub mod anchor;
pub mod content_key;
pub mod page;

pub use anchor::Anchor;
pub use content_key::{ContentKey, normalize_title, split_page_path};
pub use page::{PageData, PageLine};
