use super::content_key::{ContentKey, split_page_path};
use crate::parsing::encode::decode_component;

/// A hoverable link as seen by the preview machinery.
///
/// Host-page links and links rendered inside a preview both reduce to this:
/// an optional reference path plus optional machine-readable
/// `data-project` / `data-title` attributes (component-encoded).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchor {
    pub href: Option<String>,
    pub data_project: Option<String>,
    pub data_title: Option<String>,
}

impl Anchor {
    /// An anchor known only by its reference path.
    pub fn from_href(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// True when the reference is a same-site absolute path.
    pub fn is_page_path(&self) -> bool {
        self.href.as_deref().is_some_and(|h| h.starts_with('/'))
    }

    /// Resolves the page this anchor points at.
    ///
    /// Data attributes win when both are present and non-empty; otherwise the
    /// href is split into namespace and title. `None` means the anchor is not
    /// a content link and hovering it should do nothing.
    pub fn content_key(&self) -> Option<ContentKey> {
        let project = self.data_project.as_deref().map(decode_component);
        let title = self.data_title.as_deref().map(decode_component);

        if let (Some(project), Some(title)) = (&project, &title)
            && !project.is_empty()
            && !title.is_empty()
        {
            return Some(ContentKey::new(project.to_string(), title));
        }

        let path = self.href.as_deref()?.strip_prefix('/')?;
        let first = path.split('/').next().unwrap_or_default();
        if first.is_empty() {
            return None;
        }
        let (namespace, title) = split_page_path(path, "");
        let title = decode_component(title).replace('_', " ");
        Some(ContentKey::new(decode_component(namespace), &title))
    }
}
