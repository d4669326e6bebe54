use std::fmt;

use crate::parsing::encode::encode_component;

/// Separator that replaces whitespace in titles for addressing.
pub const TITLE_SEPARATOR: char = '_';

/// A normalized (namespace, title) pair addressing one page.
///
/// Titles are case-sensitive; each whitespace character is replaced with
/// [`TITLE_SEPARATOR`] on construction, so two keys compare equal exactly when
/// their normalized forms do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey {
    namespace: String,
    title: String,
}

impl ContentKey {
    pub fn new(namespace: impl Into<String>, title: &str) -> Self {
        Self {
            namespace: namespace.into(),
            title: normalize_title(title),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The normalized title (whitespace replaced by `_`).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// `/{namespace}/{title}` with both segments component-encoded.
    pub fn path(&self) -> String {
        format!(
            "/{}/{}",
            encode_component(&self.namespace),
            encode_component(&self.title)
        )
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.namespace, self.title)
    }
}

/// Replaces every whitespace character with [`TITLE_SEPARATOR`].
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_whitespace() { TITLE_SEPARATOR } else { c })
        .collect()
}

/// Splits an absolute page path `/A/B/C` into namespace `A` and title `B/C`.
///
/// With a single segment the namespace doubles as the title (`/A` → `A`, `A`).
/// An empty first segment falls back to `current_namespace`.
pub fn split_page_path<'a>(path: &'a str, current_namespace: &'a str) -> (&'a str, &'a str) {
    let s = path.strip_prefix('/').unwrap_or(path);
    let (first, rest) = s.split_once('/').unwrap_or((s, ""));
    let title = if !rest.is_empty() {
        rest
    } else if !first.is_empty() {
        first
    } else {
        s
    };
    let namespace = if first.is_empty() {
        current_namespace
    } else {
        first
    };
    (namespace, title)
}
