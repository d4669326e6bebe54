use crate::models::{Anchor, ContentKey};
use crate::parsing::encode::encode_component;

/// One element of a parsed line, in left-to-right render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// A literal text run.
    Text(String),
    /// An internal or external link with display text.
    Link(Link),
    /// An image, optionally wrapped in a link.
    Image(Image),
    /// Strong emphasis around a single child.
    Emphasis(Box<InlineNode>),
    /// Strikethrough around a single child.
    Strike(Box<InlineNode>),
    /// An inline code span. Its content is never parsed further.
    Code(String),
}

impl InlineNode {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Visits every link in this node, including one wrapping an image.
    pub fn links(&self) -> Vec<&Link> {
        match self {
            Self::Link(link) => vec![link],
            Self::Image(Image {
                link: Some(link), ..
            }) => vec![link],
            Self::Emphasis(child) | Self::Strike(child) => child.links(),
            Self::Text(_) | Self::Image(_) | Self::Code(_) => vec![],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Points at another page; hovering it can open a nested preview.
    Internal,
    /// Points off-site; opens in a new browsing context.
    External,
}

/// A resolved link.
///
/// `href` is already escaped and safe to use as a reference. For internal
/// links `target` carries the page the link resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub kind: LinkKind,
    pub href: String,
    pub display_text: String,
    pub target: Option<ContentKey>,
}

impl Link {
    pub const EXTERNAL_TARGET: &'static str = "_blank";
    pub const EXTERNAL_REL: &'static str = "noopener noreferrer";

    pub fn internal(href: String, display_text: impl Into<String>, target: ContentKey) -> Self {
        Self {
            kind: LinkKind::Internal,
            href,
            display_text: display_text.into(),
            target: Some(target),
        }
    }

    pub fn external(href: String, display_text: impl Into<String>) -> Self {
        Self {
            kind: LinkKind::External,
            href,
            display_text: display_text.into(),
            target: None,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.kind == LinkKind::Internal
    }

    /// `(data-project, data-title)`, component-encoded, for internal links.
    pub fn data_attributes(&self) -> Option<(String, String)> {
        self.target
            .as_ref()
            .map(|key| (encode_component(key.namespace()), encode_component(key.title())))
    }

    /// The hover anchor a host builds when it renders this link.
    pub fn to_anchor(&self) -> Anchor {
        let (data_project, data_title) = self.data_attributes().unzip();
        Anchor {
            href: Some(self.href.clone()),
            data_project,
            data_title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: String,
    pub link: Option<Link>,
}
