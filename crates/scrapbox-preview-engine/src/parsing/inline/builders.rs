//! Node builders: one pure function per rule, turning a [`Capture`] into an
//! [`InlineNode`].

use crate::models::{ContentKey, split_page_path};
use crate::parsing::encode::encode_uri;

use super::kinds::{Bracket, Url};
use super::rules::Capture;
use super::types::{Image, InlineNode, Link};

/// Builds the node for a rule match, resolving bare titles against
/// `namespace`.
pub fn build(capture: Capture<'_>, namespace: &str) -> InlineNode {
    match capture {
        Capture::Image { url, link } => image(url, link, namespace),
        Capture::Strong(content) => InlineNode::Emphasis(Box::new(InlineNode::text(content))),
        Capture::Strike(content) => InlineNode::Strike(Box::new(InlineNode::text(content))),
        Capture::Code(content) => InlineNode::Code(content.to_string()),
        Capture::LabeledLink { label, target } => labeled_link(label, target, namespace),
        Capture::Url(url) => InlineNode::Link(Link::external(encode_uri(url), url)),
        Capture::Path(path) => InlineNode::Link(path_link(path, namespace, path)),
        Capture::PageTitle(title) => InlineNode::Link(page_link(title, namespace, title)),
        Capture::Bracketed(content) => bracketed(content, namespace),
    }
}

pub fn image(url: &str, link: Option<&str>, namespace: &str) -> InlineNode {
    let link = link.map(|target| {
        if Url::is_url(target) {
            Link::external(encode_uri(target), "")
        } else if target.starts_with(Bracket::PATH_SEPARATOR) {
            path_link(target, namespace, "")
        } else {
            page_link(target, namespace, "")
        }
    });
    InlineNode::Image(Image {
        src: encode_uri(url),
        link,
    })
}

pub fn labeled_link(label: &str, target: &str, namespace: &str) -> InlineNode {
    if Url::is_url(target) {
        InlineNode::Link(Link::external(encode_uri(target), label))
    } else {
        InlineNode::Link(path_link(target, namespace, label))
    }
}

/// `[content]`: a page link unless the content already looks like a URL,
/// a path, an icon or markup, in which case it stays literal text.
pub fn bracketed(content: &str, namespace: &str) -> InlineNode {
    let literal = content.contains(Bracket::MARKUP_CHARS)
        || content.ends_with(Bracket::ICON_SUFFIX)
        || Url::is_url(content)
        || content.starts_with(Bracket::PATH_SEPARATOR);
    if literal {
        InlineNode::text(format!("{}{content}{}", Bracket::OPEN, Bracket::CLOSE))
    } else {
        InlineNode::Link(page_link(content, namespace, content))
    }
}

/// Link to an absolute `/namespace/title` path; the href keeps the path's
/// own shape with spaces turned into underscores.
pub fn path_link(path: &str, current_namespace: &str, display_text: &str) -> Link {
    let (namespace, title) = split_page_path(path, current_namespace);
    Link::internal(
        encode_uri(&path.replace(' ', "_")),
        display_text,
        ContentKey::new(namespace, title),
    )
}

/// Link to `title` inside `namespace`.
pub fn page_link(title: &str, namespace: &str, display_text: &str) -> Link {
    let key = ContentKey::new(namespace, title);
    Link::internal(key.path(), display_text, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::types::LinkKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_link_encodes_namespace_and_title() {
        let link = page_link("Foo Bar", "my proj", "Foo Bar");
        assert_eq!(link.href, "/my%20proj/Foo_Bar");
        assert_eq!(link.display_text, "Foo Bar");
        assert_eq!(link.target, Some(ContentKey::new("my proj", "Foo_Bar")));
        assert_eq!(
            link.data_attributes(),
            Some(("my%20proj".to_string(), "Foo_Bar".to_string()))
        );
    }

    #[test]
    fn path_link_resolves_namespace_from_path() {
        let link = path_link("/other/Deep Page/Child", "cur", "label");
        assert_eq!(link.href, "/other/Deep_Page/Child");
        assert_eq!(
            link.target,
            Some(ContentKey::new("other", "Deep Page/Child"))
        );
    }

    #[test]
    fn path_link_with_single_segment_is_self_referential() {
        let link = path_link("/other", "cur", "/other");
        assert_eq!(link.target, Some(ContentKey::new("other", "other")));
    }

    #[test]
    fn image_link_to_plain_page_name_uses_current_namespace() {
        let InlineNode::Image(img) = image("https://x.io/a.png", Some("Page"), "cur") else {
            panic!("expected Image");
        };
        let link = img.link.unwrap();
        assert_eq!(link.kind, LinkKind::Internal);
        assert_eq!(link.href, "/cur/Page");
    }

    #[test]
    fn bracketed_suppression_keeps_brackets() {
        for content in ["a<b", "a>b", "someone.icon", "https://x.io", "/proj/x"] {
            assert_eq!(
                bracketed(content, "cur"),
                InlineNode::text(format!("[{content}]")),
                "content {content:?} should stay literal"
            );
        }
    }
}
