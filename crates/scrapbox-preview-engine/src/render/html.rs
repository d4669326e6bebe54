use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::content::{PreviewBlock, PreviewTree};
use crate::parsing::{Image, InlineNode, Link};
use crate::preview::SurfaceContent;

pub const INTERNAL_LINK_CLASS: &str = "preview-internal-link";
pub const EXTERNAL_LINK_CLASS: &str = "preview-external-link";
pub const IMAGE_CLASS: &str = "preview-image";

pub fn render_content_html(content: &SurfaceContent) -> String {
    match content {
        SurfaceContent::Page(tree) => render_html(tree),
        SurfaceContent::Message(message) => format!("<i>{}</i>", encode_text(message)),
    }
}

/// Serialises a preview tree to an HTML fragment. All text and attribute
/// values are escaped.
pub fn render_html(tree: &PreviewTree) -> String {
    let mut out = String::new();
    for block in &tree.blocks {
        match block {
            PreviewBlock::Title(nodes) => {
                out.push_str("<strong>");
                push_inlines(&mut out, nodes);
                out.push_str("</strong>");
            }
            PreviewBlock::CoverImage { src } => push_image(&mut out, src, "page image"),
            PreviewBlock::LineBreak => out.push_str("<br>"),
            PreviewBlock::Separator => out.push_str("<hr>"),
            PreviewBlock::Line(nodes) => push_inlines(&mut out, nodes),
        }
    }
    out
}

fn push_inlines(out: &mut String, nodes: &[InlineNode]) {
    for node in nodes {
        push_inline(out, node);
    }
}

fn push_inline(out: &mut String, node: &InlineNode) {
    match node {
        InlineNode::Text(text) => out.push_str(&encode_text(text)),
        InlineNode::Link(link) => {
            push_link_open(out, link);
            out.push_str(&encode_text(&link.display_text));
            out.push_str("</a>");
        }
        InlineNode::Image(Image { src, link }) => match link {
            Some(link) => {
                push_link_open(out, link);
                push_image(out, src, "image");
                out.push_str("</a>");
            }
            None => push_image(out, src, "image"),
        },
        InlineNode::Emphasis(inner) => {
            out.push_str("<strong>");
            push_inline(out, inner);
            out.push_str("</strong>");
        }
        InlineNode::Strike(inner) => {
            out.push_str("<del>");
            push_inline(out, inner);
            out.push_str("</del>");
        }
        InlineNode::Code(code) => {
            out.push_str("<code>");
            out.push_str(&encode_text(code));
            out.push_str("</code>");
        }
    }
}

fn push_link_open(out: &mut String, link: &Link) {
    out.push_str("<a href=\"");
    out.push_str(&encode_double_quoted_attribute(&link.href));
    out.push('"');
    match link.data_attributes() {
        Some((project, title)) => {
            push_attr(out, "class", INTERNAL_LINK_CLASS);
            push_attr(out, "data-project", &project);
            push_attr(out, "data-title", &title);
        }
        None => {
            push_attr(out, "class", EXTERNAL_LINK_CLASS);
            push_attr(out, "target", Link::EXTERNAL_TARGET);
            push_attr(out, "rel", Link::EXTERNAL_REL);
        }
    }
    out.push('>');
}

fn push_image(out: &mut String, src: &str, alt: &str) {
    out.push_str("<img");
    push_attr(out, "src", src);
    push_attr(out, "class", IMAGE_CLASS);
    push_attr(out, "alt", alt);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}
