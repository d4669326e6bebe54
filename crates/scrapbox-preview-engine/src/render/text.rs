use crate::content::{PreviewBlock, PreviewTree};
use crate::parsing::InlineNode;
use crate::preview::SurfaceContent;

pub fn render_content_text(content: &SurfaceContent) -> String {
    match content {
        SurfaceContent::Page(tree) => render_text(tree),
        SurfaceContent::Message(message) => message.clone(),
    }
}

/// Plain-text form of a preview: one line per line break, decorations
/// reduced to light punctuation, links shown as `text <href>`.
pub fn render_text(tree: &PreviewTree) -> String {
    let mut out = String::new();
    for block in &tree.blocks {
        match block {
            PreviewBlock::Title(nodes) => {
                out.push_str("# ");
                push_inlines(&mut out, nodes);
            }
            PreviewBlock::CoverImage { src } => {
                out.push_str("[image ");
                out.push_str(src);
                out.push(']');
            }
            PreviewBlock::LineBreak => out.push('\n'),
            PreviewBlock::Separator => out.push_str("----\n"),
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
        InlineNode::Text(text) => out.push_str(text),
        InlineNode::Link(link) => {
            out.push_str(&link.display_text);
            out.push_str(" <");
            out.push_str(&link.href);
            out.push('>');
        }
        InlineNode::Image(image) => {
            out.push_str("[image ");
            out.push_str(&image.src);
            if let Some(link) = &image.link {
                out.push_str(" -> ");
                out.push_str(&link.href);
            }
            out.push(']');
        }
        InlineNode::Emphasis(inner) => {
            out.push('*');
            push_inline(out, inner);
            out.push('*');
        }
        InlineNode::Strike(inner) => {
            out.push('~');
            push_inline(out, inner);
            out.push('~');
        }
        InlineNode::Code(code) => {
            out.push('`');
            out.push_str(code);
            out.push('`');
        }
    }
}
