use crate::models::PageData;
use crate::parsing::encode::encode_uri;
use crate::parsing::{InlineNode, Link, parse_line};

/// One top-level element of a page preview, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewBlock {
    /// The page title, parsed and shown emphasized.
    Title(Vec<InlineNode>),
    /// The page's cover image.
    CoverImage { src: String },
    LineBreak,
    /// Horizontal rule between the cover image and the body.
    Separator,
    /// One parsed body line.
    Line(Vec<InlineNode>),
}

impl PreviewBlock {
    /// The inline nodes of a title or body line; empty for other blocks.
    pub fn inlines(&self) -> &[InlineNode] {
        match self {
            Self::Title(nodes) | Self::Line(nodes) => nodes,
            Self::CoverImage { .. } | Self::LineBreak | Self::Separator => &[],
        }
    }
}

/// The rendered content of one page.
///
/// Trees are plain owned data: cloning yields a fully independent copy, which
/// is what the cache stores and hands out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewTree {
    pub blocks: Vec<PreviewBlock>,
}

impl PreviewTree {
    /// Builds the preview for `page`, parsing every line against `namespace`.
    ///
    /// Body lines identical to the title are skipped, since the title is
    /// already shown at the top.
    pub fn from_page(page: &PageData, namespace: &str) -> Self {
        let mut blocks = vec![];
        let title = page.title.as_deref();

        if let Some(title) = title {
            blocks.push(PreviewBlock::Title(parse_line(title, namespace)));
            blocks.push(PreviewBlock::LineBreak);
        }

        if let Some(image) = &page.image {
            blocks.push(PreviewBlock::CoverImage {
                src: encode_uri(image),
            });
            blocks.push(PreviewBlock::LineBreak);
            let has_body = title.is_some_and(|title| {
                page.lines
                    .iter()
                    .any(|line| !line.text.trim().is_empty() && line.text != title)
            });
            if has_body {
                blocks.push(PreviewBlock::Separator);
            }
        }

        for line in &page.lines {
            if title == Some(line.text.as_str()) {
                continue;
            }
            blocks.push(PreviewBlock::Line(parse_line(&line.text, namespace)));
            blocks.push(PreviewBlock::LineBreak);
        }

        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Every link in the tree, in document order.
    pub fn links(&self) -> Vec<&Link> {
        self.blocks
            .iter()
            .flat_map(PreviewBlock::inlines)
            .flat_map(InlineNode::links)
            .collect()
    }

    /// The links a nested preview can be opened from.
    pub fn internal_links(&self) -> Vec<&Link> {
        self.links()
            .into_iter()
            .filter(|link| link.is_internal())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageLine;
    use pretty_assertions::assert_eq;

    fn page(title: Option<&str>, image: Option<&str>, lines: &[&str]) -> PageData {
        PageData {
            title: title.map(str::to_string),
            image: image.map(str::to_string),
            lines: lines.iter().map(|l| PageLine::new(*l)).collect(),
        }
    }

    #[test]
    fn title_line_is_not_repeated() {
        let tree = PreviewTree::from_page(&page(Some("Home"), None, &["Home", "body"]), "p");
        assert_eq!(
            tree.blocks,
            vec![
                PreviewBlock::Title(vec![InlineNode::text("Home")]),
                PreviewBlock::LineBreak,
                PreviewBlock::Line(vec![InlineNode::text("body")]),
                PreviewBlock::LineBreak,
            ]
        );
    }

    #[test]
    fn cover_image_with_body_gets_separator() {
        let tree = PreviewTree::from_page(
            &page(
                Some("Home"),
                Some("https://x.io/c.png"),
                &["Home", "", "body"],
            ),
            "p",
        );
        assert_eq!(
            &tree.blocks[..5],
            &[
                PreviewBlock::Title(vec![InlineNode::text("Home")]),
                PreviewBlock::LineBreak,
                PreviewBlock::CoverImage {
                    src: "https://x.io/c.png".to_string()
                },
                PreviewBlock::LineBreak,
                PreviewBlock::Separator,
            ]
        );
    }

    #[test]
    fn cover_image_without_body_has_no_separator() {
        let tree = PreviewTree::from_page(
            &page(Some("Home"), Some("https://x.io/c.png"), &["Home", "  "]),
            "p",
        );
        assert!(!tree.blocks.contains(&PreviewBlock::Separator));
    }

    #[test]
    fn cover_image_without_title_has_no_separator() {
        let tree = PreviewTree::from_page(&page(None, Some("https://x.io/c.png"), &["body"]), "p");
        assert!(!tree.blocks.contains(&PreviewBlock::Separator));
    }

    #[test]
    fn empty_page_builds_empty_tree() {
        assert!(PreviewTree::from_page(&page(None, None, &[]), "p").is_empty());
    }

    #[test]
    fn internal_links_are_collected_in_order() {
        let tree = PreviewTree::from_page(
            &page(
                Some("[[Top]]"),
                None,
                &["[A] and [ext https://x.io]", "[https://x.io/i.png B]"],
            ),
            "p",
        );
        let titles: Vec<_> = tree
            .internal_links()
            .iter()
            .map(|l| l.target.as_ref().unwrap().title().to_string())
            .collect();
        assert_eq!(titles, vec!["Top", "A", "B"]);
        assert_eq!(tree.links().len(), 4);
    }
}
