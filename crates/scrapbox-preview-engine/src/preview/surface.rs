use crate::content::PreviewTree;

/// Base stacking order for preview surfaces; deeper levels sit above.
pub const BASE_Z_INDEX: usize = 10000;

/// Shown in place of a page whose preview has no blocks.
pub const EMPTY_PAGE_MESSAGE: &str = "(No content or unable to fetch)";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// What a surface displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceContent {
    /// A rendered page.
    Page(PreviewTree),
    /// Literal text, never parsed as markup. Used for the empty-page notice
    /// and for fetch failures.
    Message(String),
}

impl SurfaceContent {
    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self::Message(format!("Preview failed: {error}"))
    }

    pub fn from_tree(tree: PreviewTree) -> Self {
        if tree.is_empty() {
            Self::Message(EMPTY_PAGE_MESSAGE.to_string())
        } else {
            Self::Page(tree)
        }
    }
}

/// One host-provided preview surface. The manager owns one per level and
/// drives it exclusively through this trait.
pub trait PreviewSurface: Send {
    /// Replaces everything currently shown.
    fn replace_content(&mut self, content: SurfaceContent);

    /// Moves the surface's top-left corner, in viewport coordinates.
    fn set_position(&mut self, position: Point);

    fn set_visible(&mut self, visible: bool);

    /// Whether the surface receives pointer events.
    fn set_interactive(&mut self, interactive: bool);

    /// Size of the surface with its current content laid out.
    fn bounding_box(&self) -> Size;
}

/// The visible area surfaces must stay inside.
pub trait Viewport: Send + Sync {
    fn size(&self) -> Size;
}

/// Stacking order for the surface at `level`.
pub fn z_index(level: usize) -> usize {
    BASE_Z_INDEX + level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PreviewBlock;

    #[test]
    fn deeper_levels_stack_higher() {
        assert_eq!(z_index(0), 10000);
        assert!(z_index(3) > z_index(2));
    }

    #[test]
    fn empty_tree_becomes_notice() {
        assert_eq!(
            SurfaceContent::from_tree(PreviewTree::default()),
            SurfaceContent::Message("(No content or unable to fetch)".to_string())
        );
        let tree = PreviewTree {
            blocks: vec![PreviewBlock::LineBreak],
        };
        assert_eq!(
            SurfaceContent::from_tree(tree.clone()),
            SurfaceContent::Page(tree)
        );
    }

    #[test]
    fn failure_message_is_prefixed() {
        assert_eq!(
            SurfaceContent::failed("boom <b>"),
            SurfaceContent::Message("Preview failed: boom <b>".to_string())
        );
    }
}
