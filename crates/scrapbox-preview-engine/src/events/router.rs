use crate::models::Anchor;
use crate::preview::{Point, PreviewManager};

/// What the pointer is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// A page link on the host page, outside any preview.
    HostLink(Anchor),
    /// The background of the preview surface at this level.
    Surface(usize),
    /// The `index`-th internal link rendered inside surface `level`.
    PreviewLink { level: usize, index: usize },
    /// Anything else, or nothing.
    Elsewhere,
}

impl PointerTarget {
    /// The preview level this target lies within, if any. Links inside a
    /// surface count as part of it.
    pub fn surface_level(&self) -> Option<usize> {
        match self {
            Self::Surface(level) | Self::PreviewLink { level, .. } => Some(*level),
            Self::HostLink(_) | Self::Elsewhere => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Enter {
        target: PointerTarget,
        position: Point,
    },
    /// `related` is where the pointer went.
    Leave {
        target: PointerTarget,
        related: PointerTarget,
    },
}

/// Maps pointer movement onto preview requests.
#[derive(Clone)]
pub struct EventRouter {
    manager: PreviewManager,
}

impl EventRouter {
    pub fn new(manager: PreviewManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &PreviewManager {
        &self.manager
    }

    pub fn handle(&self, event: PointerEvent) {
        match event {
            PointerEvent::Enter { target, position } => self.enter(target, position),
            PointerEvent::Leave { target, related } => self.leave(target, &related),
        }
    }

    fn enter(&self, target: PointerTarget, position: Point) {
        match target {
            PointerTarget::HostLink(anchor) => {
                if anchor.is_page_path() {
                    self.manager.cancel_hide(0);
                    self.manager.request_show(0, anchor, position);
                }
            }
            PointerTarget::Surface(level) => self.enter_surface(level),
            PointerTarget::PreviewLink { level, index } => {
                self.enter_surface(level);
                self.enter_preview_link(level, index, position);
            }
            PointerTarget::Elsewhere => {}
        }
    }

    fn leave(&self, target: PointerTarget, related: &PointerTarget) {
        match target {
            PointerTarget::HostLink(_) => {
                if !self.is_over_visible_surface(related) {
                    self.manager.request_hide(0);
                }
            }
            PointerTarget::Surface(level) => self.leave_surface(level, related),
            PointerTarget::PreviewLink { level, .. } => {
                if related.surface_level() != Some(level) {
                    self.manager.request_hide(level + 1);
                }
                self.leave_surface(level, related);
            }
            PointerTarget::Elsewhere => {}
        }
    }

    fn enter_surface(&self, level: usize) {
        self.manager.cancel_hide(level);
        if let Some(parent) = level.checked_sub(1) {
            self.manager.cancel_hide(parent);
        }
    }

    fn enter_preview_link(&self, level: usize, index: usize, position: Point) {
        self.manager.cancel_hide(level + 1);
        if !self.manager.is_visible(level) {
            return;
        }
        self.manager.cancel_hide(level);
        match self.manager.nested_link(level, index) {
            Some(anchor) => self.manager.request_show(level + 1, anchor, position),
            None => log::debug!("level {level}: link {index} does not open a nested preview"),
        }
    }

    fn leave_surface(&self, level: usize, related: &PointerTarget) {
        if !self.is_over_visible_surface(related) {
            for level in 0..=self.manager.max_level() {
                self.manager.request_hide(level);
            }
            return;
        }

        let adjacent = related
            .surface_level()
            .is_some_and(|other| other.abs_diff(level) <= 1);
        if !adjacent {
            self.manager.request_hide(level);
        }
    }

    fn is_over_visible_surface(&self, target: &PointerTarget) -> bool {
        target
            .surface_level()
            .is_some_and(|level| self.manager.is_visible(level))
    }
}
