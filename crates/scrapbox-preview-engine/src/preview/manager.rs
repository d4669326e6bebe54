use std::sync::{Arc, Mutex};

use super::level::{LevelRecord, LevelState};
use super::placement::place;
use super::surface::{Point, PreviewSurface, SurfaceContent, Viewport};
use super::timing::Timing;
use crate::content::ContentFetcher;
use crate::models::Anchor;
use crate::parsing::Link;
use crate::sync::lock;

/// Drives the stack of nested preview surfaces.
///
/// Level 0 previews a link on the host page, level `k + 1` previews a link
/// inside level `k`. Each level has at most one pending show timer and one
/// pending hide timer; arming either kind cancels the other. Timers run as
/// tokio tasks, so every method that arms one must be called from within a
/// tokio runtime.
///
/// Cloning is cheap and every clone drives the same levels.
#[derive(Clone)]
pub struct PreviewManager {
    inner: Arc<Inner>,
}

struct Inner {
    levels: Mutex<Vec<LevelRecord>>,
    fetcher: Arc<ContentFetcher>,
    viewport: Arc<dyn Viewport>,
    timing: Timing,
}

impl PreviewManager {
    /// Creates one surface per level up front via `make_surface`, which is
    /// given the level index.
    pub fn new(
        fetcher: Arc<ContentFetcher>,
        viewport: Arc<dyn Viewport>,
        timing: Timing,
        mut make_surface: impl FnMut(usize) -> Box<dyn PreviewSurface>,
    ) -> Self {
        let levels = (0..=timing.max_nest_level)
            .map(|level| LevelRecord::new(make_surface(level)))
            .collect();
        Self {
            inner: Arc::new(Inner {
                levels: Mutex::new(levels),
                fetcher,
                viewport,
                timing,
            }),
        }
    }

    pub fn max_level(&self) -> usize {
        self.inner.timing.max_nest_level
    }

    /// Starts the hover delay for showing `anchor` at `level`.
    ///
    /// Cancels the level's pending hide and immediately hides every deeper
    /// level. Levels beyond the maximum are ignored.
    pub fn request_show(&self, level: usize, anchor: Anchor, pointer: Point) {
        if level > self.max_level() {
            log::debug!("level {level}: beyond maximum nesting, ignoring show");
            return;
        }

        let mut levels = lock(&self.inner.levels);
        levels[level].cancel_hide();
        for deeper in &mut levels[level + 1..] {
            deeper.hide_now();
        }

        let record = &mut levels[level];
        let generation = record.next_generation();
        let task = tokio::spawn(self.clone().fire_show(level, generation, anchor, pointer));
        record.arm_show(generation, task);
        log::debug!("level {level}: show armed");
    }

    /// Starts the grace period for hiding `level`. When it runs out the
    /// level and every deeper level are hidden.
    pub fn request_hide(&self, level: usize) {
        if level > self.max_level() {
            return;
        }

        let mut levels = lock(&self.inner.levels);
        let record = &mut levels[level];
        record.cancel_show();
        let generation = record.next_generation();
        let task = tokio::spawn(self.clone().fire_hide(level, generation));
        record.arm_hide(generation, task);
        log::debug!("level {level}: hide armed");
    }

    /// Cancels a pending hide of `level`. Returns whether one was pending.
    pub fn cancel_hide(&self, level: usize) -> bool {
        match lock(&self.inner.levels).get_mut(level) {
            Some(record) => record.cancel_hide(),
            None => false,
        }
    }

    /// Hides `level` and everything deeper right away.
    pub fn force_hide(&self, level: usize) {
        let mut levels = lock(&self.inner.levels);
        if let Some(records) = levels.get_mut(level..) {
            for record in records {
                record.hide_now();
            }
        }
    }

    /// `None` for levels that do not exist.
    pub fn state(&self, level: usize) -> Option<LevelState> {
        lock(&self.inner.levels)
            .get(level)
            .map(|record| record.state)
    }

    pub fn is_visible(&self, level: usize) -> bool {
        lock(&self.inner.levels)
            .get(level)
            .is_some_and(|record| record.visible)
    }

    /// The `index`-th internal link rendered in surface `level`, if it can
    /// open a nested preview. Surfaces at the deepest level expose none.
    pub fn nested_link(&self, level: usize, index: usize) -> Option<Anchor> {
        lock(&self.inner.levels)
            .get(level)?
            .nested_links
            .get(index)
            .cloned()
    }

    pub fn nested_link_count(&self, level: usize) -> usize {
        lock(&self.inner.levels)
            .get(level)
            .map_or(0, |record| record.nested_links.len())
    }

    async fn fire_show(self, level: usize, generation: u64, anchor: Anchor, pointer: Point) {
        tokio::time::sleep(self.inner.timing.hover_delay).await;
        let epoch = {
            let mut levels = lock(&self.inner.levels);
            let record = &mut levels[level];
            if !record.take_show(generation) {
                return;
            }
            record.epoch()
        };

        let Some(key) = anchor.content_key() else {
            log::debug!("level {level}: {anchor:?} does not name a page");
            lock(&self.inner.levels)[level].abandon_show();
            return;
        };

        log::debug!("level {level}: loading {key}");
        let content = match self.inner.fetcher.resolve_key(&key).await {
            Ok(tree) => SurfaceContent::from_tree(tree),
            Err(e) => {
                log::error!("level {level}: preview of {key} failed: {e}");
                SurfaceContent::failed(e)
            }
        };
        self.present(level, epoch, content, pointer);
    }

    async fn fire_hide(self, level: usize, generation: u64) {
        tokio::time::sleep(self.inner.timing.hide_delay).await;
        let mut levels = lock(&self.inner.levels);
        if !levels[level].take_hide(generation) {
            return;
        }

        log::debug!(
            "level {level}: hiding with {} deeper",
            levels.len() - level - 1
        );
        for record in &mut levels[level..] {
            record.hide_now();
        }
    }

    /// Shows `content` on `level`, unless the level was hidden since its load
    /// began in `epoch` or its parent is no longer visible.
    fn present(&self, level: usize, epoch: u64, content: SurfaceContent, pointer: Point) {
        let viewport = self.inner.viewport.size();
        let mut levels = lock(&self.inner.levels);
        let parent_visible = level == 0 || levels[level - 1].visible;
        let record = &mut levels[level];
        if record.epoch() != epoch || !parent_visible {
            log::debug!("level {level}: dropping load that outlived its level");
            record.abandon_show();
            return;
        }

        record.nested_links = match &content {
            SurfaceContent::Page(tree) if level < self.max_level() => tree
                .internal_links()
                .into_iter()
                .map(Link::to_anchor)
                .collect(),
            _ => vec![],
        };

        record.surface.replace_content(content);
        let size = record.surface.bounding_box();
        record.surface.set_position(place(pointer, size, viewport));
        record.surface.set_interactive(true);
        record.surface.set_visible(true);
        record.mark_shown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PreviewBlock, PreviewTree};
    use crate::parsing::InlineNode;
    use crate::tests::{StaticTransport, manager_with, page, sleep_ms};
    use pretty_assertions::assert_eq;

    fn wiki() -> StaticTransport {
        StaticTransport::new()
            .with_page("p", "A", page(Some("A"), &["see [B]"]))
            .with_page("p", "B", page(Some("B"), &["see [C]"]))
            .with_page("p", "C", page(Some("C"), &["end"]))
            .with_page("p", "Empty", page(None, &[]))
    }

    fn at() -> Point {
        Point::new(100.0, 100.0)
    }

    fn show_chain(manager: &PreviewManager) {
        manager.request_show(0, Anchor::from_href("/p/A"), at());
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_waits_for_hover_delay() {
        let (manager, surfaces) = manager_with(wiki(), Timing::default());

        show_chain(&manager);
        sleep_ms(200).await;
        assert_eq!(manager.state(0), Some(LevelState::PendingShow));
        assert!(!surfaces[0].log().visible);

        sleep_ms(100).await;
        assert_eq!(manager.state(0), Some(LevelState::Visible));
        let log = surfaces[0].log();
        assert!(log.visible);
        assert!(log.interactive);
        assert_eq!(log.position, Some(Point::new(115.0, 115.0)));
        assert_eq!(
            log.content,
            Some(SurfaceContent::Page(PreviewTree {
                blocks: vec![
                    PreviewBlock::Title(vec![InlineNode::text("A")]),
                    PreviewBlock::LineBreak,
                    PreviewBlock::Line(vec![
                        InlineNode::text("see "),
                        InlineNode::Link(Link::internal(
                            "/p/B".to_string(),
                            "B",
                            crate::models::ContentKey::new("p", "B"),
                        )),
                    ]),
                    PreviewBlock::LineBreak,
                ]
            }))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_hide_before_show_fires_never_shows() {
        let transport = wiki();
        let (manager, surfaces) = manager_with(transport.clone(), Timing::default());

        show_chain(&manager);
        sleep_ms(100).await;
        manager.request_hide(0);
        sleep_ms(1000).await;

        assert_eq!(manager.state(0), Some(LevelState::Hidden));
        assert_eq!(surfaces[0].log().shown_count, 0);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_cancels_pending_hide() {
        let (manager, _surfaces) = manager_with(wiki(), Timing::default());

        show_chain(&manager);
        sleep_ms(300).await;
        manager.request_hide(0);
        assert_eq!(manager.state(0), Some(LevelState::PendingHide));
        sleep_ms(100).await;
        show_chain(&manager);
        sleep_ms(500).await;

        assert_eq!(manager.state(0), Some(LevelState::Visible));
        assert!(manager.is_visible(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_beyond_max_level_is_ignored() {
        let timing = Timing {
            max_nest_level: 1,
            ..Timing::default()
        };
        let (manager, surfaces) = manager_with(wiki(), timing);

        manager.request_show(2, Anchor::from_href("/p/A"), at());
        sleep_ms(500).await;

        assert_eq!(surfaces.len(), 2);
        assert_eq!(manager.state(2), None);
        assert!(surfaces.iter().all(|s| s.log().shown_count == 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deepest_level_exposes_no_nested_links() {
        let timing = Timing {
            max_nest_level: 1,
            ..Timing::default()
        };
        let (manager, _surfaces) = manager_with(wiki(), timing);

        show_chain(&manager);
        sleep_ms(300).await;
        assert_eq!(manager.nested_link_count(0), 1);
        let child = manager.nested_link(0, 0).unwrap();
        assert_eq!(child.data_title.as_deref(), Some("B"));

        manager.request_show(1, child, at());
        sleep_ms(300).await;
        assert!(manager.is_visible(1));
        assert_eq!(manager.nested_link_count(1), 0);
        assert_eq!(manager.nested_link(1, 0), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hide_cascades_to_deeper_levels() {
        let (manager, surfaces) = manager_with(wiki(), Timing::default());

        show_chain(&manager);
        sleep_ms(300).await;
        manager.request_show(1, manager.nested_link(0, 0).unwrap(), at());
        sleep_ms(300).await;
        manager.request_show(2, manager.nested_link(1, 0).unwrap(), at());
        sleep_ms(300).await;
        assert!((0..3).all(|level| manager.is_visible(level)));

        manager.request_hide(0);
        sleep_ms(250).await;

        for level in 0..3 {
            assert_eq!(manager.state(level), Some(LevelState::Hidden));
            assert!(!surfaces[level].log().visible);
            assert!(!surfaces[level].log().interactive);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_force_hides_deeper_levels_immediately() {
        let (manager, _surfaces) = manager_with(wiki(), Timing::default());

        show_chain(&manager);
        sleep_ms(300).await;
        manager.request_show(1, manager.nested_link(0, 0).unwrap(), at());
        sleep_ms(300).await;
        assert!(manager.is_visible(1));

        show_chain(&manager);

        assert!(!manager.is_visible(1));
        assert_eq!(manager.state(1), Some(LevelState::Hidden));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_failure_shows_message() {
        let (manager, surfaces) = manager_with(wiki(), Timing::default());

        manager.request_show(0, Anchor::from_href("/p/Missing"), at());
        sleep_ms(300).await;

        let log = surfaces[0].log();
        assert!(log.visible);
        match log.content {
            Some(SurfaceContent::Message(message)) => {
                assert!(message.starts_with("Preview failed: "), "{message}");
                assert!(message.contains("404"), "{message}");
            }
            other => panic!("expected a message, got {other:?}"),
        }
        assert_eq!(manager.nested_link_count(0), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_page_shows_notice() {
        let (manager, surfaces) = manager_with(wiki(), Timing::default());

        manager.request_show(0, Anchor::from_href("/p/Empty"), at());
        sleep_ms(300).await;

        assert_eq!(
            surfaces[0].log().content,
            Some(SurfaceContent::Message("(No content or unable to fetch)".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_anchor_is_dropped_silently() {
        let transport = wiki();
        let (manager, surfaces) = manager_with(transport.clone(), Timing::default());

        manager.request_show(0, Anchor::from_href("https://example.com"), at());
        sleep_ms(300).await;

        assert_eq!(manager.state(0), Some(LevelState::Hidden));
        assert_eq!(surfaces[0].log().shown_count, 0);
        assert_eq!(surfaces[0].log().content, None);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_surface_is_clamped_into_viewport() {
        let (manager, surfaces) = manager_with(wiki(), Timing::default());

        // RecordingSurface is 300x200 inside a 1000x800 viewport
        manager.request_show(0, Anchor::from_href("/p/A"), Point::new(900.0, 700.0));
        sleep_ms(300).await;

        assert_eq!(surfaces[0].log().position, Some(Point::new(585.0, 485.0)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_force_hide_ignores_missing_levels() {
        let (manager, _surfaces) = manager_with(wiki(), Timing::default());
        manager.force_hide(42);
        assert!(!manager.cancel_hide(42));
        assert!(!manager.is_visible(42));
    }
}
