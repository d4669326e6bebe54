//! Shared fakes for unit tests.


use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::content::ContentFetcher;
use crate::io::{FetchError, PageTransport};
use crate::models::{ContentKey, PageData, PageLine};
use crate::preview::{
    Point, PreviewManager, PreviewSurface, Size, SurfaceContent, Timing, Viewport,
};

/// Build a page payload from a title and raw lines
pub fn page(title: Option<&str>, lines: &[&str]) -> PageData {
    PageData {
        title: title.map(str::to_string),
        image: None,
        lines: lines.iter().map(|line| PageLine::new(*line)).collect(),
    }
}

pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// In-memory transport. Unknown pages answer 404.
#[derive(Clone, Default)]
pub struct StaticTransport {
    pages: Arc<HashMap<ContentKey, PageData>>,
    latency: Option<Duration>,
    requests: Arc<AtomicUsize>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, namespace: &str, title: &str, page: PageData) -> Self {
        Arc::make_mut(&mut self.pages).insert(ContentKey::new(namespace, title), page);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageTransport for StaticTransport {
    async fn fetch_page(&self, key: &ContentKey) -> Result<PageData, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.pages.get(key).cloned().ok_or_else(|| FetchError::Status {
            status: 404,
            message: "Not Found".to_string(),
            url: key.path(),
        })
    }
}

/// What a [`RecordingSurface`] has been told so far.
#[derive(Debug, Clone, Default)]
pub struct SurfaceLog {
    pub content: Option<SurfaceContent>,
    pub position: Option<Point>,
    pub visible: bool,
    pub interactive: bool,
    /// Number of times the surface was made visible.
    pub shown_count: usize,
}

/// A 300x200 surface that records every call; clones share the record.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    log: Arc<Mutex<SurfaceLog>>,
}

impl RecordingSurface {
    pub const SIZE: Size = Size {
        width: 300.0,
        height: 200.0,
    };

    pub fn log(&self) -> SurfaceLog {
        self.log.lock().unwrap().clone()
    }
}

impl PreviewSurface for RecordingSurface {
    fn replace_content(&mut self, content: SurfaceContent) {
        self.log.lock().unwrap().content = Some(content);
    }

    fn set_position(&mut self, position: Point) {
        self.log.lock().unwrap().position = Some(position);
    }

    fn set_visible(&mut self, visible: bool) {
        let mut log = self.log.lock().unwrap();
        log.visible = visible;
        if visible {
            log.shown_count += 1;
        }
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.log.lock().unwrap().interactive = interactive;
    }

    fn bounding_box(&self) -> Size {
        Self::SIZE
    }
}

pub struct FixedViewport(pub Size);

impl Viewport for FixedViewport {
    fn size(&self) -> Size {
        self.0
    }
}

/// A manager over `transport` with recording surfaces in a 1000x800
/// viewport. Returns the surfaces by level.
pub fn manager_with(
    transport: StaticTransport,
    timing: Timing,
) -> (PreviewManager, Vec<RecordingSurface>) {
    let fetcher = Arc::new(ContentFetcher::new(Arc::new(transport), timing.cache_duration));
    let surfaces: Vec<RecordingSurface> = (0..=timing.max_nest_level)
        .map(|_| RecordingSurface::default())
        .collect();
    let handed_out = surfaces.clone();
    let manager = PreviewManager::new(
        fetcher,
        Arc::new(FixedViewport(Size::new(1000.0, 800.0))),
        timing,
        move |level| -> Box<dyn PreviewSurface> { Box::new(handed_out[level].clone()) },
    );
    (manager, surfaces)
}
