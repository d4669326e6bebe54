use std::time::Duration;

pub const DEFAULT_HOVER_DELAY: Duration = Duration::from_millis(250);
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(200);
pub const DEFAULT_CACHE_DURATION: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_MAX_NEST_LEVEL: usize = 4;

/// Delays and limits that drive the preview state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// How long the pointer must rest on a link before its preview opens.
    pub hover_delay: Duration,
    /// Grace period before a preview closes after the pointer leaves.
    pub hide_delay: Duration,
    pub cache_duration: Duration,
    /// Deepest level index; levels `0..=max_nest_level` exist.
    pub max_nest_level: usize,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            hover_delay: DEFAULT_HOVER_DELAY,
            hide_delay: DEFAULT_HIDE_DELAY,
            cache_duration: DEFAULT_CACHE_DURATION,
            max_nest_level: DEFAULT_MAX_NEST_LEVEL,
        }
    }
}
