use tokio::task::JoinHandle;

use super::surface::PreviewSurface;
use crate::models::Anchor;

/// Where one preview level is in its show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelState {
    Hidden,
    /// A show timer is armed, or it fired and the page is still loading.
    PendingShow,
    Visible,
    /// Still rendered, with a hide timer armed.
    PendingHide,
}

/// An armed timer task. `generation` lets a task that already woke up
/// notice it was cancelled while waiting for the level lock.
pub(crate) struct Timer {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Per-level bookkeeping: the surface, its timers and the nested links it
/// currently exposes.
pub(crate) struct LevelRecord {
    pub(crate) surface: Box<dyn PreviewSurface>,
    pub(crate) state: LevelState,
    pub(crate) visible: bool,
    pub(crate) nested_links: Vec<Anchor>,
    show_timer: Option<Timer>,
    hide_timer: Option<Timer>,
    next_generation: u64,
    /// Bumped on every immediate hide. A load that started in an earlier
    /// epoch must not be presented.
    epoch: u64,
}

impl LevelRecord {
    pub(crate) fn new(surface: Box<dyn PreviewSurface>) -> Self {
        Self {
            surface,
            state: LevelState::Hidden,
            visible: false,
            nested_links: vec![],
            show_timer: None,
            hide_timer: None,
            next_generation: 0,
            epoch: 0,
        }
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Reserves the generation for a timer about to be spawned.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    pub(crate) fn arm_show(&mut self, generation: u64, handle: JoinHandle<()>) {
        self.cancel_show();
        self.show_timer = Some(Timer { generation, handle });
        self.state = LevelState::PendingShow;
    }

    pub(crate) fn arm_hide(&mut self, generation: u64, handle: JoinHandle<()>) {
        self.cancel_hide();
        self.hide_timer = Some(Timer { generation, handle });
        self.state = if self.visible {
            LevelState::PendingHide
        } else {
            LevelState::Hidden
        };
    }

    /// Claims the show timer for the task that owns `generation`. Returns
    /// false when that timer was cancelled or replaced in the meantime.
    pub(crate) fn take_show(&mut self, generation: u64) -> bool {
        take_if_current(&mut self.show_timer, generation)
    }

    pub(crate) fn take_hide(&mut self, generation: u64) -> bool {
        take_if_current(&mut self.hide_timer, generation)
    }

    pub(crate) fn cancel_show(&mut self) -> bool {
        let cancelled = cancel(&mut self.show_timer);
        if cancelled && self.state == LevelState::PendingShow {
            self.state = self.resting_state();
        }
        cancelled
    }

    pub(crate) fn cancel_hide(&mut self) -> bool {
        let cancelled = cancel(&mut self.hide_timer);
        if cancelled && self.state == LevelState::PendingHide {
            self.state = self.resting_state();
        }
        cancelled
    }

    /// Takes the surface down now and drops both timers.
    pub(crate) fn hide_now(&mut self) {
        cancel(&mut self.show_timer);
        cancel(&mut self.hide_timer);
        self.surface.set_visible(false);
        self.surface.set_interactive(false);
        self.visible = false;
        self.nested_links.clear();
        self.state = LevelState::Hidden;
        self.epoch += 1;
    }

    /// State once the shown-page is presented, honouring a hide that was
    /// requested while it loaded.
    pub(crate) fn mark_shown(&mut self) {
        self.visible = true;
        self.state = if self.hide_timer.is_some() {
            LevelState::PendingHide
        } else {
            LevelState::Visible
        };
    }

    /// A show that resolved to nothing settles back to rest, unless a newer
    /// show timer is already armed.
    pub(crate) fn abandon_show(&mut self) {
        if self.state == LevelState::PendingShow && self.show_timer.is_none() {
            self.state = self.resting_state();
        }
    }

    fn resting_state(&self) -> LevelState {
        if self.visible {
            LevelState::Visible
        } else {
            LevelState::Hidden
        }
    }
}

fn take_if_current(slot: &mut Option<Timer>, generation: u64) -> bool {
    match slot {
        Some(timer) if timer.generation == generation => {
            *slot = None;
            true
        }
        _ => false,
    }
}

fn cancel(slot: &mut Option<Timer>) -> bool {
    match slot.take() {
        Some(timer) => {
            timer.handle.abort();
            true
        }
        None => false,
    }
}
