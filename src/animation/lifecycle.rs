//! Open/close animation state machine for the artifact panel.

use super::scheduler::{Fired, Scheduler, TimerEvent, TimerId};
use crate::ui::core::scroll_lock::{ScrollLease, ScrollLock};
use std::time::Duration;

/// Visual state of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl PanelState {
    /// Opening or Open: the panel is (becoming) visible
    pub fn is_visible(self) -> bool {
        matches!(self, PanelState::Opening | PanelState::Open)
    }

    /// Opening or Closing
    pub fn is_animating(self) -> bool {
        matches!(self, PanelState::Opening | PanelState::Closing)
    }

    pub fn label(self) -> &'static str {
        match self {
            PanelState::Closed => "closed",
            PanelState::Opening => "opening",
            PanelState::Open => "open",
            PanelState::Closing => "closing",
        }
    }
}

/// Drives [`PanelState`] from the host's `is_open` signal.
///
/// At most one transition is pending at a time. Its timer id is kept in
/// `pending`; a new signal clears it before scheduling the next one and only
/// the timer matching `pending` may complete a transition.
#[derive(Debug)]
pub struct PanelLifecycle {
    state: PanelState,
    pending: Option<TimerId>,
    duration: Duration,
    scroll_lock: ScrollLock,
    lease: Option<ScrollLease>,
    escape_armed: bool,
}

impl PanelLifecycle {
    pub fn new(duration: Duration, scroll_lock: ScrollLock) -> Self {
        Self {
            state: PanelState::Closed,
            pending: None,
            duration,
            scroll_lock,
            lease: None,
            escape_armed: false,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Whether Esc currently maps to a close request
    pub fn escape_armed(&self) -> bool {
        self.escape_armed
    }

    pub fn has_pending_transition(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed the host's `is_open` value.
    ///
    /// Returns the new state when it changed. Re-opening while Closing jumps
    /// straight to Opening without waiting for Closed.
    pub fn set_open(&mut self, is_open: bool, scheduler: &mut Scheduler) -> Option<PanelState> {
        self.escape_armed = is_open;

        let next = match (is_open, self.state) {
            (true, PanelState::Closed | PanelState::Closing) => Some(PanelState::Opening),
            (false, PanelState::Open | PanelState::Opening) => Some(PanelState::Closing),
            _ => None,
        };

        if let Some(next) = next {
            if let Some(stale) = self.pending.take() {
                scheduler.clear(stale);
            }
            self.pending = Some(scheduler.set_timeout(self.duration, TimerEvent::PanelSettle));
            self.enter(next);
        }
        next
    }

    /// Complete the pending transition if `fired` is its timer
    pub fn on_timer(&mut self, fired: &Fired) -> Option<PanelState> {
        if fired.event != TimerEvent::PanelSettle || self.pending != Some(fired.id) {
            return None;
        }
        self.pending = None;

        let next = match self.state {
            PanelState::Opening => PanelState::Open,
            PanelState::Closing => PanelState::Closed,
            settled => settled,
        };
        if next == self.state {
            return None;
        }
        self.enter(next);
        Some(next)
    }

    fn enter(&mut self, next: PanelState) {
        log::debug!("Panel: {} -> {}", self.state.label(), next.label());
        self.state = next;
        if next.is_visible() {
            if self.lease.is_none() {
                self.lease = Some(self.scroll_lock.acquire());
            }
        } else {
            self.lease = None;
        }
    }

    /// Cancel the pending transition and release global effects
    pub fn teardown(&mut self, scheduler: &mut Scheduler) {
        if let Some(pending) = self.pending.take() {
            scheduler.clear(pending);
        }
        self.lease = None;
        self.escape_armed = false;
    }
}
