//! Rotating status phrase with elapsed-time tracking.

use super::scheduler::{Fired, Scheduler, TimerEvent, TimerId};
use crate::error::{ChatError, ChatResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Picks a random phrase every `rotate_every` and counts whole seconds since
/// activation every `elapsed_every`.
///
/// Draws are independent, so the same phrase can come up twice in a row.
#[derive(Debug)]
pub struct StatusTicker {
    phrases: Vec<String>,
    active_phrase: String,
    started_at: Option<Duration>,
    elapsed_secs: u64,
    rotations: u64,
    rotate_every: Duration,
    elapsed_every: Duration,
    rotate_timer: Option<TimerId>,
    elapsed_timer: Option<TimerId>,
    report_completion: bool,
    rng: StdRng,
}

impl StatusTicker {
    pub fn new(rotate_every: Duration, elapsed_every: Duration) -> Self {
        Self::with_rng(rotate_every, elapsed_every, StdRng::from_rng(&mut rand::rng()))
    }

    /// Build a ticker drawing from a caller supplied generator
    pub fn with_rng(rotate_every: Duration, elapsed_every: Duration, rng: StdRng) -> Self {
        Self {
            phrases: Vec::new(),
            active_phrase: String::new(),
            started_at: None,
            elapsed_secs: 0,
            rotations: 0,
            rotate_every,
            elapsed_every,
            rotate_timer: None,
            elapsed_timer: None,
            report_completion: true,
            rng,
        }
    }

    /// Report the final elapsed seconds from [`StatusTicker::deactivate`]
    pub fn set_report_completion(&mut self, report: bool) {
        self.report_completion = report;
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn active_phrase(&self) -> &str {
        &self.active_phrase
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Number of phrase draws in the current session, the first one included
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// Start a session.
    ///
    /// An empty phrase list is rejected before anything else changes. An
    /// already active session is deactivated first; its completion, if
    /// reported, is returned.
    pub fn activate(&mut self, phrases: Vec<String>, scheduler: &mut Scheduler) -> ChatResult<Option<u64>> {
        if phrases.is_empty() {
            return Err(ChatError::EmptyPhrases);
        }

        let previous = self.deactivate(scheduler);

        self.phrases = phrases;
        self.started_at = Some(scheduler.now());
        self.elapsed_secs = 0;
        self.rotations = 0;
        self.draw();
        self.rotate_timer = Some(scheduler.set_interval(self.rotate_every, TimerEvent::PhraseRotate));
        self.elapsed_timer = Some(scheduler.set_interval(self.elapsed_every, TimerEvent::ElapsedTick));
        log::debug!("Ticker: activated with {} phrases", self.phrases.len());

        Ok(previous)
    }

    /// Stop both timers.
    ///
    /// Returns the elapsed seconds at this instant when completion reporting
    /// is on and a session was active; `None` otherwise, so repeated calls
    /// report at most once.
    pub fn deactivate(&mut self, scheduler: &mut Scheduler) -> Option<u64> {
        scheduler.clear_all(self.rotate_timer.take().into_iter().chain(self.elapsed_timer.take()));

        let started_at = self.started_at.take()?;
        self.elapsed_secs = Self::whole_seconds(scheduler.now(), started_at);
        log::debug!("Ticker: deactivated after {}s", self.elapsed_secs);
        self.report_completion.then_some(self.elapsed_secs)
    }

    /// Handle a fired timer. Returns true when the display changed.
    pub fn on_timer(&mut self, fired: &Fired, scheduler: &Scheduler) -> bool {
        match fired.event {
            TimerEvent::PhraseRotate if self.rotate_timer == Some(fired.id) => {
                self.draw();
                true
            }
            TimerEvent::ElapsedTick if self.elapsed_timer == Some(fired.id) => {
                let Some(started_at) = self.started_at else {
                    return false;
                };
                let elapsed = Self::whole_seconds(scheduler.now(), started_at);
                let changed = elapsed != self.elapsed_secs;
                self.elapsed_secs = elapsed;
                changed
            }
            _ => false,
        }
    }

    fn draw(&mut self) {
        let index = self.rng.random_range(0..self.phrases.len());
        self.active_phrase.clone_from(&self.phrases[index]);
        self.rotations += 1;
    }

    fn whole_seconds(now: Duration, started_at: Duration) -> u64 {
        now.saturating_sub(started_at).as_secs()
    }
}
