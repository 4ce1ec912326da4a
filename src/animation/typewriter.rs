//! Character-by-character text reveal, for one string or a staggered set.

use super::scheduler::{Fired, Scheduler, TimerEvent, TimerId};
use crate::constants::REVEAL_CURSOR;
use std::time::Duration;

/// One string being revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub id: String,
    full_text: String,
    total_len: usize,
    revealed_len: usize,
    start_delay: Duration,
}

impl RevealTarget {
    fn new(id: String, full_text: String, start_delay: Duration) -> Self {
        let total_len = full_text.chars().count();
        Self {
            id,
            full_text,
            total_len,
            revealed_len: 0,
            start_delay,
        }
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Revealed length in characters
    pub fn revealed_len(&self) -> usize {
        self.revealed_len
    }

    /// Full length in characters
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Delay from reveal start until this target begins ticking
    pub fn start_delay(&self) -> Duration {
        self.start_delay
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_len >= self.total_len
    }

    /// The revealed prefix
    pub fn revealed(&self) -> &str {
        match self.full_text.char_indices().nth(self.revealed_len) {
            Some((end, _)) => &self.full_text[..end],
            None => &self.full_text,
        }
    }

    /// Revealed prefix plus the cursor while the reveal is incomplete
    pub fn display(&self) -> String {
        let mut text = self.revealed().to_string();
        if !self.is_complete() {
            text.push(REVEAL_CURSOR);
        }
        text
    }

    fn advance(&mut self) {
        self.revealed_len = (self.revealed_len + 1).min(self.total_len);
    }
}

/// Reveals one or more [`RevealTarget`]s at a fixed rate.
///
/// Every timer the revealer registers is tracked in `timers`, so
/// [`Typewriter::cancel`] stops all of them at once whatever phase each target
/// is in (waiting for the base delay, waiting for its stagger, ticking).
#[derive(Debug)]
pub struct Typewriter {
    speed: Duration,
    base_delay: Duration,
    stagger: Duration,
    targets: Vec<RevealTarget>,
    timers: Vec<TimerId>,
    tickers: Vec<Option<TimerId>>,
}

impl Typewriter {
    pub fn new(speed: Duration, base_delay: Duration, stagger: Duration) -> Self {
        Self {
            speed,
            base_delay,
            stagger,
            targets: Vec::new(),
            timers: Vec::new(),
            tickers: Vec::new(),
        }
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    pub fn target(&self, id: &str) -> Option<&RevealTarget> {
        self.targets.iter().find(|t| t.id == id)
    }

    /// True while any timer is outstanding
    pub fn is_running(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.targets.iter().all(RevealTarget::is_complete)
    }

    /// Number of outstanding timers
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Whether the current targets were built from exactly these `(id, text)` pairs
    pub fn matches<'a, I>(&self, sources: I) -> bool
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut count = 0;
        for (id, text) in sources {
            match self.targets.get(count) {
                Some(target) if target.id == id && target.full_text == text => count += 1,
                _ => return false,
            }
        }
        count == self.targets.len() && count > 0
    }

    /// Reveal a single string, one character per tick starting one tick from now.
    ///
    /// Supersedes any reveal in progress. Empty text completes immediately
    /// without registering a timer.
    pub fn start_reveal(&mut self, id: &str, text: &str, scheduler: &mut Scheduler) {
        self.clear(scheduler);
        self.targets.push(RevealTarget::new(id.to_string(), text.to_string(), Duration::ZERO));
        self.tickers.push(None);
        self.begin_ticking(0, scheduler);
    }

    /// Reveal several strings concurrently.
    ///
    /// Nothing moves until the base delay elapses; target `i` then waits a
    /// further `i * stagger` before ticking.
    pub fn start_staggered<I, S, T>(&mut self, sources: I, scheduler: &mut Scheduler)
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        self.clear(scheduler);
        for (index, (id, text)) in sources.into_iter().enumerate() {
            let start_delay = self.base_delay + self.stagger_for(index);
            self.targets.push(RevealTarget::new(id.into(), text.into(), start_delay));
            self.tickers.push(None);
        }
        if self.targets.is_empty() {
            return;
        }
        let base = scheduler.set_timeout(self.base_delay, TimerEvent::RevealBase);
        self.timers.push(base);
    }

    fn stagger_for(&self, index: usize) -> Duration {
        self.stagger * u32::try_from(index).unwrap_or(u32::MAX)
    }

    /// Stop every outstanding timer, keeping the revealed text as is
    pub fn cancel(&mut self, scheduler: &mut Scheduler) {
        if !self.timers.is_empty() {
            log::debug!("Typewriter: cancelling {} timers", self.timers.len());
        }
        scheduler.clear_all(self.timers.drain(..));
        self.tickers.iter_mut().for_each(|ticker| *ticker = None);
    }

    /// Stop every timer and forget the targets
    pub fn clear(&mut self, scheduler: &mut Scheduler) {
        self.cancel(scheduler);
        self.targets.clear();
        self.tickers.clear();
    }

    /// Handle a fired timer. Returns true when the display changed.
    pub fn on_timer(&mut self, fired: &Fired, scheduler: &mut Scheduler) -> bool {
        if !self.timers.contains(&fired.id) {
            return false;
        }

        match fired.event {
            TimerEvent::RevealBase => {
                self.forget(fired.id);
                for index in 0..self.targets.len() {
                    let start = scheduler.set_timeout(self.stagger_for(index), TimerEvent::RevealStart { target: index });
                    self.timers.push(start);
                }
                false
            }
            TimerEvent::RevealStart { target } => {
                self.forget(fired.id);
                self.begin_ticking(target, scheduler)
            }
            TimerEvent::RevealTick { target } => {
                let Some(entry) = self.targets.get_mut(target) else {
                    return false;
                };
                entry.advance();
                if entry.is_complete() {
                    self.stop_ticking(target, scheduler);
                }
                true
            }
            _ => false,
        }
    }

    fn begin_ticking(&mut self, index: usize, scheduler: &mut Scheduler) -> bool {
        let Some(target) = self.targets.get(index) else {
            return false;
        };
        if target.is_complete() {
            return true;
        }
        let ticker = scheduler.set_interval(self.speed, TimerEvent::RevealTick { target: index });
        self.timers.push(ticker);
        self.tickers[index] = Some(ticker);
        false
    }

    fn stop_ticking(&mut self, index: usize, scheduler: &mut Scheduler) {
        if let Some(ticker) = self.tickers.get_mut(index).and_then(Option::take) {
            scheduler.clear(ticker);
            self.forget(ticker);
        }
    }

    fn forget(&mut self, id: TimerId) {
        self.timers.retain(|&timer| timer != id);
    }
}
