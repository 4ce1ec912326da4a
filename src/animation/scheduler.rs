//! Cooperative single-threaded timer scheduler.
//!
//! The UI runs on one task, so timers are plain entries in a table keyed by
//! [`TimerId`] instead of spawned futures. The event loop advances a virtual
//! clock from wall-clock instants and drains due timers one at a time with
//! [`Scheduler::next_due`]; a handler that schedules a new timer while the
//! clock is being advanced sees the correct `now` and its timer fires in the
//! same advance if it falls inside the window.
//!
//! Clearing a timer removes it from the table immediately, so a cleared timer
//! can never be delivered afterwards.

use std::collections::BTreeMap;
use std::time::Duration;

pub type TimerId = u64;

/// Payload carried by a timer and routed to the component that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Panel open/close animation finished
    PanelSettle,
    /// Shared base delay before staggered reveals elapsed
    RevealBase,
    /// Staggered delay of one reveal target elapsed
    RevealStart { target: usize },
    /// One character of a reveal target is due
    RevealTick { target: usize },
    /// Status phrase re-draw
    PhraseRotate,
    /// Elapsed-seconds recomputation
    ElapsedTick,
    /// Close request after a selection
    AutoClose,
    /// Timer owned by the host application
    Host(u64),
}

/// A timer handed back by [`Scheduler::next_due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub event: TimerEvent,
}

#[derive(Debug, Clone)]
struct Timer {
    due: Duration,
    period: Option<Duration>,
    event: TimerEvent,
}

/// Timer table plus the virtual clock it is measured against.
#[derive(Debug)]
pub struct Scheduler {
    now: Duration,
    timers: BTreeMap<TimerId, Timer>,
    next_id: TimerId,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            timers: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Current position of the virtual clock
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire `event` once after `delay`
    pub fn set_timeout(&mut self, delay: Duration, event: TimerEvent) -> TimerId {
        self.insert(self.now + delay, None, event)
    }

    /// Fire `event` every `period`, first at `now + period`.
    ///
    /// A zero period is clamped to one millisecond so an interval can never
    /// starve the drain loop.
    pub fn set_interval(&mut self, period: Duration, event: TimerEvent) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.insert(self.now + period, Some(period), event)
    }

    fn insert(&mut self, due: Duration, period: Option<Duration>, event: TimerEvent) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.insert(id, Timer { due, period, event });
        id
    }

    /// Cancel a timer. Returns false if it already fired or was cleared.
    pub fn clear(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    /// Cancel every timer in `ids`
    pub fn clear_all<I: IntoIterator<Item = TimerId>>(&mut self, ids: I) {
        for id in ids {
            self.timers.remove(&id);
        }
    }

    /// Cancel every timer in the table
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Number of outstanding timers
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves to the timer's due time. Intervals are re-armed one
    /// period later; timeouts are removed. Ties fire in creation order.
    pub fn next_due(&mut self, until: Duration) -> Option<Fired> {
        let (&id, timer) = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(id, timer)| (timer.due, **id))?;

        let due = timer.due;
        let event = timer.event;
        let period = timer.period;
        match period {
            Some(period) => {
                if let Some(timer) = self.timers.get_mut(&id) {
                    timer.due = due + period;
                }
            }
            None => {
                self.timers.remove(&id);
            }
        }

        self.now = self.now.max(due);
        Some(Fired { id, event })
    }

    /// Move the clock forward to `until` once all due timers were drained
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Advance by `dt` and collect everything that fired.
    ///
    /// Only suitable when nothing reacts to the fired timers by scheduling
    /// new ones; dispatching callers drain with [`Scheduler::next_due`].
    pub fn advance(&mut self, dt: Duration) -> Vec<Fired> {
        let until = self.now + dt;
        let mut fired = Vec::new();
        while let Some(timer) = self.next_due(until) {
            fired.push(timer);
        }
        self.advance_to(until);
        fired
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.set_timeout(ms(600), TimerEvent::PanelSettle);

        assert!(scheduler.advance(ms(599)).is_empty());
        let fired = scheduler.advance(ms(1));
        assert_eq!(fired, vec![Fired { id, event: TimerEvent::PanelSettle }]);
        assert!(scheduler.advance(ms(5000)).is_empty());
        assert!(!scheduler.is_pending(id));
    }

    #[test]
    fn test_interval_catches_up() {
        let mut scheduler = Scheduler::new();
        scheduler.set_interval(ms(30), TimerEvent::RevealTick { target: 0 });

        let fired = scheduler.advance(ms(95));
        assert_eq!(fired.len(), 3);
        assert_eq!(scheduler.now(), ms(95));
        assert_eq!(scheduler.advance(ms(25)).len(), 1);
    }

    #[test]
    fn test_cleared_timer_never_fires() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.set_timeout(ms(10), TimerEvent::AutoClose);
        let b = scheduler.set_interval(ms(10), TimerEvent::PhraseRotate);

        assert!(scheduler.clear(a));
        assert!(!scheduler.clear(a));
        scheduler.clear_all([b]);
        assert!(scheduler.advance(ms(100)).is_empty());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_ties_fire_in_creation_order() {
        let mut scheduler = Scheduler::new();
        let first = scheduler.set_timeout(ms(50), TimerEvent::Host(1));
        let second = scheduler.set_timeout(ms(50), TimerEvent::Host(2));

        let ids: Vec<TimerId> = scheduler.advance(ms(50)).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_nested_scheduling_sees_due_time() {
        let mut scheduler = Scheduler::new();
        scheduler.set_timeout(ms(100), TimerEvent::Host(1));

        let until = ms(250);
        let mut seen = Vec::new();
        while let Some(fired) = scheduler.next_due(until) {
            seen.push((fired.event, scheduler.now()));
            if fired.event == TimerEvent::Host(1) {
                scheduler.set_timeout(ms(100), TimerEvent::Host(2));
            }
        }
        scheduler.advance_to(until);

        assert_eq!(seen, vec![(TimerEvent::Host(1), ms(100)), (TimerEvent::Host(2), ms(200))]);
        assert_eq!(scheduler.now(), until);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut scheduler = Scheduler::new();
        scheduler.set_interval(Duration::ZERO, TimerEvent::ElapsedTick);
        assert_eq!(scheduler.advance(ms(3)).len(), 3);
    }
}
