//! Tracks the option picked in the current panel session.

use super::scheduler::{Fired, Scheduler, TimerEvent, TimerId};
use crate::chat::options::PanelOption;
use crate::error::ChatError;
use std::time::Duration;

#[derive(Debug)]
pub struct SelectionRegistry {
    selected_id: Option<String>,
    pending_close: Option<TimerId>,
    auto_close: Duration,
}

impl SelectionRegistry {
    pub fn new(auto_close: Duration) -> Self {
        Self {
            selected_id: None,
            pending_close: None,
            auto_close,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    pub fn has_pending_close(&self) -> bool {
        self.pending_close.is_some()
    }

    /// Select `id` from `options`.
    ///
    /// Returns the matching option. An id missing from `options` changes
    /// nothing and returns `None`. A match replaces any earlier selection and
    /// re-arms the close request.
    pub fn select<'a, T: PanelOption>(&mut self, id: &str, options: &'a [T], scheduler: &mut Scheduler) -> Option<&'a T> {
        let Some(option) = options.iter().find(|option| option.id() == id) else {
            log::warn!("Selection: ignoring selection, {}", ChatError::UnknownOption(id.to_string()));
            return None;
        };

        self.selected_id = Some(id.to_string());
        self.cancel_pending(scheduler);
        self.pending_close = Some(scheduler.set_timeout(self.auto_close, TimerEvent::AutoClose));
        log::info!("Selection: selected '{}'", id);
        Some(option)
    }

    /// Returns true when `fired` is the pending close request
    pub fn on_timer(&mut self, fired: &Fired) -> bool {
        if fired.event == TimerEvent::AutoClose && self.pending_close == Some(fired.id) {
            self.pending_close = None;
            return true;
        }
        false
    }

    /// Drop the pending close request, if any
    pub fn cancel_pending(&mut self, scheduler: &mut Scheduler) {
        if let Some(pending) = self.pending_close.take() {
            scheduler.clear(pending);
        }
    }

    /// End the session: forget the selection and any pending close
    pub fn reset(&mut self, scheduler: &mut Scheduler) {
        self.cancel_pending(scheduler);
        self.selected_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::options::ImageOption;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn images() -> Vec<ImageOption> {
        ["img-1", "img-2", "img-3"]
            .iter()
            .map(|id| ImageOption {
                id: id.to_string(),
                image_url: format!("https://example.com/{id}.png"),
                title: id.to_uppercase(),
                description: None,
            })
            .collect()
    }

    fn close_requests(registry: &mut SelectionRegistry, scheduler: &mut Scheduler, dt: u64) -> usize {
        scheduler
            .advance(ms(dt))
            .iter()
            .filter(|fired| registry.on_timer(fired))
            .count()
    }

    #[test]
    fn test_select_marks_only_one() {
        let mut scheduler = Scheduler::new();
        let mut registry = SelectionRegistry::new(ms(800));
        let options = images();

        let picked = registry.select("img-2", &options, &mut scheduler).unwrap();
        assert_eq!(picked.id, "img-2");
        let marked: Vec<&str> = options
            .iter()
            .filter(|o| registry.is_selected(&o.id))
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(marked, vec!["img-2"]);

        assert_eq!(close_requests(&mut registry, &mut scheduler, 799), 0);
        assert_eq!(close_requests(&mut registry, &mut scheduler, 1), 1);
        assert!(!registry.has_pending_close());
    }

    #[test]
    fn test_unknown_id_changes_nothing() {
        let mut scheduler = Scheduler::new();
        let mut registry = SelectionRegistry::new(ms(800));
        let options = images();
        registry.select("img-1", &options, &mut scheduler);
        scheduler.advance(ms(100));

        assert!(registry.select("img-99", &options, &mut scheduler).is_none());
        assert_eq!(registry.selected_id(), Some("img-1"));
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(close_requests(&mut registry, &mut scheduler, 700), 1);
    }

    #[test]
    fn test_reselect_rearms_close() {
        let mut scheduler = Scheduler::new();
        let mut registry = SelectionRegistry::new(ms(800));
        let options = images();
        registry.select("img-1", &options, &mut scheduler);
        scheduler.advance(ms(500));
        registry.select("img-3", &options, &mut scheduler);

        assert_eq!(close_requests(&mut registry, &mut scheduler, 500), 0);
        assert_eq!(close_requests(&mut registry, &mut scheduler, 300), 1);
        assert_eq!(registry.selected_id(), Some("img-3"));
    }

    #[test]
    fn test_external_close_cancels_request() {
        let mut scheduler = Scheduler::new();
        let mut registry = SelectionRegistry::new(ms(800));
        registry.select("img-1", &images(), &mut scheduler);
        registry.cancel_pending(&mut scheduler);
        assert_eq!(close_requests(&mut registry, &mut scheduler, 2000), 0);
        assert_eq!(registry.selected_id(), Some("img-1"));

        registry.reset(&mut scheduler);
        assert_eq!(registry.selected_id(), None);
    }
}
