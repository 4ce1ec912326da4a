//! Status line shown while a response is pending

use crate::animation::{Fired, Scheduler, StatusTicker, TimerEvent};
use crate::config::ThinkingConfig;
use crate::error::ChatResult;
use crate::ui::core::{Action, Component};
use crate::ui::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

const PULSE: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct ThinkingIndicator {
    ticker: StatusTicker,
    phrases: Vec<String>,
    pulse: usize,
}

impl ThinkingIndicator {
    pub fn new(config: &ThinkingConfig, rotate_every: Duration, elapsed_every: Duration) -> Self {
        Self::with_ticker(config, StatusTicker::new(rotate_every, elapsed_every))
    }

    /// Build around an existing ticker, e.g. one with a seeded generator
    pub fn with_ticker(config: &ThinkingConfig, mut ticker: StatusTicker) -> Self {
        ticker.set_report_completion(config.report_completion);
        Self {
            ticker,
            phrases: config.phrases.clone(),
            pulse: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.ticker.is_active()
    }

    pub fn phrase(&self) -> &str {
        self.ticker.active_phrase()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.ticker.elapsed_secs()
    }

    /// Start showing the indicator.
    ///
    /// A session still running is completed first and reported through the
    /// returned action.
    pub fn activate(&mut self, scheduler: &mut Scheduler) -> ChatResult<Action> {
        let previous = self.ticker.activate(self.phrases.clone(), scheduler)?;
        self.pulse = 0;
        Ok(Self::completion(previous))
    }

    /// Stop the indicator, reporting the elapsed time at most once
    pub fn deactivate(&mut self, scheduler: &mut Scheduler) -> Action {
        Self::completion(self.ticker.deactivate(scheduler))
    }

    pub fn on_timer(&mut self, fired: &Fired, scheduler: &Scheduler) -> bool {
        let changed = self.ticker.on_timer(fired, scheduler);
        if changed && fired.event == TimerEvent::PhraseRotate {
            self.pulse = (self.pulse + 1) % PULSE.len();
        }
        changed
    }

    fn completion(elapsed: Option<u64>) -> Action {
        match elapsed {
            Some(elapsed_secs) => Action::ThinkingComplete { elapsed_secs },
            None => Action::None,
        }
    }
}

impl Component for ThinkingIndicator {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        if !self.is_active() {
            return;
        }

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", PULSE[self.pulse]),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                self.phrase().to_string(),
                Style::default().fg(theme.assistant).add_modifier(Modifier::ITALIC),
            ),
            Span::styled(format!("  {}s", self.elapsed_secs()), Style::default().fg(theme.dim)),
        ]);
        f.render_widget(Paragraph::new(line), rect);
    }
}
