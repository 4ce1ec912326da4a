//! Slide-in artifact panel.
//!
//! Composes the open/close lifecycle, the typewriter and the selection
//! registry. All timers go through the container's [`Scheduler`]; fired
//! timers come back through [`ArtifactPanel::on_timer`].

use crate::animation::{Fired, PanelLifecycle, PanelState, Scheduler, SelectionRegistry, TimerEvent, Typewriter};
use crate::chat::{PanelContent, PanelMode, PanelOption};
use crate::config::TimingConfig;
use crate::constants::{
    PANEL_EMPTY_TEXT, PANEL_EMPTY_TITLE, PANEL_MAX_WIDTH, PANEL_SUBTEXT_IMAGES, PANEL_SUBTEXT_PROMPTS,
    PANEL_SUBTEXT_VIDEOS, SELECTED_CHECKMARK,
};
use crate::ui::components::common::{create_instructions_line, create_panel_block, shortcuts};
use crate::ui::core::{Action, Component, ScrollLock};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Reveal target id used in text mode
const TEXT_TARGET: &str = "text";

pub struct ArtifactPanel {
    lifecycle: PanelLifecycle,
    typewriter: Typewriter,
    selection: SelectionRegistry,
    content: PanelContent,
    is_open: bool,
    highlighted: usize,
}

impl ArtifactPanel {
    pub fn new(timing: &TimingConfig, scroll_lock: ScrollLock) -> Self {
        Self {
            lifecycle: PanelLifecycle::new(timing.open_close(), scroll_lock),
            typewriter: Typewriter::new(timing.typewriter_speed(), timing.prompt_start_delay(), timing.prompt_stagger()),
            selection: SelectionRegistry::new(timing.auto_close()),
            content: PanelContent::default(),
            is_open: false,
            highlighted: 0,
        }
    }

    pub fn state(&self) -> PanelState {
        self.lifecycle.state()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected_id()
    }

    pub fn has_pending_close(&self) -> bool {
        self.selection.has_pending_close()
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Text currently shown for a reveal target, cursor included
    pub fn reveal_display(&self, id: &str) -> Option<String> {
        self.typewriter.target(id).map(|target| target.display())
    }

    /// Feed the host's open flag.
    ///
    /// Closing from outside also drops a pending auto-close request.
    pub fn set_open(&mut self, is_open: bool, scheduler: &mut Scheduler) {
        self.is_open = is_open;
        if !is_open {
            self.selection.cancel_pending(scheduler);
        }
        if let Some(state) = self.lifecycle.set_open(is_open, scheduler) {
            self.on_state_entered(state, scheduler);
        }
    }

    /// Replace the panel content, restarting reveals whose source changed
    pub fn set_content(&mut self, content: PanelContent, scheduler: &mut Scheduler) {
        if content.mode != self.content.mode {
            log::debug!("Panel: mode {} -> {}", self.content.mode.label(), content.mode.label());
            self.highlighted = 0;
        }
        self.content = content;
        self.highlighted = self.highlighted.min(self.option_count().saturating_sub(1));
        self.sync_reveal(scheduler);
    }

    /// Select an option of the current mode by id.
    ///
    /// Returns the mode-specific selection action, or `Action::None` when the
    /// id is not offered in the current mode.
    pub fn select(&mut self, id: &str, scheduler: &mut Scheduler) -> Action {
        match self.content.mode {
            PanelMode::Images => match self.selection.select(id, &self.content.images, scheduler) {
                Some(option) => Action::ImageSelected {
                    id: id.to_string(),
                    option: option.clone(),
                },
                None => Action::None,
            },
            PanelMode::Videos => match self.selection.select(id, &self.content.videos, scheduler) {
                Some(option) => Action::VideoSelected {
                    id: id.to_string(),
                    option: option.clone(),
                },
                None => Action::None,
            },
            PanelMode::Prompts => match self.selection.select(id, &self.content.prompts, scheduler) {
                Some(option) => Action::PromptSelected {
                    id: id.to_string(),
                    option: option.clone(),
                },
                None => Action::None,
            },
            PanelMode::Empty | PanelMode::Text => {
                log::warn!("Panel: nothing to select in {} mode", self.content.mode.label());
                Action::None
            }
        }
    }

    /// Route a fired timer. Returns `Action::ClosePanel` when a selection's
    /// close request comes due.
    pub fn on_timer(&mut self, fired: &Fired, scheduler: &mut Scheduler) -> Action {
        match fired.event {
            TimerEvent::PanelSettle => {
                if let Some(state) = self.lifecycle.on_timer(fired) {
                    self.on_state_entered(state, scheduler);
                }
            }
            TimerEvent::RevealBase | TimerEvent::RevealStart { .. } | TimerEvent::RevealTick { .. } => {
                self.typewriter.on_timer(fired, scheduler);
            }
            TimerEvent::AutoClose => {
                if self.selection.on_timer(fired) {
                    return Action::ClosePanel;
                }
            }
            _ => {}
        }
        Action::None
    }

    /// Cancel every timer the panel owns and release the scroll lock
    pub fn teardown(&mut self, scheduler: &mut Scheduler) {
        self.lifecycle.teardown(scheduler);
        self.typewriter.clear(scheduler);
        self.selection.reset(scheduler);
    }

    fn on_state_entered(&mut self, state: PanelState, scheduler: &mut Scheduler) {
        match state {
            PanelState::Opening => {
                self.typewriter.clear(scheduler);
                self.sync_reveal(scheduler);
            }
            PanelState::Open | PanelState::Closing => self.sync_reveal(scheduler),
            PanelState::Closed => {
                self.selection.reset(scheduler);
                self.typewriter.clear(scheduler);
            }
        }
    }

    /// Start, keep or stop the typewriter to match the mode and panel state
    fn sync_reveal(&mut self, scheduler: &mut Scheduler) {
        let state = self.lifecycle.state();
        match self.content.mode {
            PanelMode::Text if state == PanelState::Open => {
                if !self.typewriter.matches([(TEXT_TARGET, self.content.text.as_str())]) {
                    self.typewriter.start_reveal(TEXT_TARGET, &self.content.text, scheduler);
                }
            }
            PanelMode::Prompts if state.is_visible() => {
                let sources = self.content.prompts.iter().map(|p| (p.id.as_str(), p.text.as_str()));
                if !self.typewriter.matches(sources.clone()) {
                    self.typewriter.start_staggered(sources, scheduler);
                }
            }
            _ if state == PanelState::Closing => self.typewriter.cancel(scheduler),
            _ => self.typewriter.clear(scheduler),
        }
    }

    fn option_count(&self) -> usize {
        match self.content.mode {
            PanelMode::Images => self.content.images.len(),
            PanelMode::Videos => self.content.videos.len(),
            PanelMode::Prompts => self.content.prompts.len(),
            PanelMode::Empty | PanelMode::Text => 0,
        }
    }

    fn option_id_at(&self, index: usize) -> Option<String> {
        self.content.option_ids().get(index).map(|id| (*id).to_string())
    }

    /// The chat underneath is dimmed only while the panel is opening or open
    pub fn backdrop_visible(&self) -> bool {
        self.lifecycle.state().is_visible()
    }

    /// Panel width for the current state inside `area`
    pub fn panel_width(&self, area: Rect) -> u16 {
        let full = area.width.min(PANEL_MAX_WIDTH);
        match self.lifecycle.state() {
            PanelState::Open => full,
            PanelState::Opening | PanelState::Closing => full / 2,
            PanelState::Closed if self.is_open => full / 2,
            PanelState::Closed => 0,
        }
    }

    fn option_lines<'a, T: PanelOption>(
        &self,
        options: &'a [T],
        details: impl Fn(&'a T) -> Vec<String>,
        theme: &Theme,
    ) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for (index, option) in options.iter().enumerate() {
            let selected = self.selection.is_selected(option.id());
            let mark = if selected { SELECTED_CHECKMARK } else { " " };
            let mut title_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
            if index == self.highlighted {
                title_style = title_style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(theme.selected)),
                Span::styled(format!("[{}] ", index + 1), Style::default().fg(theme.accent)),
                Span::styled(option.title(), title_style),
            ]));
            for detail in details(option) {
                lines.push(Line::from(Span::styled(format!("      {}", detail), Style::default().fg(theme.dim))));
            }
        }
        lines
    }

    fn prompt_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (index, prompt) in self.content.prompts.iter().enumerate() {
            let selected = self.selection.is_selected(&prompt.id);
            let mark = if selected { SELECTED_CHECKMARK } else { " " };
            let text = self.reveal_display(&prompt.id).unwrap_or_default();
            let mut style = Style::default().fg(theme.text);
            if index == self.highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(theme.selected)),
                Span::styled(format!("[{}] ", index + 1), Style::default().fg(theme.accent)),
                Span::styled(text, style),
            ]));
        }
        lines
    }

    fn body_lines(&self, theme: &Theme) -> Vec<Line<'_>> {
        let subtext = |text: &'static str| Line::from(Span::styled(text, Style::default().fg(theme.dim)));
        let mut lines = match self.content.mode {
            PanelMode::Empty => vec![
                Line::from(""),
                Line::from(Span::styled(
                    PANEL_EMPTY_TITLE,
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
                subtext(PANEL_EMPTY_TEXT).alignment(Alignment::Center),
            ],
            PanelMode::Text => vec![Line::from(Span::styled(
                self.reveal_display(TEXT_TARGET).unwrap_or_default(),
                Style::default().fg(theme.text),
            ))],
            PanelMode::Images => {
                let mut lines = self.option_lines(
                    &self.content.images,
                    |image| image.description.iter().cloned().collect(),
                    theme,
                );
                lines.push(Line::from(""));
                lines.push(subtext(PANEL_SUBTEXT_IMAGES));
                lines
            }
            PanelMode::Videos => {
                let mut lines = self.option_lines(
                    &self.content.videos,
                    |video| {
                        let mut details: Vec<String> = video.description.iter().cloned().collect();
                        if let Some(duration) = &video.duration {
                            details.push(format!("▶ {}", duration));
                        }
                        details
                    },
                    theme,
                );
                lines.push(Line::from(""));
                lines.push(subtext(PANEL_SUBTEXT_VIDEOS));
                lines
            }
            PanelMode::Prompts => {
                let mut lines = self.prompt_lines(theme);
                lines.push(Line::from(""));
                lines.push(subtext(PANEL_SUBTEXT_PROMPTS));
                lines
            }
        };

        if self.option_count() > 0 {
            lines.push(Line::from(""));
            lines.push(create_instructions_line(
                &[
                    shortcuts::ARROWS_MOVE,
                    shortcuts::SEPARATOR,
                    shortcuts::ENTER_SELECT,
                    shortcuts::SEPARATOR,
                    shortcuts::ESC_CLOSE,
                ],
                theme,
            ));
        }
        lines
    }
}

impl Component for ArtifactPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Keys only reach the panel's bindings while the host has it open
        if !self.lifecycle.escape_armed() {
            return Action::None;
        }

        let count = self.option_count();
        match key.code {
            KeyCode::Esc => Action::ClosePanel,
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.highlighted = self.highlighted.saturating_sub(1);
                Action::None
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                if self.highlighted + 1 < count {
                    self.highlighted += 1;
                }
                Action::None
            }
            KeyCode::Enter => self.option_id_at(self.highlighted).map_or(Action::None, Action::SelectOption),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match self.option_id_at(index) {
                    Some(id) => {
                        self.highlighted = index;
                        Action::SelectOption(id)
                    }
                    None => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let width = self.panel_width(rect);
        if width == 0 {
            return;
        }

        if self.backdrop_visible() {
            f.buffer_mut().set_style(rect, Style::default().add_modifier(Modifier::DIM));
        }

        let area = Rect::new(rect.right().saturating_sub(width), rect.y, width, rect.height);
        let title = format!(" Artifacts · {} ", self.content.mode.label());
        let paragraph = Paragraph::new(self.body_lines(theme))
            .block(create_panel_block(&title, theme))
            .style(Style::default().bg(theme.backdrop))
            .wrap(Wrap { trim: false });

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}
