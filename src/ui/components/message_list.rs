//! Scrollable conversation view

use crate::chat::{ChatMessage, MessageStore, Role};
use crate::ui::core::{Action, Component, ScrollLock};
use crate::ui::theme::Theme;
use crate::utils::{format_time, is_old_message, strip_markdown};
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Lines moved per PageUp/PageDown
const SCROLL_STEP: usize = 5;

pub struct MessageList {
    store: MessageStore,
    scroll_lock: ScrollLock,
    /// Lines scrolled up from the bottom
    scroll_offset: usize,
    show_timestamps: bool,
    action_hints: String,
}

impl MessageList {
    pub fn new(store: MessageStore, scroll_lock: ScrollLock, show_timestamps: bool) -> Self {
        Self {
            store,
            scroll_lock,
            scroll_offset: 0,
            show_timestamps,
            action_hints: String::new(),
        }
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Mutable access for edits that should not move the view
    pub fn store_mut(&mut self) -> &mut MessageStore {
        &mut self.store
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Hint line drawn under the latest assistant message
    pub fn set_action_hints(&mut self, hints: String) {
        self.action_hints = hints;
    }

    /// Append a message and jump back to the bottom
    pub fn push(&mut self, message: ChatMessage) {
        self.store.add(message);
        self.scroll_offset = 0;
    }

    /// Returns false while the scroll lock is held
    pub fn scroll_up(&mut self, lines: usize) -> bool {
        if self.scroll_lock.is_locked() {
            return false;
        }
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
        true
    }

    pub fn scroll_down(&mut self, lines: usize) -> bool {
        if self.scroll_lock.is_locked() {
            return false;
        }
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        true
    }

    /// Every line of the conversation wrapped to `width`
    pub fn build_lines(&self, width: usize, theme: &Theme, now: &DateTime<Local>) -> Vec<Line<'static>> {
        let last_assistant = self.store.last_assistant().map(|m| m.id.as_str());
        let mut lines = Vec::new();

        for message in self.store.messages() {
            let (alignment, color, name) = match message.role {
                Role::User => (Alignment::Right, theme.user, "You"),
                Role::Assistant => (Alignment::Left, theme.assistant, "Assistant"),
                Role::System => (Alignment::Center, theme.system, "System"),
            };
            let mut style = Style::default().fg(color);
            if message.role == Role::System {
                style = style.add_modifier(Modifier::ITALIC);
            }
            if is_old_message(&message.timestamp, now) {
                style = style.add_modifier(Modifier::DIM);
            }

            let header = if self.show_timestamps {
                format!("{} · {}", name, format_time(&message.timestamp))
            } else {
                name.to_string()
            };
            lines.push(Line::from(Span::styled(header, style.add_modifier(Modifier::BOLD))).alignment(alignment));

            let content = match message.role {
                Role::Assistant => strip_markdown(&message.content),
                Role::User | Role::System => message.content.clone(),
            };
            for paragraph in content.lines() {
                for wrapped in wrap_text(paragraph, width) {
                    lines.push(Line::from(Span::styled(wrapped, style)).alignment(alignment));
                }
            }

            if message.role == Role::Assistant {
                if let Some(summary) = message.thought_summary() {
                    lines.push(Line::from(Span::styled(
                        summary,
                        Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
                    )));
                }
                if last_assistant == Some(message.id.as_str()) && !self.action_hints.is_empty() {
                    lines.push(Line::from(Span::styled(
                        self.action_hints.clone(),
                        Style::default().fg(theme.dim),
                    )));
                }
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

/// Greedy word wrap on character counts; words longer than `width` are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

impl Component for MessageList {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::PageUp => Action::ScrollUp,
            KeyCode::PageDown => Action::ScrollDown,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ScrollUp => {
                self.scroll_up(SCROLL_STEP);
                Action::None
            }
            Action::ScrollDown => {
                self.scroll_down(SCROLL_STEP);
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let lines = self.build_lines(rect.width as usize, theme, &Local::now());
        let height = rect.height as usize;
        let max_offset = lines.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);

        let end = lines.len() - self.scroll_offset;
        let start = end.saturating_sub(height);
        let visible: Vec<Line> = lines[start..end].to_vec();
        f.render_widget(Paragraph::new(visible), rect);
    }
}
