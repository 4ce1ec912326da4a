//! Message input with attachments.
//!
//! Enter sends; Shift+Enter (or Alt+Enter, for terminals that drop Shift)
//! starts a new line. `Ctrl+F` treats the typed text as file paths and
//! attaches the png/jpeg/jpg/pdf ones; `Alt+1`..`Alt+9` remove an attachment.
//! While disabled only the theme toggle (`Ctrl+T`) gets through.

use crate::chat::attachment::{parse_paths, Attachment};
use crate::constants::{INPUT_HEIGHT, INPUT_MAX_VISIBLE_LINES, INPUT_TITLE};
use crate::ui::components::common::create_input_paragraph;
use crate::ui::core::{Action, Component};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::path::PathBuf;

pub struct ChatInput {
    buffer: String,
    placeholder: String,
    /// 0 means unlimited
    max_length: usize,
    enabled: bool,
    attachments: Vec<Attachment>,
}

impl ChatInput {
    pub fn new(placeholder: impl Into<String>, max_length: usize) -> Self {
        Self {
            buffer: String::new(),
            placeholder: placeholder.into(),
            max_length,
            enabled: true,
            attachments: Vec::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Replace the text, cut to the maximum length
    pub fn set_value(&mut self, text: &str) {
        self.buffer = match self.max_length {
            0 => text.to_string(),
            max => text.chars().take(max).collect(),
        };
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled while a response is loading
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Attach the accepted files among `paths`.
    ///
    /// Returns `Action::FilesAttached` with the accepted paths, or
    /// `Action::None` when none of them is an accepted type.
    pub fn attach_paths(&mut self, paths: Vec<PathBuf>) -> Action {
        let total = paths.len();
        let accepted: Vec<Attachment> = paths.into_iter().filter_map(Attachment::from_path).collect();
        if accepted.len() < total {
            log::warn!("ChatInput: skipped {} unsupported file(s)", total - accepted.len());
        }
        if accepted.is_empty() {
            return Action::None;
        }

        let attached: Vec<PathBuf> = accepted.iter().map(|a| a.path.clone()).collect();
        self.attachments.extend(accepted);
        log::info!("ChatInput: attached {} file(s)", attached.len());
        Action::FilesAttached(attached)
    }

    /// Remove the attachment at `index`
    pub fn remove_attachment(&mut self, index: usize) -> Action {
        if index >= self.attachments.len() {
            return Action::None;
        }
        let removed = self.attachments.remove(index);
        Action::AttachmentRemoved(removed.path)
    }

    /// Rows needed to draw the input, attachment line included
    pub fn height(&self) -> u16 {
        let lines = u16::try_from(self.buffer.split('\n').count()).unwrap_or(u16::MAX);
        let text_rows = lines.clamp(1, INPUT_MAX_VISIBLE_LINES);
        let attachment_row = u16::from(!self.attachments.is_empty());
        INPUT_HEIGHT - 1 + text_rows + attachment_row
    }

    fn insert(&mut self, c: char) {
        if self.max_length > 0 && self.buffer.chars().count() >= self.max_length {
            return;
        }
        self.buffer.push(c);
    }

    fn send(&mut self) -> Action {
        if !self.enabled || self.buffer.trim().is_empty() {
            return Action::None;
        }
        Action::SendMessage(std::mem::take(&mut self.buffer))
    }

    fn attach_from_buffer(&mut self) -> Action {
        let action = self.attach_paths(parse_paths(&self.buffer));
        if !action.is_none() {
            self.buffer.clear();
        }
        action
    }

    fn attachment_line(&self, theme: &Theme) -> Line<'_> {
        let mut spans = vec![Span::styled("📎 ", Style::default().fg(theme.accent))];
        for (index, attachment) in self.attachments.iter().enumerate() {
            spans.push(Span::styled(format!("[{}] ", index + 1), Style::default().fg(theme.accent)));
            spans.push(Span::styled(attachment.name(), Style::default().fg(theme.text)));
            spans.push(Span::styled(
                format!(" ({})  ", attachment.kind.label()),
                Style::default().fg(theme.dim),
            ));
        }
        spans.push(Span::styled(
            "Alt+n removes",
            Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
        ));
        Line::from(spans)
    }
}

impl Component for ChatInput {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('t') {
            return Action::ToggleTheme;
        }
        if !self.enabled {
            return Action::None;
        }

        if ctrl {
            return match key.code {
                KeyCode::Char('f') => self.attach_from_buffer(),
                _ => Action::None,
            };
        }

        let newline = key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);
        if key.code == KeyCode::Enter && newline {
            self.insert('\n');
            return Action::None;
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char(c @ '1'..='9') => self.remove_attachment(c as usize - '1' as usize),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Enter => self.send(),
            KeyCode::Backspace => {
                self.buffer.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.insert(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let input_area = if self.attachments.is_empty() {
            rect
        } else {
            let [attachments, input] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(rect);
            f.render_widget(Paragraph::new(self.attachment_line(theme)), attachments);
            input
        };

        // Keep the last lines in view once the text outgrows the box
        let visible = input_area.height.saturating_sub(2);
        let lines = u16::try_from(self.buffer.split('\n').count()).unwrap_or(u16::MAX);
        let paragraph = create_input_paragraph(&self.buffer, &self.placeholder, INPUT_TITLE, self.enabled, theme)
            .scroll((lines.saturating_sub(visible), 0));
        f.render_widget(paragraph, input_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut ChatInput, text: &str) {
        for c in text.chars() {
            input.handle_key_events(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn enter(input: &mut ChatInput) -> Action {
        input.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    #[test]
    fn test_send_clears_buffer() {
        let mut input = ChatInput::new("Type...", 0);
        type_str(&mut input, " hello ");
        assert_eq!(enter(&mut input), Action::SendMessage(" hello ".into()));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_blank_does_not_send() {
        let mut input = ChatInput::new("Type...", 0);
        type_str(&mut input, "   ");
        assert_eq!(enter(&mut input), Action::None);
        assert_eq!(input.value(), "   ");
    }

    #[test]
    fn test_disabled_input_ignores_keys() {
        let mut input = ChatInput::new("Type...", 0);
        type_str(&mut input, "hi");
        input.set_enabled(false);

        type_str(&mut input, "there");
        input.handle_key_events(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(enter(&mut input), Action::None);
        assert_eq!(input.value(), "hi");

        let toggle = input.handle_key_events(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert_eq!(toggle, Action::ToggleTheme);

        input.set_enabled(true);
        assert_eq!(enter(&mut input), Action::SendMessage("hi".into()));
    }

    #[test]
    fn test_max_length_and_backspace() {
        let mut input = ChatInput::new("Type...", 3);
        type_str(&mut input, "abcdef");
        assert_eq!(input.value(), "abc");
        input.handle_key_events(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(input.value(), "ab");

        input.set_value("xyzw");
        assert_eq!(input.value(), "xyz");
    }

    #[test]
    fn test_ctrl_t_toggles_theme() {
        let mut input = ChatInput::new("Type...", 0);
        let action = input.handle_key_events(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert_eq!(action, Action::ToggleTheme);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_shift_or_alt_enter_inserts_newline() {
        let mut input = ChatInput::new("Type...", 0);
        type_str(&mut input, "one");
        input.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));
        type_str(&mut input, "two");
        input.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
        type_str(&mut input, "three");
        assert_eq!(input.height(), 5);

        assert_eq!(enter(&mut input), Action::SendMessage("one\ntwo\nthree".into()));
        assert_eq!(input.height(), INPUT_HEIGHT);
    }

    #[test]
    fn test_ctrl_f_attaches_accepted_files() {
        let mut input = ChatInput::new("Type...", 0);
        type_str(&mut input, "shot.png notes.txt 'scan.PDF'");
        let action = input.handle_key_events(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL));

        assert_eq!(
            action,
            Action::FilesAttached(vec![PathBuf::from("shot.png"), PathBuf::from("scan.PDF")])
        );
        assert_eq!(input.attachments().len(), 2);
        assert_eq!(input.value(), "");
        assert_eq!(input.height(), INPUT_HEIGHT + 1);
    }

    #[test]
    fn test_unsupported_files_keep_the_text() {
        let mut input = ChatInput::new("Type...", 0);
        type_str(&mut input, "movie.mp4");
        let action = input.handle_key_events(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL));
        assert_eq!(action, Action::None);
        assert!(input.attachments().is_empty());
        assert_eq!(input.value(), "movie.mp4");
    }

    #[test]
    fn test_alt_digit_removes_attachment() {
        let mut input = ChatInput::new("Type...", 0);
        input.attach_paths(vec!["a.png".into(), "b.jpg".into(), "c.pdf".into()]);

        let action = input.handle_key_events(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT));
        assert_eq!(action, Action::AttachmentRemoved(PathBuf::from("b.jpg")));
        let names: Vec<String> = input.attachments().iter().map(Attachment::name).collect();
        assert_eq!(names, vec!["a.png", "c.pdf"]);

        assert_eq!(
            input.handle_key_events(KeyEvent::new(KeyCode::Char('9'), KeyModifiers::ALT)),
            Action::None
        );
    }
}
