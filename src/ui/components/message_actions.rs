//! Actions on the latest assistant message

use crate::chat::{ChatMessage, MessageAction, MessageActionType};
use crate::clipboard;
use crate::ui::core::{Action, Component};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Function used to place text on the clipboard
pub type Copier = fn(&str) -> bool;

/// Most recent assistant message: (id, content)
type Target = (String, String);

pub struct MessageActions {
    target: Option<Target>,
    copier: Copier,
    copied: Option<bool>,
}

impl MessageActions {
    pub fn new() -> Self {
        Self::with_copier(clipboard::copy_to_clipboard)
    }

    pub fn with_copier(copier: Copier) -> Self {
        Self {
            target: None,
            copier,
            copied: None,
        }
    }

    /// Point the actions at `message`, or disable them with `None`
    pub fn set_target(&mut self, message: Option<&ChatMessage>) {
        let target = message.map(|m| (m.id.clone(), m.content.clone()));
        if target.as_ref().map(|t| &t.0) != self.target.as_ref().map(|t| &t.0) {
            self.copied = None;
        }
        self.target = target;
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target.as_ref().map(|(id, _)| id.as_str())
    }

    /// Outcome of the last copy on the current target
    pub fn copied(&self) -> Option<bool> {
        self.copied
    }

    /// Short key legend for the message footer
    pub fn hints(&self) -> String {
        if self.target.is_none() {
            return String::new();
        }
        let copy_label = match self.copied {
            Some(true) => "copied",
            Some(false) => "copy failed",
            None => "copy",
        };
        format!("Alt+r regenerate · Alt+y {} · Alt+l love · Alt+i improve", copy_label)
    }

    /// Perform `kind` on the current target
    pub fn perform(&mut self, kind: MessageActionType) -> Action {
        let Some((id, content)) = &self.target else {
            return Action::None;
        };
        if kind == MessageActionType::Copy {
            let copied = (self.copier)(content);
            if !copied {
                log::warn!("MessageActions: could not copy message {}", id);
            }
            self.copied = Some(copied);
        }
        log::info!("MessageActions: {} on {}", kind.label(), id);
        Action::MessageAction(MessageAction::new(kind, id.clone()))
    }
}

impl Default for MessageActions {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MessageActions {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !key.modifiers.contains(KeyModifiers::ALT) {
            return Action::None;
        }
        let kind = match key.code {
            KeyCode::Char('r') => MessageActionType::Regenerate,
            KeyCode::Char('y') => MessageActionType::Copy,
            KeyCode::Char('l') => MessageActionType::Love,
            KeyCode::Char('i') => MessageActionType::Improve,
            _ => return Action::None,
        };
        self.perform(kind)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let hints = self.hints();
        if hints.is_empty() {
            return;
        }
        f.render_widget(Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(theme.dim)))), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    #[test]
    fn test_no_target_no_action() {
        let mut actions = MessageActions::with_copier(|_| true);
        assert_eq!(actions.handle_key_events(key('r')), Action::None);
        assert!(actions.hints().is_empty());
    }

    #[test]
    fn test_actions_carry_message_id() {
        let mut actions = MessageActions::with_copier(|_| true);
        let message = ChatMessage::assistant("answer");
        actions.set_target(Some(&message));

        match actions.handle_key_events(key('l')) {
            Action::MessageAction(action) => {
                assert_eq!(action.kind, MessageActionType::Love);
                assert_eq!(action.message_id, message.id);
            }
            other => panic!("unexpected {:?}", other),
        }
        // plain letters belong to the input
        assert_eq!(
            actions.handle_key_events(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)),
            Action::None
        );
    }

    #[test]
    fn test_copy_reports_outcome() {
        let mut actions = MessageActions::with_copier(|text| text == "answer");
        actions.set_target(Some(&ChatMessage::assistant("answer")));
        actions.handle_key_events(key('y'));
        assert_eq!(actions.copied(), Some(true));
        assert!(actions.hints().contains("copied"));

        actions.set_target(Some(&ChatMessage::assistant("other")));
        assert_eq!(actions.copied(), None);
        actions.handle_key_events(key('y'));
        assert_eq!(actions.copied(), Some(false));
    }
}
