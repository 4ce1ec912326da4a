//! Prompt suggestions sidebar.
//!
//! A closable column on the right listing rewritten prompts. While open it is
//! modal: arrows (or `j`/`k`) move the highlight, `Enter` or a digit picks a
//! suggestion and `Esc` closes. Picking emits `Action::SuggestionSelected`
//! with the suggestion's full text; the host decides what to do with it.

use crate::chat::PromptSuggestion;
use crate::constants::SUGGESTIONS_WIDTH;
use crate::ui::components::common::{create_instructions_line, create_panel_block, shortcuts};
use crate::ui::core::{Action, Component};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

const TITLE: &str = " Prompt Suggestions ";

pub struct PromptSuggestions {
    suggestions: Vec<PromptSuggestion>,
    open: bool,
    highlighted: usize,
}

impl PromptSuggestions {
    pub fn new(suggestions: Vec<PromptSuggestion>) -> Self {
        Self {
            suggestions,
            open: false,
            highlighted: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opening always starts from the first suggestion
    pub fn set_open(&mut self, open: bool) {
        if open && !self.open {
            self.highlighted = 0;
        }
        self.open = open;
    }

    pub fn suggestions(&self) -> &[PromptSuggestion] {
        &self.suggestions
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<PromptSuggestion>) {
        self.suggestions = suggestions;
        self.highlighted = 0;
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Pick the suggestion at `index`
    pub fn select(&self, index: usize) -> Action {
        match self.suggestions.get(index) {
            Some(suggestion) => {
                log::debug!("PromptSuggestions: picked '{}'", suggestion.title);
                Action::SuggestionSelected(suggestion.full.clone())
            }
            None => Action::None,
        }
    }

    fn step(&mut self, forward: bool) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        self.highlighted = if forward {
            (self.highlighted + 1) % len
        } else {
            (self.highlighted + len - 1) % len
        };
    }

    fn entry_lines(&self, theme: &Theme) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        for (index, suggestion) in self.suggestions.iter().enumerate() {
            let highlighted = index == self.highlighted;
            let marker = if highlighted { "▶ " } else { "  " };
            let title_style = if highlighted {
                Style::default().fg(theme.selected).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(format!("{}. ", index + 1), Style::default().fg(theme.dim)),
                Span::styled(suggestion.title.as_str(), title_style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {}", suggestion.preview),
                Style::default().fg(theme.dim),
            )));
            lines.push(Line::default());
        }
        lines
    }
}

impl Default for PromptSuggestions {
    fn default() -> Self {
        Self::new(PromptSuggestion::defaults())
    }
}

impl Component for PromptSuggestions {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.open {
            return Action::None;
        }
        match key.code {
            KeyCode::Esc => Action::CloseSuggestions,
            KeyCode::Up | KeyCode::Char('k') => {
                self.step(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.step(true);
                Action::None
            }
            KeyCode::Enter => self.select(self.highlighted),
            KeyCode::Char(c @ '1'..='9') => self.select(c as usize - '1' as usize),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        if !self.open {
            return;
        }

        let width = SUGGESTIONS_WIDTH.min(rect.width);
        let area = Rect::new(rect.right() - width, rect.y, width, rect.height);
        f.render_widget(Clear, area);

        let block = create_panel_block(TITLE, theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [list_area, detail_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(6), Constraint::Length(1)]).areas(inner);

        f.render_widget(Paragraph::new(self.entry_lines(theme)), list_area);

        if let Some(suggestion) = self.suggestions.get(self.highlighted) {
            let detail = Paragraph::new(suggestion.full.as_str())
                .style(Style::default().fg(theme.text).add_modifier(Modifier::ITALIC))
                .wrap(Wrap { trim: true });
            f.render_widget(detail, detail_area);
        }

        let help = create_instructions_line(
            &[
                shortcuts::UP_DOWN_MOVE,
                shortcuts::SEPARATOR,
                shortcuts::ENTER_SELECT,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CLOSE,
            ],
            theme,
        );
        f.render_widget(Paragraph::new(help), help_area);
    }
}
