//! Navigation rail.
//!
//! Collapsed, only icons are drawn; expanded, icons and labels. `Tab`
//! toggles between the two and `Ctrl+N`/`Ctrl+P` move the active item.

use crate::ui::core::{Action, Component};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub icon: &'static str,
}

impl NavItem {
    pub fn new(id: &str, label: &str, icon: &'static str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon,
        }
    }
}

/// The stock navigation entries
pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::new("new", "New Chat", "✚"),
        NavItem::new("chats", "Chat History", "☰"),
        NavItem::new("history", "Recent", "⟲"),
        NavItem::new("settings", "Settings", "⚙"),
        NavItem::new("account", "Account", "☺"),
        NavItem::new("logout", "Logout", "⏻"),
    ]
}

pub struct SidebarNav {
    items: Vec<NavItem>,
    active: usize,
    expanded: bool,
    list_state: ListState,
}

impl SidebarNav {
    pub fn new(items: Vec<NavItem>, expanded: bool) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            items,
            active: 0,
            expanded,
            list_state,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn active_item(&self) -> Option<&NavItem> {
        self.items.get(self.active)
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Make `id` the active item. Emits an action only when it changed.
    pub fn set_active(&mut self, id: &str) -> Action {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => self.activate(index),
            None => Action::None,
        }
    }

    fn activate(&mut self, index: usize) -> Action {
        if index == self.active || index >= self.items.len() {
            return Action::None;
        }
        self.active = index;
        self.list_state.select(Some(index));
        Action::NavItemSelected(self.items[index].id.clone())
    }

    fn step(&mut self, forward: bool) -> Action {
        let len = self.items.len();
        if len == 0 {
            return Action::None;
        }
        let next = if forward { (self.active + 1) % len } else { (self.active + len - 1) % len };
        self.activate(next)
    }
}

impl Component for SidebarNav {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match (key.code, key.modifiers.contains(KeyModifiers::CONTROL)) {
            (KeyCode::Tab, false) => {
                self.toggle_expanded();
                Action::None
            }
            (KeyCode::Char('n'), true) => self.step(true),
            (KeyCode::Char('p'), true) => self.step(false),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                let text = if self.expanded {
                    format!("{} {}", item.icon, item.label)
                } else {
                    item.icon.to_string()
                };
                ListItem::new(text).style(Style::default().fg(theme.text))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.border)),
            )
            .highlight_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD | Modifier::REVERSED));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
