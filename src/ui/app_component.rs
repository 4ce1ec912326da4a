use crate::animation::{Fired, PanelState, Scheduler, TimerEvent, TimerId};
use crate::chat::{ChatMessage, MessageStore, PanelContent, PromptSuggestion};
use crate::config::Config;
use crate::constants::{DIALOG_TITLE_DEBUG_LOGS, NAV_COLLAPSED_WIDTH, NAV_EXPANDED_WIDTH};
use crate::logger::LogBuffer;
use crate::ui::components::{
    common::{centered_rect, create_panel_block},
    sidebar_nav, ArtifactPanel, ChatInput, MessageActions, MessageList, PromptSuggestions, SidebarNav,
    ThinkingIndicator,
};
use crate::ui::core::{Action, Component, EventType, ScrollLock};
use crate::ui::theme::{Theme, ThemeMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Receives every action the chat interface hands outward.
///
/// Selections, sends, message actions, navigation, thinking completion and
/// host timers all arrive here. The host reacts by calling back into the
/// [`ChatInterface`]: adding messages, toggling loading, opening the panel.
pub trait ChatHost {
    fn handle_action(&mut self, action: Action, chat: &mut ChatInterface) -> anyhow::Result<()>;
}

/// Container composing the conversation, the input, the navigation rail, the
/// prompt suggestions sidebar and the artifact panel. Owns the timer scheduler every component schedules on.
pub struct ChatInterface {
    // Component composition
    scheduler: Scheduler,
    panel: ArtifactPanel,
    thinking: ThinkingIndicator,
    messages: MessageList,
    message_actions: MessageActions,
    input: ChatInput,
    nav: SidebarNav,
    suggestions: PromptSuggestions,

    theme: Theme,
    loading: bool,
    show_logs: bool,
    log_buffer: Option<LogBuffer>,
    should_quit: bool,
    /// Actions waiting to be handed to the host
    outbox: Vec<Action>,
}

impl ChatInterface {
    pub fn new(config: &Config, store: MessageStore) -> Self {
        let scroll_lock = ScrollLock::new();
        let timing = &config.timing;
        let mut chat = Self {
            scheduler: Scheduler::new(),
            panel: ArtifactPanel::new(timing, scroll_lock.clone()),
            thinking: ThinkingIndicator::new(&config.thinking, timing.phrase_rotate(), timing.elapsed_tick()),
            messages: MessageList::new(store, scroll_lock, config.ui.show_timestamps),
            message_actions: MessageActions::new(),
            input: ChatInput::new(config.ui.placeholder.clone(), config.ui.input_max_length),
            nav: SidebarNav::new(sidebar_nav::default_items(), config.ui.nav_expanded),
            suggestions: PromptSuggestions::default(),
            theme: Theme::for_mode(config.ui.theme),
            loading: false,
            show_logs: false,
            log_buffer: None,
            should_quit: false,
            outbox: Vec::new(),
        };
        chat.refresh_message_actions();
        chat
    }

    /// Replace the message actions, e.g. to use a different clipboard
    #[must_use]
    pub fn with_message_actions(mut self, actions: MessageActions) -> Self {
        self.message_actions = actions;
        self.refresh_message_actions();
        self
    }

    /// Replace the thinking indicator, e.g. one with a seeded generator
    #[must_use]
    pub fn with_thinking_indicator(mut self, thinking: ThinkingIndicator) -> Self {
        self.thinking = thinking;
        self
    }

    /// Attach the in-memory log buffer shown by the debug overlay
    #[must_use]
    pub fn with_log_buffer(mut self, buffer: LogBuffer) -> Self {
        self.log_buffer = Some(buffer);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }

    pub fn is_showing_logs(&self) -> bool {
        self.show_logs
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn panel(&self) -> &ArtifactPanel {
        &self.panel
    }

    pub fn thinking(&self) -> &ThinkingIndicator {
        &self.thinking
    }

    pub fn messages(&self) -> &MessageList {
        &self.messages
    }

    pub fn input(&self) -> &ChatInput {
        &self.input
    }

    pub fn nav(&self) -> &SidebarNav {
        &self.nav
    }

    pub fn suggestions(&self) -> &PromptSuggestions {
        &self.suggestions
    }

    pub fn store(&self) -> &MessageStore {
        self.messages.store()
    }

    /// Append a message and scroll to it
    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.refresh_message_actions();
    }

    /// Edit the store in place
    pub fn update_store<F: FnOnce(&mut MessageStore)>(&mut self, edit: F) {
        edit(self.messages.store_mut());
        self.refresh_message_actions();
    }

    /// Show or hide the thinking indicator; the input is disabled meanwhile
    pub fn set_loading(&mut self, loading: bool) {
        if loading == self.loading {
            return;
        }
        self.loading = loading;
        self.input.set_enabled(!loading);

        let action = if loading {
            match self.thinking.activate(&mut self.scheduler) {
                Ok(action) => action,
                Err(e) => {
                    log::error!("Thinking indicator: {}", e);
                    Action::None
                }
            }
        } else {
            self.thinking.deactivate(&mut self.scheduler)
        };
        self.emit(action);
    }

    /// Replace the input text, e.g. with a picked suggestion
    pub fn set_input_value(&mut self, text: &str) {
        self.input.set_value(text);
    }

    pub fn set_suggestions_open(&mut self, open: bool) {
        self.suggestions.set_open(open);
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<PromptSuggestion>) {
        self.suggestions.set_suggestions(suggestions);
    }

    /// Drive the panel's open flag
    pub fn set_panel_open(&mut self, is_open: bool) {
        self.panel.set_open(is_open, &mut self.scheduler);
    }

    pub fn set_panel_content(&mut self, content: PanelContent) {
        self.panel.set_content(content, &mut self.scheduler);
    }

    /// Schedule a host timer; it comes back as `Action::HostTimer(tag)`
    pub fn schedule_host_timer(&mut self, delay: Duration, tag: u64) -> TimerId {
        self.scheduler.set_timeout(delay, TimerEvent::Host(tag))
    }

    pub fn cancel_host_timer(&mut self, id: TimerId) -> bool {
        self.scheduler.clear(id)
    }

    /// Advance every timer by `dt` of wall-clock time
    pub fn advance(&mut self, dt: Duration) -> Vec<Action> {
        let until = self.scheduler.now() + dt;
        while let Some(fired) = self.scheduler.next_due(until) {
            self.dispatch_timer(fired);
        }
        self.scheduler.advance_to(until);
        self.take_outbound()
    }

    /// Route a terminal event. Returns the actions meant for the host.
    pub fn handle_event(&mut self, event: EventType) -> Vec<Action> {
        if let EventType::Key(key) = event {
            let action = self.route_key(key);
            self.dispatch(action);
        }
        self.take_outbound()
    }

    /// Actions waiting for the host
    pub fn take_outbound(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.outbox)
    }

    /// Cancel every timer and release the scroll lock.
    ///
    /// A thinking session still running reports its completion; collect it
    /// with [`ChatInterface::take_outbound`].
    pub fn teardown(&mut self) {
        self.panel.teardown(&mut self.scheduler);
        let completion = self.thinking.deactivate(&mut self.scheduler);
        self.emit(completion);
        self.scheduler.cancel_all();
        log::info!("Chat interface torn down");
    }

    fn emit(&mut self, action: Action) {
        if !action.is_none() {
            self.outbox.push(action);
        }
    }

    fn refresh_message_actions(&mut self) {
        self.message_actions.set_target(self.messages.store().last_assistant());
        self.messages.set_action_hints(self.message_actions.hints());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                log::info!("Global key: Ctrl+C - quitting");
                Action::Quit
            }
            KeyCode::Char('g') if ctrl => Action::ShowLogs(!self.show_logs),
            KeyCode::Char('o') if ctrl => Action::CyclePanelMode,
            KeyCode::Char('r') if ctrl => Action::ToggleSuggestions,
            KeyCode::Esc => {
                log::info!("Global key: Esc - quitting");
                Action::Quit
            }
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.show_logs {
            return match key.code {
                KeyCode::Esc => Action::ShowLogs(false),
                KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ShowLogs(false),
                _ => Action::None,
            };
        }

        // The open panel is modal and consumes Esc
        if self.panel.is_open() {
            return self.panel.handle_key_events(key);
        }
        if self.suggestions.is_open() {
            return self.suggestions.handle_key_events(key);
        }

        let global = self.handle_global_key(key);
        if !global.is_none() {
            return global;
        }

        let action = self.nav.handle_key_events(key);
        if !action.is_none() || key.code == KeyCode::Tab {
            return action;
        }
        let action = self.message_actions.handle_key_events(key);
        if !action.is_none() {
            self.messages.set_action_hints(self.message_actions.hints());
            return action;
        }
        let action = self.messages.handle_key_events(key);
        if !action.is_none() {
            return action;
        }
        self.input.handle_key_events(key)
    }

    fn dispatch(&mut self, action: Action) {
        // Process action through component hierarchy
        let action = self.messages.update(action);

        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::OpenPanel => self.set_panel_open(true),
            Action::ClosePanel => {
                self.set_panel_open(false);
                self.emit(Action::ClosePanel);
            }
            Action::SelectOption(id) => {
                let selected = self.panel.select(&id, &mut self.scheduler);
                self.emit(selected);
            }
            Action::ToggleTheme => {
                self.theme = Theme::for_mode(self.theme.mode.toggle());
                log::info!("Theme: {}", self.theme.mode.label());
                self.emit(Action::ToggleTheme);
            }
            Action::ShowLogs(show) => self.show_logs = show,
            Action::ToggleSuggestions => {
                let open = !self.suggestions.is_open();
                self.suggestions.set_open(open);
                log::debug!("Prompt suggestions {}", if open { "opened" } else { "closed" });
            }
            Action::CloseSuggestions => {
                self.suggestions.set_open(false);
                self.emit(Action::CloseSuggestions);
            }
            other => self.emit(other),
        }
    }

    fn dispatch_timer(&mut self, fired: Fired) {
        match fired.event {
            TimerEvent::PanelSettle
            | TimerEvent::RevealBase
            | TimerEvent::RevealStart { .. }
            | TimerEvent::RevealTick { .. }
            | TimerEvent::AutoClose => {
                let action = self.panel.on_timer(&fired, &mut self.scheduler);
                self.dispatch(action);
            }
            TimerEvent::PhraseRotate | TimerEvent::ElapsedTick => {
                self.thinking.on_timer(&fired, &self.scheduler);
            }
            TimerEvent::Host(tag) => self.emit(Action::HostTimer(tag)),
        }
    }

    fn render_logs(&self, f: &mut Frame, rect: Rect) {
        let area = centered_rect(80, 70, rect);
        let logs = self.log_buffer.as_ref().map(LogBuffer::get_logs).unwrap_or_default();
        let lines: Vec<Line> = if logs.is_empty() {
            vec![Line::from("No log records yet")]
        } else {
            logs.into_iter().map(Line::from).collect()
        };

        let paragraph = Paragraph::new(lines)
            .block(create_panel_block(DIALOG_TITLE_DEBUG_LOGS, &self.theme))
            .style(Style::default().fg(self.theme.text).bg(self.theme.backdrop))
            .wrap(Wrap { trim: true });
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}

impl Component for ChatInterface {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dispatch(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, _theme: &Theme) {
        let theme = self.theme;
        let nav_width = if self.nav.is_expanded() { NAV_EXPANDED_WIDTH } else { NAV_COLLAPSED_WIDTH };
        let columns = Layout::horizontal([Constraint::Length(nav_width), Constraint::Min(0)]).split(rect);

        let thinking_height = u16::from(self.thinking.is_active());
        let rows = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(thinking_height),
            Constraint::Length(self.input.height()),
        ])
        .split(columns[1]);

        self.messages.set_action_hints(self.message_actions.hints());
        self.nav.render(f, columns[0], &theme);
        self.messages.render(f, rows[0], &theme);
        self.thinking.render(f, rows[1], &theme);
        self.input.render(f, rows[2], &theme);
        self.suggestions.render(f, columns[1], &theme);

        // Panel slides over the conversation
        if self.panel.state() != PanelState::Closed || self.panel.is_open() {
            self.panel.render(f, columns[1], &theme);
        }

        if self.show_logs {
            self.render_logs(f, rect);
        }
    }
}
