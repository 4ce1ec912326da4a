//! Terminal setup and the main event loop

use crate::ui::app_component::{ChatHost, ChatInterface};
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run `chat` full screen until it asks to quit, handing its actions to `host`
pub async fn run_app<H: ChatHost>(mut chat: ChatInterface, host: &mut H) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();
    let mut result = run_app_loop(&mut terminal, &mut chat, host, &mut event_handler).await;
    chat.teardown();
    for action in chat.take_outbound() {
        if let Err(e) = host.handle_action(action, &mut chat) {
            log::error!("Host failed during shutdown: {}", e);
            result = result.and(Err(e));
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend, H: ChatHost>(
    terminal: &mut Terminal<B>,
    chat: &mut ChatInterface,
    host: &mut H,
    event_handler: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let theme = chat.theme();
            chat.render(f, f.area(), &theme);
        })?;

        let event = event_handler.next_event().await?;
        if let EventType::Resize(w, h) = event {
            log::debug!("Terminal resized to {}x{}", w, h);
        }

        let mut actions = chat.handle_event(event);
        actions.extend(chat.advance(event_handler.take_elapsed()));
        for action in actions {
            host.handle_action(action, chat)?;
        }

        if chat.should_quit() {
            return Ok(());
        }
    }
}
