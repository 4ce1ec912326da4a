use chatpane::chat::{ChatMessage, MessageStore, PanelMode};
use chatpane::config::Config;
use chatpane::demo::DemoHost;
use chatpane::ui::components::MessageActions;
use chatpane::ui::core::{Component, EventType};
use chatpane::ui::{ChatHost, ChatInterface};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::time::Duration;

fn chat_with(messages: Vec<ChatMessage>) -> ChatInterface {
    ChatInterface::new(&Config::default(), MessageStore::new(messages))
        .with_message_actions(MessageActions::with_copier(|_| true))
}

fn screen(chat: &mut ChatInterface, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let theme = chat.theme();
            chat.render(f, f.area(), &theme);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_renders_conversation_and_input() {
    let mut chat = chat_with(vec![
        ChatMessage::user("What is the weather?"),
        ChatMessage::assistant("Sunny all day.").with_thought_time(1),
    ]);
    let text = screen(&mut chat, 80, 20);

    assert!(text.contains("What is the weather?"));
    assert!(text.contains("Sunny all day."));
    assert!(text.contains("Thought for 1 second"));
    assert!(text.contains("Type a message..."));
}

#[test]
fn test_renders_open_panel_with_checkmark() {
    let mut chat = chat_with(Vec::new());
    chat.set_panel_content(DemoHost::sample_content(PanelMode::Images));
    chat.set_panel_open(true);
    chat.advance(Duration::from_millis(600));
    chat.handle_event(key(KeyCode::Char('2')));

    let text = screen(&mut chat, 100, 24);
    assert!(text.contains("Misty forest"));
    assert!(text.contains("✓"));
    assert!(text.contains("Select one of the images above to continue"));
}

#[test]
fn test_renders_empty_panel() {
    let mut chat = chat_with(Vec::new());
    chat.set_panel_open(true);
    chat.advance(Duration::from_millis(600));

    let text = screen(&mut chat, 100, 24);
    assert!(text.contains("Ready for Content"));
    assert!(text.contains("Your artifacts will appear here"));
}

#[test]
fn test_thinking_indicator_visible_while_loading() {
    let mut chat = chat_with(Vec::new());
    chat.set_loading(true);
    chat.advance(Duration::from_millis(1000));

    let text = screen(&mut chat, 80, 12);
    assert!(text.contains("1s"));
}

#[test]
fn test_demo_reply_flow() {
    let mut chat = chat_with(vec![DemoHost::welcome_message()]);
    let mut host = DemoHost::new();

    let mut outbound = Vec::new();
    for c in "hello".chars() {
        outbound.extend(chat.handle_event(key(KeyCode::Char(c))));
    }
    outbound.extend(chat.handle_event(key(KeyCode::Enter)));
    for action in outbound {
        host.handle_action(action, &mut chat).unwrap();
    }
    assert!(chat.is_loading());
    assert_eq!(chat.store().len(), 2);

    // poll the way the event loop does, one frame at a time
    for _ in 0..130 {
        for action in chat.advance(Duration::from_millis(16)) {
            host.handle_action(action, &mut chat).unwrap();
        }
    }
    assert!(!chat.is_loading());
    assert_eq!(host.replies_sent(), 1);
    let reply = chat.store().last_assistant().unwrap();
    assert_eq!(reply.thought_time, Some(2));
    assert!(chat.input().is_enabled());
}

#[test]
fn test_demo_cycles_panel_modes() {
    let mut chat = chat_with(Vec::new());
    let mut host = DemoHost::new();

    let ctrl_o = EventType::Key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL));
    for action in chat.handle_event(ctrl_o) {
        host.handle_action(action, &mut chat).unwrap();
    }
    assert!(chat.panel().is_open());
    assert_eq!(chat.panel().content().mode, PanelMode::Images);
}

#[test]
fn test_suggestion_sidebar_fills_input() {
    let mut chat = chat_with(Vec::new());
    let mut host = DemoHost::new();

    let ctrl_r = EventType::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
    chat.handle_event(ctrl_r);
    let text = screen(&mut chat, 100, 30);
    assert!(text.contains("Prompt Suggestions"));
    assert!(text.contains("Add Context"));

    for action in chat.handle_event(key(KeyCode::Char('4'))) {
        host.handle_action(action, &mut chat).unwrap();
    }
    assert!(!chat.suggestions().is_open());
    assert!(chat.input().value().starts_with("Make a short video ad"));

    let text = screen(&mut chat, 100, 30);
    assert!(!text.contains("Prompt Suggestions"));
}

#[test]
fn test_attachments_and_multiline_input_render() {
    let mut chat = chat_with(Vec::new());
    for c in "photo.jpg".chars() {
        chat.handle_event(key(KeyCode::Char(c)));
    }
    chat.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL)));
    for c in "first".chars() {
        chat.handle_event(key(KeyCode::Char(c)));
    }
    chat.handle_event(EventType::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT)));
    for c in "second".chars() {
        chat.handle_event(key(KeyCode::Char(c)));
    }

    let text = screen(&mut chat, 80, 16);
    assert!(text.contains("[1] photo.jpg (image)"));
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|line| line.contains("first")).unwrap();
    assert!(lines[first + 1].contains("second"));
}
