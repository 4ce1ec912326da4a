use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a rounded, titled block in the theme's accent color
pub fn create_panel_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme.border))
}

/// Creates an input field block with a visual cursor, or a dimmed placeholder when empty.
///
/// Newlines in `input_buffer` start new lines; the cursor sits after the last one.
pub fn create_input_paragraph<'a>(
    input_buffer: &'a str,
    placeholder: &'a str,
    field_title: &'a str,
    enabled: bool,
    theme: &Theme,
) -> Paragraph<'a> {
    let cursor_char = "█";
    let lines: Vec<Line> = if input_buffer.is_empty() {
        vec![Line::from(vec![
            Span::styled(cursor_char, Style::default().fg(theme.cursor)),
            Span::styled(placeholder, Style::default().fg(theme.dim)),
        ])]
    } else {
        let mut lines: Vec<Line> = input_buffer
            .split('\n')
            .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.text))))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(cursor_char, Style::default().fg(theme.cursor)));
        }
        lines
    };

    let border_color = if enabled { theme.accent } else { theme.dim };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(field_title)
        .title_style(Style::default().fg(border_color))
        .border_style(Style::default().fg(border_color));

    Paragraph::new(lines).block(input_block)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a line of color-coded instruction shortcuts
pub fn create_instructions_line<'a>(instructions: &[InstructionShortcut], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for (key, color, desc) in instructions {
        spans.push(Span::styled(*key, Style::default().fg(*color).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(*desc, Style::default().fg(theme.dim)));
    }
    Line::from(spans)
}

/// Common instruction shortcuts
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const ENTER_SELECT: InstructionShortcut = ("Enter", Color::Green, " Select");
    pub const ARROWS_MOVE: InstructionShortcut = ("←/→", Color::Cyan, " Move");
    pub const UP_DOWN_MOVE: InstructionShortcut = ("↑/↓", Color::Cyan, " Move");
}

/// Rect of `percent_x` by `percent_y` centered inside `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 10);
    }
}
