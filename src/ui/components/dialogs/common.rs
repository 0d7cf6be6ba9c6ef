use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Border color of the focused pane
pub const FOCUS_COLOR: Color = Color::Cyan;
/// Border color of unfocused panes
pub const IDLE_COLOR: Color = Color::Gray;

/// Creates a rounded pane block whose border reflects focus
pub fn create_pane_block(title: &str, focused: bool) -> Block<'static> {
    let color = if focused { FOCUS_COLOR } else { IDLE_COLOR };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(color))
}

/// Creates an input field with a visual cursor; shows `placeholder` when empty
pub fn create_input_paragraph<'a>(input_buffer: &'a str, placeholder: &'a str, focused: bool) -> Paragraph<'a> {
    let line = if input_buffer.is_empty() && !focused {
        Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
    } else if focused {
        Line::from(vec![Span::raw(input_buffer), Span::raw("█")])
    } else {
        Line::from(Span::raw(input_buffer))
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(if focused { Color::White } else { Color::Gray }));

    Paragraph::new(line).block(input_block)
}

/// One inline error line in red
pub fn create_error_line(message: &str) -> Line<'_> {
    Line::from(Span::styled(message, Style::default().fg(Color::Red)))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across panes
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const TAB_FIELD: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_SUBSYSTEM: InstructionShortcut = ("←/→", Color::Cyan, " Subsystem");
}
