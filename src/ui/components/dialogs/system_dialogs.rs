use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::store::ResourceKind;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
SATDB - Satellite Components Database
=====================================

PANES
-----
Tab         Focus next pane (list, add form, subsystems)
Shift+Tab   Focus previous pane
Esc         Back to the component list / cancel

COMPONENT LIST
--------------
j/k ↑↓      Select component
e / Enter   Edit selected row inline
d / Delete  Delete selected component (with confirmation)

ROW EDITOR
----------
Tab         Next field (Shift+Tab: previous)
←/→         Change subsystem (on the Subsystem field)
Enter       Save changes
Esc         Discard changes

ADD COMPONENT
-------------
↑↓          Move between fields
←/→         Change subsystem (on the Subsystem field)
Enter       Add component

SUBSYSTEMS
----------
Type        Enter a new subsystem name
Enter       Add subsystem
↑↓          Select subsystem
Delete      Delete selected subsystem (with confirmation)

GENERAL (from the component list)
---------------------------------
r           Reload the component list
S           Load example data into an empty database
G           Show logs
?           Toggle help
q           Quit application
Ctrl+C      Quit from anywhere
";

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, kind: ResourceKind, name: &str, prompt: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let title = format!("⚠ Delete {}", kind.label());
    let message = format!("{}\n\"{}\"", prompt, name);
    let instructions = "Press y/Enter to confirm, n/Esc to cancel";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::Red));

    let inner = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions_paragraph, chunks[1]);
}

/// Render an alert or info box; `color` distinguishes the two.
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let instructions_paragraph = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    render_scrolling_text(f, content_area, message, scroll_offset, scrollbar_state, true);
    f.render_widget(instructions_paragraph, instructions_area);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    render_panel(
        f,
        area,
        "📖 Help - Press 'Esc', '?' or 'q' to close",
        HELP_CONTENT,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: Option<&Logger>,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = logger.map(Logger::get_logs).unwrap_or_default();
    let logs_content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    render_panel(f, area, DIALOG_TITLE_LOGS, &logs_content, scroll_offset, scrollbar_state);
}

/// Large bordered overlay holding scrollable text
fn render_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
    let inner = block.inner(panel_area);

    f.render_widget(block, panel_area);
    render_scrolling_text(f, inner, content, scroll_offset, scrollbar_state, false);
}

/// Render the visible window of `content` with a scrollbar when it overflows
fn render_scrolling_text(
    f: &mut Frame,
    area: Rect,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
    wrap: bool,
) {
    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height as usize;
    let overflows = total_lines > visible_height;

    let text = if overflows {
        let max_scroll = total_lines.saturating_sub(visible_height);
        let clamped_offset = scroll_offset.min(max_scroll);

        *scrollbar_state = scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(clamped_offset);

        lines
            .iter()
            .skip(clamped_offset)
            .take(visible_height)
            .copied()
            .collect::<Vec<&str>>()
            .join("\n")
    } else {
        content.to_string()
    };

    let mut paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    if wrap {
        paragraph = paragraph.wrap(Wrap { trim: true });
    }
    f.render_widget(paragraph, area);

    if overflows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, area, scrollbar_state);
    }
}
