//! Status bar component

use crate::ui::core::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Bottom line: backend connectivity, key hints and in-flight requests
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    pub base_url: String,
    /// `None` until the first health check returns
    pub healthy: Option<bool>,
}

impl StatusBar {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            healthy: None,
        }
    }

    pub fn set_health(&mut self, healthy: bool) {
        self.healthy = Some(healthy);
    }

    fn hints(focus: Focus, editing: bool) -> &'static str {
        if editing {
            return "Tab: next field • Enter: save • Esc: cancel";
        }
        match focus {
            Focus::ComponentList => "e: edit • d: delete • r: reload • S: seed • Tab: next pane • ?: help • q: quit",
            Focus::AddForm => "↑↓: field • ←/→: subsystem • Enter: add • Esc: back",
            Focus::Subsystems => "Type a name • Enter: add • Del: delete • Esc: back",
        }
    }

    /// Activity label: the request name while only one is in flight, else a count
    pub fn activity(running: &[String]) -> Option<String> {
        match running {
            [] => None,
            [only] => Some(format!("⟳ {}", only)),
            many => Some(format!("⟳ {} requests", many.len())),
        }
    }

    /// Render the status bar; `running` lists in-flight requests, oldest first
    pub fn render(&self, f: &mut Frame, area: Rect, focus: Focus, editing: bool, running: &[String]) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(36), Constraint::Min(10), Constraint::Length(22)])
            .split(area);

        let (dot, color) = match self.healthy {
            Some(true) => ("●", Color::Green),
            Some(false) => ("●", Color::Red),
            None => ("○", Color::Gray),
        };
        let connection = Line::from(vec![
            Span::styled(dot, Style::default().fg(color)),
            Span::styled(format!(" {}", self.base_url), Style::default().fg(Color::Gray)),
        ]);
        f.render_widget(Paragraph::new(connection), chunks[0]);

        let hints = Paragraph::new(Self::hints(focus, editing))
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(hints, chunks[1]);

        if let Some(activity) = Self::activity(running) {
            let busy = Paragraph::new(activity)
                .alignment(ratatui::layout::Alignment::Right)
                .style(Style::default().fg(Color::Yellow));
            f.render_widget(busy, chunks[2]);
        }
    }
}
