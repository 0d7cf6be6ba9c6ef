//! Form for creating a component.
//!
//! The draft keeps raw text until submission. On success the form resets and
//! asks the root to invalidate the component list.

use crate::constants::{BUTTON_ADDING, BUTTON_ADD_COMPONENT, ERROR_ADD_COMPONENT, TITLE_ADD_COMPONENT};
use crate::entities::Subsystem;
use crate::forms::{ComponentDraft, ComponentField};
use crate::store::ResourceKind;
use crate::ui::components::dialogs::common;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LABEL_WIDTH: usize = 12;

pub struct AddComponentForm {
    pub draft: ComponentDraft,
    pub field: ComponentField,
    subsystems: Vec<Subsystem>,
    submitting: bool,
    error: Option<String>,
    focused: bool,
}

impl Default for AddComponentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AddComponentForm {
    pub fn new() -> Self {
        Self {
            draft: ComponentDraft::default(),
            field: ComponentField::Name,
            subsystems: Vec::new(),
            submitting: false,
            error: None,
            focused: false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn submit(&mut self) -> Action {
        if self.submitting {
            return Action::None;
        }

        match self.draft.to_new_component() {
            Ok(component) => {
                log::info!("Submitting new component '{}'", component.name);
                self.submitting = true;
                self.error = None;
                Action::CreateComponent(component)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Action::None
            }
        }
    }

    fn reset(&mut self) {
        self.draft = ComponentDraft::default();
        self.field = ComponentField::Name;
        self.submitting = false;
        self.error = None;
    }

    fn field_line(&self, field: ComponentField) -> Line<'static> {
        let active = self.focused && field == self.field;
        let mut value = self.draft.display_value(field, &self.subsystems);
        if field.is_selection() {
            value = format!("◂ {} ▸", value);
        } else if active {
            value.push('█');
        }

        let label_style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };

        Line::from(vec![
            Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style),
            Span::styled(value, value_style),
        ])
    }
}

impl Component for AddComponentForm {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Up => {
                self.field = self.field.previous();
                Action::None
            }
            KeyCode::Down => {
                self.field = self.field.next();
                Action::None
            }
            KeyCode::Left | KeyCode::Right if self.field.is_selection() => {
                self.draft.cycle_subsystem(&self.subsystems, key.code == KeyCode::Right);
                Action::None
            }
            KeyCode::Backspace if !self.submitting => {
                self.draft.pop_char(self.field);
                Action::None
            }
            KeyCode::Char(c) if !self.submitting => {
                self.draft.push_char(self.field, c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ComponentCreated(component) => {
                log::info!("Created component {} ({})", component.name, component.id);
                self.reset();
                Action::Refresh(ResourceKind::Components)
            }
            Action::ComponentCreateFailed(e) => {
                log::warn!("Failed to add component: {}", e);
                self.submitting = false;
                self.error = Some(e.message_or(ERROR_ADD_COMPONENT));
                Action::None
            }
            Action::SubsystemsLoaded(ref subsystems) => {
                if let Some(id) = self.draft.subsystem_id {
                    if !subsystems.iter().any(|s| s.id == id) {
                        self.draft.subsystem_id = None;
                    }
                }
                self.subsystems = subsystems.clone();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = common::create_pane_block(TITLE_ADD_COMPONENT, self.focused);

        let mut lines: Vec<Line> = ComponentField::ALL.iter().map(|field| self.field_line(*field)).collect();
        lines.push(match &self.error {
            Some(error) => common::create_error_line(error),
            None => Line::default(),
        });

        let (button, button_style) = if self.submitting {
            (BUTTON_ADDING, Style::default().fg(Color::Yellow))
        } else if self.focused {
            (
                BUTTON_ADD_COMPONENT,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            (BUTTON_ADD_COMPONENT, Style::default().fg(Color::Gray))
        };
        lines.push(Line::from(Span::styled(format!("[ {} ]", button), button_style)));

        f.render_widget(Paragraph::new(lines).block(block), rect);
    }
}
