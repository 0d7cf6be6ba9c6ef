use crate::constants::{
    EMPTY_SUBSYSTEMS, ERROR_ADD_SUBSYSTEM, ERROR_DELETE_SUBSYSTEM, ERROR_FETCH_SUBSYSTEMS, LOADING_PLACEHOLDER,
    SUBSYSTEM_NAME_PLACEHOLDER, TITLE_SUBSYSTEMS,
};
use crate::entities::Subsystem;
use crate::store::{Collection, RefreshSignal, ResourceKind};
use crate::ui::components::dialogs::common;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

/// Lists subsystems and lets the user add or delete them.
///
/// Every successful change re-fetches the full list instead of patching it
/// locally.
pub struct SubsystemManager {
    subsystems: Collection<Subsystem>,
    pub input_buffer: String,
    pub selected_index: usize,
    list_state: ListState,
    loading: bool,
    error: Option<String>,
    focused: bool,
    seen_generation: Option<u64>,
}

impl Default for SubsystemManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SubsystemManager {
    pub fn new() -> Self {
        Self {
            subsystems: Collection::new(),
            input_buffer: String::new(),
            selected_index: 0,
            list_state: ListState::default(),
            loading: false,
            error: None,
            focused: false,
            seen_generation: None,
        }
    }

    /// Request a reload when the subsystem generation moved since the last fetch.
    pub fn observe(&mut self, signal: &RefreshSignal) -> Action {
        let generation = signal.generation(ResourceKind::Subsystems);
        if self.seen_generation == Some(generation) {
            return Action::None;
        }
        self.seen_generation = Some(generation);
        Action::LoadSubsystems
    }

    pub fn subsystems(&self) -> &[Subsystem] {
        self.subsystems.items()
    }

    pub fn selected_subsystem(&self) -> Option<&Subsystem> {
        self.subsystems.items().get(self.selected_index)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn update_list_state(&mut self) {
        if self.subsystems.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.subsystems.len() {
                self.selected_index = self.subsystems.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for SubsystemManager {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => {
                let name = self.input_buffer.trim();
                if name.is_empty() {
                    Action::None
                } else {
                    Action::CreateSubsystem(name.to_string())
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                Action::None
            }
            KeyCode::Up => {
                if !self.subsystems.is_empty() {
                    self.selected_index = self.selected_index.saturating_sub(1);
                    self.update_list_state();
                }
                Action::None
            }
            KeyCode::Down => {
                if !self.subsystems.is_empty() {
                    self.selected_index = (self.selected_index + 1).min(self.subsystems.len() - 1);
                    self.update_list_state();
                }
                Action::None
            }
            KeyCode::Delete => match self.selected_subsystem() {
                Some(subsystem) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    kind: ResourceKind::Subsystems,
                    id: subsystem.id,
                    name: subsystem.name.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::LoadSubsystems => {
                self.loading = true;
                action
            }
            Action::SubsystemsLoaded(ref subsystems) => {
                log::info!("Loaded {} subsystems", subsystems.len());
                self.loading = false;
                self.error = None;
                self.subsystems.replace(subsystems.clone());
                self.update_list_state();
                action
            }
            Action::SubsystemsLoadFailed(e) => {
                log::warn!("Failed to fetch subsystems: {}", e);
                self.loading = false;
                self.error = Some(e.message_or(ERROR_FETCH_SUBSYSTEMS));
                Action::None
            }
            Action::SubsystemCreated(subsystem) => {
                log::info!("Created subsystem {} ({})", subsystem.name, subsystem.id);
                self.input_buffer.clear();
                self.error = None;
                Action::Refresh(ResourceKind::Subsystems)
            }
            Action::SubsystemCreateFailed(e) => {
                log::warn!("Failed to add subsystem: {}", e);
                self.error = Some(e.message_or(ERROR_ADD_SUBSYSTEM));
                Action::None
            }
            Action::SubsystemDeleted(id) => {
                log::info!("Deleted subsystem {}", id);
                Action::Refresh(ResourceKind::Subsystems)
            }
            Action::SubsystemDeleteFailed(e) => {
                log::warn!("Failed to delete subsystem: {}", e);
                self.error = Some(e.message_or(ERROR_DELETE_SUBSYSTEM));
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = common::create_pane_block(TITLE_SUBSYSTEMS, self.focused);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(1)])
            .split(inner);

        let input = common::create_input_paragraph(&self.input_buffer, SUBSYSTEM_NAME_PLACEHOLDER, self.focused);
        f.render_widget(input, chunks[0]);

        if let Some(error) = &self.error {
            f.render_widget(Paragraph::new(common::create_error_line(error)), chunks[1]);
        }

        let placeholder = if self.loading {
            Some(LOADING_PLACEHOLDER)
        } else if self.subsystems.is_empty() {
            Some(EMPTY_SUBSYSTEMS)
        } else {
            None
        };
        if let Some(text) = placeholder {
            f.render_widget(
                Paragraph::new(text).style(Style::default().fg(Color::Gray)),
                chunks[2],
            );
            return;
        }

        let items: Vec<ListItem> = self
            .subsystems
            .items()
            .iter()
            .map(|subsystem| ListItem::new(format!("{}  #{}", subsystem.name, subsystem.id)))
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let list = List::new(items).highlight_style(highlight);

        let mut list_state = self.list_state.clone();
        f.render_stateful_widget(list, chunks[2], &mut list_state);
        self.list_state = list_state;
    }
}
