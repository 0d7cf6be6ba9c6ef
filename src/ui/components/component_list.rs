use crate::constants::{
    EMPTY_COMPONENTS, ERROR_DELETE_COMPONENT, ERROR_FETCH_COMPONENTS, ERROR_UPDATE_COMPONENT, LOADING_PLACEHOLDER,
    TITLE_COMPONENT_LIST,
};
use crate::entities::{Component, EntityId, Subsystem};
use crate::forms::{ComponentDraft, ComponentField};
use crate::store::{Collection, RefreshSignal, ResourceKind};
use crate::ui::components::dialogs::common::{self, shortcuts};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component as UiComponent,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const COLUMN_WIDTHS: [Constraint; 9] = [
    Constraint::Length(5),
    Constraint::Min(12),
    Constraint::Length(8),
    Constraint::Length(10),
    Constraint::Length(10),
    Constraint::Length(10),
    Constraint::Length(5),
    Constraint::Length(9),
    Constraint::Length(12),
];

const HEADERS: [&str; 9] = [
    "ID",
    "Name",
    "WBS",
    "Part No.",
    "Mass (kg)",
    "Cost ($)",
    "Qty",
    "Parent ID",
    "Subsystem",
];

/// Scratch state of the row being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub id: EntityId,
    pub draft: ComponentDraft,
    pub field: ComponentField,
    pub error: Option<String>,
    pub saving: bool,
}

/// Table of every component with inline editing and deletion.
pub struct ComponentListComponent {
    components: Collection<Component>,
    subsystems: Vec<Subsystem>,
    pub selected_index: usize,
    table_state: TableState,
    loading: bool,
    error: Option<String>,
    editing: Option<EditSession>,
    focused: bool,
    seen_generation: Option<u64>,
}

impl Default for ComponentListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentListComponent {
    pub fn new() -> Self {
        Self {
            components: Collection::new(),
            subsystems: Vec::new(),
            selected_index: 0,
            table_state: TableState::default(),
            loading: false,
            error: None,
            editing: None,
            focused: true,
            seen_generation: None,
        }
    }

    /// Request a reload when the component generation moved since the last fetch.
    pub fn observe(&mut self, signal: &RefreshSignal) -> Action {
        let generation = signal.generation(ResourceKind::Components);
        if self.seen_generation == Some(generation) {
            return Action::None;
        }
        self.seen_generation = Some(generation);
        Action::LoadComponents
    }

    pub fn components(&self) -> &[Component] {
        self.components.items()
    }

    pub fn selected_component(&self) -> Option<&Component> {
        self.components.items().get(self.selected_index)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn update_table_state(&mut self) {
        if self.components.is_empty() {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            if self.selected_index >= self.components.len() {
                self.selected_index = self.components.len() - 1;
            }
            self.table_state.select(Some(self.selected_index));
        }
    }

    fn select_next(&mut self) {
        if !self.components.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.components.len();
            self.update_table_state();
        }
    }

    fn select_previous(&mut self) {
        if !self.components.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.components.len() - 1
            } else {
                self.selected_index - 1
            };
            self.update_table_state();
        }
    }

    /// Enter edit mode for the selected row
    fn start_edit(&mut self) {
        if let Some(component) = self.selected_component() {
            log::info!("Editing component {} ({})", component.name, component.id);
            self.editing = Some(EditSession {
                id: component.id,
                draft: ComponentDraft::from_component(component),
                field: ComponentField::Name,
                error: None,
                saving: false,
            });
        }
    }

    fn cancel_edit(&mut self) {
        if let Some(session) = self.editing.take() {
            log::info!("Discarded edits to component {}", session.id);
        }
    }

    fn save_edit(&mut self) -> Action {
        let Some(session) = self.editing.as_mut() else {
            return Action::None;
        };
        if session.saving {
            return Action::None;
        }
        let Some(original) = self.components.get(session.id) else {
            self.editing = None;
            return Action::None;
        };

        match session.draft.to_patch(original) {
            Ok(patch) if patch.is_empty() => {
                self.editing = None;
                Action::None
            }
            Ok(patch) => {
                session.saving = true;
                session.error = None;
                Action::UpdateComponent { id: session.id, patch }
            }
            Err(e) => {
                session.error = Some(e.to_string());
                Action::None
            }
        }
    }

    fn handle_edit_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.cancel_edit();
                return Action::None;
            }
            KeyCode::Enter => return self.save_edit(),
            _ => {}
        }

        let subsystems = &self.subsystems;
        let Some(session) = self.editing.as_mut() else {
            return Action::None;
        };

        match key.code {
            KeyCode::Tab => {
                session.field = session.field.next();
                Action::None
            }
            KeyCode::BackTab => {
                session.field = session.field.previous();
                Action::None
            }
            KeyCode::Left | KeyCode::Right if session.field.is_selection() => {
                session.draft.cycle_subsystem(subsystems, key.code == KeyCode::Right);
                Action::None
            }
            KeyCode::Backspace => {
                session.draft.pop_char(session.field);
                Action::None
            }
            KeyCode::Char(c) if !session.saving => {
                session.draft.push_char(session.field, c);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Apply a saved record, keeping the displayed subsystem when the response omits it.
    fn merge_updated(&mut self, mut updated: Component) {
        if updated.subsystem.is_none() {
            if let Some(previous) = self.components.get(updated.id) {
                if previous.subsystem_id == updated.subsystem_id {
                    updated.subsystem = previous.subsystem.clone();
                }
            }
        }
        if self.editing.as_ref().is_some_and(|session| session.id == updated.id) {
            self.editing = None;
        }
        self.components.merge(updated);
        self.update_table_state();
    }

    fn component_row(component: &Component) -> Row<'static> {
        Row::new(vec![
            Cell::from(component.id.to_string()),
            Cell::from(component.name.clone()),
            Cell::from(component.wbs.clone().unwrap_or_default()),
            Cell::from(component.part_number.clone().unwrap_or_default()),
            Cell::from(component.mass_kg.to_string()),
            Cell::from(component.cost_usd.to_string()),
            Cell::from(component.quantity.to_string()),
            Cell::from(component.parent_label()),
            Cell::from(component.subsystem_label()),
        ])
    }

    fn edit_row(&self, session: &EditSession) -> Row<'static> {
        let mut cells = vec![Cell::from(session.id.to_string())];
        for field in ComponentField::ALL {
            let mut value = session.draft.display_value(field, &self.subsystems);
            let style = if field == session.field {
                if !field.is_selection() {
                    value.push('█');
                }
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::Yellow)
            };
            cells.push(Cell::from(Span::styled(value, style)));
        }
        Row::new(cells)
    }

    fn render_message(f: &mut Frame, area: Rect, message: &str, style: Style) {
        let paragraph = Paragraph::new(Line::from(Span::styled(message, style)));
        f.render_widget(paragraph, area);
    }

    fn render_edit_footer(f: &mut Frame, area: Rect, session: &EditSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        if session.saving {
            Self::render_message(f, chunks[0], "Saving...", Style::default().fg(Color::Yellow));
        } else if let Some(error) = &session.error {
            f.render_widget(Paragraph::new(common::create_error_line(error)), chunks[0]);
        }

        let instructions = common::create_instructions_paragraph(&[
            shortcuts::TAB_FIELD,
            shortcuts::SEPARATOR,
            shortcuts::ARROWS_SUBSYSTEM,
            shortcuts::SEPARATOR,
            shortcuts::ENTER_SAVE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[1]);
    }
}

impl UiComponent for ComponentListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.editing.is_some() {
            return self.handle_edit_keys(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                self.start_edit();
                Action::None
            }
            KeyCode::Delete | KeyCode::Char('d') => match self.selected_component() {
                Some(component) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    kind: ResourceKind::Components,
                    id: component.id,
                    name: component.name.clone(),
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::LoadComponents => {
                self.loading = true;
                action
            }
            Action::ComponentsLoaded(components) => {
                log::info!("Loaded {} components", components.len());
                let selected_id = self.selected_component().map(|component| component.id);
                self.loading = false;
                self.error = None;
                self.components.replace(components);
                // Follow the selected component if it moved
                if let Some(index) = selected_id.and_then(|id| self.components.position(id)) {
                    self.selected_index = index;
                }
                if let Some(session) = &self.editing {
                    if self.components.get(session.id).is_none() {
                        self.editing = None;
                    }
                }
                self.update_table_state();
                Action::None
            }
            Action::ComponentsLoadFailed(e) => {
                log::warn!("Failed to fetch components: {}", e);
                self.loading = false;
                self.error = Some(ERROR_FETCH_COMPONENTS.to_string());
                Action::None
            }
            Action::ComponentUpdated(component) => {
                log::info!("Updated component {} ({})", component.name, component.id);
                self.merge_updated(component);
                Action::None
            }
            Action::ComponentUpdateFailed { id, error } => {
                log::warn!("Failed to update component {}: {}", id, error);
                let message = error.message_or(ERROR_UPDATE_COMPONENT);
                match self.editing.as_mut().filter(|session| session.id == id) {
                    Some(session) => {
                        session.saving = false;
                        session.error = Some(message);
                        // Diff further edits against what the backend holds now
                        Action::ReloadComponent(id)
                    }
                    // The editor was closed while the save was in flight
                    None => Action::ShowDialog(DialogType::Alert(message)),
                }
            }
            Action::ComponentReloaded(component) => {
                log::debug!("Reloaded component {}", component.id);
                self.components.merge(component);
                self.update_table_state();
                Action::None
            }
            Action::ComponentReloadFailed { id, error } => {
                log::warn!("Failed to reload component {}: {}", id, error);
                Action::None
            }
            Action::ComponentDeleted(id) => {
                if self.components.remove(id) {
                    log::info!("Removed component {} from the list", id);
                }
                if self.editing.as_ref().is_some_and(|session| session.id == id) {
                    self.editing = None;
                }
                self.update_table_state();
                Action::None
            }
            Action::ComponentDeleteFailed(e) => {
                log::warn!("Failed to delete component: {}", e);
                let message = match e.detail() {
                    Some(detail) => format!("{} {}", ERROR_DELETE_COMPONENT, detail),
                    None => ERROR_DELETE_COMPONENT.to_string(),
                };
                Action::ShowDialog(DialogType::Alert(message))
            }
            Action::SubsystemsLoaded(ref subsystems) => {
                self.subsystems = subsystems.clone();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = common::create_pane_block(TITLE_COMPONENT_LIST, self.focused);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if self.loading {
            Self::render_message(f, inner, LOADING_PLACEHOLDER, Style::default().fg(Color::Gray));
            return;
        }
        if let Some(error) = &self.error {
            f.render_widget(Paragraph::new(common::create_error_line(error)), inner);
            return;
        }
        if self.components.is_empty() {
            Self::render_message(f, inner, EMPTY_COMPONENTS, Style::default().fg(Color::Gray));
            return;
        }

        let (table_area, footer_area) = if self.editing.is_some() {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(2)])
                .split(inner);
            (chunks[0], Some(chunks[1]))
        } else {
            (inner, None)
        };

        let rows: Vec<Row> = self
            .components
            .items()
            .iter()
            .map(|component| match &self.editing {
                Some(session) if session.id == component.id => self.edit_row(session),
                _ => Self::component_row(component),
            })
            .collect();

        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        let mut table_state = self.table_state.clone();
        let highlight = if self.focused && self.editing.is_none() {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let table = Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(highlight);

        f.render_stateful_widget(table, table_area, &mut table_state);
        self.table_state = table_state;

        if let (Some(area), Some(session)) = (footer_area, &self.editing) {
            Self::render_edit_footer(f, area, session);
        }
    }
}
