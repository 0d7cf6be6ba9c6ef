use crate::api::InventoryApi;
use crate::constants::{APP_TITLE, ERROR_SEED, SUCCESS_SEEDED};
use crate::entities::NewSubsystem;
use crate::logger::Logger;
use crate::store::{RefreshSignal, ResourceKind};
use crate::ui::components::{
    AddComponentForm, ComponentListComponent, DialogComponent, StatusBar, SubsystemManager,
};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::{AppLayout, LayoutManager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Root view composing the component list, the add form and the subsystem
/// manager.
///
/// Owns the refresh signal that tells the views when to re-fetch, plus the
/// task manager every API call runs on.
pub struct AppComponent {
    // Component composition
    component_list: ComponentListComponent,
    add_form: AddComponentForm,
    subsystems: SubsystemManager,
    dialog: DialogComponent,
    status_bar: StatusBar,

    // Application state
    focus: Focus,
    refresh: RefreshSignal,
    last_layout: Option<AppLayout>,

    // Services
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: Arc<dyn InventoryApi>, base_url: impl Into<String>, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new(api);
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            component_list: ComponentListComponent::new(),
            add_form: AddComponentForm::new(),
            subsystems: SubsystemManager::new(),
            dialog,
            status_bar: StatusBar::new(base_url),
            focus: Focus::default(),
            refresh: RefreshSignal::new(),
            last_layout: None,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
        };
        app.set_focus(Focus::ComponentList);
        app
    }

    /// Kick off the health check and the initial loads
    pub fn start(&mut self) {
        self.logger.log("AppComponent: starting initial load".to_string());
        if self.logger.is_enabled() {
            match Logger::get_log_file_path() {
                Ok(path) => self.logger.log(format!("File logging to {}", path.display())),
                Err(e) => log::warn!("Log file path unavailable: {}", e),
            }
        }
        self.dispatch(Action::CheckHealth);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn component_list(&self) -> &ComponentListComponent {
        &self.component_list
    }

    pub fn add_form(&self) -> &AddComponentForm {
        &self.add_form
    }

    pub fn subsystem_manager(&self) -> &SubsystemManager {
        &self.subsystems
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub fn refresh_signal(&self) -> RefreshSignal {
        self.refresh
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.component_list.set_focused(focus == Focus::ComponentList);
        self.add_form.set_focused(focus == Focus::AddForm);
        self.subsystems.set_focused(focus == Focus::Subsystems);
    }

    /// Keys that apply to the whole application while the component list is focused
    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - reloading components".to_string());
                Action::Refresh(ResourceKind::Components)
            }
            KeyCode::Char('S') => {
                self.logger.log("Global key: 'S' - seeding example data".to_string());
                Action::SeedExamples
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            _ => return None,
        };
        Some(action)
    }

    /// Route a key press: dialog first, then the row editor, then the focused pane
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        // The row editor uses Tab for its own fields
        if self.focus == Focus::ComponentList && self.component_list.is_editing() {
            return self.component_list.handle_key_events(key);
        }

        match key.code {
            KeyCode::Tab => return Action::FocusNext,
            KeyCode::BackTab => return Action::FocusPrevious,
            _ => {}
        }

        match self.focus {
            Focus::ComponentList => match self.handle_global_key(key) {
                Some(action) => action,
                None => self.component_list.handle_key_events(key),
            },
            Focus::AddForm => match key.code {
                KeyCode::Esc => Action::SetFocus(Focus::ComponentList),
                _ => self.add_form.handle_key_events(key),
            },
            Focus::Subsystems => match key.code {
                KeyCode::Esc => Action::SetFocus(Focus::ComponentList),
                _ => self.subsystems.handle_key_events(key),
            },
        }
    }

    /// Clicking a pane focuses it; the wheel moves the list selection
    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog.is_visible() {
            return Action::None;
        }
        let Some(layout) = self.last_layout else {
            return Action::None;
        };
        let position = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let panes = [
                    (layout.component_list, Focus::ComponentList),
                    (layout.add_form, Focus::AddForm),
                    (layout.subsystems, Focus::Subsystems),
                ];
                panes
                    .iter()
                    .find(|(area, _)| area.contains(position))
                    .map(|(_, focus)| Action::SetFocus(*focus))
                    .unwrap_or(Action::None)
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp
                if layout.component_list.contains(position) && !self.component_list.is_editing() =>
            {
                let code = if mouse.kind == MouseEventKind::ScrollDown {
                    KeyCode::Down
                } else {
                    KeyCode::Up
                };
                self.component_list.handle_key_events(KeyEvent::from(code))
            }
            _ => Action::None,
        }
    }

    /// Run an action through every child component
    fn update_components(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.component_list.update(action);
        let action = self.add_form.update(action);
        self.subsystems.update(action)
    }

    /// Handle what the children passed through; API calls are spawned here
    fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::None => Action::None,
            // Raised by a view after the dialog already saw this pass; send it round again
            Action::ShowDialog(_) | Action::HideDialog => action,
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::FocusNext => {
                self.set_focus(self.focus.next());
                Action::None
            }
            Action::FocusPrevious => {
                self.set_focus(self.focus.previous());
                Action::None
            }
            Action::SetFocus(focus) => {
                self.set_focus(focus);
                Action::None
            }
            Action::Refresh(kind) => {
                self.logger.log(format!("Refresh: {} list invalidated", kind.label()));
                self.refresh.invalidate(kind);
                Action::None
            }

            Action::LoadComponents => {
                self.task_manager.spawn("Load components", |api| async move {
                    match api.list_components().await {
                        Ok(components) => Action::ComponentsLoaded(components),
                        Err(e) => Action::ComponentsLoadFailed(e),
                    }
                });
                Action::None
            }
            Action::LoadSubsystems => {
                self.task_manager.spawn("Load subsystems", |api| async move {
                    match api.list_subsystems().await {
                        Ok(subsystems) => Action::SubsystemsLoaded(subsystems),
                        Err(e) => Action::SubsystemsLoadFailed(e),
                    }
                });
                Action::None
            }
            Action::CreateComponent(component) => {
                self.logger.log(format!("API: creating component '{}'", component.name));
                self.task_manager.spawn("Create component", |api| async move {
                    match api.create_component(component).await {
                        Ok(created) => Action::ComponentCreated(created),
                        Err(e) => Action::ComponentCreateFailed(e),
                    }
                });
                Action::None
            }
            Action::UpdateComponent { id, patch } => {
                self.logger.log(format!("API: updating component {}", id));
                self.task_manager.spawn("Update component", move |api| async move {
                    match api.update_component(id, patch).await {
                        Ok(updated) => Action::ComponentUpdated(updated),
                        Err(error) => Action::ComponentUpdateFailed { id, error },
                    }
                });
                Action::None
            }
            Action::ReloadComponent(id) => {
                self.task_manager.spawn("Reload component", move |api| async move {
                    match api.get_component(id).await {
                        Ok(component) => Action::ComponentReloaded(component),
                        Err(error) => Action::ComponentReloadFailed { id, error },
                    }
                });
                Action::None
            }
            Action::DeleteComponent(id) => {
                self.logger.log(format!("API: deleting component {}", id));
                self.task_manager.spawn("Delete component", move |api| async move {
                    match api.delete_component(id).await {
                        Ok(()) => Action::ComponentDeleted(id),
                        Err(e) => Action::ComponentDeleteFailed(e),
                    }
                });
                Action::None
            }
            Action::CreateSubsystem(name) => {
                self.logger.log(format!("API: creating subsystem '{}'", name));
                self.task_manager.spawn("Create subsystem", |api| async move {
                    match api.create_subsystem(NewSubsystem { name }).await {
                        Ok(created) => Action::SubsystemCreated(created),
                        Err(e) => Action::SubsystemCreateFailed(e),
                    }
                });
                Action::None
            }
            Action::DeleteSubsystem(id) => {
                self.logger.log(format!("API: deleting subsystem {}", id));
                self.task_manager.spawn("Delete subsystem", move |api| async move {
                    match api.delete_subsystem(id).await {
                        Ok(()) => Action::SubsystemDeleted(id),
                        Err(e) => Action::SubsystemDeleteFailed(e),
                    }
                });
                Action::None
            }
            Action::SeedExamples => {
                self.task_manager.spawn("Seed example data", |api| async move {
                    match api.seed_examples().await {
                        Ok(components) => Action::SeedCompleted(components.len()),
                        Err(e) => Action::SeedFailed(e),
                    }
                });
                Action::None
            }
            Action::SeedCompleted(count) => {
                self.refresh.invalidate(ResourceKind::Components);
                self.refresh.invalidate(ResourceKind::Subsystems);
                Action::ShowDialog(DialogType::Info(format!("{} ({} components)", SUCCESS_SEEDED, count)))
            }
            Action::SeedFailed(e) => {
                log::warn!("Seeding failed: {}", e);
                Action::ShowDialog(DialogType::Alert(e.message_or(ERROR_SEED)))
            }
            Action::CheckHealth => {
                self.task_manager.spawn("Health check", |api| async move {
                    match api.health().await {
                        Ok(health) => Action::HealthChecked(health.is_ok()),
                        Err(e) => {
                            log::warn!("Health check failed: {}", e);
                            Action::HealthChecked(false)
                        }
                    }
                });
                Action::None
            }
            Action::HealthChecked(healthy) => {
                self.logger.log(format!("Backend health: {}", if healthy { "ok" } else { "unreachable" }));
                self.status_bar.set_health(healthy);
                Action::None
            }
            other => {
                log::debug!("Unhandled action {:?}", other);
                Action::None
            }
        }
    }

    /// Feed an action through the component tree until it is fully consumed,
    /// then let stale views request their reloads.
    pub fn dispatch(&mut self, action: Action) {
        let mut pending = vec![action];

        while let Some(mut action) = pending.pop() {
            while !matches!(action, Action::None) {
                let passed_through = self.update_components(action);
                action = self.handle_app_action(passed_through);
            }

            let list_reload = self.component_list.observe(&self.refresh);
            let subsystem_reload = self.subsystems.observe(&self.refresh);
            pending.extend(
                [list_reload, subsystem_reload]
                    .into_iter()
                    .filter(|action| !matches!(action, Action::None)),
            );
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            self.logger.log(format!("Background: received {}", describe(&action)));
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            log::debug!("Cleaned up {} finished tasks", completed_tasks.len());
        }

        actions
    }

    /// Wait for in-flight requests and apply their results until nothing is pending.
    pub async fn settle(&mut self) {
        loop {
            self.task_manager.wait_all().await;
            let actions = self.process_background_actions();
            if actions.is_empty() && self.task_manager.task_count() == 0 {
                break;
            }
            for action in actions {
                self.dispatch(action);
            }
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        match event_type {
            EventType::Key(key) => {
                let action = self.route_key(key);
                self.dispatch(action);
            }
            EventType::Mouse(mouse) => {
                let action = self.route_mouse(mouse);
                self.dispatch(action);
            }
            EventType::Tick => {
                for action in self.process_background_actions() {
                    self.dispatch(action);
                }
            }
            EventType::Resize(_, _) | EventType::Other => {}
        }
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            format!(" 🛰  {}", APP_TITLE),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, area);
    }
}

/// Short name of an action for the log history; payloads can be long
fn describe(action: &Action) -> String {
    let debug = format!("{:?}", action);
    match debug.find(['(', ' ', '{']) {
        Some(index) => debug[..index].to_string(),
        None => debug,
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.update_components(action);
        self.handle_app_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::app_layout(rect);
        self.last_layout = Some(layout);

        Self::render_title(f, layout.title);
        self.component_list.render(f, layout.component_list);
        self.add_form.render(f, layout.add_form);
        self.subsystems.render(f, layout.subsystems);
        self.status_bar.render(
            f,
            layout.status,
            self.focus,
            self.component_list.is_editing(),
            &self.task_manager.running(),
        );

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
