//! Modal dialog component.
//!
//! Covers the delete confirmation prompt, blocking alerts, informational
//! messages, and the help and logs overlays. While a dialog is open it receives
//! every key press before the panes beneath it.

use crate::constants::{CONFIRM_DELETE_COMPONENT, CONFIRM_DELETE_SUBSYSTEM};
use crate::logger::Logger;
use crate::store::ResourceKind;
use crate::ui::components::dialogs::{scroll_behavior, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Color, widgets::ScrollbarState, Frame};

/// Modal dialog that overlays the main layout.
///
/// Confirmations resolve into the matching delete action; every other dialog
/// only ever resolves into [`Action::HideDialog`].
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn confirm(&mut self) -> Action {
        let action = match &self.dialog_type {
            Some(DialogType::DeleteConfirmation { kind, id, name }) => {
                log::info!("Confirmed deletion of {} '{}' ({})", kind.label(), name, id);
                match kind {
                    ResourceKind::Components => Action::DeleteComponent(*id),
                    ResourceKind::Subsystems => Action::DeleteSubsystem(*id),
                }
            }
            _ => Action::None,
        };
        self.clear_dialog();
        action
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        scroll_behavior::reset(&mut self.scroll_offset, &mut self.scrollbar_state);
    }

    fn scroll_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                scroll_behavior::scroll_up(&mut self.scroll_offset, &mut self.scrollbar_state);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                scroll_behavior::scroll_down(&mut self.scroll_offset, &mut self.scrollbar_state);
                true
            }
            _ => false,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::DeleteConfirmation { .. }) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm(),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    log::info!("Deletion cancelled");
                    Action::HideDialog
                }
                _ => Action::None,
            },
            Some(DialogType::Alert(_)) | Some(DialogType::Info(_)) => {
                if self.scroll_keys(key) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            Some(DialogType::Help) | Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('G') => Action::HideDialog,
                _ => {
                    self.scroll_keys(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                scroll_behavior::reset(&mut self.scroll_offset, &mut self.scrollbar_state);
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::DeleteConfirmation { kind, name, .. } => {
                let prompt = match kind {
                    ResourceKind::Components => CONFIRM_DELETE_COMPONENT,
                    ResourceKind::Subsystems => CONFIRM_DELETE_SUBSYSTEM,
                };
                system_dialogs::render_delete_confirmation_dialog(f, rect, kind, &name, prompt);
            }
            DialogType::Alert(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                "❌ Error",
                Color::Red,
                &message,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Info(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                "ℹ Info",
                Color::Cyan,
                &message,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state)
            }
            DialogType::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                self.logger.as_ref(),
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
        }
    }
}
