//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application identity
pub const APP_NAME: &str = "satdb";
pub const APP_TITLE: &str = "Satellite Components Database";
pub const CONFIG_FILE_NAME: &str = "satdb.toml";
pub const LOG_FILE_NAME: &str = "satdb.log";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

// Pane titles
pub const TITLE_COMPONENT_LIST: &str = "Component List";
pub const TITLE_ADD_COMPONENT: &str = "Add New Component";
pub const TITLE_SUBSYSTEMS: &str = "Manage Subsystems";

// Placeholders
pub const LOADING_PLACEHOLDER: &str = "Loading...";
pub const EMPTY_COMPONENTS: &str = "No components found.";
pub const EMPTY_SUBSYSTEMS: &str = "No subsystems yet.";
pub const SUBSYSTEM_NAME_PLACEHOLDER: &str = "New Subsystem Name";

// Fallback error messages, shown when the server sends no detail
pub const ERROR_FETCH_COMPONENTS: &str = "Failed to fetch components.";
pub const ERROR_ADD_COMPONENT: &str = "Failed to add component.";
pub const ERROR_UPDATE_COMPONENT: &str = "Failed to update component.";
pub const ERROR_DELETE_COMPONENT: &str = "Failed to delete component.";
pub const ERROR_FETCH_SUBSYSTEMS: &str = "Failed to fetch subsystems";
pub const ERROR_ADD_SUBSYSTEM: &str = "Failed to add subsystem";
pub const ERROR_DELETE_SUBSYSTEM: &str = "Failed to delete subsystem";
pub const ERROR_SEED: &str = "Failed to seed example data.";

// Confirmation prompts
pub const CONFIRM_DELETE_COMPONENT: &str = "Are you sure you want to delete this component?";
pub const CONFIRM_DELETE_SUBSYSTEM: &str = "Delete subsystem?";

// Success messages
pub const SUCCESS_SEEDED: &str = "✅ Example data loaded";

// Button states
pub const BUTTON_ADD_COMPONENT: &str = "Add Component";
pub const BUTTON_ADDING: &str = "Adding...";

// CLI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

/// Entries kept in the in-memory log history
pub const MAX_LOG_ENTRIES: usize = 1000;

pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// UI timing constants
/// Minimum event loop tick in milliseconds
pub const TICK_RATE_MIN_MS: u64 = 10;
/// Maximum event loop tick in milliseconds
pub const TICK_RATE_MAX_MS: u64 = 1000;
/// Default event loop tick in milliseconds
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
