//! Dialog rendering helpers shared by the modal dialog and the panes

pub mod common;
pub mod scroll_behavior;
pub mod system_dialogs;
