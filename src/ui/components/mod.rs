//! Reusable UI components

pub mod add_component_form;
pub mod component_list;
pub mod dialog_component;
pub mod dialogs;
pub mod status_bar;
pub mod subsystem_manager;

// Component exports
pub use add_component_form::AddComponentForm;
pub use component_list::ComponentListComponent;
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
pub use subsystem_manager::SubsystemManager;
