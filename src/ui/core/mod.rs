//! Core UI functionality for satdb.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event handling, the action vocabulary, the component abstraction, and the
//! background task manager that runs API calls off the event loop.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and ticks
//! - [`task_manager`] - Background API calls reporting back as actions
//!
//! # Architecture
//!
//! Components turn key presses into [`Action`]s. Actions flow through every
//! component's `update`, then the root handles what remains, usually by
//! spawning an API call on the [`TaskManager`]. The call's outcome comes back
//! as another action on the next tick.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
