//! Terminal user interface for satdb.
//!
//! The root [`app_component::AppComponent`] composes the component list, the
//! add-component form and the subsystem manager, and [`run_app`] drives it
//! from a crossterm event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
