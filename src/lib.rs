//! satdb - a terminal admin client for the Satellite Components Database
//!
//! This library provides an interactive terminal interface for managing a
//! hierarchical inventory of satellite hardware components and the subsystems
//! they are grouped into. All data lives in the REST backend; the client keeps
//! only the snapshot each view last fetched.
//!
//! # Modules
//!
//! * [`api`] - REST client and the [`api::InventoryApi`] seam used by the UI
//! * [`config`] - Application configuration management
//! * [`entities`] - Component and subsystem records plus their request bodies
//! * [`forms`] - Text drafts and validated parsing into request bodies
//! * [`store`] - Per-view collections and the refresh signal
//! * [`ui`] - Terminal user interface components and rendering

/// Inventory service client
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Inventory records and wire types
pub mod entities;

/// Form drafts and input validation
pub mod forms;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Client-side view state
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;
