//! Wire models for the inventory service.
//!
//! These mirror the JSON bodies exchanged with the REST backend. Reads return
//! [`Component`] and [`Subsystem`]; writes send [`NewComponent`],
//! [`ComponentPatch`] and [`NewSubsystem`].

pub mod component;
pub mod subsystem;

pub use component::{Component, ComponentPatch, NewComponent};
pub use subsystem::{NewSubsystem, Subsystem, SubsystemRef};

/// Backend-assigned identifier shared by both resource types.
pub type EntityId = i64;
