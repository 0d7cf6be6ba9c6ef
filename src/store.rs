//! Client-side view state for inventory resources.
//!
//! Each view owns a [`Collection`] mirroring the last snapshot it fetched.
//! Views that depend on data changed elsewhere watch a [`RefreshSignal`],
//! which keeps one generation counter per [`ResourceKind`].

use crate::entities::{Component, EntityId, Subsystem};

/// The resource types managed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Components,
    Subsystems,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Components => "component",
            ResourceKind::Subsystems => "subsystem",
        }
    }
}

/// Generation counters used to tell dependent views to re-fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSignal {
    components: u64,
    subsystems: u64,
}

impl RefreshSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `kind` stale. Views holding an older generation must reload.
    pub fn invalidate(&mut self, kind: ResourceKind) {
        match kind {
            ResourceKind::Components => self.components += 1,
            ResourceKind::Subsystems => self.subsystems += 1,
        }
    }

    pub fn generation(&self, kind: ResourceKind) -> u64 {
        match kind {
            ResourceKind::Components => self.components,
            ResourceKind::Subsystems => self.subsystems,
        }
    }
}

/// Anything keyed by a backend id.
pub trait Identified {
    fn id(&self) -> EntityId;
}

impl Identified for Component {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Identified for Subsystem {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Ordered snapshot of one resource type.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot with a freshly fetched list.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Drop the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Overwrite the item with the same id in place, appending it if unknown.
    pub fn merge(&mut self, updated: T) {
        match self.items.iter_mut().find(|item| item.id() == updated.id()) {
            Some(slot) => *slot = updated,
            None => self.items.push(updated),
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn position(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
