use crate::api::ApiError;
use crate::entities::{Component, ComponentPatch, EntityId, NewComponent, Subsystem};
use crate::store::ResourceKind;

/// The pane that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    ComponentList,
    AddForm,
    Subsystems,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::ComponentList => Focus::AddForm,
            Focus::AddForm => Focus::Subsystems,
            Focus::Subsystems => Focus::ComponentList,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::ComponentList => Focus::Subsystems,
            Focus::AddForm => Focus::ComponentList,
            Focus::Subsystems => Focus::AddForm,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    FocusNext,
    FocusPrevious,
    SetFocus(Focus),

    // Loading
    LoadComponents,
    ComponentsLoaded(Vec<Component>),
    ComponentsLoadFailed(ApiError),
    LoadSubsystems,
    SubsystemsLoaded(Vec<Subsystem>),
    SubsystemsLoadFailed(ApiError),
    /// Mark a resource stale so the views showing it re-fetch
    Refresh(ResourceKind),

    // Component operations
    CreateComponent(NewComponent),
    ComponentCreated(Component),
    ComponentCreateFailed(ApiError),
    UpdateComponent {
        id: EntityId,
        patch: ComponentPatch,
    },
    ComponentUpdated(Component),
    ComponentUpdateFailed {
        id: EntityId,
        error: ApiError,
    },
    /// Re-read a single component without touching the rest of the list
    ReloadComponent(EntityId),
    ComponentReloaded(Component),
    ComponentReloadFailed {
        id: EntityId,
        error: ApiError,
    },
    DeleteComponent(EntityId),
    ComponentDeleted(EntityId),
    ComponentDeleteFailed(ApiError),

    // Subsystem operations
    CreateSubsystem(String),
    SubsystemCreated(Subsystem),
    SubsystemCreateFailed(ApiError),
    DeleteSubsystem(EntityId),
    SubsystemDeleted(EntityId),
    SubsystemDeleteFailed(ApiError),

    // Backend utilities
    SeedExamples,
    SeedCompleted(usize),
    SeedFailed(ApiError),
    CheckHealth,
    HealthChecked(bool),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    DeleteConfirmation {
        kind: ResourceKind,
        id: EntityId,
        name: String,
    },
    /// Blocking error message
    Alert(String),
    Info(String),
    Help,
    Logs,
}
