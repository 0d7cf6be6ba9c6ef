use serde::{Deserialize, Serialize};

use super::EntityId;

/// A named grouping category for components.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsystem {
    pub id: EntityId,
    pub name: String,
}

/// Denormalized subsystem embedded in component reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsystemRef {
    pub id: EntityId,
    pub name: String,
}

/// Body of `POST /subsystems`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewSubsystem {
    pub name: String,
}

impl From<Subsystem> for SubsystemRef {
    fn from(subsystem: Subsystem) -> Self {
        Self {
            id: subsystem.id,
            name: subsystem.name,
        }
    }
}
