use serde::{Deserialize, Serialize};

use super::{EntityId, SubsystemRef};

/// A satellite hardware part as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub wbs: Option<String>,
    #[serde(default)]
    pub part_number: Option<String>,
    pub mass_kg: f64,
    pub cost_usd: f64,
    pub quantity: u32,
    #[serde(default)]
    pub parent_id: Option<EntityId>,
    #[serde(default)]
    pub subsystem_id: Option<EntityId>,
    #[serde(default)]
    pub subsystem: Option<SubsystemRef>,
}

impl Component {
    /// Parent id for table display, `-` when the component is a root.
    pub fn parent_label(&self) -> String {
        self.parent_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
    }

    /// Subsystem name for table display.
    ///
    /// Falls back to the raw id when the backend did not embed the subsystem.
    pub fn subsystem_label(&self) -> String {
        match (&self.subsystem, self.subsystem_id) {
            (Some(subsystem), _) => subsystem.name.clone(),
            (None, Some(id)) => format!("#{}", id),
            (None, None) => "-".to_string(),
        }
    }
}

/// Body of `POST /components`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewComponent {
    pub name: String,
    pub wbs: Option<String>,
    pub part_number: Option<String>,
    pub mass_kg: f64,
    pub cost_usd: f64,
    pub quantity: u32,
    pub parent_id: Option<EntityId>,
    pub subsystem_id: Option<EntityId>,
}

/// Body of `PATCH /components/{id}`.
///
/// Fields left as `None` are omitted from the request. For the nullable
/// fields the inner option distinguishes "clear this value" (`Some(None)`,
/// sent as `null`) from "leave unchanged" (`None`).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ComponentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wbs: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_number: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<EntityId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsystem_id: Option<Option<EntityId>>,
}

impl ComponentPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the patch to a local copy, mirroring the backend's partial update.
    pub fn apply_to(&self, component: &mut Component) {
        if let Some(name) = &self.name {
            component.name = name.clone();
        }
        if let Some(wbs) = &self.wbs {
            component.wbs = wbs.clone();
        }
        if let Some(part_number) = &self.part_number {
            component.part_number = part_number.clone();
        }
        if let Some(mass_kg) = self.mass_kg {
            component.mass_kg = mass_kg;
        }
        if let Some(cost_usd) = self.cost_usd {
            component.cost_usd = cost_usd;
        }
        if let Some(quantity) = self.quantity {
            component.quantity = quantity;
        }
        if let Some(parent_id) = self.parent_id {
            component.parent_id = parent_id;
        }
        if let Some(subsystem_id) = self.subsystem_id {
            if component.subsystem_id != subsystem_id {
                component.subsystem = None;
            }
            component.subsystem_id = subsystem_id;
        }
    }
}
