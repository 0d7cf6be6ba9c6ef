//! Form drafts and the validated parsing boundary between text input and wire types.
//!
//! Both the add-component form and the per-row editor keep their values as the
//! strings the user typed. Nothing is sent to the backend until the draft
//! parses cleanly into a [`NewComponent`] or a [`ComponentPatch`].

use crate::entities::{Component, ComponentPatch, EntityId, NewComponent, Subsystem};

/// Validation failures reported before any request is made.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,

    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("Quantity must be a whole number of at least 1")]
    InvalidQuantity,

    #[error("{field} must be a whole-number id, got '{value}'")]
    InvalidId { field: &'static str, value: String },
}

/// Editable fields of a component, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentField {
    Name,
    Wbs,
    PartNumber,
    MassKg,
    CostUsd,
    Quantity,
    ParentId,
    Subsystem,
}

impl ComponentField {
    pub const ALL: [ComponentField; 8] = [
        ComponentField::Name,
        ComponentField::Wbs,
        ComponentField::PartNumber,
        ComponentField::MassKg,
        ComponentField::CostUsd,
        ComponentField::Quantity,
        ComponentField::ParentId,
        ComponentField::Subsystem,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ComponentField::Name => "Name",
            ComponentField::Wbs => "WBS",
            ComponentField::PartNumber => "Part Number",
            ComponentField::MassKg => "Mass (kg)",
            ComponentField::CostUsd => "Cost ($)",
            ComponentField::Quantity => "Quantity",
            ComponentField::ParentId => "Parent ID",
            ComponentField::Subsystem => "Subsystem",
        }
    }

    /// Selection fields are cycled rather than typed into.
    pub fn is_selection(self) -> bool {
        matches!(self, ComponentField::Subsystem)
    }

    pub fn next(self) -> Self {
        let index = Self::position(self);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::position(self);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(field: Self) -> usize {
        Self::ALL.iter().position(|f| *f == field).unwrap_or(0)
    }
}

/// Text-backed component record used by the add form and the row editor.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDraft {
    pub name: String,
    pub wbs: String,
    pub part_number: String,
    pub mass_kg: String,
    pub cost_usd: String,
    pub quantity: String,
    pub parent_id: String,
    pub subsystem_id: Option<EntityId>,
}

impl Default for ComponentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            wbs: String::new(),
            part_number: String::new(),
            mass_kg: "0".to_string(),
            cost_usd: "0".to_string(),
            quantity: "1".to_string(),
            parent_id: String::new(),
            subsystem_id: None,
        }
    }
}

impl ComponentDraft {
    /// Copy a component's current values into a scratch buffer.
    pub fn from_component(component: &Component) -> Self {
        Self {
            name: component.name.clone(),
            wbs: component.wbs.clone().unwrap_or_default(),
            part_number: component.part_number.clone().unwrap_or_default(),
            mass_kg: component.mass_kg.to_string(),
            cost_usd: component.cost_usd.to_string(),
            quantity: component.quantity.to_string(),
            parent_id: component.parent_id.map(|id| id.to_string()).unwrap_or_default(),
            subsystem_id: component.subsystem_id,
        }
    }

    /// Mutable text for a typed field; `None` for selection fields.
    pub fn text_mut(&mut self, field: ComponentField) -> Option<&mut String> {
        match field {
            ComponentField::Name => Some(&mut self.name),
            ComponentField::Wbs => Some(&mut self.wbs),
            ComponentField::PartNumber => Some(&mut self.part_number),
            ComponentField::MassKg => Some(&mut self.mass_kg),
            ComponentField::CostUsd => Some(&mut self.cost_usd),
            ComponentField::Quantity => Some(&mut self.quantity),
            ComponentField::ParentId => Some(&mut self.parent_id),
            ComponentField::Subsystem => None,
        }
    }

    /// Display value of a field. Subsystems are resolved by name from `subsystems`.
    pub fn display_value(&self, field: ComponentField, subsystems: &[Subsystem]) -> String {
        match field {
            ComponentField::Name => self.name.clone(),
            ComponentField::Wbs => self.wbs.clone(),
            ComponentField::PartNumber => self.part_number.clone(),
            ComponentField::MassKg => self.mass_kg.clone(),
            ComponentField::CostUsd => self.cost_usd.clone(),
            ComponentField::Quantity => self.quantity.clone(),
            ComponentField::ParentId => self.parent_id.clone(),
            ComponentField::Subsystem => match self.subsystem_id {
                None => "None".to_string(),
                Some(id) => subsystems
                    .iter()
                    .find(|s| s.id == id)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| format!("#{}", id)),
            },
        }
    }

    pub fn push_char(&mut self, field: ComponentField, c: char) {
        if let Some(text) = self.text_mut(field) {
            text.push(c);
        }
    }

    pub fn pop_char(&mut self, field: ComponentField) {
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    /// Step the subsystem selection through `None` followed by each subsystem.
    ///
    /// A selection that no longer exists in `subsystems` restarts from `None`.
    pub fn cycle_subsystem(&mut self, subsystems: &[Subsystem], forward: bool) {
        let options: Vec<Option<EntityId>> =
            std::iter::once(None).chain(subsystems.iter().map(|s| Some(s.id))).collect();
        let current = options.iter().position(|o| *o == self.subsystem_id).unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.subsystem_id = options[next];
    }

    /// Parse the draft into a create request body.
    pub fn to_new_component(&self) -> Result<NewComponent, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        Ok(NewComponent {
            name: name.to_string(),
            wbs: optional_text(&self.wbs),
            part_number: optional_text(&self.part_number),
            mass_kg: parse_amount("Mass (kg)", &self.mass_kg)?,
            cost_usd: parse_amount("Cost ($)", &self.cost_usd)?,
            quantity: parse_quantity(&self.quantity)?,
            parent_id: parse_optional_id("Parent ID", &self.parent_id)?,
            subsystem_id: self.subsystem_id,
        })
    }

    /// Parse the draft and diff it against `original`, keeping only changed fields.
    pub fn to_patch(&self, original: &Component) -> Result<ComponentPatch, FormError> {
        let parsed = self.to_new_component()?;

        Ok(ComponentPatch {
            name: changed(parsed.name, &original.name),
            wbs: changed(parsed.wbs, &original.wbs),
            part_number: changed(parsed.part_number, &original.part_number),
            mass_kg: changed(parsed.mass_kg, &original.mass_kg),
            cost_usd: changed(parsed.cost_usd, &original.cost_usd),
            quantity: changed(parsed.quantity, &original.quantity),
            parent_id: changed(parsed.parent_id, &original.parent_id),
            subsystem_id: changed(parsed.subsystem_id, &original.subsystem_id),
        })
    }
}

fn changed<T: PartialEq>(new: T, old: &T) -> Option<T> {
    if new == *old {
        None
    } else {
        Some(new)
    }
}

/// Empty or whitespace-only text becomes absent.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a non-negative finite quantity such as mass or cost.
pub fn parse_amount(field: &'static str, value: &str) -> Result<f64, FormError> {
    let trimmed = value.trim();
    let amount: f64 = trimmed.parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })?;
    if !amount.is_finite() {
        return Err(FormError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        });
    }
    if amount < 0.0 {
        return Err(FormError::Negative { field });
    }
    Ok(amount)
}

pub fn parse_quantity(value: &str) -> Result<u32, FormError> {
    match value.trim().parse::<u32>() {
        Ok(quantity) if quantity >= 1 => Ok(quantity),
        _ => Err(FormError::InvalidQuantity),
    }
}

/// Parse an optional reference id; empty input means no reference.
pub fn parse_optional_id(field: &'static str, value: &str) -> Result<Option<EntityId>, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<EntityId>().map(Some).map_err(|_| FormError::InvalidId {
        field,
        value: trimmed.to_string(),
    })
}
