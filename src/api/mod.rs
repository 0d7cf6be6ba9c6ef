//! Inventory service API layer.
//!
//! This module defines the interface the UI talks to ([`InventoryApi`]), the
//! error type shared by every call, and the HTTP implementation in [`http`].

use async_trait::async_trait;
use serde::Deserialize;

use crate::entities::{Component, ComponentPatch, EntityId, NewComponent, NewSubsystem, Subsystem};

pub mod http;

pub use http::{HttpApi, RestClient};

/// Errors returned by inventory API calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided message for display, if the backend sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The server detail, or `fallback` when there is none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.detail().map(str::to_string).unwrap_or_else(|| fallback.to_string())
    }
}

/// Pull a displayable `detail` out of an error body.
///
/// Plain string details are returned verbatim. Validation errors arrive as a
/// list of objects with a `msg` field; those messages are joined with `"; "`.
pub fn extract_detail(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: serde_json::Value,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(detail) => Some(detail),
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|msg| msg.as_str()))
                .map(str::to_string)
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// Body of `GET /healthz`.
#[derive(Clone, Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Operations the admin client performs against the inventory service.
///
/// Every call is a single request: no retry, no caching.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    // Components
    async fn list_components(&self) -> Result<Vec<Component>, ApiError>;
    async fn get_component(&self, id: EntityId) -> Result<Component, ApiError>;
    async fn create_component(&self, component: NewComponent) -> Result<Component, ApiError>;
    async fn update_component(&self, id: EntityId, patch: ComponentPatch) -> Result<Component, ApiError>;
    async fn delete_component(&self, id: EntityId) -> Result<(), ApiError>;

    /// Populate the backend with demo data. Does nothing if components exist.
    async fn seed_examples(&self) -> Result<Vec<Component>, ApiError>;

    // Subsystems
    async fn list_subsystems(&self) -> Result<Vec<Subsystem>, ApiError>;
    async fn create_subsystem(&self, subsystem: NewSubsystem) -> Result<Subsystem, ApiError>;
    async fn delete_subsystem(&self, id: EntityId) -> Result<(), ApiError>;

    async fn health(&self) -> Result<HealthStatus, ApiError>;
}
