//! HTTP implementation of the inventory API.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use super::{extract_detail, ApiError, HealthStatus, InventoryApi};
use crate::entities::{Component, ComponentPatch, EntityId, NewComponent, NewSubsystem, Subsystem};

/// Thin JSON client exposing the generic REST verbs against a base URL.
#[derive(Clone, Debug)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        Self::decode(response).await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::PATCH, path).json(body)).await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("HTTP {} {}", method, url);
        self.client.request(method, url)
    }

    /// Send a request and turn non-2xx responses into [`ApiError::Status`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ApiError::Transport(format!("Cannot connect to {}", self.base_url))
            } else {
                ApiError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        log::warn!("HTTP {} from backend: {}", status.as_u16(), detail.as_deref().unwrap_or("<no detail>"));
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// [`InventoryApi`] backed by the REST service.
#[derive(Clone, Debug)]
pub struct HttpApi {
    rest: RestClient,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            rest: RestClient::new(base_url)?,
        })
    }
}

#[async_trait]
impl InventoryApi for HttpApi {
    async fn list_components(&self) -> Result<Vec<Component>, ApiError> {
        self.rest.get("/components").await
    }

    async fn get_component(&self, id: EntityId) -> Result<Component, ApiError> {
        self.rest.get(&format!("/components/{}", id)).await
    }

    async fn create_component(&self, component: NewComponent) -> Result<Component, ApiError> {
        self.rest.post("/components", &component).await
    }

    async fn update_component(&self, id: EntityId, patch: ComponentPatch) -> Result<Component, ApiError> {
        self.rest.patch(&format!("/components/{}", id), &patch).await
    }

    async fn delete_component(&self, id: EntityId) -> Result<(), ApiError> {
        self.rest.delete(&format!("/components/{}", id)).await
    }

    async fn seed_examples(&self) -> Result<Vec<Component>, ApiError> {
        self.rest.post("/components/seed", &serde_json::json!({})).await
    }

    async fn list_subsystems(&self) -> Result<Vec<Subsystem>, ApiError> {
        self.rest.get("/subsystems").await
    }

    async fn create_subsystem(&self, subsystem: NewSubsystem) -> Result<Subsystem, ApiError> {
        self.rest.post("/subsystems", &subsystem).await
    }

    async fn delete_subsystem(&self, id: EntityId) -> Result<(), ApiError> {
        self.rest.delete(&format!("/subsystems/{}", id)).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.rest.get("/healthz").await
    }
}
