//! Applications API endpoints.

use crate::api::require_id;
use crate::client::CoolifyClient;
use crate::error::CoolifyResult;
use coolify_core::{
    Application, CreateApplicationRequest, Deployment, MessageResponse, UuidResponse,
};

/// Applications API. There is no update endpoint.
pub struct ApplicationsApi<'a> {
    client: &'a CoolifyClient,
}

impl<'a> ApplicationsApi<'a> {
    pub(crate) fn new(client: &'a CoolifyClient) -> Self {
        Self { client }
    }

    /// List all applications.
    pub async fn list(&self) -> CoolifyResult<Vec<Application>> {
        self.client.http.get("/applications").await
    }

    /// Get a specific application.
    pub async fn get(&self, uuid: &str) -> CoolifyResult<Application> {
        let uuid = require_id("uuid", uuid)?;
        self.client.http.get(&format!("/applications/{}", uuid)).await
    }

    /// Create a new application.
    pub async fn create(&self, request: &CreateApplicationRequest) -> CoolifyResult<UuidResponse> {
        self.client.http.post("/applications", request).await
    }

    /// Delete an application.
    pub async fn delete(&self, uuid: &str) -> CoolifyResult<MessageResponse> {
        let uuid = require_id("uuid", uuid)?;
        self.client
            .http
            .delete(&format!("/applications/{}", uuid))
            .await
    }

    /// Queue a deployment.
    pub async fn deploy(&self, uuid: &str) -> CoolifyResult<Deployment> {
        let uuid = require_id("uuid", uuid)?;
        self.client
            .http
            .post_empty(&format!("/applications/{}/deploy", uuid))
            .await
    }
}
