//! Servers API endpoints.

use crate::api::require_id;
use crate::client::CoolifyClient;
use crate::error::CoolifyResult;
use coolify_core::{ServerDomain, ServerInfo, ServerResources, ValidationResponse};

/// Servers API for inspecting and validating servers.
pub struct ServersApi<'a> {
    client: &'a CoolifyClient,
}

impl<'a> ServersApi<'a> {
    pub(crate) fn new(client: &'a CoolifyClient) -> Self {
        Self { client }
    }

    /// List all servers.
    pub async fn list(&self) -> CoolifyResult<Vec<ServerInfo>> {
        self.client.http.get("/servers").await
    }

    /// Get a specific server.
    pub async fn get(&self, uuid: &str) -> CoolifyResult<ServerInfo> {
        let uuid = require_id("uuid", uuid)?;
        self.client.http.get(&format!("/servers/{}", uuid)).await
    }

    /// Resources currently running on a server.
    pub async fn resources(&self, uuid: &str) -> CoolifyResult<ServerResources> {
        let uuid = require_id("uuid", uuid)?;
        self.client
            .http
            .get(&format!("/servers/{}/resources", uuid))
            .await
    }

    /// Domains served by a server.
    pub async fn domains(&self, uuid: &str) -> CoolifyResult<Vec<ServerDomain>> {
        let uuid = require_id("uuid", uuid)?;
        self.client
            .http
            .get(&format!("/servers/{}/domains", uuid))
            .await
    }

    /// Ask the platform to validate a server.
    pub async fn validate(&self, uuid: &str) -> CoolifyResult<ValidationResponse> {
        let uuid = require_id("uuid", uuid)?;
        self.client
            .http
            .get(&format!("/servers/{}/validate", uuid))
            .await
    }
}
