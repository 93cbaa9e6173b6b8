//! Services API endpoints.

use crate::api::require_id;
use crate::client::CoolifyClient;
use crate::error::CoolifyResult;
use coolify_core::{
    CreateServiceRequest, CreateServiceResponse, DeleteOptions, MessageResponse, Service,
    ServiceInspection,
};

/// Services API for one-click template services.
pub struct ServicesApi<'a> {
    client: &'a CoolifyClient,
}

impl<'a> ServicesApi<'a> {
    pub(crate) fn new(client: &'a CoolifyClient) -> Self {
        Self { client }
    }

    /// List all services.
    pub async fn list(&self) -> CoolifyResult<Vec<Service>> {
        self.client.http.get("/services").await
    }

    /// Get a specific service.
    pub async fn get(&self, uuid: &str) -> CoolifyResult<Service> {
        let uuid = require_id("uuid", uuid)?;
        self.client.http.get(&format!("/services/{}", uuid)).await
    }

    /// Create a service from a template.
    pub async fn create(
        &self,
        request: &CreateServiceRequest,
    ) -> CoolifyResult<CreateServiceResponse> {
        require_id("project_uuid", &request.project_uuid)?;
        require_id("server_uuid", &request.server_uuid)?;
        self.client.http.post("/services", request).await
    }

    /// Delete a service, applying whichever cleanup flags are set.
    pub async fn delete(
        &self,
        uuid: &str,
        options: Option<&DeleteOptions>,
    ) -> CoolifyResult<MessageResponse> {
        let uuid = require_id("uuid", uuid)?;
        let path = format!("/services/{}", uuid);
        let path = match options {
            Some(options) => options.apply_to_path(&path),
            None => path,
        };
        self.client.http.delete(&path).await
    }

    /// Runtime state of a service.
    pub async fn inspect(&self, uuid: &str) -> CoolifyResult<ServiceInspection> {
        let uuid = require_id("uuid", uuid)?;
        self.client
            .http
            .get(&format!("/services/{}/inspect", uuid))
            .await
    }
}
