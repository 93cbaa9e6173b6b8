//! Projects API endpoints.

use crate::api::require_id;
use crate::client::CoolifyClient;
use crate::error::CoolifyResult;
use coolify_core::{
    CreateProjectRequest, Environment, MessageResponse, Project, UpdateProjectRequest,
    UuidResponse,
};

/// Projects API for managing projects and their environments.
pub struct ProjectsApi<'a> {
    client: &'a CoolifyClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a CoolifyClient) -> Self {
        Self { client }
    }

    /// List all projects.
    pub async fn list(&self) -> CoolifyResult<Vec<Project>> {
        self.client.http.get("/projects").await
    }

    /// Get a specific project.
    pub async fn get(&self, uuid: &str) -> CoolifyResult<Project> {
        let uuid = require_id("uuid", uuid)?;
        self.client.http.get(&format!("/projects/{}", uuid)).await
    }

    /// Create a new project.
    pub async fn create(&self, request: &CreateProjectRequest) -> CoolifyResult<UuidResponse> {
        self.client.http.post("/projects", request).await
    }

    /// Update a project. Only the fields set on `request` are sent.
    pub async fn update(
        &self,
        uuid: &str,
        request: &UpdateProjectRequest,
    ) -> CoolifyResult<Project> {
        let uuid = require_id("uuid", uuid)?;
        self.client
            .http
            .patch(&format!("/projects/{}", uuid), request)
            .await
    }

    /// Delete a project.
    pub async fn delete(&self, uuid: &str) -> CoolifyResult<MessageResponse> {
        let uuid = require_id("uuid", uuid)?;
        self.client.http.delete(&format!("/projects/{}", uuid)).await
    }

    /// Get one environment of a project, by name or UUID.
    pub async fn environment(
        &self,
        project_uuid: &str,
        environment_name_or_uuid: &str,
    ) -> CoolifyResult<Environment> {
        let project_uuid = require_id("project_uuid", project_uuid)?;
        let environment = require_id("environment_name_or_uuid", environment_name_or_uuid)?;
        self.client
            .http
            .get(&format!("/projects/{}/{}", project_uuid, environment))
            .await
    }
}
