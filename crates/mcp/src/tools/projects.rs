// Project and environment tools

use super::registry::*;
use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolSchema};
use coolify_core::{CreateProjectRequest, UpdateProjectRequest};
use coolify_sdk::CoolifyClient;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub struct ListProjectsTool {
    client: Arc<CoolifyClient>,
}

impl ListProjectsTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListProjectsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_projects".to_string(),
            description: "List all Coolify projects".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(
        &self,
        _arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        json_result(&self.client.list_projects().await?)
    }
}

pub struct GetProjectTool {
    client: Arc<CoolifyClient>,
}

impl GetProjectTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetProjectTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_project".to_string(),
            description: "Get details about a specific Coolify project".to_string(),
            input_schema: json_schema_object(
                json!({ "uuid": json_schema_string("UUID of the project") }),
                vec!["uuid"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("get_project", arguments)?;
        json_result(&self.client.get_project(&args.uuid).await?)
    }
}

pub struct CreateProjectTool {
    client: Arc<CoolifyClient>,
}

impl CreateProjectTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreateProjectTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_project".to_string(),
            description: "Create a new Coolify project".to_string(),
            input_schema: json_schema_object(
                json!({
                    "name": json_schema_string("Name of the project"),
                    "description": json_schema_string("Optional description")
                }),
                vec!["name"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let request: CreateProjectRequest = parse_arguments("create_project", arguments)?;
        json_result(&self.client.create_project(&request).await?)
    }
}

#[derive(Debug, Deserialize)]
struct UpdateProjectArgs {
    uuid: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

pub struct UpdateProjectTool {
    client: Arc<CoolifyClient>,
}

impl UpdateProjectTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for UpdateProjectTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update_project".to_string(),
            description: "Update an existing Coolify project".to_string(),
            input_schema: json_schema_object(
                json!({
                    "uuid": json_schema_string("UUID of the project to update"),
                    "name": json_schema_string("New project name"),
                    "description": json_schema_string("New project description")
                }),
                vec!["uuid", "name"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UpdateProjectArgs = parse_arguments("update_project", arguments)?;
        let request = UpdateProjectRequest {
            name: Some(args.name),
            description: args.description,
        };
        json_result(&self.client.update_project(&args.uuid, &request).await?)
    }
}

pub struct DeleteProjectTool {
    client: Arc<CoolifyClient>,
}

impl DeleteProjectTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeleteProjectTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete_project".to_string(),
            description: "Delete a Coolify project".to_string(),
            input_schema: json_schema_object(
                json!({ "uuid": json_schema_string("UUID of the project to delete") }),
                vec!["uuid"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("delete_project", arguments)?;
        json_result(&self.client.delete_project(&args.uuid).await?)
    }
}

#[derive(Debug, Deserialize)]
struct ProjectEnvironmentArgs {
    project_uuid: String,
    environment_name_or_uuid: String,
}

pub struct GetProjectEnvironmentTool {
    client: Arc<CoolifyClient>,
}

impl GetProjectEnvironmentTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetProjectEnvironmentTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_project_environment".to_string(),
            description: "Get environment details for a Coolify project".to_string(),
            input_schema: json_schema_object(
                json!({
                    "project_uuid": json_schema_string("UUID of the project"),
                    "environment_name_or_uuid": json_schema_string("Environment name or UUID")
                }),
                vec!["project_uuid", "environment_name_or_uuid"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: ProjectEnvironmentArgs = parse_arguments("get_project_environment", arguments)?;
        let environment = self
            .client
            .get_project_environment(&args.project_uuid, &args.environment_name_or_uuid)
            .await?;
        json_result(&environment)
    }
}

pub struct ListEnvironmentsTool {
    client: Arc<CoolifyClient>,
}

impl ListEnvironmentsTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListEnvironmentsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_environments".to_string(),
            description: "List all Coolify environments".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(
        &self,
        _arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        json_result(&self.client.list_environments().await?)
    }
}
