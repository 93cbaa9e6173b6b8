// One-click service tools

use super::databases::{delete_with_options_schema, DeleteWithOptionsArgs};
use super::registry::*;
use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolSchema};
use coolify_core::{CreateServiceRequest, ServiceType};
use coolify_sdk::CoolifyClient;
use serde_json::json;
use std::sync::Arc;

pub struct ListServicesTool {
    client: Arc<CoolifyClient>,
}

impl ListServicesTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListServicesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_services".to_string(),
            description: "List all Coolify services".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(
        &self,
        _arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        json_result(&self.client.list_services().await?)
    }
}

pub struct GetServiceTool {
    client: Arc<CoolifyClient>,
}

impl GetServiceTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetServiceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_service".to_string(),
            description: "Get details about a specific Coolify service".to_string(),
            input_schema: json_schema_object(
                json!({ "uuid": json_schema_string("UUID of the service") }),
                vec!["uuid"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("get_service", arguments)?;
        json_result(&self.client.get_service(&args.uuid).await?)
    }
}

pub struct InspectServiceTool {
    client: Arc<CoolifyClient>,
}

impl InspectServiceTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for InspectServiceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "inspect_service".to_string(),
            description: "Inspect a specific Coolify service".to_string(),
            input_schema: json_schema_object(
                json!({ "uuid": json_schema_string("UUID of the service to inspect") }),
                vec!["uuid"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("inspect_service", arguments)?;
        json_result(&self.client.inspect_service(&args.uuid).await?)
    }
}

/// Create a service; `type` must be one of the known template identifiers
pub struct CreateServiceTool {
    client: Arc<CoolifyClient>,
}

impl CreateServiceTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreateServiceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_service".to_string(),
            description: "Create a new Coolify service".to_string(),
            input_schema: json_schema_object(
                json!({
                    "type": json_schema_enum(&ServiceType::identifiers(), "Service template to deploy"),
                    "project_uuid": json_schema_string("UUID of the project"),
                    "server_uuid": json_schema_string("UUID of the server"),
                    "name": json_schema_string("Name of the service"),
                    "description": json_schema_string("Description of the service"),
                    "environment_name": json_schema_string("Name of the target environment"),
                    "environment_uuid": json_schema_string("UUID of the target environment"),
                    "destination_uuid": json_schema_string("UUID of the destination"),
                    "instant_deploy": json_schema_boolean("Deploy immediately after creation")
                }),
                vec!["type", "project_uuid", "server_uuid"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let request: CreateServiceRequest = parse_arguments("create_service", arguments)?;
        json_result(&self.client.create_service(&request).await?)
    }
}

pub struct DeleteServiceTool {
    client: Arc<CoolifyClient>,
}

impl DeleteServiceTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeleteServiceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete_service".to_string(),
            description: "Delete a Coolify service".to_string(),
            input_schema: delete_with_options_schema("UUID of the service to delete"),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: DeleteWithOptionsArgs = parse_arguments("delete_service", arguments)?;
        let result = self
            .client
            .delete_service(&args.uuid, args.options.as_ref())
            .await?;
        json_result(&result)
    }
}
