// Application and resource tools

use super::registry::*;
use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolSchema};
use coolify_core::CreateApplicationRequest;
use coolify_sdk::CoolifyClient;
use serde_json::json;
use std::sync::Arc;

pub struct ListApplicationsTool {
    client: Arc<CoolifyClient>,
}

impl ListApplicationsTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListApplicationsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_applications".to_string(),
            description: "List all Coolify applications".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(
        &self,
        _arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        json_result(&self.client.list_applications().await?)
    }
}

pub struct GetApplicationTool {
    client: Arc<CoolifyClient>,
}

impl GetApplicationTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetApplicationTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_application".to_string(),
            description: "Get details about a specific Coolify application".to_string(),
            input_schema: json_schema_object(
                json!({ "uuid": json_schema_string("UUID of the application") }),
                vec!["uuid"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("get_application", arguments)?;
        json_result(&self.client.get_application(&args.uuid).await?)
    }
}

pub struct CreateApplicationTool {
    client: Arc<CoolifyClient>,
}

impl CreateApplicationTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreateApplicationTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_application".to_string(),
            description: "Create a new Coolify application".to_string(),
            input_schema: json_schema_object(
                json!({
                    "name": json_schema_string("Name of the application"),
                    "description": json_schema_string("Description of the application"),
                    "project_uuid": json_schema_string("UUID of the project"),
                    "environment_uuid": json_schema_string("UUID of the environment"),
                    "server_uuid": json_schema_string("UUID of the server"),
                    "repository": json_schema_string("Git repository URL"),
                    "branch": json_schema_string("Git branch")
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
        let request: CreateApplicationRequest = parse_arguments("create_application", arguments)?;
        json_result(&self.client.create_application(&request).await?)
    }
}

pub struct DeleteApplicationTool {
    client: Arc<CoolifyClient>,
}

impl DeleteApplicationTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeleteApplicationTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete_application".to_string(),
            description: "Delete a Coolify application".to_string(),
            input_schema: json_schema_object(
                json!({ "uuid": json_schema_string("UUID of the application to delete") }),
                vec!["uuid"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("delete_application", arguments)?;
        json_result(&self.client.delete_application(&args.uuid).await?)
    }
}

pub struct DeployApplicationTool {
    client: Arc<CoolifyClient>,
}

impl DeployApplicationTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeployApplicationTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "deploy_application".to_string(),
            description: "Deploy a Coolify application".to_string(),
            input_schema: json_schema_object(
                json!({ "uuid": json_schema_string("UUID of the application to deploy") }),
                vec!["uuid"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("deploy_application", arguments)?;
        json_result(&self.client.deploy_application(&args.uuid).await?)
    }
}

/// Every resource on the platform, regardless of kind
pub struct ListResourcesTool {
    client: Arc<CoolifyClient>,
}

impl ListResourcesTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListResourcesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_resources".to_string(),
            description: "List all Coolify resources".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(
        &self,
        _arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        json_result(&self.client.list_resources().await?)
    }
}
