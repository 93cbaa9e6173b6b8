// Server tools

use super::registry::*;
use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolSchema};
use coolify_sdk::CoolifyClient;
use serde_json::json;
use std::sync::Arc;

fn uuid_schema(name: &str, description: &str, uuid_description: &str) -> ToolSchema {
    ToolSchema {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: json_schema_object(
            json!({ "uuid": json_schema_string(uuid_description) }),
            vec!["uuid"],
        ),
    }
}

/// List all servers
pub struct ListServersTool {
    client: Arc<CoolifyClient>,
}

impl ListServersTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListServersTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_servers".to_string(),
            description: "List all Coolify servers".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(
        &self,
        _arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        json_result(&self.client.list_servers().await?)
    }
}

/// Get a single server
pub struct GetServerTool {
    client: Arc<CoolifyClient>,
}

impl GetServerTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetServerTool {
    fn schema(&self) -> ToolSchema {
        uuid_schema(
            "get_server",
            "Get details about a specific Coolify server",
            "UUID of the server to get details for",
        )
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("get_server", arguments)?;
        json_result(&self.client.get_server(&args.uuid).await?)
    }
}

/// Resources running on a server
pub struct GetServerResourcesTool {
    client: Arc<CoolifyClient>,
}

impl GetServerResourcesTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetServerResourcesTool {
    fn schema(&self) -> ToolSchema {
        uuid_schema(
            "get_server_resources",
            "Get the current resources running on a specific Coolify server",
            "UUID of the server",
        )
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("get_server_resources", arguments)?;
        json_result(&self.client.get_server_resources(&args.uuid).await?)
    }
}

/// Domains served by a server
pub struct GetServerDomainsTool {
    client: Arc<CoolifyClient>,
}

impl GetServerDomainsTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetServerDomainsTool {
    fn schema(&self) -> ToolSchema {
        uuid_schema(
            "get_server_domains",
            "Get domains for a specific Coolify server",
            "UUID of the server",
        )
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("get_server_domains", arguments)?;
        json_result(&self.client.get_server_domains(&args.uuid).await?)
    }
}

/// Ask the platform to validate a server
pub struct ValidateServerTool {
    client: Arc<CoolifyClient>,
}

impl ValidateServerTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ValidateServerTool {
    fn schema(&self) -> ToolSchema {
        uuid_schema(
            "validate_server",
            "Validate a specific Coolify server",
            "UUID of the server",
        )
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("validate_server", arguments)?;
        json_result(&self.client.validate_server(&args.uuid).await?)
    }
}
