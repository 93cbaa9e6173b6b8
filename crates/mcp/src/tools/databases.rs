// Database tools

use super::registry::*;
use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolSchema};
use coolify_core::{DatabaseUpdateRequest, DeleteOptions};
use coolify_sdk::CoolifyClient;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub struct ListDatabasesTool {
    client: Arc<CoolifyClient>,
}

impl ListDatabasesTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListDatabasesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_databases".to_string(),
            description: "List all Coolify databases".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(
        &self,
        _arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        json_result(&self.client.list_databases().await?)
    }
}

pub struct GetDatabaseTool {
    client: Arc<CoolifyClient>,
}

impl GetDatabaseTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetDatabaseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_database".to_string(),
            description: "Get details about a specific Coolify database".to_string(),
            input_schema: json_schema_object(
                json!({ "uuid": json_schema_string("UUID of the database") }),
                vec!["uuid"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UuidArgs = parse_arguments("get_database", arguments)?;
        json_result(&self.client.get_database(&args.uuid).await?)
    }
}

#[derive(Debug, Deserialize)]
struct UpdateDatabaseArgs {
    uuid: String,
    data: DatabaseUpdateRequest,
}

/// Forwards `data` to the platform untouched
pub struct UpdateDatabaseTool {
    client: Arc<CoolifyClient>,
}

impl UpdateDatabaseTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for UpdateDatabaseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update_database".to_string(),
            description: "Update a Coolify database".to_string(),
            input_schema: json_schema_object(
                json!({
                    "uuid": json_schema_string("UUID of the database to update"),
                    "data": json_schema_any_object("Fields to update, sent as-is")
                }),
                vec!["uuid", "data"],
            ),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: UpdateDatabaseArgs = parse_arguments("update_database", arguments)?;
        json_result(&self.client.update_database(&args.uuid, &args.data).await?)
    }
}

/// `uuid` plus optional cleanup flags, shared with `delete_service`
#[derive(Debug, Deserialize)]
pub(crate) struct DeleteWithOptionsArgs {
    pub uuid: String,
    #[serde(default)]
    pub options: Option<DeleteOptions>,
}

pub(crate) fn delete_with_options_schema(uuid_description: &str) -> serde_json::Value {
    json_schema_object(
        json!({
            "uuid": json_schema_string(uuid_description),
            "options": delete_options_schema()
        }),
        vec!["uuid"],
    )
}

pub struct DeleteDatabaseTool {
    client: Arc<CoolifyClient>,
}

impl DeleteDatabaseTool {
    pub fn new(client: Arc<CoolifyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeleteDatabaseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete_database".to_string(),
            description: "Delete a Coolify database".to_string(),
            input_schema: delete_with_options_schema("UUID of the database to delete"),
        }
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        _ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let args: DeleteWithOptionsArgs = parse_arguments("delete_database", arguments)?;
        let result = self
            .client
            .delete_database(&args.uuid, args.options.as_ref())
            .await?;
        json_result(&result)
    }
}
