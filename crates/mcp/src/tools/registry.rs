// Tool trait, registry and schema helpers

use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolSchema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Per-invocation context handed to every tool.
///
/// Tools that take no arguments still receive it and ignore it.
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    /// JSON-RPC id of the `tools/call` request, if any
    pub request_id: Option<serde_json::Value>,
}

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    async fn execute(
        &self,
        arguments: serde_json::Value,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError>;
}

/// Tool registry keyed by tool name, listed in name order
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool. A later registration with the same name replaces
    /// the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name, tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Look up and run a tool by name.
    pub async fn call(
        &self,
        name: &str,
        arguments: serde_json::Value,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.execute(arguments, ctx).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Arguments of every tool addressing a single entity.
#[derive(Debug, Deserialize)]
pub struct UuidArgs {
    pub uuid: String,
}

/// Deserialize tool arguments, treating absent arguments as `{}`.
pub fn parse_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: serde_json::Value,
) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(tool, e))
}

/// Render a client result as a single pretty-printed JSON text item.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, ToolError> {
    Ok(CallToolResult::text(serde_json::to_string_pretty(value)?))
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_enum(values: &[&str], description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "enum": values,
        "description": description
    })
}

pub fn json_schema_boolean(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "boolean",
        "description": description
    })
}

/// Free-form object passed to the platform as-is
pub fn json_schema_any_object(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "description": description,
        "additionalProperties": true
    })
}

/// Schema of [`coolify_core::DeleteOptions`] as accepted by the delete tools
pub fn delete_options_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "description": "Cleanup options applied when deleting",
        "properties": {
            "deleteConfigurations": json_schema_boolean("Whether to delete configurations"),
            "deleteVolumes": json_schema_boolean("Whether to delete volumes"),
            "dockerCleanup": json_schema_boolean("Whether to run docker cleanup"),
            "deleteConnectedNetworks": json_schema_boolean("Whether to delete connected networks")
        },
        "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToolContent;
    use serde_json::json;

    struct EchoTool;

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "echo".to_string(),
                description: "Echo the uuid back".to_string(),
                input_schema: json_schema_object(
                    json!({ "uuid": json_schema_string("Anything") }),
                    vec!["uuid"],
                ),
            }
        }

        async fn execute(
            &self,
            arguments: serde_json::Value,
            _ctx: &ToolContext,
        ) -> Result<CallToolResult, ToolError> {
            let args: UuidArgs = parse_arguments("echo", arguments)?;
            json_result(&args.uuid)
        }
    }

    #[tokio::test]
    async fn test_registry_call() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        assert!(registry.contains("echo"));
        assert_eq!(registry.len(), 1);

        let result = registry
            .call("echo", json!({ "uuid": "abc" }), &ToolContext::default())
            .await
            .unwrap();
        let ToolContent::Text { text } = &result.content[0];
        assert_eq!(text, "\"abc\"");
    }

    #[tokio::test]
    async fn test_registry_unknown_tool() {
        let registry = ToolRegistry::new();
        let err = registry
            .call("nope", json!({}), &ToolContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(name) if name == "nope"));
    }

    #[test]
    fn test_parse_arguments_missing_field() {
        let err = parse_arguments::<UuidArgs>("get_server", serde_json::Value::Null).unwrap_err();
        match err {
            ToolError::InvalidArguments { tool, message } => {
                assert_eq!(tool, "get_server");
                assert!(message.contains("uuid"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_arguments_wrong_type() {
        let err = parse_arguments::<UuidArgs>("get_server", json!({ "uuid": 7 })).unwrap_err();
        assert!(err.is_protocol_error());
    }
}
