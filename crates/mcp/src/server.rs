//! MCP server implementation
//!
//! Owns the Coolify client and the tool and resource registries, and serves
//! newline-delimited JSON-RPC over any async byte stream (stdio in
//! production, in-memory pipes in tests).
//!
//! Lifecycle: `Constructed` → `initialize()` → `Initialized` → `connect()` →
//! `Connected`. `connect` validates the platform connection first and fails
//! fast, before reading a single request, if it is unreachable.

use crate::error::{ServerError, ToolError};
use crate::protocol::*;
use crate::resources::{register_application_routes, ResourceRegistry, RouteAccess};
use crate::tools::{register_all, ToolContext, ToolRegistry};
use coolify_sdk::{ClientConfig, CoolifyClient};
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Constructed,
    Initialized,
    Connected,
}

pub struct McpServer {
    client: Arc<CoolifyClient>,
    tools: ToolRegistry,
    resources: ResourceRegistry,
    state: ServerState,
}

impl McpServer {
    /// Build the platform client from `config`. No request is made yet.
    pub fn new(config: ClientConfig) -> Result<Self, ServerError> {
        let client = CoolifyClient::new(config)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    pub fn with_client(client: Arc<CoolifyClient>) -> Self {
        Self {
            client,
            tools: ToolRegistry::new(),
            resources: ResourceRegistry::new(),
            state: ServerState::Constructed,
        }
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    pub fn client(&self) -> &Arc<CoolifyClient> {
        &self.client
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    /// Register every tool and resource route. Allowed exactly once.
    pub fn initialize(&mut self) -> Result<(), ServerError> {
        if self.state != ServerState::Constructed {
            return Err(ServerError::AlreadyInitialized);
        }

        register_all(&mut self.tools, self.client.clone());
        register_application_routes(&mut self.resources, self.client.clone());
        self.state = ServerState::Initialized;

        info!(
            tools = self.tools.len(),
            resources = self.resources.len(),
            "MCP server initialized"
        );
        Ok(())
    }

    pub fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            tools: Some(ToolsCapability::default()),
            resources: Some(ResourcesCapability::default()),
        }
    }

    /// Validate the platform connection, then serve requests from `reader`
    /// until it reaches end of input.
    pub async fn connect<R, W>(mut self, reader: R, writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!(base_url = %self.client.base_url(), "Connecting to Coolify");
        self.client
            .validate_connection()
            .await
            .map_err(ServerError::Connect)?;

        if self.state == ServerState::Constructed {
            self.initialize()?;
        }
        self.state = ServerState::Connected;

        Arc::new(self).serve(reader, writer).await
    }

    /// [`connect`](Self::connect) bound to the process's stdin and stdout.
    pub async fn connect_stdio(self) -> Result<(), ServerError> {
        let stdin = BufReader::new(tokio::io::stdin());
        self.connect(stdin, tokio::io::stdout()).await
    }

    async fn serve<R, W>(self: Arc<Self>, reader: R, writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!("MCP server listening");

        let (tx, rx) = mpsc::unbounded_channel();
        let writer_task = tokio::spawn(write_loop(writer, rx));

        // Each request runs on its own task so slow platform calls do not
        // hold up the rest; responses are written in completion order.
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }

            let server = Arc::clone(&self);
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_message(&line).await {
                    let _ = tx.send(response);
                }
            });
        }

        info!("Client closed connection");

        // The writer drains until every in-flight request has dropped its sender.
        drop(tx);
        writer_task.await.map_err(std::io::Error::other)??;
        Ok(())
    }

    /// Handle one raw JSON-RPC message. Notifications produce no response.
    pub async fn handle_message(&self, content: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(content) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Unparseable message");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    JsonRpcError::parse_error(e),
                ));
            }
        };

        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request("Unsupported JSON-RPC version"),
            ));
        }

        debug!(method = %request.method, "Request received");

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => self.handle_list_tools(),
            "tools/call" => self.handle_call_tool(request.params, id.clone()).await,
            "resources/list" => self.handle_list_resources(),
            "resources/templates/list" => self.handle_list_resource_templates(),
            "resources/read" => self.handle_read_resource(request.params).await,
            _ => Err(JsonRpcError::method_not_found(&request.method)),
        };

        Some(match result {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn ensure_initialized(&self) -> Result<(), JsonRpcError> {
        if self.state == ServerState::Constructed {
            return Err(JsonRpcError::internal_error("Server not initialized"));
        }
        Ok(())
    }

    fn handle_initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(params) => serde_json::from_value(params).map_err(|e| {
                JsonRpcError::invalid_params(format!("Invalid initialize params: {}", e))
            })?,
            None => InitializeParams::default(),
        };

        if let Some(client) = &params.client_info {
            info!(client = %client.name, version = %client.version, "Client connected");
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: Self::capabilities(),
            server_info: ServerInfo::current(),
        };

        to_json(&result)
    }

    fn handle_list_tools(&self) -> Result<Value, JsonRpcError> {
        self.ensure_initialized()?;
        to_json(&ListToolsResult {
            tools: self.tools.list_schemas(),
        })
    }

    async fn handle_call_tool(&self, params: Option<Value>, id: Value) -> Result<Value, JsonRpcError> {
        self.ensure_initialized()?;

        let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid tool call params: {}", e)))?;

        debug!(tool = %params.name, "Calling tool");
        let ctx = ToolContext {
            request_id: Some(id),
        };

        let result = match self.tools.call(&params.name, params.arguments, &ctx).await {
            Ok(result) => result,
            Err(e) if e.is_protocol_error() => {
                return Err(JsonRpcError::invalid_params(e.to_string()));
            }
            Err(e) => {
                warn!(tool = %params.name, error = %e, "Tool failed");
                CallToolResult::error(e.to_string())
            }
        };

        to_json(&result)
    }

    fn handle_list_resources(&self) -> Result<Value, JsonRpcError> {
        self.ensure_initialized()?;

        let resources = self
            .resources
            .routes()
            .into_iter()
            .filter(|route| route.access == RouteAccess::Read && route.concrete)
            .map(|route| ResourceDescriptor {
                uri: route.template.clone(),
                name: route.template,
                description: route.description,
                mime_type: JSON_MIME_TYPE.to_string(),
            })
            .collect();

        to_json(&ListResourcesResult { resources })
    }

    fn handle_list_resource_templates(&self) -> Result<Value, JsonRpcError> {
        self.ensure_initialized()?;

        let resource_templates = self
            .resources
            .routes()
            .into_iter()
            .filter(|route| route.access == RouteAccess::Read && !route.concrete)
            .map(|route| ResourceTemplateDescriptor {
                uri_template: route.template.clone(),
                name: route.template,
                description: route.description,
                mime_type: JSON_MIME_TYPE.to_string(),
            })
            .collect();

        to_json(&ListResourceTemplatesResult { resource_templates })
    }

    async fn handle_read_resource(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        self.ensure_initialized()?;

        let params: ReadResourceParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid resource params: {}", e)))?;

        let value = self.resources.read(&params.uri).await.map_err(|e| match e {
            ToolError::UnknownResource(_) => JsonRpcError::invalid_params(e.to_string()),
            other => {
                warn!(uri = %params.uri, error = %other, "Resource read failed");
                JsonRpcError::internal_error(other.to_string())
            }
        })?;

        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| JsonRpcError::internal_error(format!("Failed to serialize resource: {}", e)))?;

        to_json(&ReadResourceResult {
            contents: vec![ResourceContents {
                uri: params.uri,
                mime_type: JSON_MIME_TYPE.to_string(),
                text,
            }],
        })
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value)
        .map_err(|e| JsonRpcError::internal_error(format!("Failed to serialize result: {}", e)))
}

async fn write_loop<W>(
    mut writer: W,
    mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = match serde_json::to_vec(&response) {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "Failed to serialize response");
                continue;
            }
        };
        line.push(b'\n');

        writer.write_all(&line).await?;
        writer.flush().await?;
    }

    writer.shutdown().await
}
