//! Error types for the MCP adapter.

use coolify_sdk::CoolifyError;
use thiserror::Error;

/// Failure of a single tool or resource invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Arguments did not match the tool's input schema. No request was sent.
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// The platform client failed; its message is surfaced unchanged.
    #[error(transparent)]
    Client(#[from] CoolifyError),

    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    pub fn invalid_arguments(tool: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: message.to_string(),
        }
    }

    /// Schema-level failures are reported as protocol errors; everything
    /// else becomes an error result the caller can read.
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArguments { .. } | Self::UnknownTool(_) | Self::UnknownResource(_)
        )
    }
}

/// Server lifecycle failures.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Server is already initialized")]
    AlreadyInitialized,

    /// Connection validation failed during `connect`
    #[error("{0}")]
    Connect(#[source] CoolifyError),

    #[error("Invalid client configuration: {0}")]
    Client(#[from] CoolifyError),

    #[error("Transport error: {0}")]
    Io(#[from] std::io::Error),
}
