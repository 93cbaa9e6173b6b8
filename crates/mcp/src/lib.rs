//! MCP (Model Context Protocol) server for the Coolify platform.
//!
//! Exposes every Coolify API operation as an MCP tool over newline-delimited
//! JSON-RPC on stdio.

pub mod config;
pub mod error;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;

pub use error::{ServerError, ToolError};
pub use resources::ResourceRegistry;
pub use server::{McpServer, ServerState};
pub use tools::{Tool, ToolRegistry};
