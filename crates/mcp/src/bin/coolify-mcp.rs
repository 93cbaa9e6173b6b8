// Coolify MCP server binary (stdio transport)

use anyhow::Result;
use clap::Parser;
use coolify_mcp::config::Cli;
use coolify_mcp::McpServer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the protocol stream, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = cli.resolve()?;
    tracing::info!(config = ?config, "Coolify MCP server starting");

    let server = McpServer::new(config)?;
    server.connect_stdio().await?;

    tracing::info!("Coolify MCP server stopped");
    Ok(())
}
