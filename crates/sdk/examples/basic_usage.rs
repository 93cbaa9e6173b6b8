//! Basic SDK usage example.
//!
//! Connects to a Coolify instance and prints an overview of its servers,
//! projects and applications.
//!
//! Run with:
//! COOLIFY_BASE_URL=https://coolify.example.com COOLIFY_ACCESS_TOKEN=... \
//!     cargo run --example basic_usage

use coolify_sdk::{CoolifyClient, CoolifyResult};
use std::time::Duration;

#[tokio::main]
async fn main() -> CoolifyResult<()> {
    tracing_subscriber::fmt::init();

    let client = CoolifyClient::builder()
        .base_url(std::env::var("COOLIFY_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into()))
        .access_token(std::env::var("COOLIFY_ACCESS_TOKEN").unwrap_or_default())
        .timeout(Duration::from_secs(30))
        .build()?;

    println!("Validating connection to {}...", client.base_url());
    client.validate_connection().await?;

    let servers = client.servers().list().await?;
    println!("Found {} servers", servers.len());
    for server in &servers {
        println!(
            "  {} ({}) at {}",
            server.name().unwrap_or("-"),
            server.uuid().unwrap_or("-"),
            server.ip().unwrap_or("-")
        );
    }

    let projects = client.projects().list().await?;
    println!("\nFound {} projects", projects.len());
    for project in &projects {
        let environments = project.environments().len();
        println!(
            "  {} ({} environments)",
            project.name().unwrap_or("-"),
            environments
        );
    }

    let applications = client.applications().list().await?;
    println!("\nFound {} applications", applications.len());
    for app in applications.iter().take(10) {
        println!(
            "  {}: {}",
            app.name().unwrap_or("-"),
            app.status().unwrap_or("unknown")
        );
    }

    Ok(())
}
