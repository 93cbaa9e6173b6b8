//! # Coolify SDK
//!
//! Rust client for the Coolify self-hosted deployment platform API.
//!
//! Every method is a single stateless request against
//! `{base_url}/api/v1/...` authenticated with a bearer token. Failures are
//! returned as [`CoolifyError`]; nothing is retried or cached.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coolify_sdk::{CoolifyClient, CoolifyResult};
//!
//! #[tokio::main]
//! async fn main() -> CoolifyResult<()> {
//!     let client = CoolifyClient::builder()
//!         .base_url("https://coolify.example.com")
//!         .access_token("your-api-token")
//!         .build()?;
//!
//!     client.validate_connection().await?;
//!
//!     let servers = client.servers().list().await?;
//!     println!("Found {} servers", servers.len());
//!
//!     let apps = client.list_applications().await?;
//!     for app in apps {
//!         println!("{}", app.name().unwrap_or("-"));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{CoolifyClient, CoolifyClientBuilder};
pub use config::ClientConfig;
pub use error::{CoolifyError, CoolifyResult};

// Re-export core types for convenience
pub use coolify_core::{
    Application, CreateApplicationRequest, CreateProjectRequest, CreateServiceRequest,
    CreateServiceResponse, Database, DatabaseUpdateRequest, DeleteOptions, Deployment,
    Environment, MessageResponse, Project, Resource, ServerDomain, ServerInfo, ServerResource,
    ServerResources, Service, ServiceInspection, ServiceType, UpdateProjectRequest, UuidResponse,
    ValidationResponse,
};
