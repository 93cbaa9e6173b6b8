//! The Coolify tool catalogue.
//!
//! One tool per platform operation. Arguments are checked against the tool's
//! schema before any request is made; results are the client's response
//! serialized as pretty JSON.

mod applications;
mod databases;
mod projects;
mod registry;
mod servers;
mod services;

pub use applications::{
    CreateApplicationTool, DeleteApplicationTool, DeployApplicationTool, GetApplicationTool,
    ListApplicationsTool, ListResourcesTool,
};
pub use databases::{DeleteDatabaseTool, GetDatabaseTool, ListDatabasesTool, UpdateDatabaseTool};
pub use projects::{
    CreateProjectTool, DeleteProjectTool, GetProjectEnvironmentTool, GetProjectTool,
    ListEnvironmentsTool, ListProjectsTool, UpdateProjectTool,
};
pub use registry::{
    delete_options_schema, json_result, json_schema_any_object, json_schema_boolean,
    json_schema_enum, json_schema_object, json_schema_string, parse_arguments, Tool, ToolContext,
    ToolRegistry, UuidArgs,
};
pub use servers::{
    GetServerDomainsTool, GetServerResourcesTool, GetServerTool, ListServersTool,
    ValidateServerTool,
};
pub use services::{
    CreateServiceTool, DeleteServiceTool, GetServiceTool, InspectServiceTool, ListServicesTool,
};

use coolify_sdk::CoolifyClient;
use std::sync::Arc;

/// Register every Coolify tool against `client`.
pub fn register_all(registry: &mut ToolRegistry, client: Arc<CoolifyClient>) {
    // Servers
    registry.register(Arc::new(ListServersTool::new(client.clone())));
    registry.register(Arc::new(GetServerTool::new(client.clone())));
    registry.register(Arc::new(GetServerResourcesTool::new(client.clone())));
    registry.register(Arc::new(GetServerDomainsTool::new(client.clone())));
    registry.register(Arc::new(ValidateServerTool::new(client.clone())));

    // Projects and environments
    registry.register(Arc::new(ListProjectsTool::new(client.clone())));
    registry.register(Arc::new(GetProjectTool::new(client.clone())));
    registry.register(Arc::new(CreateProjectTool::new(client.clone())));
    registry.register(Arc::new(UpdateProjectTool::new(client.clone())));
    registry.register(Arc::new(DeleteProjectTool::new(client.clone())));
    registry.register(Arc::new(GetProjectEnvironmentTool::new(client.clone())));
    registry.register(Arc::new(ListEnvironmentsTool::new(client.clone())));

    // Databases
    registry.register(Arc::new(ListDatabasesTool::new(client.clone())));
    registry.register(Arc::new(GetDatabaseTool::new(client.clone())));
    registry.register(Arc::new(UpdateDatabaseTool::new(client.clone())));
    registry.register(Arc::new(DeleteDatabaseTool::new(client.clone())));

    // Services
    registry.register(Arc::new(ListServicesTool::new(client.clone())));
    registry.register(Arc::new(GetServiceTool::new(client.clone())));
    registry.register(Arc::new(InspectServiceTool::new(client.clone())));
    registry.register(Arc::new(CreateServiceTool::new(client.clone())));
    registry.register(Arc::new(DeleteServiceTool::new(client.clone())));

    // Applications and resources
    registry.register(Arc::new(ListResourcesTool::new(client.clone())));
    registry.register(Arc::new(ListApplicationsTool::new(client.clone())));
    registry.register(Arc::new(GetApplicationTool::new(client.clone())));
    registry.register(Arc::new(CreateApplicationTool::new(client.clone())));
    registry.register(Arc::new(DeleteApplicationTool::new(client.clone())));
    registry.register(Arc::new(DeployApplicationTool::new(client)));
}
