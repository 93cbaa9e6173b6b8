use crate::service_type::ServiceType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declares a record that holds the platform's JSON exactly as received.
///
/// Nothing is checked or dropped on the way in, so a record serializes
/// back to the same document, null-valued and oddly typed fields included.
/// The listed accessors read string fields for callers that want them.
macro_rules! record {
    ($(#[$meta:meta])* $name:ident { $($accessor:ident => $key:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Value);

        impl $name {
            $(
                pub fn $accessor(&self) -> Option<&str> {
                    self.0.get($key).and_then(Value::as_str)
                }
            )*

            /// Any field, as the platform sent it
            pub fn get(&self, key: &str) -> Option<&Value> {
                self.0.get(key)
            }

            pub fn as_value(&self) -> &Value {
                &self.0
            }

            pub fn into_value(self) -> Value {
                self.0
            }
        }

        impl From<Value> for $name {
            fn from(value: Value) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Value {
            fn from(record: $name) -> Self {
                record.0
            }
        }
    };
}

fn string_list(value: Option<&Value>) -> Vec<&str> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

// =============================================================================
// Servers
// =============================================================================

record! {
    /// A server managed by the platform
    ServerInfo {
        uuid => "uuid",
        name => "name",
        description => "description",
        ip => "ip",
        user => "user",
    }
}

impl ServerInfo {
    /// SSH port, whether the platform sent it as a number or a string
    pub fn port(&self) -> Option<u16> {
        match self.0.get("port")? {
            Value::Number(n) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

record! {
    /// A resource running on a particular server
    ServerResource {
        uuid => "uuid",
        name => "name",
        resource_type => "type",
        status => "status",
    }
}

/// Resources currently running on a server
pub type ServerResources = Vec<ServerResource>;

record! {
    /// Domains bound to one address of a server
    ServerDomain {
        ip => "ip",
    }
}

impl ServerDomain {
    pub fn domains(&self) -> Vec<&str> {
        string_list(self.0.get("domains"))
    }
}

record! {
    /// Outcome of asking the platform to validate a server
    ValidationResponse {
        message => "message",
    }
}

// =============================================================================
// Projects & Environments
// =============================================================================

record! {
    Project {
        uuid => "uuid",
        name => "name",
        description => "description",
    }
}

impl Project {
    /// Environments embedded in the project, when the platform includes them
    pub fn environments(&self) -> Vec<Environment> {
        self.0
            .get("environments")
            .and_then(Value::as_array)
            .map(|envs| envs.iter().cloned().map(Environment).collect())
            .unwrap_or_default()
    }
}

record! {
    /// An environment inside a project
    Environment {
        uuid => "uuid",
        name => "name",
        description => "description",
    }
}

/// Request to create a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update of a project; unset fields are left untouched upstream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Applications
// =============================================================================

record! {
    Application {
        uuid => "uuid",
        name => "name",
        description => "description",
        fqdn => "fqdn",
        git_repository => "git_repository",
        git_branch => "git_branch",
        status => "status",
    }
}

/// Request to create an application.
///
/// Only `name` is mandatory. Nothing is defaulted on the way out: fields the
/// caller leaves unset are absent from the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl CreateApplicationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            project_uuid: None,
            environment_uuid: None,
            server_uuid: None,
            repository: None,
            branch: None,
        }
    }
}

record! {
    /// Record of a deployment queued for an application
    Deployment {
        deployment_uuid => "deployment_uuid",
        resource_uuid => "resource_uuid",
        message => "message",
    }
}

// =============================================================================
// Databases
// =============================================================================

record! {
    Database {
        uuid => "uuid",
        name => "name",
        description => "description",
        status => "status",
    }
}

/// Free-form database settings, forwarded verbatim as the PATCH body
pub type DatabaseUpdateRequest = serde_json::Map<String, Value>;

// =============================================================================
// Services
// =============================================================================

record! {
    Service {
        uuid => "uuid",
        name => "name",
        description => "description",
        status => "status",
    }
}

record! {
    /// Runtime state of a service as reported by the platform
    ServiceInspection {
        uuid => "uuid",
        status => "status",
    }
}

/// Request to create a service from a one-click template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub project_uuid: String,
    pub server_uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instant_deploy: Option<bool>,
}

impl CreateServiceRequest {
    pub fn new(
        service_type: ServiceType,
        project_uuid: impl Into<String>,
        server_uuid: impl Into<String>,
    ) -> Self {
        Self {
            service_type,
            project_uuid: project_uuid.into(),
            server_uuid: server_uuid.into(),
            name: None,
            description: None,
            environment_name: None,
            environment_uuid: None,
            destination_uuid: None,
            instant_deploy: None,
        }
    }
}

record! {
    /// Response from creating a service
    CreateServiceResponse {
        uuid => "uuid",
    }
}

impl CreateServiceResponse {
    /// Addresses the new service is reachable at
    pub fn domains(&self) -> Vec<&str> {
        string_list(self.0.get("domains"))
    }
}

// =============================================================================
// Resources
// =============================================================================

record! {
    /// Summary of any deployable resource on the platform
    Resource {
        uuid => "uuid",
        name => "name",
        resource_type => "type",
        status => "status",
    }
}

// =============================================================================
// Generic responses
// =============================================================================

record! {
    /// Response carrying the identifier of a newly created entity
    UuidResponse {
        uuid => "uuid",
    }
}

record! {
    /// Plain acknowledgement, returned by every delete
    MessageResponse {
        message => "message",
    }
}

/// Error body returned by the platform on failure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
