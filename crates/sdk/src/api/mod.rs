//! API endpoint groups.

pub mod applications;
pub mod databases;
pub mod environments;
pub mod projects;
pub mod resources;
pub mod servers;
pub mod services;

pub use applications::ApplicationsApi;
pub use databases::DatabasesApi;
pub use environments::EnvironmentsApi;
pub use projects::ProjectsApi;
pub use resources::ResourcesApi;
pub use servers::ServersApi;
pub use services::ServicesApi;

use crate::error::{CoolifyError, CoolifyResult};

/// Reject empty identifiers before anything goes on the wire.
pub(crate) fn require_id<'a>(field: &str, value: &'a str) -> CoolifyResult<&'a str> {
    if value.trim().is_empty() {
        return Err(CoolifyError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(value)
}
