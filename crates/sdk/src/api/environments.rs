//! Environments API endpoints.

use crate::client::CoolifyClient;
use crate::error::CoolifyResult;
use coolify_core::Environment;

/// Environments API.
pub struct EnvironmentsApi<'a> {
    client: &'a CoolifyClient,
}

impl<'a> EnvironmentsApi<'a> {
    pub(crate) fn new(client: &'a CoolifyClient) -> Self {
        Self { client }
    }

    /// List all environments across projects.
    pub async fn list(&self) -> CoolifyResult<Vec<Environment>> {
        self.client.http.get("/environments").await
    }
}
