//! Resources API endpoints.

use crate::client::CoolifyClient;
use crate::error::CoolifyResult;
use coolify_core::Resource;

/// Resources API.
pub struct ResourcesApi<'a> {
    client: &'a CoolifyClient,
}

impl<'a> ResourcesApi<'a> {
    pub(crate) fn new(client: &'a CoolifyClient) -> Self {
        Self { client }
    }

    /// List every resource on the platform.
    pub async fn list(&self) -> CoolifyResult<Vec<Resource>> {
        self.client.http.get("/resources").await
    }
}
