//! Databases API endpoints.

use crate::api::require_id;
use crate::client::CoolifyClient;
use crate::error::CoolifyResult;
use coolify_core::{Database, DatabaseUpdateRequest, DeleteOptions, MessageResponse};

/// Databases API. Databases are created through the platform UI.
pub struct DatabasesApi<'a> {
    client: &'a CoolifyClient,
}

impl<'a> DatabasesApi<'a> {
    pub(crate) fn new(client: &'a CoolifyClient) -> Self {
        Self { client }
    }

    /// List all databases.
    pub async fn list(&self) -> CoolifyResult<Vec<Database>> {
        self.client.http.get("/databases").await
    }

    /// Get a specific database.
    pub async fn get(&self, uuid: &str) -> CoolifyResult<Database> {
        let uuid = require_id("uuid", uuid)?;
        self.client.http.get(&format!("/databases/{}", uuid)).await
    }

    /// Update database settings. The body is forwarded as given.
    pub async fn update(
        &self,
        uuid: &str,
        data: &DatabaseUpdateRequest,
    ) -> CoolifyResult<Database> {
        let uuid = require_id("uuid", uuid)?;
        self.client
            .http
            .patch(&format!("/databases/{}", uuid), data)
            .await
    }

    /// Delete a database, applying whichever cleanup flags are set.
    pub async fn delete(
        &self,
        uuid: &str,
        options: Option<&DeleteOptions>,
    ) -> CoolifyResult<MessageResponse> {
        let uuid = require_id("uuid", uuid)?;
        let path = format!("/databases/{}", uuid);
        let path = match options {
            Some(options) => options.apply_to_path(&path),
            None => path,
        };
        self.client.http.delete(&path).await
    }
}
