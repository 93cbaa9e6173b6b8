//! Main client for the Coolify SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_TIMEOUT};
use crate::error::{CoolifyError, CoolifyResult};
use crate::transport::HttpTransport;
use coolify_core::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Main client for interacting with the Coolify API.
///
/// Holds only immutable configuration, so one instance can be shared across
/// concurrent callers (`Arc<CoolifyClient>` or clones) without locking.
#[derive(Debug, Clone)]
pub struct CoolifyClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl CoolifyClient {
    /// Create a client from configuration.
    ///
    /// Fails with [`CoolifyError::Config`] if the base URL or token is empty.
    pub fn new(config: ClientConfig) -> CoolifyResult<Self> {
        let config = Arc::new(config.validate()?);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Create a new client builder.
    pub fn builder() -> CoolifyClientBuilder {
        CoolifyClientBuilder::new()
    }

    /// Normalized base URL of the Coolify instance.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the servers API.
    pub fn servers(&self) -> ServersApi<'_> {
        ServersApi::new(self)
    }

    /// Get the projects API.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    /// Get the environments API.
    pub fn environments(&self) -> EnvironmentsApi<'_> {
        EnvironmentsApi::new(self)
    }

    /// Get the applications API.
    pub fn applications(&self) -> ApplicationsApi<'_> {
        ApplicationsApi::new(self)
    }

    /// Get the databases API.
    pub fn databases(&self) -> DatabasesApi<'_> {
        DatabasesApi::new(self)
    }

    /// Get the services API.
    pub fn services(&self) -> ServicesApi<'_> {
        ServicesApi::new(self)
    }

    /// Get the resources API.
    pub fn resources(&self) -> ResourcesApi<'_> {
        ResourcesApi::new(self)
    }

    /// Check that the platform is reachable and accepts the token.
    pub async fn validate_connection(&self) -> CoolifyResult<()> {
        debug!(base_url = %self.config.base_url, "Validating connection");
        self.list_servers()
            .await
            .map(|_| ())
            .map_err(|e| CoolifyError::ValidationFailed(Box::new(e)))
    }

    // Servers

    pub async fn list_servers(&self) -> CoolifyResult<Vec<ServerInfo>> {
        self.servers().list().await
    }

    pub async fn get_server(&self, uuid: &str) -> CoolifyResult<ServerInfo> {
        self.servers().get(uuid).await
    }

    pub async fn get_server_resources(&self, uuid: &str) -> CoolifyResult<ServerResources> {
        self.servers().resources(uuid).await
    }

    pub async fn get_server_domains(&self, uuid: &str) -> CoolifyResult<Vec<ServerDomain>> {
        self.servers().domains(uuid).await
    }

    pub async fn validate_server(&self, uuid: &str) -> CoolifyResult<ValidationResponse> {
        self.servers().validate(uuid).await
    }

    // Projects

    pub async fn list_projects(&self) -> CoolifyResult<Vec<Project>> {
        self.projects().list().await
    }

    pub async fn get_project(&self, uuid: &str) -> CoolifyResult<Project> {
        self.projects().get(uuid).await
    }

    pub async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> CoolifyResult<UuidResponse> {
        self.projects().create(request).await
    }

    pub async fn update_project(
        &self,
        uuid: &str,
        request: &UpdateProjectRequest,
    ) -> CoolifyResult<Project> {
        self.projects().update(uuid, request).await
    }

    pub async fn delete_project(&self, uuid: &str) -> CoolifyResult<MessageResponse> {
        self.projects().delete(uuid).await
    }

    pub async fn get_project_environment(
        &self,
        project_uuid: &str,
        environment_name_or_uuid: &str,
    ) -> CoolifyResult<Environment> {
        self.projects()
            .environment(project_uuid, environment_name_or_uuid)
            .await
    }

    // Environments

    pub async fn list_environments(&self) -> CoolifyResult<Vec<Environment>> {
        self.environments().list().await
    }

    // Databases

    pub async fn list_databases(&self) -> CoolifyResult<Vec<Database>> {
        self.databases().list().await
    }

    pub async fn get_database(&self, uuid: &str) -> CoolifyResult<Database> {
        self.databases().get(uuid).await
    }

    pub async fn update_database(
        &self,
        uuid: &str,
        data: &DatabaseUpdateRequest,
    ) -> CoolifyResult<Database> {
        self.databases().update(uuid, data).await
    }

    pub async fn delete_database(
        &self,
        uuid: &str,
        options: Option<&DeleteOptions>,
    ) -> CoolifyResult<MessageResponse> {
        self.databases().delete(uuid, options).await
    }

    // Services

    pub async fn list_services(&self) -> CoolifyResult<Vec<Service>> {
        self.services().list().await
    }

    pub async fn get_service(&self, uuid: &str) -> CoolifyResult<Service> {
        self.services().get(uuid).await
    }

    pub async fn create_service(
        &self,
        request: &CreateServiceRequest,
    ) -> CoolifyResult<CreateServiceResponse> {
        self.services().create(request).await
    }

    pub async fn delete_service(
        &self,
        uuid: &str,
        options: Option<&DeleteOptions>,
    ) -> CoolifyResult<MessageResponse> {
        self.services().delete(uuid, options).await
    }

    pub async fn inspect_service(&self, uuid: &str) -> CoolifyResult<ServiceInspection> {
        self.services().inspect(uuid).await
    }

    // Resources

    pub async fn list_resources(&self) -> CoolifyResult<Vec<Resource>> {
        self.resources().list().await
    }

    // Applications

    pub async fn list_applications(&self) -> CoolifyResult<Vec<Application>> {
        self.applications().list().await
    }

    pub async fn get_application(&self, uuid: &str) -> CoolifyResult<Application> {
        self.applications().get(uuid).await
    }

    pub async fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> CoolifyResult<UuidResponse> {
        self.applications().create(request).await
    }

    pub async fn delete_application(&self, uuid: &str) -> CoolifyResult<MessageResponse> {
        self.applications().delete(uuid).await
    }

    pub async fn deploy_application(&self, uuid: &str) -> CoolifyResult<Deployment> {
        self.applications().deploy(uuid).await
    }
}

/// Builder for creating a CoolifyClient.
pub struct CoolifyClientBuilder {
    base_url: Option<String>,
    access_token: Option<String>,
    timeout: Duration,
}

impl CoolifyClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL of the Coolify instance.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> CoolifyResult<CoolifyClient> {
        let config = ClientConfig {
            base_url: self.base_url.unwrap_or_default(),
            access_token: self.access_token.unwrap_or_default(),
            timeout: self.timeout,
        };

        CoolifyClient::new(config)
    }
}

impl Default for CoolifyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let err = CoolifyClient::builder()
            .access_token("token")
            .build()
            .unwrap_err();
        assert!(matches!(err, CoolifyError::Config(_)));
    }

    #[test]
    fn test_builder_requires_token() {
        let err = CoolifyClient::builder()
            .base_url("http://localhost:8000")
            .build()
            .unwrap_err();
        assert!(matches!(err, CoolifyError::Config(_)));
    }

    #[test]
    fn test_builder_normalizes_base_url() {
        let client = CoolifyClient::builder()
            .base_url("https://coolify.example.com/")
            .access_token("token")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://coolify.example.com");
    }

    #[tokio::test]
    async fn test_empty_uuid_rejected_without_request() {
        // Port 1 would fail with a connection error if a request were sent.
        let client = CoolifyClient::new(ClientConfig::new("http://127.0.0.1:1", "token")).unwrap();

        let err = client.get_application("").await.unwrap_err();
        assert!(matches!(err, CoolifyError::InvalidInput(_)));

        let err = client.get_project_environment("proj", " ").await.unwrap_err();
        assert!(matches!(err, CoolifyError::InvalidInput(_)));
    }
}
