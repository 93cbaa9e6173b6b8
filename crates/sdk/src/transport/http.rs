//! HTTP transport layer for the Coolify SDK.

use crate::config::ClientConfig;
use crate::error::{CoolifyError, CoolifyResult};
use reqwest::{header, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making API requests.
///
/// One request per call: no retries, no caching.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given (validated) configuration.
    pub fn new(config: Arc<ClientConfig>) -> CoolifyResult<Self> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|_| CoolifyError::Config("Invalid access token format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| CoolifyError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build a URL for the given API path.
    fn build_url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    /// Send a request and decode its JSON body.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> CoolifyResult<T> {
        let response = request
            .send()
            .await
            .map_err(|source| CoolifyError::Connection {
                base_url: self.config.base_url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Request failed");
            return Err(CoolifyError::from_response(status, &body));
        }

        serde_json::from_slice(&body).map_err(|source| CoolifyError::InvalidResponse {
            status: status.as_u16(),
            source,
        })
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> CoolifyResult<T> {
        let url = self.build_url(path);
        debug!(url = %url, "GET request");

        self.execute(self.client.get(url)).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> CoolifyResult<T> {
        let url = self.build_url(path);
        debug!(url = %url, "POST request");

        self.execute(self.client.post(url).json(body)).await
    }

    /// Execute a POST request without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> CoolifyResult<T> {
        let url = self.build_url(path);
        debug!(url = %url, "POST request (no body)");

        self.execute(self.client.post(url)).await
    }

    /// Execute a PATCH request with a JSON body.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> CoolifyResult<T> {
        let url = self.build_url(path);
        debug!(url = %url, "PATCH request");

        self.execute(self.client.patch(url).json(body)).await
    }

    /// Execute a DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> CoolifyResult<T> {
        let url = self.build_url(path);
        debug!(url = %url, "DELETE request");

        self.execute(self.client.delete(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
        value: i32,
    }

    #[derive(Debug, Serialize)]
    struct TestRequest {
        name: String,
    }

    fn create_transport(base_url: &str) -> HttpTransport {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            access_token: "test-token".to_string(),
            timeout: Duration::from_secs(5),
        };
        HttpTransport::new(Arc::new(config.validate().unwrap())).unwrap()
    }

    #[tokio::test]
    async fn test_get_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "success".to_string(),
                value: 42,
            }))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());

        let result: TestResponse = transport.get("/test").await.unwrap();
        assert_eq!(result.message, "success");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_headers_attached() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/protected"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "authorized".to_string(),
                value: 100,
            }))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());

        let result: TestResponse = transport.get("/protected").await.unwrap();
        assert_eq!(result.message, "authorized");
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/create"))
            .and(body_json(serde_json::json!({"name": "test"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(TestResponse {
                message: "created".to_string(),
                value: 1,
            }))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());

        let request = TestRequest {
            name: "test".to_string(),
        };
        let result: TestResponse = transport.post("/create", &request).await.unwrap();
        assert_eq!(result.message, "created");
    }

    #[tokio::test]
    async fn test_patch_request() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/v1/update"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "updated".to_string(),
                value: 2,
            }))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());

        let request = TestRequest {
            name: "updated".to_string(),
        };
        let result: TestResponse = transport.patch("/update", &request).await.unwrap();
        assert_eq!(result.message, "updated");
    }

    #[tokio::test]
    async fn test_delete_request() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/v1/remove"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "deleted".to_string(),
                value: 0,
            }))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());

        let result: TestResponse = transport.delete("/remove").await.unwrap();
        assert_eq!(result.message, "deleted");
    }

    #[tokio::test]
    async fn test_error_message_from_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/missing"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "Not found"})),
            )
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());

        let result: CoolifyResult<TestResponse> = transport.get("/missing").await;
        match result {
            Err(CoolifyError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not found");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_without_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());

        let err = transport.get::<TestResponse>("/broken").await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/garbled"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());

        let err = transport.get::<TestResponse>("/garbled").await.unwrap_err();
        assert!(matches!(err, CoolifyError::InvalidResponse { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Nothing listens on port 1.
        let transport = create_transport("http://127.0.0.1:1");

        let err = transport.get::<TestResponse>("/servers").await.unwrap_err();
        assert!(err.is_connection());
        assert!(err.to_string().contains("http://127.0.0.1:1"));
    }

    #[test]
    fn test_build_url() {
        let transport = create_transport("http://localhost:8080/");
        assert_eq!(
            transport.build_url("/servers"),
            "http://localhost:8080/api/v1/servers"
        );
    }
}
