//! Addressable resource routes.
//!
//! A route is a template such as `coolify/applications/{id}` paired with a
//! description and an async handler. Routes are registered explicitly and
//! resolved by [`ResourceRegistry::invoke`]. Read-only routes are also exposed
//! through the MCP `resources/*` methods.

use crate::error::ToolError;
use crate::tools::parse_arguments;
use coolify_core::CreateApplicationRequest;
use coolify_sdk::CoolifyClient;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Values captured from `{name}` segments of a route template
pub type RouteParams = HashMap<String, String>;

type HandlerFuture = Pin<Box<dyn Future<Output = Result<serde_json::Value, ToolError>> + Send>>;
type Handler = Box<dyn Fn(RouteParams, Option<serde_json::Value>) -> HandlerFuture + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Safe to expose via `resources/read`
    Read,
    /// Mutates platform state; reachable only through [`ResourceRegistry::invoke`]
    Write,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Parsed route template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    pub fn parse(template: &str) -> Self {
        let segments = template
            .split('/')
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                {
                    Some(name) => Segment::Param(name.to_string()),
                    None => Segment::Literal(segment.to_string()),
                }
            })
            .collect();

        Self {
            raw: template.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the template has no `{param}` segments
    pub fn is_concrete(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Literal(_)))
    }

    fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Literal(_)))
            .count()
    }

    /// Match a concrete URI, capturing parameters. Empty parameter values
    /// never match.
    pub fn matches(&self, uri: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = uri.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

struct Route {
    template: RouteTemplate,
    description: String,
    access: RouteAccess,
    handler: Handler,
}

/// Summary of a registered route
#[derive(Debug, Clone)]
pub struct RouteInfo {
    pub template: String,
    pub description: String,
    pub access: RouteAccess,
    pub concrete: bool,
}

/// Route table keyed by template
#[derive(Default)]
pub struct ResourceRegistry {
    routes: Vec<Route>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Registering the same template again replaces it.
    pub fn register<F, Fut>(
        &mut self,
        template: &str,
        description: &str,
        access: RouteAccess,
        handler: F,
    ) where
        F: Fn(RouteParams, Option<serde_json::Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value, ToolError>> + Send + 'static,
    {
        self.routes.retain(|route| route.template.as_str() != template);
        self.routes.push(Route {
            template: RouteTemplate::parse(template),
            description: description.to_string(),
            access,
            handler: Box::new(move |params, body| Box::pin(handler(params, body))),
        });
    }

    pub fn routes(&self) -> Vec<RouteInfo> {
        self.routes
            .iter()
            .map(|route| RouteInfo {
                template: route.template.as_str().to_string(),
                description: route.description.clone(),
                access: route.access,
                concrete: route.template.is_concrete(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve `uri`, preferring the route with the most literal segments.
    fn resolve(&self, uri: &str) -> Option<(&Route, RouteParams)> {
        self.routes
            .iter()
            .filter_map(|route| route.template.matches(uri).map(|params| (route, params)))
            .max_by_key(|(route, _)| route.template.literal_count())
    }

    /// Run the route matching `uri`.
    pub async fn invoke(
        &self,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ToolError> {
        let (route, params) = self
            .resolve(uri)
            .ok_or_else(|| ToolError::UnknownResource(uri.to_string()))?;
        (route.handler)(params, body).await
    }

    /// Run a read-only route; write routes are reported as unknown.
    pub async fn read(&self, uri: &str) -> Result<serde_json::Value, ToolError> {
        match self.resolve(uri) {
            Some((route, params)) if route.access == RouteAccess::Read => {
                (route.handler)(params, None).await
            }
            _ => Err(ToolError::UnknownResource(uri.to_string())),
        }
    }
}

fn param(params: &RouteParams, name: &str) -> String {
    params.get(name).cloned().unwrap_or_default()
}

/// Register the application routes against `client`.
pub fn register_application_routes(registry: &mut ResourceRegistry, client: Arc<CoolifyClient>) {
    let c = client.clone();
    registry.register(
        "coolify/applications/list",
        "List all applications",
        RouteAccess::Read,
        move |_, _| {
            let client = c.clone();
            async move {
                let applications = client.list_applications().await?;
                Ok::<_, ToolError>(serde_json::to_value(applications)?)
            }
        },
    );

    let c = client.clone();
    registry.register(
        "coolify/applications/{id}",
        "Get details of a specific application",
        RouteAccess::Read,
        move |params, _| {
            let client = c.clone();
            async move {
                let id = param(&params, "id");
                Ok::<_, ToolError>(serde_json::to_value(client.get_application(&id).await?)?)
            }
        },
    );

    let c = client.clone();
    registry.register(
        "coolify/applications/create",
        "Create a new application",
        RouteAccess::Write,
        move |_, body| {
            let client = c.clone();
            async move {
                let request: CreateApplicationRequest = parse_arguments(
                    "coolify/applications/create",
                    body.unwrap_or(serde_json::Value::Null),
                )?;
                Ok::<_, ToolError>(serde_json::to_value(
                    client.create_application(&request).await?,
                )?)
            }
        },
    );

    let c = client;
    registry.register(
        "coolify/applications/{id}/delete",
        "Delete an application",
        RouteAccess::Write,
        move |params, _| {
            let client = c.clone();
            async move {
                let id = param(&params, "id");
                Ok::<_, ToolError>(serde_json::to_value(client.delete_application(&id).await?)?)
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use coolify_sdk::ClientConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn registry_for(base_url: &str) -> ResourceRegistry {
        let client = CoolifyClient::new(ClientConfig::new(base_url, "test-token")).unwrap();
        let mut registry = ResourceRegistry::new();
        register_application_routes(&mut registry, Arc::new(client));
        registry
    }

    #[test]
    fn test_template_matching() {
        let template = RouteTemplate::parse("coolify/applications/{id}");
        assert!(!template.is_concrete());

        let params = template.matches("coolify/applications/abc").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("abc"));

        assert!(template.matches("coolify/applications/").is_none());
        assert!(template.matches("coolify/applications/abc/delete").is_none());
        assert!(template.matches("coolify/servers/abc").is_none());
    }

    #[test]
    fn test_routes_registered() {
        let registry = registry_for("http://127.0.0.1:1");
        let templates: Vec<String> = registry.routes().into_iter().map(|r| r.template).collect();
        assert_eq!(
            templates,
            vec![
                "coolify/applications/list",
                "coolify/applications/{id}",
                "coolify/applications/create",
                "coolify/applications/{id}/delete",
            ]
        );
    }

    #[tokio::test]
    async fn test_literal_route_wins_over_param() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/applications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let registry = registry_for(&server.uri());
        let value = registry.read("coolify/applications/list").await.unwrap();
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn test_get_route_captures_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/applications/app-9"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "uuid": "app-9", "name": "api" })),
            )
            .mount(&server)
            .await;

        let registry = registry_for(&server.uri());
        let value = registry.invoke("coolify/applications/app-9", None).await.unwrap();
        assert_eq!(value["name"], "api");
    }

    #[tokio::test]
    async fn test_create_route_uses_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/applications"))
            .and(body_json(json!({ "name": "from-route" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "uuid": "new" })))
            .expect(1)
            .mount(&server)
            .await;

        let registry = registry_for(&server.uri());
        let value = registry
            .invoke(
                "coolify/applications/create",
                Some(json!({ "name": "from-route" })),
            )
            .await
            .unwrap();
        assert_eq!(value, json!({ "uuid": "new" }));
    }

    #[tokio::test]
    async fn test_create_route_without_body_is_rejected() {
        let registry = registry_for("http://127.0.0.1:1");
        let err = registry
            .invoke("coolify/applications/create", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
    }

    #[tokio::test]
    async fn test_write_routes_hidden_from_read() {
        let registry = registry_for("http://127.0.0.1:1");
        let err = registry
            .read("coolify/applications/app-1/delete")
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::UnknownResource(_)));
    }

    #[tokio::test]
    async fn test_unknown_uri() {
        let registry = registry_for("http://127.0.0.1:1");
        let err = registry.invoke("coolify/nothing", None).await.unwrap_err();
        assert!(matches!(err, ToolError::UnknownResource(uri) if uri == "coolify/nothing"));
    }
}
