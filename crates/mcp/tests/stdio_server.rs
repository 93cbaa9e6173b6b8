// End-to-end tests of the JSON-RPC loop over in-memory pipes

use coolify_mcp::protocol::{CallToolResult, JsonRpcRequest, JsonRpcResponse};
use coolify_mcp::{McpServer, ServerError};
use coolify_sdk::ClientConfig;
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_platform() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/servers"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "uuid": "srv-1", "name": "localhost", "ip": "127.0.0.1" }
        ])))
        .mount(&server)
        .await;

    server
}

/// Run a server over a duplex pipe, send `requests`, and collect the
/// responses keyed by id once the server has drained.
async fn exchange(base_url: &str, requests: &[String]) -> HashMap<i64, JsonRpcResponse> {
    let server = McpServer::new(ClientConfig::new(base_url, "test-token")).unwrap();

    let (client_side, server_side) = tokio::io::duplex(256 * 1024);
    let (server_read, server_write) = tokio::io::split(server_side);
    let (mut client_read, mut client_write) = tokio::io::split(client_side);

    let handle =
        tokio::spawn(async move { server.connect(BufReader::new(server_read), server_write).await });

    for request in requests {
        client_write.write_all(request.as_bytes()).await.unwrap();
        client_write.write_all(b"\n").await.unwrap();
    }
    client_write.shutdown().await.unwrap();

    let mut output = String::new();
    client_read.read_to_string(&mut output).await.unwrap();
    handle.await.unwrap().unwrap();

    output
        .lines()
        .map(|line| {
            let response: JsonRpcResponse = serde_json::from_str(line).unwrap();
            (response.id.as_i64().unwrap(), response)
        })
        .collect()
}

fn request(id: i64, method: &str, params: Value) -> String {
    serde_json::to_string(&JsonRpcRequest::new(id, method, params)).unwrap()
}

fn tool_text(response: &JsonRpcResponse) -> CallToolResult {
    serde_json::from_value(response.result.clone().unwrap()).unwrap()
}

#[tokio::test]
async fn test_session_over_pipes() {
    let platform = mock_platform().await;
    let applications = json!([
        { "uuid": "app-1", "name": "web", "fqdn": "https://web.example.com", "custom": { "nested": true } }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/v1/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(applications.clone()))
        .mount(&platform)
        .await;

    let requests = vec![
        request(1, "initialize", json!({ "protocolVersion": "2024-11-05", "capabilities": {} })),
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#.to_string(),
        request(2, "tools/list", json!({})),
        request(3, "tools/call", json!({ "name": "list_applications", "arguments": {} })),
        request(4, "ping", json!({})),
    ];

    let responses = exchange(&platform.uri(), &requests).await;
    assert_eq!(responses.len(), 4, "notifications must not be answered");

    let init = responses[&1].result.clone().unwrap();
    assert_eq!(init["serverInfo"]["name"], "coolify");

    let tools = responses[&2].result.clone().unwrap();
    assert_eq!(tools["tools"].as_array().unwrap().len(), 27);

    let result = tool_text(&responses[&3]);
    assert!(result.is_error.is_none());
    let content: Value = serde_json::from_str(result.content[0].as_text()).unwrap();
    assert_eq!(content, applications);

    assert_eq!(responses[&4].result, Some(json!({})));
}

#[tokio::test]
async fn test_platform_error_reaches_caller() {
    let platform = mock_platform().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/applications/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not found" })))
        .mount(&platform)
        .await;

    let requests = vec![request(
        1,
        "tools/call",
        json!({ "name": "get_application", "arguments": { "uuid": "missing" } }),
    )];

    let responses = exchange(&platform.uri(), &requests).await;
    let result = tool_text(&responses[&1]);
    assert_eq!(result.is_error, Some(true));
    assert_eq!(result.content[0].as_text(), "Not found");
}

#[tokio::test]
async fn test_missing_uuid_sends_no_request() {
    let platform = mock_platform().await;

    let requests = vec![request(
        1,
        "tools/call",
        json!({ "name": "get_service", "arguments": {} }),
    )];

    let responses = exchange(&platform.uri(), &requests).await;
    let error = responses[&1].error.clone().unwrap();
    assert_eq!(error.code, -32602);
    assert!(error.message.contains("uuid"));

    // Only the connection check reached the platform.
    let received = platform.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.path(), "/api/v1/servers");
}

#[tokio::test]
async fn test_resource_read() {
    let platform = mock_platform().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/applications/app-7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "uuid": "app-7", "name": "docs" })),
        )
        .mount(&platform)
        .await;

    let requests = vec![request(
        1,
        "resources/read",
        json!({ "uri": "coolify/applications/app-7" }),
    )];

    let responses = exchange(&platform.uri(), &requests).await;
    let result = responses[&1].result.clone().unwrap();
    assert_eq!(result["contents"][0]["uri"], "coolify/applications/app-7");

    let text: Value = serde_json::from_str(result["contents"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(text, json!({ "uuid": "app-7", "name": "docs" }));
}

#[tokio::test]
async fn test_connect_rejected_token() {
    let platform = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/servers"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthenticated." })),
        )
        .mount(&platform)
        .await;

    let server = McpServer::new(ClientConfig::new(platform.uri(), "wrong-token")).unwrap();
    let (reader, _keep_open) = tokio::io::duplex(64);

    let err = server
        .connect(BufReader::new(reader), tokio::io::sink())
        .await
        .unwrap_err();

    assert!(matches!(err, ServerError::Connect(_)));
    assert!(err.to_string().contains("Unauthenticated."));
}

#[tokio::test]
async fn test_initialize_before_connect() {
    let platform = mock_platform().await;

    let mut server = McpServer::new(ClientConfig::new(platform.uri(), "test-token")).unwrap();
    server.initialize().unwrap();
    assert!(matches!(
        server.initialize(),
        Err(ServerError::AlreadyInitialized)
    ));

    // connect accepts an already-initialized server
    let (reader, writer) = tokio::io::duplex(64);
    drop(writer);
    server
        .connect(BufReader::new(reader), tokio::io::sink())
        .await
        .unwrap();
}
