//! MCP Server implementation
//!
//! The main server struct that coordinates MCP protocol handling with the
//! site pipelines.

use std::io::{BufRead, Write};

use serde_json::{Value, json};
use site_core::Site;

use crate::handlers::handle_tool_call;
use crate::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, InitializeResult, JsonRpcRequest, JsonRpcResponse,
    METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION, ServerCapabilities, ServerInfo,
    ToolCallParams, ToolsCapability,
};
use crate::tools::{ToolDefinition, ToolResult, get_tool_definitions};
use crate::{Error, Result};

/// MCP Server for a static-site content repository
///
/// Requests are handled one at a time; each tool call runs to completion
/// before the next line is read.
///
/// # Example
///
/// ```ignore
/// use site_core::Site;
/// use site_mcp::SiteMcpServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = SiteMcpServer::new(Site::open("./astro")?);
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct SiteMcpServer {
    site: Site,
    tools: Vec<ToolDefinition>,
}

impl SiteMcpServer {
    pub fn new(site: Site) -> Self {
        Self {
            site,
            tools: get_tool_definitions(),
        }
    }

    /// Serve MCP over stdin/stdout until stdin closes.
    pub async fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.serve(stdin.lock(), stdout.lock()).await
    }

    /// Serve newline-delimited JSON-RPC from `input`, writing responses to
    /// `output`.
    pub async fn serve<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        tracing::info!(root = %self.site.root().normalized(), "MCP server ready, listening on stdio");

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            let response = match self.handle_message(&line).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to handle message");
                    let error_response =
                        JsonRpcResponse::error(None, INTERNAL_ERROR, format!("Internal error: {e}"));
                    Some(serde_json::to_string(&error_response)?)
                }
            };

            if let Some(response) = response {
                writeln!(output, "{response}")?;
                output.flush()?;
            }
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Returns the serialized response, or `None` for notifications.
    pub async fn handle_message(&self, message: &str) -> Result<Option<String>> {
        let request: JsonRpcRequest = match serde_json::from_str(message) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed JSON-RPC message");
                let response = JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {e}"));
                return Ok(Some(serde_json::to_string(&response)?));
            }
        };

        if request.is_notification() {
            tracing::debug!(method = %request.method, "Notification received");
            return Ok(None);
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id)?,
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id)?,
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map(Some).map_err(Error::from)
    }

    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "site-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    fn handle_tools_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        Ok(JsonRpcResponse::success(
            id,
            json!({ "tools": serde_json::to_value(&self.tools)? }),
        ))
    }

    /// Tool failures are successful responses carrying `isError: true`.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return Ok(JsonRpcResponse::error(
                    id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        let tool_result =
            match handle_tool_call(&self.site, &tool_params.name, tool_params.arguments).await {
                Ok(result) => result,
                Err(e) => ToolResult::error(e.to_string()),
            };
        if tool_result.is_error {
            tracing::warn!(tool = %tool_params.name, "Tool call reported an error");
        }

        Ok(JsonRpcResponse::success(id, serde_json::to_value(tool_result)?))
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use site_test_utils::site::TestSite;

    fn server(test: &TestSite) -> SiteMcpServer {
        SiteMcpServer::new(Site::open(test.root()).unwrap())
    }

    async fn call(server: &SiteMcpServer, request: &str) -> Value {
        let response = server.handle_message(request).await.unwrap().unwrap();
        serde_json::from_str(&response).unwrap()
    }

    #[tokio::test]
    async fn initialize_reports_protocol_and_server() {
        let test = TestSite::new();
        let server = server(&test);

        let response = call(
            &server,
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"1.0"}}}"#,
        )
        .await;

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(response["result"]["serverInfo"]["name"], "site-mcp");
        assert!(response["result"]["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn notifications_get_no_response() {
        let test = TestSite::new();
        let server = server(&test);

        for request in [
            r#"{"jsonrpc":"2.0","method":"initialized"}"#,
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            r#"{"jsonrpc":"2.0","method":"tools/list"}"#,
        ] {
            assert_eq!(server.handle_message(request).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn ping_returns_empty_result() {
        let test = TestSite::new();
        let response = call(&server(&test), r#"{"jsonrpc":"2.0","id":"p","method":"ping"}"#).await;

        assert_eq!(response["id"], "p");
        assert_eq!(response["result"], json!({}));
    }

    #[tokio::test]
    async fn tools_list_has_three_tools() {
        let test = TestSite::new();
        let response = call(&server(&test), r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#).await;

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 3);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[tokio::test]
    async fn unknown_method_is_method_not_found() {
        let test = TestSite::new();
        let response = call(
            &server(&test),
            r#"{"jsonrpc":"2.0","id":4,"method":"resources/list","params":{}}"#,
        )
        .await;

        assert_eq!(response["id"], 4);
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
        assert!(response.get("result").is_none());
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let test = TestSite::new();
        let response = call(&server(&test), r#"{"invalid json"#).await;

        assert_eq!(response["error"]["code"], PARSE_ERROR);
        assert!(response.get("id").is_none());
    }

    #[tokio::test]
    async fn tools_call_without_name_is_invalid_params() {
        let test = TestSite::new();
        let response = call(
            &server(&test),
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"arguments":{}}}"#,
        )
        .await;

        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }

    #[tokio::test]
    async fn unknown_tool_is_error_result() {
        let test = TestSite::new();
        let response = call(
            &server(&test),
            r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"unknown_tool","arguments":{}}}"#,
        )
        .await;

        assert_eq!(response["result"]["isError"], true);
        assert_eq!(response["result"]["content"][0]["text"], "unknown tool: unknown_tool");
    }

    #[tokio::test]
    async fn serve_answers_each_request_line() {
        let test = TestSite::new();
        let server = server(&test);
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
            "\n",
        );
        let mut output = Vec::new();

        server.serve(input.as_bytes(), &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                r#"{"jsonrpc":"2.0","id":1,"result":{}}"#,
                r#"{"jsonrpc":"2.0","id":2,"result":{}}"#,
            ]
        );
    }
}
