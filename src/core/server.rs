//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the
//! [`Dispatcher`].
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool;
//! this file never needs to change when a tool is added.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{Dispatcher, ToolDescriptor, check_catalog};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap
/// to clone; every connection of the TCP transport gets its own clone.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool dispatcher shared by all connections.
    dispatcher: Arc<Dispatcher>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if a catalog entry violates its schema invariants.
    pub fn new(config: Config) -> Result<Self> {
        check_catalog()?;
        let dispatcher = Dispatcher::new(&config.tools);
        Ok(Self::with_dispatcher(config, dispatcher))
    }

    /// Create a server around an existing dispatcher (e.g. one with a fixed clock).
    pub fn with_dispatcher(config: Config, dispatcher: Dispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Instructions sent to clients during initialization.
    pub fn instructions(&self) -> String {
        format!(
            "{} provides a greeting tool (say_hello) and a clock tool (get_time).",
            self.name()
        )
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.dispatcher
            .list_tools()
            .iter()
            .map(ToolDescriptor::to_tool)
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Returns the `{ content, isError }` envelope on success and the error
    /// message (e.g. `Unknown tool: foo`) on failure.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, String> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => Some(map),
            serde_json::Value::Null => None,
            _ => return Err("Tool arguments must be an object".to_string()),
        };

        let result = self
            .dispatcher
            .call_tool_json(name, arguments)
            .map_err(|e| e.to_string())?;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        let tools = self
            .dispatcher
            .list_tools()
            .iter()
            .map(ToolDescriptor::to_tool)
            .collect();
        Ok(ListToolsResult {
            tools,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.dispatcher
            .call_tool_json(&request.name, request.arguments)
            .map_err(McpError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::FixedClock;
    use chrono::NaiveTime;

    fn test_server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_server_identity() {
        let server = test_server();
        assert_eq!(server.name(), "Hello World Server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));

        let info = server.get_info();
        assert_eq!(info.server_info.name, "Hello World Server");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_list_tools_json() {
        let tools = test_server().list_tools();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "say_hello");
        assert_eq!(tools[1]["name"], "get_time");
        assert_eq!(tools[0]["inputSchema"]["required"], serde_json::json!(["name"]));
        assert_eq!(tools[1]["description"], "現在の時刻を返します");
    }

    #[test]
    fn test_call_tool_envelope() {
        let server = test_server();
        let result = tokio_test::block_on(
            server.call_tool("say_hello", serde_json::json!({ "name": "Taro" })),
        )
        .unwrap();

        assert_eq!(
            result,
            serde_json::json!({
                "content": [{ "type": "text", "text": "こんにちは、Taroさん！" }],
                "isError": false
            })
        );
    }

    #[test]
    fn test_call_tool_fixed_clock() {
        let time = NaiveTime::from_hms_opt(23, 0, 1).unwrap();
        let dispatcher = Dispatcher::default().with_clock(Arc::new(FixedClock(time)));
        let server = McpServer::with_dispatcher(Config::default(), dispatcher);

        let result = tokio_test::block_on(
            server.call_tool("get_time", serde_json::json!({ "format": "12h" })),
        )
        .unwrap();
        assert_eq!(result["content"][0]["text"], "現在の時刻: 11:00:01 午後");
    }

    #[test]
    fn test_call_tool_unknown() {
        let server = test_server();
        let err = tokio_test::block_on(server.call_tool("nonexistent", serde_json::json!({})))
            .unwrap_err();
        assert_eq!(err, "Unknown tool: nonexistent");
    }

    #[test]
    fn test_call_tool_rejects_non_object_arguments() {
        let server = test_server();
        let result =
            tokio_test::block_on(server.call_tool("get_time", serde_json::json!(["24h"])));
        assert!(result.is_err());
    }
}
