//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. The server only exposes tools; each tool call becomes one or
//! two HTTP requests against the configured collaboration backend.
//!
//! The ToolRouter is built in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{
    ApiClient, HttpBackend, ReqwestBackend, ToolError, ToolRegistry, build_tool_router,
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the collaboration tools.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared request executor used by every tool.
    client: Arc<ApiClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to the backend over HTTP.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let backend = ReqwestBackend::new()?;
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    /// Create a new MCP server using the given HTTP backend.
    pub fn with_backend(config: Config, backend: Arc<dyn HttpBackend>) -> Self {
        let config = Arc::new(config);
        let client = Arc::new(ApiClient::new(config.clone(), backend));

        Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config,
            client,
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

    /// List all available tools as JSON descriptors.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name, bypassing the MCP transport.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        ToolRegistry::new(self.client.clone())
            .call_tool(name, arguments)
            .await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Manage Tiptap collaborative documents: create, read, update, delete, \
                 duplicate, search, batch import, encrypt, statistics, health checks and \
                 Markdown import/export."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::backend::mock::MockBackend;
    use crate::domains::tools::definitions::common::result_text;

    fn server(backend: MockBackend) -> McpServer {
        let config = Config::with_backend("http://localhost:8080", None);
        McpServer::with_backend(config, Arc::new(backend))
    }

    #[test]
    fn test_server_identity() {
        let server = server(MockBackend::new());
        assert_eq!(server.name(), "tiptap-collaboration-mcp");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_list_tools() {
        let tools = server(MockBackend::new()).list_tools();
        assert_eq!(tools.len(), 14);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[test]
    fn test_capabilities_enable_tools() {
        let info = server(MockBackend::new()).get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_new_uses_http_backend() {
        let config = Config::with_backend("http://localhost:8080", Some("token".into()));
        let server = McpServer::new(config).unwrap();
        assert_eq!(server.list_tools().len(), 14);
    }

    #[tokio::test]
    async fn test_call_tool_through_server() {
        let server = server(MockBackend::new().reply(200, "[]"));
        let result = server
            .call_tool("list-documents", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result_text(&result), "Documents: []");
    }
}
