//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The catalogue of tool names and metadata
//! - Dispatch of a tool call by name, outside the rmcp router

use std::sync::Arc;

use rmcp::model::CallToolResult;
use tracing::warn;

use super::definitions::{
    BatchImportDocumentsTool, CollaborationHealthTool, CreateDocumentTool, DeleteDocumentTool,
    DocumentStatisticsTool, DuplicateDocumentTool, EncryptDocumentTool, ExportMarkdownTool,
    GetDocumentTool, ImportMarkdownTool, ListDocumentsTool, SearchDocumentsTool,
    ServerStatisticsTool, UpdateDocumentTool,
};
use super::executor::ApiClient;
use super::{CollaborationTool, ToolError};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    client: Arc<ApiClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            CollaborationHealthTool::NAME,
            ListDocumentsTool::NAME,
            GetDocumentTool::NAME,
            CreateDocumentTool::NAME,
            UpdateDocumentTool::NAME,
            DeleteDocumentTool::NAME,
            DuplicateDocumentTool::NAME,
            EncryptDocumentTool::NAME,
            SearchDocumentsTool::NAME,
            BatchImportDocumentsTool::NAME,
            ServerStatisticsTool::NAME,
            DocumentStatisticsTool::NAME,
            ImportMarkdownTool::NAME,
            ExportMarkdownTool::NAME,
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Fails only for an unknown name or arguments that do not match the
    /// tool's schema; backend problems are part of the returned result.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let client = &self.client;
        match name {
            CollaborationHealthTool::NAME => {
                dispatch::<CollaborationHealthTool>(client, arguments).await
            }
            ListDocumentsTool::NAME => dispatch::<ListDocumentsTool>(client, arguments).await,
            GetDocumentTool::NAME => dispatch::<GetDocumentTool>(client, arguments).await,
            CreateDocumentTool::NAME => dispatch::<CreateDocumentTool>(client, arguments).await,
            UpdateDocumentTool::NAME => dispatch::<UpdateDocumentTool>(client, arguments).await,
            DeleteDocumentTool::NAME => dispatch::<DeleteDocumentTool>(client, arguments).await,
            DuplicateDocumentTool::NAME => {
                dispatch::<DuplicateDocumentTool>(client, arguments).await
            }
            EncryptDocumentTool::NAME => dispatch::<EncryptDocumentTool>(client, arguments).await,
            SearchDocumentsTool::NAME => dispatch::<SearchDocumentsTool>(client, arguments).await,
            BatchImportDocumentsTool::NAME => {
                dispatch::<BatchImportDocumentsTool>(client, arguments).await
            }
            ServerStatisticsTool::NAME => dispatch::<ServerStatisticsTool>(client, arguments).await,
            DocumentStatisticsTool::NAME => {
                dispatch::<DocumentStatisticsTool>(client, arguments).await
            }
            ImportMarkdownTool::NAME => dispatch::<ImportMarkdownTool>(client, arguments).await,
            ExportMarkdownTool::NAME => dispatch::<ExportMarkdownTool>(client, arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

async fn dispatch<T: CollaborationTool>(
    client: &ApiClient,
    arguments: serde_json::Value,
) -> Result<CallToolResult, ToolError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::json!({}),
        other => other,
    };
    let params: T::Params = serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
    Ok(T::execute(client, params).await)
}
