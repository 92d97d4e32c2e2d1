//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only lists them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::CollaborationTool;
use super::definitions::{
    BatchImportDocumentsTool, CollaborationHealthTool, CreateDocumentTool, DeleteDocumentTool,
    DocumentStatisticsTool, DuplicateDocumentTool, EncryptDocumentTool, ExportMarkdownTool,
    GetDocumentTool, ImportMarkdownTool, ListDocumentsTool, SearchDocumentsTool,
    ServerStatisticsTool, UpdateDocumentTool,
};
use super::executor::ApiClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<ApiClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CollaborationHealthTool::create_route(client.clone()))
        .with_route(ListDocumentsTool::create_route(client.clone()))
        .with_route(GetDocumentTool::create_route(client.clone()))
        .with_route(CreateDocumentTool::create_route(client.clone()))
        .with_route(UpdateDocumentTool::create_route(client.clone()))
        .with_route(DeleteDocumentTool::create_route(client.clone()))
        .with_route(DuplicateDocumentTool::create_route(client.clone()))
        .with_route(EncryptDocumentTool::create_route(client.clone()))
        .with_route(SearchDocumentsTool::create_route(client.clone()))
        .with_route(BatchImportDocumentsTool::create_route(client.clone()))
        .with_route(ServerStatisticsTool::create_route(client.clone()))
        .with_route(DocumentStatisticsTool::create_route(client.clone()))
        .with_route(ImportMarkdownTool::create_route(client.clone()))
        .with_route(ExportMarkdownTool::create_route(client))
}
