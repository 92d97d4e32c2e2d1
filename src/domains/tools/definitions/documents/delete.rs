//! Delete document tool.

use reqwest::{Method, StatusCode};
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::CollaborationTool;
use crate::domains::tools::executor::{ApiCall, ApiClient, ResponsePlan, SuccessRender};

/// Parameters for document deletion.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteDocumentParams {
    #[schemars(description = "ID of the document to delete")]
    pub id: String,
}

/// Delete Document Tool implementation.
#[derive(Debug, Clone)]
pub struct DeleteDocumentTool;

#[async_trait::async_trait]
impl CollaborationTool for DeleteDocumentTool {
    const NAME: &'static str = "delete-document";
    const DESCRIPTION: &'static str = "Delete a collaborative document";
    type Params = DeleteDocumentParams;

    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult {
        let id = params.id;
        let plan = ResponsePlan::new(
            "deleting document",
            "Failed to delete document",
            SuccessRender::fixed(format!("Document with ID {} deleted successfully.", id)),
        )
        .on_status(StatusCode::NOT_FOUND, format!("Document with ID {} not found.", id));

        client
            .run(
                ApiCall::new(Method::DELETE, format!("/api/documents/{}", id)),
                &plan,
            )
            .await
    }
}
