//! Update document tool.
//!
//! Replaces a document's content or appends to it, depending on `mode`.

use reqwest::{Method, StatusCode};
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{TiptapJson, UpdateMode};
use crate::domains::tools::CollaborationTool;
use crate::domains::tools::executor::{ApiCall, ApiClient, ResponsePlan, SuccessRender};

/// Parameters for document updates.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateDocumentParams {
    #[schemars(description = "ID of the document to update")]
    pub id: String,

    #[schemars(description = "Document content in Tiptap JSON format")]
    pub content: TiptapJson,

    #[serde(default)]
    #[schemars(
        description = "Update mode: replace entire document or append content (default: replace)"
    )]
    pub mode: UpdateMode,
}

/// Update Document Tool implementation.
#[derive(Debug, Clone)]
pub struct UpdateDocumentTool;

#[async_trait::async_trait]
impl CollaborationTool for UpdateDocumentTool {
    const NAME: &'static str = "update-document";
    const DESCRIPTION: &'static str = "Update a collaborative document with new content";
    type Params = UpdateDocumentParams;

    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult {
        let id = params.id;
        let plan = ResponsePlan::new(
            "updating document",
            "Failed to update document",
            SuccessRender::fixed(format!(
                "Document with ID {} updated successfully using {} mode.",
                id, params.mode
            )),
        )
        .on_status(StatusCode::NOT_FOUND, format!("Document with ID {} not found.", id))
        .on_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Invalid payload or update cannot be applied to document {}.", id),
        );

        let call = ApiCall::new(
            Method::PATCH,
            format!("/api/documents/{}?mode={}", id, params.mode),
        )
        .json(params.content.into());

        client.run(call, &plan).await
    }
}
