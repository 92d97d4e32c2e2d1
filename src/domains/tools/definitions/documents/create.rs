//! Create document tool.
//!
//! Creates a new collaborative document from Tiptap JSON content. A skeleton
//! document is used when no content is supplied.

use reqwest::StatusCode;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{TiptapJson, default_document};
use crate::domains::tools::CollaborationTool;
use crate::domains::tools::executor::{ApiCall, ApiClient, ResponsePlan, SuccessRender};

/// Parameters for document creation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDocumentParams {
    /// Name of the new document, used as its identifier.
    #[schemars(description = "name of the new document")]
    pub name: String,

    /// Initial content of the document.
    #[serde(default = "default_document")]
    #[schemars(
        description = "Document content in Tiptap JSON format (uses default if not provided)"
    )]
    pub content: TiptapJson,
}

/// Create Document Tool implementation.
#[derive(Debug, Clone)]
pub struct CreateDocumentTool;

impl CreateDocumentTool {
    fn plan(name: &str) -> ResponsePlan {
        ResponsePlan::new(
            "creating document",
            "Failed to create document",
            SuccessRender::json(
                "Document created successfully",
                format!("Document '{}' created successfully", name),
            ),
        )
        .on_status(
            StatusCode::CONFLICT,
            format!(
                "Document with name {} already exists. Choose a different name or delete the existing document first.",
                name
            ),
        )
    }
}

#[async_trait::async_trait]
impl CollaborationTool for CreateDocumentTool {
    const NAME: &'static str = "create-document";
    const DESCRIPTION: &'static str = "Create a new collaborative document";
    type Params = CreateDocumentParams;

    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult {
        let call = ApiCall::post(format!("/api/documents/{}?format=json", params.name))
            .json(params.content.into());
        client.run(call, &Self::plan(&params.name)).await
    }
}
