//! Batch import tool.
//!
//! Bulk-loads documents through the admin API. Each inner array holds the
//! versions of one document.

use reqwest::{Method, StatusCode};
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::super::common::TiptapJson;
use crate::domains::tools::executor::{
    ApiCall, ApiClient, ResponsePlan, SuccessRender, text_result,
};
use crate::domains::tools::{CollaborationTool, ToolError};

/// One stored version of a document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DocumentVersion {
    #[schemars(description = "Creation timestamp in ISO format")]
    pub created_at: String,

    #[schemars(description = "Document version number")]
    pub version: Number,

    #[schemars(description = "Document name/identifier")]
    pub name: String,

    #[schemars(description = "Document content in Tiptap JSON format")]
    pub tiptap_json: TiptapJson,
}

/// Parameters for batch import.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BatchImportDocumentsParams {
    #[schemars(
        description = "Array of document arrays, where each inner array represents versions of a single document"
    )]
    pub documents: Vec<Vec<DocumentVersion>>,
}

/// Batch Import Documents Tool implementation.
#[derive(Debug, Clone)]
pub struct BatchImportDocumentsTool;

#[async_trait::async_trait]
impl CollaborationTool for BatchImportDocumentsTool {
    const NAME: &'static str = "batch-import-documents";
    const DESCRIPTION: &'static str =
        "Bulk import multiple documents using predefined JSON structure";
    type Params = BatchImportDocumentsParams;

    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult {
        let plan = ResponsePlan::new(
            "importing documents",
            "Failed to import documents",
            SuccessRender::fixed(format!(
                "Successfully imported {} document groups with their versions.",
                params.documents.len()
            )),
        )
        .on_status(
            StatusCode::BAD_REQUEST,
            "Invalid data provided for batch import. Please check the document structure and format.",
        );

        let body = match serde_json::to_value(&params.documents) {
            Ok(body) => body,
            Err(e) => {
                return text_result(plan.error(&ToolError::invalid_arguments(e.to_string())));
            }
        };

        client
            .run(
                ApiCall::new(Method::PUT, "/api/admin/batch-import").json(body),
                &plan,
            )
            .await
    }
}
