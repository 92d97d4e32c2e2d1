//! Duplicate document tool.
//!
//! Copies a document in two sequential requests: fetch the source, then
//! create the target from its content. A failure of either request stops the
//! tool. Nothing is rolled back if the second request fails.

use reqwest::StatusCode;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::super::common::TiptapJson;
use crate::domains::tools::executor::{
    ApiCall, ApiClient, ResponsePlan, SuccessRender, text_result,
};
use crate::domains::tools::{CollaborationTool, ToolError};

const ACTIVITY: &str = "duplicating document";

/// Parameters for document duplication.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateDocumentParams {
    #[schemars(description = "ID of the source document to duplicate")]
    pub source_id: String,

    #[schemars(description = "ID for the new duplicated document")]
    pub target_id: String,
}

/// Duplicate Document Tool implementation.
#[derive(Debug, Clone)]
pub struct DuplicateDocumentTool;

impl DuplicateDocumentTool {
    /// Source content with the target id set on it.
    fn duplicate_body(source: &str, target_id: &str) -> Result<TiptapJson, ToolError> {
        let value: Value = serde_json::from_str(source)
            .map_err(|e| ToolError::decode(format!("Invalid source document: {}", e)))?;

        match value {
            Value::Object(mut document) => {
                document.insert("id".to_string(), Value::String(target_id.to_string()));
                Ok(document)
            }
            _ => Err(ToolError::decode("Source document is not a JSON object")),
        }
    }
}

#[async_trait::async_trait]
impl CollaborationTool for DuplicateDocumentTool {
    const NAME: &'static str = "duplicate-document";
    const DESCRIPTION: &'static str = "Duplicate a collaborative document";
    type Params = DuplicateDocumentParams;

    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult {
        let DuplicateDocumentParams {
            source_id,
            target_id,
        } = params;

        let fetch_plan = ResponsePlan::new(
            ACTIVITY,
            "Failed to retrieve source document",
            SuccessRender::fixed(String::new()),
        )
        .on_status(
            StatusCode::NOT_FOUND,
            format!("Source document with ID {} not found.", source_id),
        );

        let source = match client
            .send(ApiCall::get(format!("/api/documents/{}", source_id)))
            .await
        {
            Ok(reply) if reply.is_success() => reply,
            Ok(reply) => return text_result(fetch_plan.render(&reply)),
            Err(err) => return text_result(fetch_plan.error(&err)),
        };

        let body = match Self::duplicate_body(&source.body, &target_id) {
            Ok(body) => body,
            Err(err) => return text_result(fetch_plan.error(&err)),
        };

        info!("Creating duplicate '{}' of '{}'", target_id, source_id);

        let create_plan = ResponsePlan::new(
            ACTIVITY,
            "Failed to create duplicate document",
            SuccessRender::fixed(format!(
                "Document {} successfully duplicated to {}.",
                source_id, target_id
            )),
        )
        .on_status(
            StatusCode::CONFLICT,
            format!(
                "Target document with ID {} already exists. Choose a different ID or delete the existing document first.",
                target_id
            ),
        );

        client
            .run(
                ApiCall::post("/api/documents?format=json").json(body.into()),
                &create_plan,
            )
            .await
    }
}
