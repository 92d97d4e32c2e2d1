//! Encrypt document tool.

use reqwest::StatusCode;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::TiptapJson;
use crate::domains::tools::CollaborationTool;
use crate::domains::tools::executor::{ApiCall, ApiClient, ResponsePlan, SuccessRender};

/// Parameters for document encryption.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EncryptDocumentParams {
    #[schemars(description = "ID of the document to encrypt")]
    pub id: String,

    /// Sent as the request body when present.
    #[serde(default)]
    #[schemars(description = "Document content in Tiptap JSON format to encrypt (optional)")]
    pub content: Option<TiptapJson>,
}

/// Encrypt Document Tool implementation.
#[derive(Debug, Clone)]
pub struct EncryptDocumentTool;

#[async_trait::async_trait]
impl CollaborationTool for EncryptDocumentTool {
    const NAME: &'static str = "encrypt-document";
    const DESCRIPTION: &'static str = "Encrypt a collaborative document";
    type Params = EncryptDocumentParams;

    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult {
        let id = params.id;
        let plan = ResponsePlan::new(
            "encrypting document",
            "Failed to encrypt document",
            SuccessRender::fixed(format!("Document with ID {} encrypted successfully.", id)),
        )
        .on_status(StatusCode::NOT_FOUND, format!("Document with ID {} not found.", id));

        let mut call = ApiCall::post(format!("/api/documents/{}/encrypt", id));
        if let Some(content) = params.content {
            call = call.json(content.into());
        }

        client.run(call, &plan).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::{result_text, test_client};
    use super::*;
    use crate::domains::tools::backend::{RequestBody, mock::MockBackend};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_encrypt_without_content() {
        let backend = Arc::new(MockBackend::new().reply(204, ""));
        let client = test_client(backend.clone());

        let params: EncryptDocumentParams = serde_json::from_value(json!({"id": "d1"})).unwrap();
        let result = EncryptDocumentTool::execute(&client, params).await;
        assert_eq!(
            result_text(&result),
            "Document with ID d1 encrypted successfully."
        );

        let requests = backend.requests();
        assert_eq!(
            requests[0].url,
            "http://localhost:8080/api/documents/d1/encrypt"
        );
        assert_eq!(requests[0].body, RequestBody::Empty);
        assert_eq!(requests[0].header("Content-Type"), None);
    }

    #[tokio::test]
    async fn test_encrypt_with_content() {
        let backend = Arc::new(MockBackend::new().reply(200, ""));
        let client = test_client(backend.clone());

        let params: EncryptDocumentParams =
            serde_json::from_value(json!({"id": "d1", "content": {"type": "doc"}})).unwrap();
        EncryptDocumentTool::execute(&client, params).await;

        let requests = backend.requests();
        assert_eq!(requests[0].body, RequestBody::Json(json!({"type": "doc"})));
        assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_encrypt_not_found() {
        let backend = Arc::new(MockBackend::new().reply(404, ""));
        let client = test_client(backend);

        let params = EncryptDocumentParams {
            id: "gone".to_string(),
            content: None,
        };
        let result = EncryptDocumentTool::execute(&client, params).await;
        assert_eq!(result_text(&result), "Document with ID gone not found.");
    }
}
