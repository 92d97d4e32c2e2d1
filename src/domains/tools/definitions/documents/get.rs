//! Get document tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::CollaborationTool;
use crate::domains::tools::executor::{ApiCall, ApiClient, ResponsePlan, SuccessRender};

/// Parameters for document retrieval.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDocumentParams {
    #[schemars(description = "ID of the document to retrieve")]
    pub id: String,
}

/// Get Document Tool implementation.
#[derive(Debug, Clone)]
pub struct GetDocumentTool;

#[async_trait::async_trait]
impl CollaborationTool for GetDocumentTool {
    const NAME: &'static str = "get-document";
    const DESCRIPTION: &'static str = "Get information about a collaborative document";
    type Params = GetDocumentParams;

    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult {
        let plan = ResponsePlan::new(
            "retrieving document",
            "Failed to retrieve document",
            SuccessRender::json(
                "Document Information",
                format!("Document with ID {} retrieved successfully", params.id),
            ),
        );
        client
            .run(ApiCall::get(format!("/api/documents/{}", params.id)), &plan)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::{result_text, test_client};
    use super::*;
    use crate::domains::tools::backend::{RequestBody, mock::MockBackend};
    use std::sync::Arc;

    fn params(id: &str) -> GetDocumentParams {
        GetDocumentParams { id: id.to_string() }
    }

    #[tokio::test]
    async fn test_get_document() {
        let backend = Arc::new(MockBackend::new().reply(200, r#"{"type":"doc"}"#));
        let client = test_client(backend.clone());

        let result = GetDocumentTool::execute(&client, params("doc-1")).await;
        assert_eq!(
            result_text(&result),
            "Document Information: {\n  \"type\": \"doc\"\n}"
        );

        let requests = backend.requests();
        assert_eq!(requests[0].url, "http://localhost:8080/api/documents/doc-1");
        assert_eq!(requests[0].body, RequestBody::Empty);
    }

    #[tokio::test]
    async fn test_get_document_failure() {
        let backend = Arc::new(MockBackend::new().reply(404, ""));
        let client = test_client(backend);

        let result = GetDocumentTool::execute(&client, params("missing")).await;
        assert_eq!(
            result_text(&result),
            "Failed to retrieve document. HTTP error: 404 Not Found"
        );
    }

    #[tokio::test]
    async fn test_get_document_id_is_not_escaped() {
        let backend = Arc::new(MockBackend::new().reply(200, "{}"));
        let client = test_client(backend.clone());

        GetDocumentTool::execute(&client, params("folder/doc")).await;
        assert_eq!(
            backend.requests()[0].url,
            "http://localhost:8080/api/documents/folder/doc"
        );
    }
}
