//! Semantic search tool.
//!
//! Requires the Tiptap Semantic Search feature on the backend.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::domains::tools::CollaborationTool;
use crate::domains::tools::executor::{ApiCall, ApiClient, ResponsePlan, SuccessRender};

fn default_limit() -> u32 {
    10
}

/// Parameters for semantic search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchDocumentsParams {
    #[schemars(description = "Search query for semantic document search")]
    pub query: String,

    #[serde(default = "default_limit")]
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    pub limit: u32,
}

/// Search Documents Tool implementation.
#[derive(Debug, Clone)]
pub struct SearchDocumentsTool;

#[async_trait::async_trait]
impl CollaborationTool for SearchDocumentsTool {
    const NAME: &'static str = "search-documents";
    const DESCRIPTION: &'static str = "Perform semantic search across documents";
    type Params = SearchDocumentsParams;

    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult {
        let plan = ResponsePlan::new(
            "searching documents",
            "Failed to search documents",
            SuccessRender::json(
                format!("Search results for \"{}\"", params.query),
                format!("Search for \"{}\" completed", params.query),
            ),
        )
        .hint("Note: Semantic search requires Tiptap Semantic Search to be enabled.");

        let call = ApiCall::post("/api/search")
            .json(json!({ "query": params.query, "limit": params.limit }));

        client.run(call, &plan).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::{result_text, test_client};
    use super::*;
    use crate::domains::tools::backend::{RequestBody, mock::MockBackend};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_search_uses_default_limit() {
        let backend = Arc::new(MockBackend::new().reply(200, "[]"));
        let client = test_client(backend.clone());

        let params: SearchDocumentsParams =
            serde_json::from_value(json!({"query": "roadmap"})).unwrap();
        let result = SearchDocumentsTool::execute(&client, params).await;
        assert_eq!(result_text(&result), "Search results for \"roadmap\": []");

        let requests = backend.requests();
        assert_eq!(requests[0].url, "http://localhost:8080/api/search");
        assert_eq!(
            requests[0].body,
            RequestBody::Json(json!({"query": "roadmap", "limit": 10}))
        );
    }

    #[tokio::test]
    async fn test_search_failure_mentions_feature() {
        let backend = Arc::new(MockBackend::new().reply(403, ""));
        let client = test_client(backend);

        let params = SearchDocumentsParams {
            query: "x".to_string(),
            limit: 3,
        };
        let result = SearchDocumentsTool::execute(&client, params).await;
        assert_eq!(
            result_text(&result),
            "Failed to search documents. HTTP error: 403 Forbidden. \
             Note: Semantic search requires Tiptap Semantic Search to be enabled."
        );
    }
}
