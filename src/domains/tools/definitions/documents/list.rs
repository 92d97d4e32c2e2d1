//! List documents tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::CollaborationTool;
use crate::domains::tools::executor::{ApiCall, ApiClient, ResponsePlan, SuccessRender};

/// The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListDocumentsParams {}

/// List Documents Tool implementation.
#[derive(Debug, Clone)]
pub struct ListDocumentsTool;

#[async_trait::async_trait]
impl CollaborationTool for ListDocumentsTool {
    const NAME: &'static str = "list-documents";
    const DESCRIPTION: &'static str = "List all collaboration documents";
    type Params = ListDocumentsParams;

    async fn execute(client: &ApiClient, _params: Self::Params) -> CallToolResult {
        let plan = ResponsePlan::new(
            "listing documents",
            "Failed to retrieve documents list",
            SuccessRender::json("Documents", "Documents listed successfully"),
        );
        client.run(ApiCall::get("/api/documents"), &plan).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::{result_text, test_client};
    use super::*;
    use crate::domains::tools::backend::mock::MockBackend;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_documents() {
        let backend = Arc::new(MockBackend::new().reply(200, r#"[{"name":"a"}]"#));
        let client = test_client(backend.clone());

        let result = ListDocumentsTool::execute(&client, ListDocumentsParams::default()).await;
        assert_eq!(
            result_text(&result),
            "Documents: [\n  {\n    \"name\": \"a\"\n  }\n]"
        );
        assert_eq!(backend.requests()[0].url, "http://localhost:8080/api/documents");
    }

    #[tokio::test]
    async fn test_list_documents_failure() {
        let backend = Arc::new(MockBackend::new().reply(401, ""));
        let client = test_client(backend);

        let result = ListDocumentsTool::execute(&client, ListDocumentsParams::default()).await;
        assert_eq!(
            result_text(&result),
            "Failed to retrieve documents list. HTTP error: 401 Unauthorized"
        );
    }
}
