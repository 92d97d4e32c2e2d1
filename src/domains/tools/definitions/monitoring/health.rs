//! Collaboration service health check tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::CollaborationTool;
use crate::domains::tools::executor::{ApiCall, ApiClient, ResponsePlan, SuccessRender};

/// The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CollaborationHealthParams {}

/// Collaboration Health Tool implementation.
#[derive(Debug, Clone)]
pub struct CollaborationHealthTool;

#[async_trait::async_trait]
impl CollaborationTool for CollaborationHealthTool {
    const NAME: &'static str = "get-collaboration-health";
    const DESCRIPTION: &'static str = "Check Tiptap collaboration service health status";
    type Params = CollaborationHealthParams;

    async fn execute(client: &ApiClient, _params: Self::Params) -> CallToolResult {
        let plan = ResponsePlan::new(
            "connecting to Tiptap collaboration service",
            "Failed to check collaboration health",
            SuccessRender::text("Health check response: "),
        );
        client.run(ApiCall::get("/health"), &plan).await
    }
}
