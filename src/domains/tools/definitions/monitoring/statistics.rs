//! Statistics tools.
//!
//! - `get-document-statistics`: live connection data for one document
//! - `get-server-statistics`: server-wide document and usage counters

use reqwest::StatusCode;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::CollaborationTool;
use crate::domains::tools::executor::{ApiCall, ApiClient, ResponsePlan, SuccessRender};

/// Parameters for document statistics.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DocumentStatisticsParams {
    #[schemars(description = "ID of the document to get statistics for")]
    pub id: String,
}

/// Document Statistics Tool implementation.
#[derive(Debug, Clone)]
pub struct DocumentStatisticsTool;

#[async_trait::async_trait]
impl CollaborationTool for DocumentStatisticsTool {
    const NAME: &'static str = "get-document-statistics";
    const DESCRIPTION: &'static str = "Get real-time statistics for a specific document including current connections and connected IPs";
    type Params = DocumentStatisticsParams;

    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult {
        let id = params.id;
        let plan = ResponsePlan::new(
            "retrieving document statistics",
            "Failed to retrieve document statistics",
            SuccessRender::json(
                format!("Document Statistics for {}", id),
                format!("Statistics for document {} retrieved successfully", id),
            ),
        )
        .on_status(StatusCode::NOT_FOUND, format!("Document with ID {} not found.", id));

        client
            .run(
                ApiCall::get(format!("/api/documents/{}/statistics", id)),
                &plan,
            )
            .await
    }
}

/// The server statistics tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ServerStatisticsParams {}

/// Server Statistics Tool implementation.
#[derive(Debug, Clone)]
pub struct ServerStatisticsTool;

#[async_trait::async_trait]
impl CollaborationTool for ServerStatisticsTool {
    const NAME: &'static str = "get-server-statistics";
    const DESCRIPTION: &'static str =
        "Get server-wide statistics including total documents, connections, and usage metrics";
    type Params = ServerStatisticsParams;

    async fn execute(client: &ApiClient, _params: Self::Params) -> CallToolResult {
        let plan = ResponsePlan::new(
            "retrieving server statistics",
            "Failed to retrieve server statistics",
            SuccessRender::json("Server Statistics", "Server statistics retrieved successfully"),
        );
        client.run(ApiCall::get("/api/statistics"), &plan).await
    }
}
