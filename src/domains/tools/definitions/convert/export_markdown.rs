//! Markdown export tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::super::common::{CONVERSION_HINT, MarkdownFormat, TiptapJson};
use crate::domains::tools::CollaborationTool;
use crate::domains::tools::executor::{ApiCall, ApiClient, ResponsePlan, SuccessRender};

/// Parameters for Markdown export.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportMarkdownParams {
    #[schemars(description = "Tiptap JSON content to convert to Markdown")]
    pub content: TiptapJson,

    #[serde(default)]
    #[schemars(
        description = "Output format: md (standard) or gfm (GitHub Flavored Markdown). Default: md"
    )]
    pub format: MarkdownFormat,

    #[schemars(description = "Your Tiptap App ID for the conversion service")]
    pub app_id: String,
}

/// Export Markdown Tool implementation.
#[derive(Debug, Clone)]
pub struct ExportMarkdownTool;

#[async_trait::async_trait]
impl CollaborationTool for ExportMarkdownTool {
    const NAME: &'static str = "export-markdown";
    const DESCRIPTION: &'static str =
        "Convert Tiptap JSON content to Markdown format using the Tiptap Conversion API";
    type Params = ExportMarkdownParams;

    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult {
        let format = params.format;
        let plan = ResponsePlan::new(
            "exporting to markdown",
            "Failed to export to markdown",
            SuccessRender::text(format!(
                "Tiptap JSON exported to {} successfully:\n\n",
                format.to_string().to_uppercase()
            )),
        )
        .hint(CONVERSION_HINT);

        let call = ApiCall::post("/api/convert/export")
            .conversion(params.app_id)
            .json(json!({ "content": params.content, "format": format }));

        client.run(call, &plan).await
    }
}
