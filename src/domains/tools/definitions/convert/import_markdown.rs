//! Markdown import tool.
//!
//! Uploads Markdown to the conversion API and returns the Tiptap JSON it
//! produces.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{CONVERSION_HINT, MarkdownFormat};
use crate::domains::tools::CollaborationTool;
use crate::domains::tools::backend::RequestBody;
use crate::domains::tools::executor::{ApiCall, ApiClient, ResponsePlan, SuccessRender};

/// Parameters for Markdown import.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportMarkdownParams {
    #[schemars(description = "Markdown content to convert to Tiptap JSON")]
    pub content: String,

    #[serde(default)]
    #[schemars(
        description = "Markdown format: md (standard) or gfm (GitHub Flavored Markdown). Default: md"
    )]
    pub format: MarkdownFormat,

    #[schemars(description = "Your Tiptap App ID for the conversion service")]
    pub app_id: String,
}

/// Import Markdown Tool implementation.
#[derive(Debug, Clone)]
pub struct ImportMarkdownTool;

#[async_trait::async_trait]
impl CollaborationTool for ImportMarkdownTool {
    const NAME: &'static str = "import-markdown";
    const DESCRIPTION: &'static str = "Import Markdown content and convert to Tiptap JSON format";
    type Params = ImportMarkdownParams;

    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult {
        let plan = ResponsePlan::new(
            "importing markdown",
            "Failed to import markdown",
            SuccessRender::json(
                "Markdown imported successfully",
                "Markdown imported successfully",
            ),
        )
        .hint(CONVERSION_HINT);

        let call = ApiCall::post(format!("/api/convert/import?format={}", params.format))
            .conversion(params.app_id)
            .body(RequestBody::File {
                field: "file",
                file_name: "content.md",
                mime: "text/markdown",
                contents: params.content,
            });

        client.run(call, &plan).await
    }
}
