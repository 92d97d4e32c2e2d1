//! The contract every collaboration tool implements.
//!
//! A tool supplies its name, description, parameter type and an `execute`
//! body. Metadata and the rmcp route are derived from those, so each tool
//! file only states what is specific to its endpoint.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::info;

use super::executor::ApiClient;

/// A tool backed by one or more calls to the collaboration backend.
#[async_trait::async_trait]
pub trait CollaborationTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool; also the source of its input schema.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool. Always yields a result with a single text block.
    async fn execute(client: &ApiClient, params: Self::Params) -> CallToolResult;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<Self::Params>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    ///
    /// Arguments that do not match the schema are rejected as invalid params;
    /// everything after that is reported as tool output.
    fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
        Self: Sized + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: Self::Params =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                info!("Tool called: {}", Self::NAME);
                Ok(Self::execute(&client, params).await)
            }
            .boxed()
        })
    }
}
