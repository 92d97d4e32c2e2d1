//! Common types and helpers shared across tool definitions.

use std::fmt;

use rmcp::model::{CallToolResult, RawContent};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// A Tiptap JSON document, treated as an opaque object.
pub type TiptapJson = Map<String, Value>;

/// How an update is applied to an existing document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Replace the entire document.
    #[default]
    Replace,
    /// Append the content to the document.
    Append,
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => f.write_str("replace"),
            Self::Append => f.write_str("append"),
        }
    }
}

/// Markdown dialect understood by the conversion API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownFormat {
    /// Standard Markdown.
    #[default]
    Md,
    /// GitHub Flavored Markdown.
    Gfm,
}

impl fmt::Display for MarkdownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md => f.write_str("md"),
            Self::Gfm => f.write_str("gfm"),
        }
    }
}

/// Hint appended to conversion API failures.
pub const CONVERSION_HINT: &str =
    "Make sure you have a valid JWT token and App ID for the Tiptap Conversion service.";

/// Skeleton document used when `create-document` gets no content.
pub fn default_document() -> TiptapJson {
    let doc = json!({
        "type": "doc",
        "content": [
            {
                "type": "paragraph",
                "attrs": { "indent": 0, "textAlign": "left" },
                "content": [ { "text": "Test", "type": "text" } ]
            }
        ]
    });
    match doc {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Text of the first content block of a tool result.
pub fn result_text(result: &CallToolResult) -> &str {
    match result.content.first().map(|c| &c.raw) {
        Some(RawContent::Text(text)) => &text.text,
        _ => "",
    }
}

/// Client pointed at a local backend with a raw token configured.
#[cfg(test)]
pub(crate) fn test_client(
    backend: std::sync::Arc<crate::domains::tools::backend::mock::MockBackend>,
) -> crate::domains::tools::executor::ApiClient {
    let config = crate::core::Config::with_backend("http://localhost:8080", Some("token".into()));
    crate::domains::tools::executor::ApiClient::new(std::sync::Arc::new(config), backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_shape() {
        let doc = default_document();
        assert_eq!(doc["type"], "doc");
        assert_eq!(doc["content"][0]["type"], "paragraph");
        assert_eq!(doc["content"][0]["attrs"]["textAlign"], "left");
        assert_eq!(doc["content"][0]["content"][0]["text"], "Test");
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(UpdateMode::Append).unwrap(), "append");
        assert_eq!(UpdateMode::default().to_string(), "replace");
        assert_eq!(
            serde_json::from_value::<MarkdownFormat>(json!("gfm")).unwrap(),
            MarkdownFormat::Gfm
        );
        assert_eq!(MarkdownFormat::default().to_string(), "md");
    }
}
