//! Request/response executor shared by every tool.
//!
//! A tool describes its HTTP call as an [`ApiCall`] and its result wording as
//! a [`ResponsePlan`]. [`ApiClient::run`] turns the pair into exactly one
//! text result and never fails: configuration problems, transport failures,
//! non-2xx statuses and undecodable bodies all become text.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::{Method, StatusCode};
use rmcp::model::{CallToolResult, Content};
use tracing::{debug, warn};

use super::ToolError;
use super::backend::{HttpBackend, HttpReply, OutboundRequest, RequestBody};
use crate::core::config::Config;
use crate::core::error::Error;

/// Client identifier sent with every request.
pub const USER_AGENT: &str = "tiptap-collaboration-mcp";

/// Which remote API a call targets. Decides how the token is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFamily {
    /// Document CRUD, search and statistics. Token sent raw.
    Collaboration,

    /// Markdown conversion. Token sent as `Bearer <token>`, app id required.
    Conversion { app_id: String },
}

/// One HTTP call, relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiCall {
    pub method: Method,
    pub path: String,
    pub family: ApiFamily,
    pub body: RequestBody,
}

impl ApiCall {
    /// A collaboration API call with no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            family: ApiFamily::Collaboration,
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Attach an arbitrary body.
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Target the conversion API with the given application id.
    pub fn conversion(mut self, app_id: impl Into<String>) -> Self {
        self.family = ApiFamily::Conversion {
            app_id: app_id.into(),
        };
        self
    }
}

/// How a successful response is turned into text.
#[derive(Debug, Clone)]
pub enum SuccessRender {
    /// Ignore the body and report a fixed phrase.
    Fixed(String),

    /// Parse the body as JSON and embed it pretty-printed after `label`.
    /// A 204 or an unparsable body falls back to `acknowledgement`.
    Json {
        label: String,
        acknowledgement: String,
    },

    /// Append the raw body to `lead`.
    Text { lead: String },
}

impl SuccessRender {
    pub fn fixed(text: impl Into<String>) -> Self {
        Self::Fixed(text.into())
    }

    pub fn json(label: impl Into<String>, acknowledgement: impl Into<String>) -> Self {
        Self::Json {
            label: label.into(),
            acknowledgement: acknowledgement.into(),
        }
    }

    pub fn text(lead: impl Into<String>) -> Self {
        Self::Text { lead: lead.into() }
    }

    fn render(&self, reply: &HttpReply) -> String {
        match self {
            Self::Fixed(text) => text.clone(),
            Self::Json {
                label,
                acknowledgement,
            } => {
                if reply.status == StatusCode::NO_CONTENT {
                    return format!("{}.", acknowledgement);
                }
                match serde_json::from_str::<serde_json::Value>(&reply.body)
                    .and_then(|value| serde_json::to_string_pretty(&value))
                {
                    Ok(pretty) => format!("{}: {}", label, pretty),
                    Err(e) => {
                        debug!("Response body is not JSON: {}", e);
                        format!("{} (no response data).", acknowledgement)
                    }
                }
            }
            Self::Text { lead } => format!("{}{}", lead, reply.body),
        }
    }
}

/// Wording for every outcome of one tool call.
#[derive(Debug, Clone)]
pub struct ResponsePlan {
    /// Gerund phrase for local failures: `Error <activity>: <message>`.
    activity: String,
    /// Prefix for undocumented statuses: `<failure>. HTTP error: ...`.
    failure: String,
    hint: Option<&'static str>,
    statuses: HashMap<StatusCode, String>,
    success: SuccessRender,
}

impl ResponsePlan {
    pub fn new(
        activity: impl Into<String>,
        failure: impl Into<String>,
        success: SuccessRender,
    ) -> Self {
        Self {
            activity: activity.into(),
            failure: failure.into(),
            hint: None,
            statuses: HashMap::new(),
            success,
        }
    }

    /// Report `message` instead of the generic failure for `status`.
    pub fn on_status(mut self, status: StatusCode, message: impl Into<String>) -> Self {
        self.statuses.insert(status, message.into());
        self
    }

    /// Sentence appended to the generic failure message.
    pub fn hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Text for any reply, successful or not.
    pub fn render(&self, reply: &HttpReply) -> String {
        if reply.is_success() {
            return self.success.render(reply);
        }

        warn!("Backend answered {}", reply.status_line());

        if let Some(message) = self.statuses.get(&reply.status) {
            return message.clone();
        }

        match self.hint {
            Some(hint) => format!(
                "{}. HTTP error: {}. {}",
                self.failure,
                reply.status_line(),
                hint
            ),
            None => format!("{}. HTTP error: {}", self.failure, reply.status_line()),
        }
    }

    /// Text for a call that never produced a reply.
    pub fn error(&self, err: &ToolError) -> String {
        warn!("Error {}: {}", self.activity, err);
        format!("Error {}: {}", self.activity, err)
    }
}

/// Wrap text as the single content block of a tool result.
pub fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Builds, sends and classifies backend calls for the tools.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<Config>,
    backend: Arc<dyn HttpBackend>,
}

impl ApiClient {
    pub fn new(config: Arc<Config>, backend: Arc<dyn HttpBackend>) -> Self {
        Self { config, backend }
    }

    /// Build the concrete request for a call.
    ///
    /// Fails if no base URL is configured, before anything touches the network.
    pub fn prepare(&self, call: ApiCall) -> Result<OutboundRequest, ToolError> {
        let base_url = self
            .config
            .backend
            .base_url()
            .map_err(|e| match e {
                Error::Config(msg) => ToolError::configuration(msg),
                other => ToolError::configuration(other.to_string()),
            })?;

        let mut headers = vec![("User-Agent", USER_AGENT.to_string())];

        if call.body.is_json() {
            headers.push(("Content-Type", "application/json".to_string()));
        }

        // An empty token counts as no token.
        let token = self.config.backend.token().filter(|t| !t.is_empty());

        match &call.family {
            ApiFamily::Collaboration => {
                if let Some(token) = token {
                    headers.push(("Authorization", token.to_string()));
                }
            }
            ApiFamily::Conversion { app_id } => {
                headers.push(("X-App-Id", app_id.clone()));
                if let Some(token) = token {
                    headers.push(("Authorization", format!("Bearer {}", token)));
                }
            }
        }

        Ok(OutboundRequest {
            method: call.method,
            url: format!("{}{}", base_url, call.path),
            headers,
            body: call.body,
        })
    }

    /// Perform one round trip.
    pub async fn send(&self, call: ApiCall) -> Result<HttpReply, ToolError> {
        let request = self.prepare(call)?;
        self.backend.send(request).await
    }

    /// Perform one round trip and describe the outcome with `plan`.
    pub async fn run(&self, call: ApiCall, plan: &ResponsePlan) -> CallToolResult {
        let text = match self.send(call).await {
            Ok(reply) => plan.render(&reply),
            Err(err) => plan.error(&err),
        };
        text_result(text)
    }
}

#[cfg(test)]
mod tests {
    use super::super::backend::mock::MockBackend;
    use super::*;
    use serde_json::json;

    fn reply(status: u16, body: &str) -> HttpReply {
        HttpReply::new(StatusCode::from_u16(status).unwrap(), body)
    }

    fn client(token: Option<&str>, backend: Arc<MockBackend>) -> ApiClient {
        let config = Config::with_backend("http://localhost:8080", token.map(String::from));
        ApiClient::new(Arc::new(config), backend)
    }

    fn plan() -> ResponsePlan {
        ResponsePlan::new(
            "reading thing",
            "Failed to read thing",
            SuccessRender::json("Thing", "Thing read successfully"),
        )
        .on_status(StatusCode::NOT_FOUND, "Thing not found.")
    }

    #[test]
    fn test_json_success_is_pretty_printed() {
        let text = plan().render(&reply(200, r#"{"a":1}"#));
        assert_eq!(text, "Thing: {\n  \"a\": 1\n}");
    }

    #[test]
    fn test_no_content_uses_acknowledgement() {
        assert_eq!(plan().render(&reply(204, "")), "Thing read successfully.");
    }

    #[test]
    fn test_unparsable_success_degrades() {
        assert_eq!(
            plan().render(&reply(200, "<html>")),
            "Thing read successfully (no response data)."
        );
    }

    #[test]
    fn test_documented_status_wins() {
        assert_eq!(plan().render(&reply(404, "")), "Thing not found.");
    }

    #[test]
    fn test_generic_failure() {
        assert_eq!(
            plan().render(&reply(503, "")),
            "Failed to read thing. HTTP error: 503 Service Unavailable"
        );
    }

    #[test]
    fn test_generic_failure_with_hint() {
        let plan = plan().hint("Check the thing.");
        assert_eq!(
            plan.render(&reply(500, "")),
            "Failed to read thing. HTTP error: 500 Internal Server Error. Check the thing."
        );
    }

    #[test]
    fn test_text_and_fixed_renderings() {
        let ok = reply(200, "OK");
        assert_eq!(SuccessRender::text("Health: ").render(&ok), "Health: OK");
        assert_eq!(SuccessRender::fixed("Done.").render(&ok), "Done.");
    }

    #[test]
    fn test_collaboration_headers_use_raw_token() {
        let client = client(Some("secret"), Arc::new(MockBackend::new()));
        let request = client
            .prepare(ApiCall::post("/api/search").json(json!({"query": "x"})))
            .unwrap();
        assert_eq!(request.url, "http://localhost:8080/api/search");
        assert_eq!(request.header("User-Agent"), Some(USER_AGENT));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("Authorization"), Some("secret"));
        assert_eq!(request.header("X-App-Id"), None);
    }

    #[test]
    fn test_conversion_headers_use_bearer_token() {
        let client = client(Some("secret"), Arc::new(MockBackend::new()));
        let request = client
            .prepare(ApiCall::post("/api/convert/export").conversion("app-1"))
            .unwrap();
        assert_eq!(request.header("Authorization"), Some("Bearer secret"));
        assert_eq!(request.header("X-App-Id"), Some("app-1"));
    }

    #[test]
    fn test_bodyless_request_has_no_content_type() {
        let client = client(None, Arc::new(MockBackend::new()));
        let request = client.prepare(ApiCall::get("/health")).unwrap();
        assert_eq!(request.header("Content-Type"), None);
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn test_empty_token_is_omitted() {
        let client = client(Some(""), Arc::new(MockBackend::new()));
        let request = client.prepare(ApiCall::get("/health")).unwrap();
        assert_eq!(request.header("Authorization"), None);

        let request = client
            .prepare(ApiCall::post("/api/convert/export").conversion("app"))
            .unwrap();
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn test_trailing_slash_is_kept_in_url() {
        let config = Config::with_backend("http://localhost:8080/", None);
        let client = ApiClient::new(Arc::new(config), Arc::new(MockBackend::new()));
        let request = client.prepare(ApiCall::get("/health")).unwrap();
        assert_eq!(request.url, "http://localhost:8080//health");
    }

    #[tokio::test]
    async fn test_missing_base_url_never_reaches_backend() {
        let backend = Arc::new(MockBackend::new().reply(200, "OK"));
        let client = ApiClient::new(Arc::new(Config::default()), backend.clone());
        let result = client.send(ApiCall::get("/health")).await;
        assert!(matches!(result, Err(ToolError::Configuration(_))));
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_base_url_reports_bare_config_message() {
        let backend = Arc::new(MockBackend::new().reply(200, "OK"));
        let config = Config::with_backend("", None);
        let client = ApiClient::new(Arc::new(config), backend.clone());
        let result = client.run(ApiCall::get("/thing"), &plan()).await;
        let text = crate::domains::tools::definitions::common::result_text(&result);
        assert_eq!(
            text,
            "Error reading thing: BASE_URL is required but not configured. Please provide BASE_URL argument."
        );
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_text() {
        let backend = Arc::new(MockBackend::new().fail("connection refused"));
        let client = client(None, backend);
        let result = client.run(ApiCall::get("/thing"), &plan()).await;
        let text = crate::domains::tools::definitions::common::result_text(&result);
        assert_eq!(text, "Error reading thing: connection refused");
        assert_eq!(result.content.len(), 1);
    }
}
