//! HTTP backend seam.
//!
//! Tools describe the request they want as an [`OutboundRequest`] and hand it
//! to an [`HttpBackend`]. The network step reports its outcome as a plain
//! `Result`: either an [`HttpReply`] (any status) or a transport failure.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, StatusCode};
use tracing::debug;

use super::ToolError;

/// Body attached to an outbound request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body.
    Empty,

    /// A JSON document, serialized as the request body.
    Json(serde_json::Value),

    /// A single file uploaded as `multipart/form-data`.
    File {
        field: &'static str,
        file_name: &'static str,
        mime: &'static str,
        contents: String,
    },
}

impl RequestBody {
    /// Whether this body is sent as JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

/// A fully built request, ready to be sent.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

impl OutboundRequest {
    /// Value of the named header, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// What came back from the backend.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: StatusCode,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    /// Build a reply using the canonical reason phrase as status text.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// `"<code> <reason>"`, as shown in failure messages.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.status.as_u16(), self.status_text)
            .trim_end()
            .to_string()
    }
}

/// Performs one HTTP round trip.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Send the request and return whatever status the server answered with.
    ///
    /// Only failures that prevent a response (connection, DNS, body read)
    /// are reported as errors.
    async fn send(&self, request: OutboundRequest) -> Result<HttpReply, ToolError>;
}

/// [`HttpBackend`] backed by a `reqwest` client.
///
/// Idle connections are not kept, and no timeout is applied.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: Client,
}

impl ReqwestBackend {
    /// Build the backend and its HTTP client.
    pub fn new() -> Result<Self, ToolError> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ToolError::transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: OutboundRequest) -> Result<HttpReply, ToolError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(&value).map_err(|e| {
                ToolError::invalid_arguments(format!("Failed to serialize body: {}", e))
            })?),
            RequestBody::File {
                field,
                file_name,
                mime,
                contents,
            } => {
                let part = Part::text(contents).file_name(file_name).mime_str(mime)?;
                builder.multipart(Form::new().part(field, part))
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("Received {} ({} bytes)", status, body.len());

        Ok(HttpReply::new(status, body))
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted backend for handler tests.

    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays queued replies in order and records every request it sees.
    #[derive(Default)]
    pub struct MockBackend {
        replies: Mutex<VecDeque<Result<HttpReply, ToolError>>>,
        requests: Mutex<Vec<OutboundRequest>>,
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a reply with the given status and body.
        pub fn reply(self, status: u16, body: &str) -> Self {
            let status = StatusCode::from_u16(status).unwrap();
            self.replies
                .lock()
                .unwrap()
                .push_back(Ok(HttpReply::new(status, body)));
            self
        }

        /// Queue a transport failure.
        pub fn fail(self, message: &str) -> Self {
            self.replies
                .lock()
                .unwrap()
                .push_back(Err(ToolError::transport(message)));
            self
        }

        /// Requests sent so far.
        pub fn requests(&self) -> Vec<OutboundRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpBackend for MockBackend {
        async fn send(&self, request: OutboundRequest) -> Result<HttpReply, ToolError> {
            self.requests.lock().unwrap().push(request);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ToolError::transport("no scripted reply")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_uses_reason_phrase() {
        let reply = HttpReply::new(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(reply.status_line(), "503 Service Unavailable");
        assert!(!reply.is_success());
    }

    #[test]
    fn test_status_line_without_reason() {
        let reply = HttpReply::new(StatusCode::from_u16(599).unwrap(), "");
        assert_eq!(reply.status_line(), "599");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = OutboundRequest {
            method: Method::GET,
            url: "http://localhost/health".to_string(),
            headers: vec![("User-Agent", "tiptap-collaboration-mcp".to_string())],
            body: RequestBody::Empty,
        };
        assert_eq!(request.header("user-agent"), Some("tiptap-collaboration-mcp"));
        assert_eq!(request.header("Authorization"), None);
    }
}
