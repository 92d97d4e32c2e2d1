//! Tiptap Collaboration MCP Server Library
//!
//! This crate exposes the document management API of a Tiptap collaboration
//! service as Model Context Protocol tools. Each tool call turns into one or
//! two HTTP requests and is answered with a single text block.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the collaboration tools, their request executor and HTTP backend
//!
//! # Example
//!
//! ```rust,no_run
//! use tiptap_collaboration_mcp::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env().with_args(["BASE_URL", "http://localhost:8080"]);
//!     config.validate()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
