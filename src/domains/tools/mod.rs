//! Tools domain module.
//!
//! Every tool translates one MCP call into HTTP requests against the
//! collaboration backend and reports the outcome as a single text block.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `CollaborationTool` trait each tool implements
//! - `executor.rs` - Request building and response classification
//! - `backend.rs` - The HTTP round trip (`HttpBackend`, reqwest implementation)
//! - `router.rs` - rmcp ToolRouter builder
//! - `registry.rs` - Tool catalogue and dispatch by name
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `CollaborationTool`
//! 2. Export it in the group's `mod.rs` and `definitions/mod.rs`
//! 3. Add its route in `router.rs` and its entries in `registry.rs`

pub mod backend;
pub mod definitions;
mod error;
pub mod executor;
mod handlers;
mod registry;
pub mod router;

pub use backend::{HttpBackend, HttpReply, OutboundRequest, ReqwestBackend, RequestBody};
pub use error::ToolError;
pub use executor::ApiClient;
pub use handlers::CollaborationTool;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
