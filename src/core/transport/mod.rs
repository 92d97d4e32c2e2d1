//! Transport layer for the MCP server.
//!
//! MCP clients usually launch the server as a subprocess and talk JSON-RPC
//! over stdin/stdout. A TCP listener is available for local debugging.
//!
//! # Feature Flags
//!
//! - `stdio` (default): STDIO transport
//! - `tcp`: line-delimited JSON-RPC over a TCP socket, adds tokio/net

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
