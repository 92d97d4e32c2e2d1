//! Monitoring tools module.
//!
//! Read-only views of the collaboration service: its health endpoint and the
//! per-document and server-wide statistics.

pub mod health;
pub mod statistics;

pub use health::{CollaborationHealthParams, CollaborationHealthTool};
pub use statistics::{
    DocumentStatisticsParams, DocumentStatisticsTool, ServerStatisticsParams,
    ServerStatisticsTool,
};
