//! Tool definitions module.
//!
//! One file per tool, grouped by the part of the backend they talk to.

pub mod common;
pub mod convert;
pub mod documents;
pub mod monitoring;

pub use convert::{ExportMarkdownTool, ImportMarkdownTool};
pub use documents::{
    BatchImportDocumentsTool, CreateDocumentTool, DeleteDocumentTool, DuplicateDocumentTool,
    EncryptDocumentTool, GetDocumentTool, ListDocumentsTool, SearchDocumentsTool,
    UpdateDocumentTool,
};
pub use monitoring::{CollaborationHealthTool, DocumentStatisticsTool, ServerStatisticsTool};
