//! Document tools module.
//!
//! Tools operating on documents through the collaboration API:
//! - `create`, `get`, `update`, `delete`: single-document CRUD
//! - `duplicate`: copy a document under a new id
//! - `list`, `search`: enumerate and query documents
//! - `batch_import`: bulk-load document versions
//! - `encrypt`: encrypt a stored document

pub mod batch_import;
pub mod create;
pub mod delete;
pub mod duplicate;
pub mod encrypt;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

pub use batch_import::{BatchImportDocumentsParams, BatchImportDocumentsTool, DocumentVersion};
pub use create::{CreateDocumentParams, CreateDocumentTool};
pub use delete::{DeleteDocumentParams, DeleteDocumentTool};
pub use duplicate::{DuplicateDocumentParams, DuplicateDocumentTool};
pub use encrypt::{EncryptDocumentParams, EncryptDocumentTool};
pub use get::{GetDocumentParams, GetDocumentTool};
pub use list::{ListDocumentsParams, ListDocumentsTool};
pub use search::{SearchDocumentsParams, SearchDocumentsTool};
pub use update::{UpdateDocumentParams, UpdateDocumentTool};
