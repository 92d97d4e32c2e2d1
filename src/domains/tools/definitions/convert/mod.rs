//! Conversion tools module.
//!
//! Markdown import and export through the Tiptap Conversion API. These calls
//! send the token as a bearer token and carry the caller's app id.

pub mod export_markdown;
pub mod import_markdown;

pub use export_markdown::{ExportMarkdownParams, ExportMarkdownTool};
pub use import_markdown::{ImportMarkdownParams, ImportMarkdownTool};
