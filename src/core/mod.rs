//! Core transformation logic for chatexport.
//!
//! This module contains:
//! - [`builder`] - Chainable filter/redact pipeline
//! - [`filter`] - Sender and keyword filters
//! - [`redact`] - Whole-word redaction
//! - [`activity`] - Per-sender activity report
//! - [`selection`] - The caller's transformation mode
//! - [`processor`] - Applies a selection and gathers stats
//! - [`output`] - JSON writer

pub mod activity;
pub mod builder;
pub mod filter;
pub mod output;
pub mod processor;
pub mod redact;
pub mod selection;

// Re-export main types for convenience
pub use activity::{ActivityReport, SenderActivity};
pub use builder::ConversationBuilder;
pub use filter::{MessageFilter, apply_filter};
pub use output::{ExportDocument, to_json, write_json};
pub use processor::{ProcessedExport, ProcessingStats, process};
pub use redact::{REDACTED, Redactor};
pub use selection::Selection;
