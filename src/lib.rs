//! # Chatexport
//!
//! A Rust library for exporting line-oriented chat transcripts to JSON,
//! optionally filtered by sender or keyword, with blacklisted words redacted,
//! or with a per-sender activity report attached.
//!
//! ## Transcript Format
//!
//! ```text
//! My Conversation
//! 1448470901 bob Hello there!
//! 1448470905 mike how are you?
//! 1448470906 bob I like pie?
//! ```
//!
//! The first line names the conversation; each following line is
//! `<epochSeconds> <senderId> <content>`.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatexport::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let conversation = TranscriptParser::new().parse_str(
//!         "My Conversation\n1448470901 bob Hello there!\n1448470905 mike how are you?\n1448470906 bob I like pie?",
//!     )?;
//!
//!     // The report always reflects the conversation as read
//!     let report = ActivityReport::from_conversation(&conversation);
//!
//!     let bob = ConversationBuilder::new(conversation)
//!         .filter_by_user("bob")
//!         .redact_word("pie")
//!         .build();
//!
//!     assert_eq!(bob.messages[1].content, "I like *redacted*?");
//!     let json = to_json(&bob, Some(&report), &OutputConfig::new())?;
//!     assert!(json.contains("\"activity\""));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] / [`conversation`] - data model ([`Message`], [`Conversation`])
//! - [`parser`] - transcript reader ([`TranscriptParser`](parser::TranscriptParser))
//! - [`core`] - transformations and output
//!   - [`core::builder`] - [`ConversationBuilder`]
//!   - [`core::filter`] - sender / keyword filters
//!   - [`core::redact`] - whole-word redaction
//!   - [`core::activity`] - [`ActivityReport`](core::activity::ActivityReport)
//!   - [`core::selection`] - [`Selection`](core::selection::Selection), one mode per export
//!   - [`core::processor`] - applies a selection and gathers stats
//!   - [`core::output`] - [`to_json`](core::output::to_json), [`write_json`](core::output::write_json)
//! - [`exporter`] - file-to-file pipeline ([`Exporter`](exporter::Exporter))
//! - [`config`] - reader and output configuration
//! - [`error`] - unified error types ([`ExportError`], [`Result`])
//! - [`cli`] - clap argument definitions (`cli` feature)
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod conversation;
pub mod core;
pub mod error;
pub mod exporter;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use conversation::Conversation;
pub use crate::core::builder::ConversationBuilder;
pub use error::{ExportError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatexport::prelude::*;
/// ```
pub mod prelude {
    // Data model
    pub use crate::{Conversation, Message};

    // Error types
    pub use crate::error::{ExportError, Result};

    // Reading
    pub use crate::parser::{ConversationSource, TranscriptParser};

    // Configs
    pub use crate::config::{ExportConfig, OutputConfig, TranscriptConfig};

    // Transformations
    pub use crate::core::activity::{ActivityReport, SenderActivity};
    pub use crate::core::builder::ConversationBuilder;
    pub use crate::core::filter::MessageFilter;
    pub use crate::core::redact::{REDACTED, Redactor};
    pub use crate::core::selection::Selection;

    // Output
    pub use crate::core::output::{ExportDocument, to_json, write_json};

    // Pipeline
    pub use crate::exporter::{ExportSummary, Exporter};
}
