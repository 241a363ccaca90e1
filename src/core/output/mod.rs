//! Output writers.
//!
//! - [`to_json`] - render a conversation (plus optional activity report) as a
//!   JSON string
//! - [`write_json`] - same, written to a file
//! - [`ExportDocument`] - parse a written document back
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatexport::Result<()> {
//! use chatexport::config::OutputConfig;
//! use chatexport::core::activity::ActivityReport;
//! use chatexport::core::output::{to_json, write_json};
//! use chatexport::{Conversation, Message};
//!
//! let conversation = Conversation::new(
//!     "My Conversation",
//!     vec![Message::from_epoch(1448470901, "bob", "Hello there!").unwrap()],
//! );
//! let report = ActivityReport::from_conversation(&conversation);
//!
//! write_json(&conversation, Some(&report), "chat.json", &OutputConfig::new())?;
//! let json = to_json(&conversation, None, &OutputConfig::compact())?;
//! # Ok(())
//! # }
//! ```

mod json_writer;

pub use json_writer::{ExportDocument, to_json, write_json};
