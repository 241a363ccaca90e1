//! A single transcript message.
//!
//! [`Message`] is the unit every transformation works on: a timestamp with
//! second resolution, the sender's identifier, and the text content.
//!
//! # Examples
//!
//! ```
//! use chatexport::Message;
//!
//! let msg = Message::from_epoch(1448470901, "bob", "Hello there!").unwrap();
//! assert_eq!(msg.sender_id(), "bob");
//! assert_eq!(msg.epoch_seconds(), 1448470901);
//! ```
//!
//! ## Serialization
//!
//! Timestamps serialize as integer epoch seconds and the sender field is
//! named `senderId`:
//!
//! ```
//! use chatexport::Message;
//!
//! let msg = Message::from_epoch(1448470901, "bob", "Hello there!").unwrap();
//! let json = serde_json::to_string(&msg)?;
//! assert_eq!(json, r#"{"timestamp":1448470901,"senderId":"bob","content":"Hello there!"}"#);
//!
//! let parsed: Message = serde_json::from_str(&json)?;
//! assert_eq!(parsed, msg);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped, attributed unit of text.
///
/// Sender identifiers are case-sensitive and compared by exact equality.
/// Content is kept verbatim, including any internal whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// When the message was sent, truncated to whole seconds.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,

    /// Identifier of the sender.
    pub sender_id: String,

    /// Text of the message.
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: DateTime<Utc>,
        sender_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender_id: sender_id.into(),
            content: content.into(),
        }
    }

    /// Creates a message from seconds since the Unix epoch.
    ///
    /// Returns `None` if the value is negative or outside the range chrono
    /// can represent.
    pub fn from_epoch(
        seconds: i64,
        sender_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<Self> {
        if seconds < 0 {
            return None;
        }
        let timestamp = DateTime::from_timestamp(seconds, 0)?;
        Some(Self::new(timestamp, sender_id, content))
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the timestamp as whole seconds since the Unix epoch.
    pub fn epoch_seconds(&self) -> i64 {
        self.timestamp.timestamp()
    }

    /// Returns the sender identifier.
    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` if this message was sent by `user_id` (exact match).
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender_id == user_id
    }
}
