//! Filter messages by sender or keyword.
//!
//! This module provides [`MessageFilter`] for describing a filter criterion
//! and [`apply_filter`] for restricting a message sequence to the messages
//! that satisfy it.
//!
//! # Filter Types
//!
//! | Filter | Constructor | Matches when |
//! |--------|-------------|--------------|
//! | Sender | [`MessageFilter::sender`] | `sender_id` equals the user id exactly |
//! | Keyword | [`MessageFilter::keyword`] | `content` contains the keyword as a substring |
//!
//! # Behavior Notes
//!
//! - Both comparisons are case-sensitive and perform no normalization.
//! - Keyword matching is plain substring containment: `"pie"` matches
//!   `"piece"`. Use redaction, not filtering, when whole-word semantics are
//!   needed.
//! - Relative message order is always preserved.
//! - A filter that matches nothing yields an empty vector, not an error.
//!
//! # Example
//!
//! ```
//! use chatexport::core::filter::{MessageFilter, apply_filter};
//! use chatexport::Message;
//!
//! let messages = vec![
//!     Message::from_epoch(1, "bob", "Hello there!").unwrap(),
//!     Message::from_epoch(2, "mike", "how are you?").unwrap(),
//!     Message::from_epoch(3, "bob", "I like pie?").unwrap(),
//! ];
//!
//! let bob = apply_filter(messages.clone(), &MessageFilter::sender("bob"));
//! assert_eq!(bob.len(), 2);
//!
//! let pie = apply_filter(messages, &MessageFilter::keyword("pie"));
//! assert_eq!(pie.len(), 1);
//! ```

use crate::Message;

/// A single filter criterion applied to every message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageFilter {
    /// Keep messages whose sender id equals this value.
    Sender(String),
    /// Keep messages whose content contains this value.
    Keyword(String),
}

impl MessageFilter {
    /// Creates a sender filter.
    pub fn sender(user_id: impl Into<String>) -> Self {
        MessageFilter::Sender(user_id.into())
    }

    /// Creates a keyword filter.
    pub fn keyword(keyword: impl Into<String>) -> Self {
        MessageFilter::Keyword(keyword.into())
    }

    /// Returns `true` if `msg` passes this filter.
    pub fn matches(&self, msg: &Message) -> bool {
        match self {
            MessageFilter::Sender(user_id) => msg.is_from(user_id),
            MessageFilter::Keyword(keyword) => msg.content.contains(keyword.as_str()),
        }
    }
}

/// Restricts `messages` to the ones matching `filter`, preserving order.
///
/// Consumes the input vector; the surviving messages are moved, not cloned.
pub fn apply_filter(messages: Vec<Message>, filter: &MessageFilter) -> Vec<Message> {
    messages
        .into_iter()
        .filter(|msg| filter.matches(msg))
        .collect()
}
