//! A named, ordered sequence of messages.

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::builder::ConversationBuilder;

/// A conversation: its name plus messages in transcript order.
///
/// The message list may be empty (for instance after a filter that matched
/// nothing); it is never absent.
///
/// # Example
///
/// ```
/// use chatexport::{Conversation, Message};
///
/// let conversation = Conversation::new(
///     "My Conversation",
///     vec![Message::from_epoch(1448470901, "bob", "Hello there!").unwrap()],
/// );
/// assert_eq!(conversation.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Label taken verbatim from the transcript's first line.
    pub name: String,

    /// Messages in transcript order.
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Creates a conversation from a name and its messages.
    pub fn new(name: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            name: name.into(),
            messages,
        }
    }

    /// Returns the conversation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the messages in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the conversation has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Starts a transformation chain that takes ownership of this conversation.
    pub fn into_builder(self) -> ConversationBuilder {
        ConversationBuilder::new(self)
    }
}
