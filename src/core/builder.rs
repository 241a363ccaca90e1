//! Chainable transformation pipeline over a single conversation.
//!
//! [`ConversationBuilder`] takes ownership of a [`Conversation`] and exposes
//! filter and redaction steps that each consume the builder and hand it back,
//! so a chain reads top to bottom in the order it is applied:
//!
//! ```
//! use chatexport::{Conversation, ConversationBuilder, Message};
//!
//! let conversation = Conversation::new(
//!     "My Conversation",
//!     vec![
//!         Message::from_epoch(1448470901, "bob", "Hello there!").unwrap(),
//!         Message::from_epoch(1448470905, "mike", "how are you?").unwrap(),
//!         Message::from_epoch(1448470906, "bob", "I like pie?").unwrap(),
//!     ],
//! );
//!
//! let exported = ConversationBuilder::new(conversation)
//!     .filter_by_user("bob")
//!     .redact_word("pie")
//!     .build();
//!
//! assert_eq!(exported.len(), 2);
//! assert_eq!(exported.messages[1].content, "I like *redacted*?");
//! ```
//!
//! The builder does not stop callers from combining steps; mutual exclusion
//! of modes is decided by [`Selection`](crate::core::selection::Selection).

use crate::Conversation;
use crate::core::filter::{MessageFilter, apply_filter};
use crate::core::redact::Redactor;

/// Owns the working copy of a conversation while a transformation chain runs.
///
/// None of the steps can fail. A filter that matches nothing leaves an empty
/// message list.
#[derive(Debug, Clone)]
pub struct ConversationBuilder {
    conversation: Conversation,
}

impl ConversationBuilder {
    /// Starts a chain over `conversation`.
    pub fn new(conversation: Conversation) -> Self {
        Self { conversation }
    }

    /// Keeps only messages sent by `user_id` (exact, case-sensitive).
    #[must_use]
    pub fn filter_by_user(self, user_id: &str) -> Self {
        self.filter(&MessageFilter::sender(user_id))
    }

    /// Keeps only messages whose content contains `keyword`.
    ///
    /// Matching is case-sensitive substring containment.
    #[must_use]
    pub fn filter_by_keyword(self, keyword: &str) -> Self {
        self.filter(&MessageFilter::keyword(keyword))
    }

    /// Applies an arbitrary [`MessageFilter`].
    #[must_use]
    pub fn filter(mut self, filter: &MessageFilter) -> Self {
        let before = self.conversation.messages.len();
        let messages = std::mem::take(&mut self.conversation.messages);
        self.conversation.messages = apply_filter(messages, filter);

        tracing::debug!(
            ?filter,
            before,
            after = self.conversation.messages.len(),
            "filtered conversation"
        );
        self
    }

    /// Replaces every whole-word occurrence of `word` with `*redacted*`.
    ///
    /// Redacting an empty word does nothing.
    #[must_use]
    pub fn redact_word(self, word: &str) -> Self {
        if word.is_empty() {
            return self;
        }
        match Redactor::new(word) {
            Ok(redactor) => self.redact_with(&redactor),
            Err(e) => {
                tracing::warn!(word, error = %e, "skipping unusable blacklist word");
                self
            }
        }
    }

    /// Redacts each word in turn, every step working on the previous result.
    #[must_use]
    pub fn redact_words<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .fold(self, |builder, word| builder.redact_word(word.as_ref()))
    }

    /// Redacts with an already compiled [`Redactor`].
    #[must_use]
    pub fn redact_with(mut self, redactor: &Redactor) -> Self {
        let mut touched = 0usize;
        for msg in &mut self.conversation.messages {
            if redactor.is_match(&msg.content) {
                msg.content = redactor.redact(&msg.content).into_owned();
                touched += 1;
            }
        }

        tracing::debug!(word = redactor.word(), touched, "redacted conversation");
        self
    }

    /// Borrows the working conversation without ending the chain.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Ends the chain and returns the transformed conversation.
    pub fn build(self) -> Conversation {
        self.conversation
    }
}

impl From<Conversation> for ConversationBuilder {
    fn from(conversation: Conversation) -> Self {
        Self::new(conversation)
    }
}
