//! Per-sender activity report.
//!
//! [`ActivityReport::from_conversation`] counts how many messages each sender
//! wrote and orders the senders from most to least active. Counting always
//! runs over the conversation it is given, so callers that also filter or
//! redact should compute the report from the untransformed conversation.
//!
//! # Ordering
//!
//! Entries are sorted by count, descending. Senders with equal counts are
//! ordered by sender id ascending (byte-wise), which makes the report fully
//! deterministic.
//!
//! # Example
//!
//! ```
//! use chatexport::core::activity::ActivityReport;
//! use chatexport::{Conversation, Message};
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
//! let report = ActivityReport::from_conversation(&conversation);
//! assert_eq!(report.entries()[0].sender_id, "bob");
//! assert_eq!(report.entries()[0].count, 2);
//! assert_eq!(report.total(), conversation.len());
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Conversation;

/// Message count for one sender.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderActivity {
    /// The sender's identifier.
    pub sender_id: String,
    /// How many messages the sender wrote.
    pub count: usize,
}

impl SenderActivity {
    /// Creates an entry.
    pub fn new(sender_id: impl Into<String>, count: usize) -> Self {
        Self {
            sender_id: sender_id.into(),
            count,
        }
    }
}

/// Sender activity, most active first.
///
/// Serializes as a bare JSON array of `{"senderId", "count"}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityReport {
    entries: Vec<SenderActivity>,
}

impl ActivityReport {
    /// Counts messages per sender in `conversation`.
    pub fn from_conversation(conversation: &Conversation) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for msg in &conversation.messages {
            *counts.entry(msg.sender_id.as_str()).or_insert(0) += 1;
        }

        let mut entries: Vec<SenderActivity> = counts
            .into_iter()
            .map(|(sender_id, count)| SenderActivity::new(sender_id, count))
            .collect();
        entries.sort_by(compare_activity);

        tracing::debug!(
            senders = entries.len(),
            messages = conversation.len(),
            "computed activity report"
        );

        Self { entries }
    }

    /// Returns the entries, most active sender first.
    pub fn entries(&self) -> &[SenderActivity] {
        &self.entries
    }

    /// Returns the number of distinct senders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the conversation had no messages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Returns the count for `sender_id`, if the sender appears at all.
    pub fn count_for(&self, sender_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.sender_id == sender_id)
            .map(|e| e.count)
    }

    /// Returns the most active sender.
    pub fn most_active(&self) -> Option<&SenderActivity> {
        self.entries.first()
    }
}

impl<'a> IntoIterator for &'a ActivityReport {
    type Item = &'a SenderActivity;
    type IntoIter = std::slice::Iter<'a, SenderActivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Count descending, then sender id ascending.
fn compare_activity(a: &SenderActivity, b: &SenderActivity) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.sender_id.cmp(&b.sender_id))
}
