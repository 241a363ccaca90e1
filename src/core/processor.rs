//! Applies a [`Selection`] to a conversation and gathers the export result.
//!
//! The activity report, when requested, is always computed from the
//! conversation as it was read, before any filter or redaction runs.

use crate::Conversation;
use crate::core::activity::ActivityReport;
use crate::core::selection::Selection;
use crate::error::Result;

/// The transformed conversation plus everything written alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedExport {
    /// Conversation after the selected transformation.
    pub conversation: Conversation,
    /// Activity over the original conversation, if requested.
    pub report: Option<ActivityReport>,
    /// Message counts before and after.
    pub stats: ProcessingStats,
}

/// Statistics about the processing result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub original_count: usize,
    pub exported_count: usize,
}

impl ProcessingStats {
    /// Creates new processing statistics.
    pub fn new(original_count: usize, exported_count: usize) -> Self {
        Self {
            original_count,
            exported_count,
        }
    }

    /// Number of messages removed by filtering.
    pub fn removed_count(&self) -> usize {
        self.original_count.saturating_sub(self.exported_count)
    }
}

/// Validates `selection`, then transforms `conversation` according to it.
///
/// # Errors
///
/// Returns [`InvalidSelection`](crate::ExportError::InvalidSelection) before
/// touching the conversation if the selection is unusable.
pub fn process(conversation: Conversation, selection: &Selection) -> Result<ProcessedExport> {
    selection.validate()?;

    let original_count = conversation.len();
    let report = selection
        .includes_report()
        .then(|| ActivityReport::from_conversation(&conversation));

    let conversation = selection.apply(conversation);
    let stats = ProcessingStats::new(original_count, conversation.len());

    tracing::debug!(
        %selection,
        original = stats.original_count,
        exported = stats.exported_count,
        "processed conversation"
    );

    Ok(ProcessedExport {
        conversation,
        report,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;

    fn sample() -> Conversation {
        Conversation::new(
            "My Conversation",
            vec![
                Message::from_epoch(1448470901, "bob", "Hello there!").unwrap(),
                Message::from_epoch(1448470905, "mike", "how are you?").unwrap(),
                Message::from_epoch(1448470906, "bob", "I like pie?").unwrap(),
            ],
        )
    }

    #[test]
    fn test_process_all() {
        let processed = process(sample(), &Selection::All).unwrap();
        assert_eq!(processed.conversation, sample());
        assert!(processed.report.is_none());
        assert_eq!(processed.stats, ProcessingStats::new(3, 3));
    }

    #[test]
    fn test_process_filter_counts() {
        let processed = process(sample(), &Selection::FilterByUser("mike".into())).unwrap();
        assert_eq!(processed.stats.exported_count, 1);
        assert_eq!(processed.stats.removed_count(), 2);
    }

    #[test]
    fn test_process_report() {
        let processed = process(sample(), &Selection::Report).unwrap();
        let report = processed.report.unwrap();
        assert_eq!(report.count_for("bob"), Some(2));
        assert_eq!(report.count_for("mike"), Some(1));
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn test_process_rejects_invalid_selection() {
        let err = process(sample(), &Selection::FilterByKeyword(String::new())).unwrap_err();
        assert!(err.is_invalid_selection());
    }

    #[test]
    fn test_removed_count_saturates() {
        assert_eq!(ProcessingStats::new(0, 0).removed_count(), 0);
    }
}
