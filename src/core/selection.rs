//! Transformation mode chosen by the caller.
//!
//! An export runs at most one mode: filter by user, filter by keyword, redact
//! a blacklist, or attach an activity report. [`Selection`] captures that
//! choice and rejects contradictory or unusable combinations with
//! [`ExportError::InvalidSelection`] before any transformation runs.
//!
//! # Example
//!
//! ```
//! use chatexport::core::selection::Selection;
//!
//! let selection = Selection::from_options(Some("bob".into()), None, Vec::new(), false)?;
//! assert_eq!(selection, Selection::FilterByUser("bob".into()));
//!
//! let err = Selection::from_options(Some("bob".into()), Some("pie".into()), Vec::new(), false)
//!     .unwrap_err();
//! assert!(err.is_invalid_selection());
//! # Ok::<(), chatexport::ExportError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Conversation;
use crate::core::builder::ConversationBuilder;
use crate::core::redact::Redactor;
use crate::error::{ExportError, Result};

/// The single transformation mode applied to an export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "value")]
pub enum Selection {
    /// Export the conversation unchanged.
    #[default]
    All,
    /// Keep only messages from this sender.
    FilterByUser(String),
    /// Keep only messages containing this keyword.
    FilterByKeyword(String),
    /// Redact every word of this blacklist, in order.
    Redact(Vec<String>),
    /// Export unchanged and attach an activity report.
    Report,
}

impl Selection {
    /// Builds a selection from independently optional inputs.
    ///
    /// At most one of `user`, `keyword`, a non-empty `blacklist` and
    /// `report` may be given. Nothing given selects [`Selection::All`].
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidSelection`] when more than one mode is
    /// requested or a parameter is empty.
    pub fn from_options(
        user: Option<String>,
        keyword: Option<String>,
        blacklist: Vec<String>,
        report: bool,
    ) -> Result<Self> {
        let mut requested = Vec::new();
        if user.is_some() {
            requested.push("--user");
        }
        if keyword.is_some() {
            requested.push("--keyword");
        }
        if !blacklist.is_empty() {
            requested.push("--blacklist");
        }
        if report {
            requested.push("--report");
        }
        if requested.len() > 1 {
            return Err(ExportError::invalid_selection(format!(
                "only one transformation mode may be used at a time, got {}",
                requested.join(", ")
            )));
        }

        let selection = if let Some(user) = user {
            Selection::FilterByUser(user)
        } else if let Some(keyword) = keyword {
            Selection::FilterByKeyword(keyword)
        } else if !blacklist.is_empty() {
            Selection::Redact(blacklist)
        } else if report {
            Selection::Report
        } else {
            Selection::All
        };

        selection.validate()?;
        Ok(selection)
    }

    /// Checks that the mode's parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidSelection`] for an empty user id,
    /// keyword or blacklist, or a blacklist word that cannot be compiled.
    pub fn validate(&self) -> Result<()> {
        match self {
            Selection::All | Selection::Report => Ok(()),
            Selection::FilterByUser(user) if user.is_empty() => {
                Err(ExportError::invalid_selection("user id must not be empty"))
            }
            Selection::FilterByKeyword(keyword) if keyword.is_empty() => {
                Err(ExportError::invalid_selection("keyword must not be empty"))
            }
            Selection::FilterByUser(_) | Selection::FilterByKeyword(_) => Ok(()),
            Selection::Redact(words) => {
                if words.is_empty() {
                    return Err(ExportError::invalid_selection(
                        "blacklist must contain at least one word",
                    ));
                }
                for word in words {
                    Redactor::new(word)?;
                }
                Ok(())
            }
        }
    }

    /// Returns `true` if the export should carry an activity report.
    pub fn includes_report(&self) -> bool {
        matches!(self, Selection::Report)
    }

    /// Returns `true` if this mode changes the exported messages.
    pub fn transforms(&self) -> bool {
        !matches!(self, Selection::All | Selection::Report)
    }

    /// Runs the builder chain this mode implies.
    pub fn apply(&self, conversation: Conversation) -> Conversation {
        let builder = ConversationBuilder::new(conversation);
        let builder = match self {
            Selection::All | Selection::Report => builder,
            Selection::FilterByUser(user) => builder.filter_by_user(user),
            Selection::FilterByKeyword(keyword) => builder.filter_by_keyword(keyword),
            Selection::Redact(words) => builder.redact_words(words),
        };
        builder.build()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "Exporting all messages"),
            Selection::FilterByUser(user) => write!(f, "Showing messages with userId: {}", user),
            Selection::FilterByKeyword(keyword) => {
                write!(f, "Showing messages with keyword: {}", keyword)
            }
            Selection::Redact(words) => write!(
                f,
                "Hiding messages with following word(s): {}",
                words.join(", ")
            ),
            Selection::Report => write!(f, "Including activity report to output"),
        }
    }
}
