//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;
use crate::core::activity::ActivityReport;
use crate::error::Result;
use crate::{Conversation, Message};

/// Borrowed view of the exported document.
///
/// `activity` is skipped entirely when no report was requested, so a
/// requested-but-empty report (`"activity": []`) stays distinguishable from
/// no report at all.
#[derive(Serialize)]
struct JsonDocument<'a> {
    name: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    activity: Option<&'a ActivityReport>,
}

/// Owned form of the exported document, for reading output back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportDocument {
    /// Conversation name.
    pub name: String,
    /// Exported messages.
    pub messages: Vec<Message>,
    /// Activity report, present only if it was requested.
    #[serde(default)]
    pub activity: Option<ActivityReport>,
}

impl ExportDocument {
    /// Parses a document produced by [`to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Splits the document into its conversation and optional report.
    pub fn into_parts(self) -> (Conversation, Option<ActivityReport>) {
        (Conversation::new(self.name, self.messages), self.activity)
    }
}

/// Converts a conversation (and optional report) to a JSON string.
///
/// # Format
/// ```json
/// {
///   "name": "My Conversation",
///   "messages": [
///     {"timestamp": 1448470901, "senderId": "bob", "content": "Hello there!"}
///   ],
///   "activity": [
///     {"senderId": "bob", "count": 1}
///   ]
/// }
/// ```
pub fn to_json(
    conversation: &Conversation,
    report: Option<&ActivityReport>,
    config: &OutputConfig,
) -> Result<String> {
    let document = JsonDocument {
        name: &conversation.name,
        messages: &conversation.messages,
        activity: report,
    };

    let json = if config.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

/// Writes the JSON document to `output_path`, replacing any existing file.
pub fn write_json(
    conversation: &Conversation,
    report: Option<&ActivityReport>,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(conversation, report, config)?;
    let mut writer = BufWriter::new(File::create(output_path)?);
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

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
    fn test_to_json_basic() {
        let json = to_json(&sample(), None, &OutputConfig::new()).unwrap();

        assert!(json.contains(r#""name": "My Conversation""#));
        assert!(json.contains(r#""timestamp": 1448470901"#));
        assert!(json.contains(r#""senderId": "bob""#));
        assert!(json.contains(r#""content": "I like pie?""#));
        assert!(!json.contains("activity"));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), None, &OutputConfig::compact()).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with(r#"{"name":"My Conversation","messages":[{"timestamp":1448470901"#));
    }

    #[test]
    fn test_to_json_with_report() {
        let conversation = sample();
        let report = ActivityReport::from_conversation(&conversation);
        let json = to_json(&conversation, Some(&report), &OutputConfig::compact()).unwrap();

        assert!(json.ends_with(
            r#""activity":[{"senderId":"bob","count":2},{"senderId":"mike","count":1}]}"#
        ));
    }

    #[test]
    fn test_empty_report_is_empty_array() {
        let conversation = Conversation::new("Empty", Vec::new());
        let report = ActivityReport::from_conversation(&conversation);
        let json = to_json(&conversation, Some(&report), &OutputConfig::compact()).unwrap();

        assert_eq!(json, r#"{"name":"Empty","messages":[],"activity":[]}"#);
    }

    #[test]
    fn test_round_trip() {
        let conversation = sample();
        let report = ActivityReport::from_conversation(&conversation);
        let json = to_json(&conversation, Some(&report), &OutputConfig::new()).unwrap();

        let (parsed, parsed_report) = ExportDocument::from_json(&json).unwrap().into_parts();
        assert_eq!(parsed, conversation);
        assert_eq!(parsed_report, Some(report));
    }

    #[test]
    fn test_round_trip_without_report() {
        let json = to_json(&sample(), None, &OutputConfig::new()).unwrap();
        let document = ExportDocument::from_json(&json).unwrap();
        assert!(document.activity.is_none());
    }

    #[test]
    fn test_write_json() {
        let temp_file = NamedTempFile::new().unwrap();
        write_json(&sample(), None, temp_file.path(), &OutputConfig::new()).unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        let document = ExportDocument::from_json(&content).unwrap();
        assert_eq!(document.messages.len(), 3);
    }

    #[test]
    fn test_write_json_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_json(&sample(), None, &path, &OutputConfig::new()).unwrap_err();
        assert!(err.is_io());
    }
}
