//! Transcript reader.
//!
//! A transcript is plain text. The first line is the conversation name; every
//! following line is one message:
//!
//! ```text
//! My Conversation
//! 1448470901 bob Hello there!
//! 1448470905 mike how are you?
//! 1448470906 bob I like pie?
//! ```
//!
//! Message lines are split on single spaces into at most three fields, so the
//! content keeps any further spaces verbatim. The timestamp is whole seconds
//! since the Unix epoch.
//!
//! # Errors
//!
//! - A transcript with no lines at all is [`ExportError::EmptyInput`].
//! - A line that is not valid UTF-8, has fewer than three fields, has an
//!   empty sender or whose timestamp is not a non-negative integer is
//!   [`ExportError::MalformedInput`].
//!   By default this aborts the read; see
//!   [`TranscriptConfig::skip_malformed`] to drop such lines instead.
//!
//! # Example
//!
//! ```rust
//! use chatexport::parser::{ConversationSource, TranscriptParser};
//!
//! let parser = TranscriptParser::new();
//! let conversation = parser.parse_str("My Conversation\n1448470901 bob Hello there!\n")?;
//!
//! assert_eq!(conversation.name, "My Conversation");
//! assert_eq!(conversation.messages[0].content, "Hello there!");
//! # Ok::<(), chatexport::ExportError>(())
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config::TranscriptConfig;
use crate::error::{ExportError, Result};
use crate::{Conversation, Message};

/// Anything that can produce a [`Conversation`].
pub trait ConversationSource {
    /// Returns the human-readable name of this source.
    fn name(&self) -> &'static str;

    /// Reads a conversation from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the file cannot be read, plus whatever
    /// [`parse_str`](ConversationSource::parse_str) would return.
    fn parse(&self, path: &Path) -> Result<Conversation>;

    /// Reads a conversation from in-memory text.
    fn parse_str(&self, content: &str) -> Result<Conversation>;

    /// Reads a conversation from a file (convenience method accepting &str path).
    fn parse_file(&self, path: &str) -> Result<Conversation> {
        self.parse(Path::new(path))
    }
}

/// Parser for line-oriented chat transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: TranscriptConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Reads a conversation from any buffered reader.
    ///
    /// Lines are decoded one at a time, so a line that is not valid UTF-8 is
    /// reported as [`ExportError::MalformedInput`] like any other bad line.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Conversation> {
        self.parse_lines(reader.split(b'\n'))
    }

    fn parse_lines<I>(&self, mut lines: I) -> Result<Conversation>
    where
        I: Iterator<Item = io::Result<Vec<u8>>>,
    {
        let name = match lines.next() {
            Some(line) => decode_line(line?, 1)?,
            None => return Err(ExportError::EmptyInput),
        };

        let mut messages = Vec::new();
        let mut skipped = 0usize;
        for (idx, line) in lines.enumerate() {
            let bytes = line?;
            // The name occupies line 1.
            let line_no = idx + 2;
            let parsed =
                decode_line(bytes, line_no).and_then(|line| parse_message_line(&line, line_no));
            match parsed {
                Ok(msg) => messages.push(msg),
                Err(e) if self.config.skip_malformed => {
                    tracing::warn!(line = line_no, error = %e, "skipping malformed line");
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(
            name = %name,
            messages = messages.len(),
            skipped,
            "parsed transcript"
        );

        Ok(Conversation::new(name, messages))
    }
}

impl ConversationSource for TranscriptParser {
    fn name(&self) -> &'static str {
        "Transcript"
    }

    fn parse(&self, path: &Path) -> Result<Conversation> {
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file))
    }

    fn parse_str(&self, content: &str) -> Result<Conversation> {
        self.parse_reader(content.as_bytes())
    }
}

/// Parses `<epochSeconds> <senderId> <content>`.
///
/// `line_no` is only used for error reporting.
pub fn parse_message_line(line: &str, line_no: usize) -> Result<Message> {
    let mut fields = line.splitn(3, ' ');
    let (Some(ts), Some(sender), Some(content)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(ExportError::malformed(
            line_no,
            "expected '<timestamp> <senderId> <content>'",
        ));
    };

    if sender.is_empty() {
        return Err(ExportError::malformed(line_no, "sender id is empty"));
    }

    let seconds: u64 = ts.parse().map_err(|_| {
        ExportError::malformed(line_no, format!("timestamp '{ts}' is not a non-negative integer"))
    })?;

    i64::try_from(seconds)
        .ok()
        .and_then(|seconds| Message::from_epoch(seconds, sender, content))
        .ok_or_else(|| ExportError::malformed(line_no, format!("timestamp '{ts}' is out of range")))
}

/// Decodes one raw line, dropping the `\r` a CRLF line ending leaves behind
/// once the reader has split on `\n`.
fn decode_line(mut bytes: Vec<u8>, line_no: usize) -> Result<String> {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    String::from_utf8(bytes).map_err(|e| {
        ExportError::malformed(
            line_no,
            format!("line is not valid UTF-8 (byte {})", e.utf8_error().valid_up_to()),
        )
    })
}
