//! End-to-end export: read a transcript, transform it, write JSON.
//!
//! # Example
//!
//! ```rust
//! use chatexport::core::selection::Selection;
//! use chatexport::exporter::Exporter;
//!
//! let transcript = "My Conversation
//! 1448470901 bob Hello there!
//! 1448470905 mike how are you?
//! 1448470906 bob I like pie?";
//!
//! let json = Exporter::new().export_str(transcript, &Selection::Redact(vec!["pie".into()]))?;
//! assert!(json.contains("I like *redacted*?"));
//! # Ok::<(), chatexport::ExportError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::core::output::{to_json, write_json};
use crate::core::processor::{ProcessedExport, process};
use crate::core::selection::Selection;
use crate::error::{ExportError, Result};
use crate::parser::{ConversationSource, TranscriptParser};

/// What an export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Name of the exported conversation.
    pub conversation_name: String,
    /// Messages read from the transcript.
    pub original_count: usize,
    /// Messages written to the output.
    pub exported_count: usize,
    /// Distinct senders in the activity report, if one was written.
    pub report_senders: Option<usize>,
    /// Where the JSON was written.
    pub output_path: PathBuf,
}

/// Runs the read → transform → write pipeline.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Creates an exporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an exporter with custom configuration.
    pub fn with_config(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    fn parser(&self) -> TranscriptParser {
        TranscriptParser::with_config(self.config.transcript.clone())
    }

    /// Exports the transcript at `input` as JSON to `output`.
    ///
    /// The selection and the output extension are validated before the input
    /// is opened.
    ///
    /// # Errors
    ///
    /// - [`ExportError::InvalidSelection`] for an unusable selection
    /// - [`ExportError::InvalidOutputPath`] if `output` is not a `.json` file
    /// - [`ExportError::EmptyInput`] / [`ExportError::MalformedInput`] for a bad transcript
    /// - [`ExportError::Io`] if reading or writing fails
    pub fn export(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        selection: &Selection,
    ) -> Result<ExportSummary> {
        let (input, output) = (input.as_ref(), output.as_ref());
        selection.validate()?;
        ensure_json_extension(output)?;

        tracing::info!(input = %input.display(), output = %output.display(), %selection, "exporting conversation");

        let conversation = self.parser().parse(input)?;
        let processed = process(conversation, selection)?;
        write_json(
            &processed.conversation,
            processed.report.as_ref(),
            output,
            &self.config.output,
        )?;

        Ok(summarize(&processed, output))
    }

    /// Runs the same pipeline entirely in memory and returns the JSON.
    pub fn export_str(&self, transcript: &str, selection: &Selection) -> Result<String> {
        selection.validate()?;

        let conversation = self.parser().parse_str(transcript)?;
        let processed = process(conversation, selection)?;
        to_json(
            &processed.conversation,
            processed.report.as_ref(),
            &self.config.output,
        )
    }
}

/// Checks that `path` names a `.json` file.
///
/// # Errors
///
/// Returns [`ExportError::InvalidOutputPath`] otherwise.
pub fn ensure_json_extension(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        && path.file_stem().is_some_and(|stem| !stem.is_empty());
    if is_json {
        Ok(())
    } else {
        Err(ExportError::invalid_output_path(path.display().to_string()))
    }
}

fn summarize(processed: &ProcessedExport, output: &Path) -> ExportSummary {
    ExportSummary {
        conversation_name: processed.conversation.name.clone(),
        original_count: processed.stats.original_count,
        exported_count: processed.stats.exported_count,
        report_senders: processed.report.as_ref().map(|r| r.len()),
        output_path: output.to_path_buf(),
    }
}
