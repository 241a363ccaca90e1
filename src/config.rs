//! Configuration types for reading transcripts and writing output.
//!
//! These are plain structs with builder-style setters, usable from library
//! code without any CLI dependency.
//!
//! - [`TranscriptConfig`] - how the transcript reader treats bad lines
//! - [`OutputConfig`] - how the JSON document is laid out
//! - [`ExportConfig`] - both of the above, for the [`Exporter`](crate::exporter::Exporter)
//!
//! # Example
//!
//! ```rust
//! use chatexport::config::{ExportConfig, OutputConfig, TranscriptConfig};
//!
//! let config = ExportConfig::new()
//!     .with_transcript(TranscriptConfig::new().with_skip_malformed(true))
//!     .with_output(OutputConfig::compact());
//!
//! assert!(config.transcript.skip_malformed);
//! assert!(!config.output.pretty);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
///
/// By default a malformed message line aborts the whole read. With
/// `skip_malformed` enabled such lines are logged and dropped instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Skip unparseable message lines instead of failing (default: false)
    pub skip_malformed: bool,
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to skip malformed lines.
    #[must_use]
    pub fn with_skip_malformed(mut self, skip: bool) -> Self {
        self.skip_malformed = skip;
        self
    }
}

/// Configuration for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Indent the JSON document (default: true)
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that writes single-line JSON.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Enables or disables indentation.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Full configuration for an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Transcript reader settings.
    pub transcript: TranscriptConfig,
    /// JSON writer settings.
    pub output: OutputConfig,
}

impl ExportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the transcript settings.
    #[must_use]
    pub fn with_transcript(mut self, transcript: TranscriptConfig) -> Self {
        self.transcript = transcript;
        self
    }

    /// Replaces the output settings.
    #[must_use]
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }
}
