//! Command-line interface definition using clap.
//!
//! [`Args`] only describes the flags; turning them into a validated
//! [`Selection`] (and rejecting contradictory flags) happens in
//! [`Args::selection`], so the same rules apply to library callers.
//!
//! ```rust
//! use chatexport::cli::Args;
//! use chatexport::core::selection::Selection;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatexport", "-i", "chat.txt", "-o", "chat.json", "-u", "bob"]);
//! assert_eq!(args.selection().unwrap(), Selection::FilterByUser("bob".into()));
//! ```

use clap::Parser;

use crate::config::{ExportConfig, OutputConfig, TranscriptConfig};
use crate::core::selection::Selection;
use crate::error::Result;

/// Export a chat transcript to JSON, optionally filtered, redacted or with an
/// activity report.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatexport")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatexport -i chat.txt -o chat.json
    chatexport -i chat.txt -o bob.json --user bob
    chatexport -i chat.txt -o pie.json --keyword pie
    chatexport -i chat.txt -o clean.json --blacklist pie,no
    chatexport -i chat.txt -o report.json --report")]
pub struct Args {
    /// Path to the input transcript
    #[arg(short, long, value_name = "FILE")]
    pub input: String,

    /// Path to the output JSON file
    #[arg(short, long, value_name = "FILE")]
    pub output: String,

    /// Only export messages sent by this user
    #[arg(short, long, value_name = "USER")]
    pub user: Option<String>,

    /// Only export messages containing this keyword
    #[arg(short, long, value_name = "KEYWORD")]
    pub keyword: Option<String>,

    /// Redact these words (comma-separated, may be repeated)
    #[arg(short, long, value_name = "WORDS", value_delimiter = ',')]
    pub blacklist: Vec<String>,

    /// Attach a per-sender activity report
    #[arg(short, long)]
    pub report: bool,

    /// Write single-line JSON instead of indented output
    #[arg(long)]
    pub compact: bool,

    /// Skip unparseable transcript lines instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Print debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Returns the single transformation mode the flags ask for.
    pub fn selection(&self) -> Result<Selection> {
        Selection::from_options(
            self.user.clone(),
            self.keyword.clone(),
            self.blacklist.clone(),
            self.report,
        )
    }

    /// Returns the export configuration the flags ask for.
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig::new()
            .with_transcript(TranscriptConfig::new().with_skip_malformed(self.skip_malformed))
            .with_output(OutputConfig::new().with_pretty(!self.compact))
    }
}
