//! Whole-word redaction of message content.
//!
//! A [`Redactor`] replaces every case-sensitive, whole-word occurrence of one
//! blacklisted word with [`REDACTED`]. "Whole word" means the occurrence is
//! not glued to a neighbouring word character (anything regex `\w` matches): with
//! `pie` blacklisted, `"I like pie?"` becomes `"I like *redacted*?"` while
//! `"a piece of cake"` is left alone.
//!
//! Placeholders already present in the text are never matched into, so
//! redacting the same word twice gives the same result as redacting it once.
//!
//! # Example
//!
//! ```
//! use chatexport::core::redact::Redactor;
//!
//! # fn main() -> chatexport::Result<()> {
//! let redactor = Redactor::new("pie")?;
//! assert_eq!(redactor.redact("I like pie?"), "I like *redacted*?");
//! assert_eq!(redactor.redact("a piece of cake"), "a piece of cake");
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::error::{ExportError, Result};

/// Token that replaces every redacted word.
pub const REDACTED: &str = "*redacted*";

/// A single character in the class `\b` treats as a word character.
static WORD_CHAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w$").unwrap());

/// Compiled matcher for a single blacklisted word.
#[derive(Debug, Clone)]
pub struct Redactor {
    word: String,
    pattern: Regex,
}

impl Redactor {
    /// Compiles a redactor for `word`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidSelection`] if `word` is empty or too
    /// large to compile.
    pub fn new(word: &str) -> Result<Self> {
        if word.is_empty() {
            return Err(ExportError::invalid_selection(
                "cannot redact an empty word",
            ));
        }

        let pattern = Regex::new(&word_pattern(word)).map_err(|e| {
            ExportError::invalid_selection(format!("cannot redact '{word}': {e}"))
        })?;

        Ok(Self {
            word: word.to_string(),
            pattern,
        })
    }

    /// Returns the blacklisted word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns `true` if `content` has at least one occurrence to redact.
    pub fn is_match(&self, content: &str) -> bool {
        content
            .split(REDACTED)
            .any(|segment| self.pattern.is_match(segment))
    }

    /// Replaces every whole-word occurrence in `content`.
    ///
    /// Borrows the input unchanged when there is nothing to redact.
    pub fn redact<'a>(&self, content: &'a str) -> Cow<'a, str> {
        if !self.is_match(content) {
            return Cow::Borrowed(content);
        }

        let mut redacted = String::with_capacity(content.len());
        for (i, segment) in content.split(REDACTED).enumerate() {
            if i > 0 {
                redacted.push_str(REDACTED);
            }
            redacted.push_str(&self.pattern.replace_all(segment, NoExpand(REDACTED)));
        }
        Cow::Owned(redacted)
    }
}

/// Builds the regex for `word`.
///
/// `\b` is only meaningful next to a word character, so it is added on each
/// side only when the word starts (or ends) with one.
fn word_pattern(word: &str) -> String {
    let mut pattern = String::with_capacity(word.len() + 4);
    if word.chars().next().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(word));
    if word.chars().next_back().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern
}

fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR.is_match(c.encode_utf8(&mut buf))
}
