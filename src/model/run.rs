//! Styled text runs.

use serde::{Deserialize, Serialize};

/// A flat styled text span with no further structure.
///
/// Style flags are only serialized when set, so a plain run round-trips as
/// `{"text": "..."}` exactly like the tokenizer pipeline's sparse run JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Bold text
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,

    /// Italic text
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,

    /// Monospace (inline code) text
    #[serde(default, skip_serializing_if = "is_false")]
    pub monospace: bool,

    /// Hyperlink target, if this run is a link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
}

fn is_false(v: &bool) -> bool {
    !v
}

impl Run {
    /// Create a plain run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            ..Default::default()
        }
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            italic: true,
            ..Default::default()
        }
    }

    /// Check if this run carries any styling.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.monospace || self.hyperlink.is_some()
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Concatenated text of a sequence of runs.
pub fn runs_text(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}
