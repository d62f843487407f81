//! Content tokens consumed by placeholders.

use super::Run;
use serde::{Deserialize, Serialize};

/// How a content token occupies its placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consume {
    /// May coexist with adjacent shared tokens in one placeholder
    Shared,
    /// Must occupy a placeholder alone
    Monopoly,
}

/// A block of slide content produced by the segmenter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentToken {
    /// A paragraph of styled runs
    Paragraph {
        /// The text runs
        runs: Vec<Run>,
    },

    /// A content heading (levels 3-6; 1-2 become slide titles)
    Heading {
        /// Heading level
        level: u8,
        /// The text runs
        runs: Vec<Run>,
    },

    /// A block quote
    BlockQuote {
        /// The quoted runs
        runs: Vec<Run>,
    },

    /// A code block
    Code {
        /// Language from the fence info string
        #[serde(default)]
        lang: Option<String>,
        /// Literal source text
        raw: String,
    },

    /// An image
    Image {
        /// Image location, percent-decoded
        url: String,
        /// Alternative text, omitted when empty
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },

    /// A flattened list
    List {
        /// Entries in depth-first, pre-order sequence
        items: Vec<ListEntry>,
    },

    /// A table
    Table {
        /// Header cells
        head: Vec<Cell>,
        /// Body rows
        body: Vec<Vec<Cell>>,
    },
}

impl ContentToken {
    /// The consume mode intrinsic to this token kind.
    ///
    /// Images and tables monopolize their placeholder; everything else may
    /// share one with adjacent shared tokens.
    pub fn consume(&self) -> Consume {
        match self {
            ContentToken::Image { .. } | ContentToken::Table { .. } => Consume::Monopoly,
            _ => Consume::Shared,
        }
    }
}

/// A content token together with the consume tag it was appended under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedToken {
    /// The content
    #[serde(flatten)]
    pub token: ContentToken,

    /// The recorded consume mode
    pub consume: Consume,
}

/// One flattened list entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEntry {
    /// Nesting depth (0 = top level)
    pub depth: u8,

    /// The entry's text runs
    pub runs: Vec<Run>,

    /// Whether the owning list is ordered
    pub ordered: bool,
}

/// A table cell: styled runs plus the column alignment the delimiter row
/// declared, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// The cell's text runs
    pub runs: Vec<Run>,

    /// Declared alignment
    #[serde(default)]
    pub align: Option<CellAlign>,
}

impl Cell {
    /// Create a cell with the given runs and no declared alignment.
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs, align: None }
    }

    /// Create a plain-text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Run::new(text)])
    }

    /// Concatenated text of the cell's runs.
    pub fn plain_text(&self) -> String {
        super::runs_text(&self.runs)
    }
}

/// Horizontal alignment declared for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlign {
    /// Left-aligned column
    Left,
    /// Center-aligned column
    Center,
    /// Right-aligned column
    Right,
}
