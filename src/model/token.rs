//! Input token types.
//!
//! These mirror the block and inline nodes emitted by the upstream Markdown
//! tokenizer. The tokenizer hands us a flat list of block-level tokens whose
//! inline structure lives in `children`; the segmenter walks that list exactly
//! once. Modeling the nodes as a closed sum type gives exhaustive-match safety
//! over the open `type` + `attrs` mapping the tokenizer serializes.

use super::CellAlign;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parsed block- or inline-level node from the source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
    /// A heading; levels 1-2 start slides, 3-6 become content.
    Heading {
        /// Heading attributes (level)
        attrs: HeadingAttrs,
        /// Inline children
        #[serde(default)]
        children: Vec<Token>,
    },

    /// A paragraph of inline content.
    Paragraph {
        /// Inline children
        #[serde(default)]
        children: Vec<Token>,
    },

    /// A (possibly nested) list.
    List {
        /// List attributes (ordered flag)
        #[serde(default)]
        attrs: ListAttrs,
        /// List items
        #[serde(default)]
        children: Vec<Token>,
    },

    /// A single list item.
    ListItem {
        /// Item children: block text and nested lists
        #[serde(default)]
        children: Vec<Token>,
    },

    /// The textual body of a list item.
    BlockText {
        /// Inline children
        #[serde(default)]
        children: Vec<Token>,
    },

    /// A block quote wrapping one or more paragraphs.
    BlockQuote {
        /// Block children
        #[serde(default)]
        children: Vec<Token>,
    },

    /// A fenced or indented code block.
    BlockCode {
        /// Code attributes (info string)
        #[serde(default)]
        attrs: CodeAttrs,
        /// Literal source text
        #[serde(default)]
        raw: String,
    },

    /// A table; children are a head and a body node.
    Table {
        /// Table head and body
        #[serde(default)]
        children: Vec<Token>,
    },

    /// The header row of a table; children are cells.
    TableHead {
        /// Header cells
        #[serde(default)]
        children: Vec<Token>,
    },

    /// The body of a table; children are rows.
    TableBody {
        /// Body rows
        #[serde(default)]
        children: Vec<Token>,
    },

    /// A single body row; children are cells.
    TableRow {
        /// Row cells
        #[serde(default)]
        children: Vec<Token>,
    },

    /// A table cell.
    TableCell {
        /// Cell attributes (alignment, header flag)
        #[serde(default)]
        attrs: CellAttrs,
        /// Inline children
        #[serde(default)]
        children: Vec<Token>,
    },

    /// An image reference.
    Image {
        /// URL attribute
        #[serde(default)]
        attrs: UrlAttrs,
        /// Alt-text children
        #[serde(default)]
        children: Vec<Token>,
    },

    /// A hyperlink.
    Link {
        /// URL attribute
        #[serde(default)]
        attrs: UrlAttrs,
        /// Inline children
        #[serde(default)]
        children: Vec<Token>,
    },

    /// A literal text leaf.
    Text {
        /// The text
        #[serde(default)]
        raw: String,
    },

    /// Bold inline span.
    Strong {
        /// Inline children
        #[serde(default)]
        children: Vec<Token>,
    },

    /// Italic inline span.
    Emphasis {
        /// Inline children
        #[serde(default)]
        children: Vec<Token>,
    },

    /// Inline code span.
    Codespan {
        /// The code text
        #[serde(default)]
        raw: String,
    },

    /// A soft line break, rendered as a single space.
    Softbreak,

    /// A hard line break.
    Linebreak,

    /// A `---`/`___` rule: new slide continuing the previous title.
    ThematicBreak,

    /// A `***` rule: explicit placeholder break within a slide.
    WildcardBreak,

    /// A `[key]: # (value)` directive comment.
    CommentBlock {
        /// Directive key (`layout`, `note`, ...)
        key: String,
        /// Directive value
        value: String,
    },

    /// An empty source line; ignored.
    BlankLine,

    /// Any token type this model does not understand.
    #[serde(other)]
    Unknown,
}

impl Token {
    /// Concatenated raw text of this token's text leaves, depth first.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Token::Text { raw } | Token::Codespan { raw } => out.push_str(raw),
            Token::Softbreak => out.push(' '),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Child tokens, empty for leaves.
    pub fn children(&self) -> &[Token] {
        match self {
            Token::Heading { children, .. }
            | Token::Paragraph { children }
            | Token::List { children, .. }
            | Token::ListItem { children }
            | Token::BlockText { children }
            | Token::BlockQuote { children }
            | Token::Table { children }
            | Token::TableHead { children }
            | Token::TableBody { children }
            | Token::TableRow { children }
            | Token::TableCell { children, .. }
            | Token::Image { children, .. }
            | Token::Link { children, .. }
            | Token::Strong { children }
            | Token::Emphasis { children } => children,
            _ => &[],
        }
    }
}

/// Attributes of a heading token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingAttrs {
    /// Heading level (1-6)
    pub level: u8,
}

/// Attributes of a list token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAttrs {
    /// Whether the list is ordered (numbered)
    #[serde(default)]
    pub ordered: bool,
}

/// Attributes of a code block token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeAttrs {
    /// Info string following the opening fence (the language)
    #[serde(default)]
    pub info: Option<String>,
}

/// Attributes of a link or image token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlAttrs {
    /// Target URL
    #[serde(default)]
    pub url: String,

    /// Optional title
    #[serde(default)]
    pub title: Option<String>,
}

/// Attributes of a table cell token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CellAttrs {
    /// Column alignment, if the delimiter row declared one
    #[serde(default)]
    pub align: Option<CellAlign>,

    /// Whether the cell belongs to the header row
    #[serde(default)]
    pub head: bool,
}

/// The tokenizer's full output: frontmatter mapping plus the token list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenStream {
    /// YAML frontmatter, already parsed into a JSON mapping
    #[serde(default)]
    pub frontmatter: Map<String, Value>,

    /// The flat block-level token list
    #[serde(default)]
    pub tokens: Vec<Token>,
}

impl TokenStream {
    /// Deserialize a token stream from the tokenizer's JSON output.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
