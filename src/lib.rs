//! # mdeck
//!
//! Slide-deck composition library for Rust.
//!
//! This library turns a Markdown block token stream into a structured
//! slide-deck document model and resolves placeholder geometry for
//! presentation writers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdeck::{compose_json, SegmentOptions};
//!
//! fn main() -> mdeck::Result<()> {
//!     // Compose a token stream into slides
//!     let json = std::fs::read_to_string("tokens.json").unwrap();
//!     let document = compose_json(&json)?;
//!
//!     for slide in &document.slides {
//!         println!("{}: {}", slide.layout, slide.title_text());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Slide segmentation**: Headings, breaks, and layout directives split
//!   the stream into slides and placeholders
//! - **Consume-aware placement**: Images and tables monopolize a
//!   placeholder, text content coalesces
//! - **Layout inference**: Layouts chosen from placeholder population
//! - **Geometry resolution**: Numpad alignment, free-space growth, and
//!   content-weighted table column widths in EMU space
//! - **CJK support**: East Asian wide characters weighted in column sizing

pub mod error;
pub mod geometry;
pub mod model;
pub mod segment;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{
    apply_grow, column_widths, expand, grow_all, resolve_align, GrowDeltas, Shape, ShapeMeta,
    EMU_PER_INCH,
};
pub use model::{
    runs_text, Cell, CellAlign, Consume, ContentToken, Document, PlacedToken, Placeholder, Run,
    Slide, Token, TokenStream,
};
pub use segment::{build_runs, SegmentOptions, Segmenter};

use serde_json::{Map, Value};

/// Compose a token stream into a slide-deck document.
///
/// # Arguments
///
/// * `tokens` - Block tokens in document order
/// * `frontmatter` - Frontmatter mapping carried onto the document
///
/// # Example
///
/// ```
/// use mdeck::{compose, Token};
/// use serde_json::Map;
///
/// let doc = compose(vec![Token::ThematicBreak], Map::new());
/// assert!(doc.is_empty());
/// ```
pub fn compose(tokens: Vec<Token>, frontmatter: Map<String, Value>) -> Document {
    compose_with_options(tokens, frontmatter, SegmentOptions::default())
}

/// Compose a token stream with custom segmentation options.
///
/// # Example
///
/// ```
/// use mdeck::{compose_with_options, SegmentOptions};
/// use serde_json::Map;
///
/// let options = SegmentOptions::default()
///     .with_multi_content_layout("four_content");
/// let doc = compose_with_options(vec![], Map::new(), options);
/// assert!(doc.is_empty());
/// ```
pub fn compose_with_options(
    tokens: Vec<Token>,
    frontmatter: Map<String, Value>,
    options: SegmentOptions,
) -> Document {
    let mut document = Segmenter::with_options(options).segment(tokens);
    document.frontmatter = frontmatter;
    document
}

/// Compose a JSON-encoded token stream into a slide-deck document.
///
/// The input is the tokenizer's interchange format: an object with a
/// `frontmatter` mapping and a `tokens` array.
pub fn compose_json(json: &str) -> Result<Document> {
    let stream = TokenStream::from_json(json)?;
    Ok(compose(stream.tokens, stream.frontmatter))
}
