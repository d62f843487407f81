//! Document model types for slide-deck composition.
//!
//! This module defines the intermediate representation that bridges Markdown
//! tokenization and presentation writing: input tokens on one side, composed
//! slides of placed content tokens on the other.

mod content;
mod document;
mod run;
mod token;

pub use content::{Cell, CellAlign, Consume, ContentToken, ListEntry, PlacedToken};
pub use document::{select_layout, Document, Placeholder, Slide};
pub use run::{runs_text, Run};
pub use token::{
    CellAttrs, CodeAttrs, HeadingAttrs, ListAttrs, Token, TokenStream, UrlAttrs,
};
