//! Error types for the mdeck library.

use thiserror::Error;

/// Result type alias for mdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during composition or geometry resolution.
#[derive(Error, Debug)]
pub enum Error {
    /// Error deserializing a token stream or shape metadata.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A shape index referenced a region that does not exist.
    #[error("Shape index {index} is out of range ({len} shapes)")]
    ShapeIndex {
        /// The offending index
        index: usize,
        /// Number of shapes available
        len: usize,
    },

    /// Geometry was requested over an empty shape set.
    #[error("Cannot resolve geometry over an empty shape set")]
    EmptyShapes,

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
