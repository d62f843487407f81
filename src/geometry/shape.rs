//! Shapes and placeholder shape metadata.

use serde::{Deserialize, Serialize};

/// English Metric Units per inch, the native length unit of the presentation
/// format. All geometry math in this crate stays in EMU.
pub const EMU_PER_INCH: i64 = 914_400;

/// An axis-aligned rectangle in EMU, with the layout annotations a
/// placeholder's metadata may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Left edge
    pub left: i64,

    /// Top edge
    pub top: i64,

    /// Width
    pub width: i64,

    /// Height
    pub height: i64,

    /// Keep-out margin used when expanding toward neighbors, in EMU
    #[serde(default)]
    pub margin: i64,

    /// Alignment code (1-9, numpad semantics)
    #[serde(default)]
    pub align: Option<u8>,

    /// Grow code (1-9, numpad semantics)
    #[serde(default)]
    pub grow: Option<u8>,
}

impl Shape {
    /// Create a shape with no annotations.
    pub fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a shape carrying the annotations of the given metadata.
    pub fn with_meta(mut self, meta: &ShapeMeta) -> Self {
        self.margin = meta.margin_emu();
        self.align = meta.align();
        self.grow = meta.grow();
        self
    }

    /// Create a shape from driver-supplied bounds and the placeholder's
    /// display name, whose JSON metadata is parsed defensively.
    pub fn from_named_bounds(left: i64, top: i64, width: i64, height: i64, name: &str) -> Self {
        Self::new(left, top, width, height).with_meta(&ShapeMeta::from_name(name))
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> i64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> i64 {
        self.top + self.height
    }
}

/// Layout annotations optionally JSON-encoded in a placeholder's display
/// name, e.g. `{"align": 5, "grow": 7, "margin": 0.25}`.
///
/// Pass-through keys the writer does not recognize are ignored. `margin` is
/// authored in inches and converted to EMU for geometry math.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeMeta {
    #[serde(default)]
    align: Option<u8>,

    #[serde(default)]
    grow: Option<u8>,

    #[serde(default)]
    margin: Option<f64>,
}

impl ShapeMeta {
    /// Parse metadata from a display name.
    pub fn parse(name: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(name)?)
    }

    /// Parse metadata, treating malformed or absent JSON as no annotation.
    pub fn from_name(name: &str) -> Self {
        match Self::parse(name) {
            Ok(meta) => meta,
            Err(err) => {
                log::debug!("No shape metadata in {:?}: {}", name, err);
                Self::default()
            }
        }
    }

    /// Alignment code, `None` when absent or outside 1..=9.
    pub fn align(&self) -> Option<u8> {
        validate_code(self.align, "align")
    }

    /// Grow code, `None` when absent or outside 1..=9.
    pub fn grow(&self) -> Option<u8> {
        validate_code(self.grow, "grow")
    }

    /// Margin converted from inches to EMU; zero when absent.
    pub fn margin_emu(&self) -> i64 {
        self.margin
            .map(|inches| (inches * EMU_PER_INCH as f64) as i64)
            .unwrap_or(0)
    }
}

fn validate_code(code: Option<u8>, what: &str) -> Option<u8> {
    match code {
        Some(c) if (1..=9).contains(&c) => Some(c),
        Some(c) => {
            log::warn!("Ignoring {} code {} outside 1..=9", what, c);
            None
        }
        None => None,
    }
}
