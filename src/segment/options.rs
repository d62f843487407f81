//! Segmentation options.

/// Options for composing a token stream into slides.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Layout assigned when a slide ends up with more than two non-empty
    /// placeholders and no directive chose one. Inference only defines the
    /// 0/1/2-placeholder cases, so this is an explicit policy knob.
    pub multi_content_layout: String,
}

impl SegmentOptions {
    /// Create new segment options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback layout for slides with more than two content regions.
    pub fn with_multi_content_layout(mut self, layout: impl Into<String>) -> Self {
        self.multi_content_layout = layout.into();
        self
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            multi_content_layout: "two_content".to_string(),
        }
    }
}
