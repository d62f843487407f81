//! Document-level types.

use super::{runs_text, Consume, ContentToken, PlacedToken, Run};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A composed slide-deck document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Frontmatter mapping passed through from the tokenizer
    #[serde(default)]
    pub frontmatter: Map<String, Value>,

    /// Slides in presentation order
    pub slides: Vec<Slide>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of slides in the document.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Check if the document has any slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Presentation title from frontmatter, if declared.
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.get("title").and_then(Value::as_str)
    }
}

/// A single slide: title, resolved layout, content regions and notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Title runs; empty for untitled slides
    pub title: Vec<Run>,

    /// Layout name; empty only while the slide is under construction
    pub layout: String,

    /// Content regions in order
    pub placeholders: Vec<Placeholder>,

    /// Speaker notes
    pub notes: Vec<String>,
}

impl Slide {
    /// Create a fresh slide with one empty placeholder and no layout.
    pub fn new() -> Self {
        Self {
            title: Vec::new(),
            layout: String::new(),
            placeholders: vec![Placeholder::new()],
            notes: Vec::new(),
        }
    }

    /// Plain text of the slide title.
    pub fn title_text(&self) -> String {
        runs_text(&self.title)
    }

    /// Count of placeholders that hold at least one token.
    pub fn non_empty_placeholder_count(&self) -> usize {
        self.placeholders.iter().filter(|p| !p.is_empty()).count()
    }

    /// A slide is vacuous when it has no title and its first placeholder
    /// never received content. Such slides are pruned after segmentation.
    pub fn is_vacuous(&self) -> bool {
        self.title.is_empty()
            && self.placeholders.first().map_or(true, |p| p.is_empty())
    }
}

/// An ordered content region within a slide.
///
/// Tokens accumulate under the consume-sequencing rule: once a monopoly token
/// lands in a placeholder it stays alone there, and shared tokens only join a
/// placeholder whose latest token was also shared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Placeholder {
    tokens: Vec<PlacedToken>,
}

impl Placeholder {
    /// Create a new empty placeholder.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Append a token with its consume tag.
    pub fn push(&mut self, token: ContentToken, consume: Consume) {
        self.tokens.push(PlacedToken { token, consume });
    }

    /// The tokens in this placeholder, in append order.
    pub fn tokens(&self) -> &[PlacedToken] {
        &self.tokens
    }

    /// The most recently appended token.
    pub fn last(&self) -> Option<&PlacedToken> {
        self.tokens.last()
    }

    /// The first token, which determines monopoly status for layout inference.
    pub fn first(&self) -> Option<&PlacedToken> {
        self.tokens.first()
    }

    /// Check if the placeholder holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens in the placeholder.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

/// Match a requested layout name against the destination's layout set.
///
/// The lookup is case-insensitive. When the name is missing the named default
/// is tried instead; if even that is absent, `None` is returned and the caller
/// picks its own position. Either fallback is logged.
pub fn select_layout<S: AsRef<str>>(
    available: &[S],
    requested: &str,
    default: &str,
) -> Option<usize> {
    let find = |name: &str| {
        available
            .iter()
            .position(|l| l.as_ref().eq_ignore_ascii_case(name))
    };

    if let Some(idx) = find(requested) {
        return Some(idx);
    }
    log::warn!(
        "Layout {:?} not found in destination layout set, falling back to {:?}",
        requested,
        default
    );
    find(default)
}
