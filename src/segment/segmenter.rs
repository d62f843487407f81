//! The slide/placeholder segmentation state machine.
//!
//! A [`Segmenter`] makes a single left-to-right pass over the block token
//! stream, grouping tokens into slides and placeholders and inferring a
//! layout for every slide that no directive named. Degenerate input never
//! aborts the pass: unsupported tokens are logged and skipped.

use crate::model::{
    runs_text, Cell, Consume, ContentToken, Document, ListEntry, Placeholder, Slide, Token,
};
use crate::segment::{build_runs, SegmentOptions};

/// Composes a flat token stream into a [`Document`].
#[derive(Debug)]
pub struct Segmenter {
    document: Document,
    current_slide: usize,
    current_placeholder: usize,
    last_consume: Option<Consume>,
    options: SegmentOptions,
}

impl Segmenter {
    /// Create a segmenter with default options.
    pub fn new() -> Self {
        Self::with_options(SegmentOptions::default())
    }

    /// Create a segmenter with the given options.
    pub fn with_options(options: SegmentOptions) -> Self {
        let mut document = Document::new();
        document.slides.push(Slide::new());
        Self {
            document,
            current_slide: 0,
            current_placeholder: 0,
            last_consume: None,
            options,
        }
    }

    /// Consume the token stream and produce the composed document.
    ///
    /// Finalizes the trailing slide and prunes slides that received neither a
    /// title nor any content in their first placeholder.
    pub fn segment(mut self, tokens: Vec<Token>) -> Document {
        for token in tokens {
            self.dispatch(token);
        }
        self.finalize_slide(true);
        self.document.slides.retain(|s| !s.is_vacuous());
        self.document
    }

    fn dispatch(&mut self, token: Token) {
        match token {
            Token::Heading { attrs, children } => match attrs.level {
                1 | 2 => {
                    self.finalize_slide(false);
                    self.current_slide_mut().title = build_runs(&children);
                }
                3..=6 => {
                    let token = ContentToken::Heading {
                        level: attrs.level,
                        runs: build_runs(&children),
                    };
                    self.add_token(token, Consume::Shared);
                }
                level => log::warn!("Ignoring heading with invalid level {}", level),
            },

            Token::ThematicBreak => {
                self.finalize_slide(false);
                // Continuation: the new slide keeps the previous title.
                let title = self.document.slides[self.current_slide - 1].title.clone();
                self.current_slide_mut().title = title;
            }

            Token::WildcardBreak => self.add_placeholder(),

            Token::BlockQuote { children } => {
                let runs = match children.first() {
                    Some(Token::Paragraph { children: inner }) => build_runs(inner),
                    _ => build_runs(&children),
                };
                self.add_token(ContentToken::BlockQuote { runs }, Consume::Shared);
            }

            Token::Paragraph { children } => self.dispatch_paragraph(children),

            Token::List { attrs, children } => {
                let mut items = Vec::new();
                flatten_list(&children, 0, attrs.ordered, &mut items);
                self.add_token(ContentToken::List { items }, Consume::Shared);
            }

            Token::BlockCode { attrs, raw } => {
                let token = ContentToken::Code {
                    lang: attrs.info.filter(|info| !info.is_empty()),
                    raw,
                };
                self.add_token(token, Consume::Shared);
            }

            Token::Table { children } => {
                let (head, body) = flatten_table(&children);
                self.add_token(ContentToken::Table { head, body }, Consume::Monopoly);
            }

            Token::CommentBlock { key, value } => match key.as_str() {
                "layout" => self.current_slide_mut().layout = value,
                "note" => self.current_slide_mut().notes.push(value),
                other => log::debug!("Ignoring directive {:?} = {:?}", other, value),
            },

            Token::BlankLine => {}

            other => log::warn!("Ignoring unsupported block token: {:?}", other),
        }
    }

    /// Dispatch a paragraph on its first inline child: an image paragraph
    /// becomes a monopoly image token, anything else a shared text paragraph.
    fn dispatch_paragraph(&mut self, children: Vec<Token>) {
        if let Some(Token::Image { attrs, children: alt }) = children.first() {
            let url = percent_decode(&attrs.url);
            let alt_text: String = alt.iter().map(Token::plain_text).collect();
            let alt = if alt_text.is_empty() {
                None
            } else {
                Some(alt_text)
            };
            self.add_token(ContentToken::Image { url, alt }, Consume::Monopoly);
            return;
        }

        let runs = build_runs(&children);
        if runs_text(&runs).trim().is_empty() {
            log::debug!("Skipping paragraph with no text");
            return;
        }
        self.add_token(ContentToken::Paragraph { runs }, Consume::Shared);
    }

    /// Append a token under the consume-sequencing rule: a non-empty
    /// placeholder only accepts the token when both it and the previously
    /// appended token are shared; otherwise a fresh placeholder is opened.
    fn add_token(&mut self, token: ContentToken, consume: Consume) {
        let placeholder_empty = self.current_placeholder_ref().is_empty();
        let both_shared =
            self.last_consume == Some(Consume::Shared) && consume == Consume::Shared;
        if !placeholder_empty && !both_shared {
            self.add_placeholder();
        }
        self.current_placeholder_mut().push(token, consume);
        self.last_consume = Some(consume);
    }

    /// Explicit placeholder break.
    fn add_placeholder(&mut self) {
        self.current_slide_mut().placeholders.push(Placeholder::new());
        self.current_placeholder += 1;
    }

    /// Resolve the current slide's layout if still empty and advance to a
    /// fresh slide unless this is the end of the stream.
    fn finalize_slide(&mut self, is_last: bool) {
        let slide = &self.document.slides[self.current_slide];
        if slide.layout.is_empty() {
            let layout = infer_layout(slide, &self.options);
            self.document.slides[self.current_slide].layout = layout;
        }
        if !is_last {
            self.document.slides.push(Slide::new());
            self.current_slide += 1;
            self.current_placeholder = 0;
            self.last_consume = None;
        }
    }

    fn current_slide_mut(&mut self) -> &mut Slide {
        &mut self.document.slides[self.current_slide]
    }

    fn current_placeholder_ref(&self) -> &Placeholder {
        &self.document.slides[self.current_slide].placeholders[self.current_placeholder]
    }

    fn current_placeholder_mut(&mut self) -> &mut Placeholder {
        &mut self.document.slides[self.current_slide].placeholders[self.current_placeholder]
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Infer a layout from the count and monopoly status of non-empty
/// placeholders. Only invoked for slides no directive already resolved.
fn infer_layout(slide: &Slide, options: &SegmentOptions) -> String {
    let non_empty: Vec<&Placeholder> = slide
        .placeholders
        .iter()
        .filter(|p| !p.is_empty())
        .collect();

    let is_monopoly = |p: &Placeholder| {
        p.first()
            .map_or(false, |t| t.consume == Consume::Monopoly)
    };

    match non_empty.len() {
        0 => "section_header".to_string(),
        1 => "title_and_content".to_string(),
        2 => {
            if !is_monopoly(non_empty[0]) && !is_monopoly(non_empty[1]) {
                "two_content".to_string()
            } else {
                "content_with_caption".to_string()
            }
        }
        n => {
            log::warn!(
                "Slide has {} content regions, inference covers at most two; using {:?}",
                n,
                options.multi_content_layout
            );
            options.multi_content_layout.clone()
        }
    }
}

/// Flatten a list token's children into depth-annotated entries, depth first
/// and pre-order. Descending into a nested list increments the depth and
/// switches to that list's ordered flag.
fn flatten_list(children: &[Token], depth: u8, ordered: bool, out: &mut Vec<ListEntry>) {
    for child in children {
        match child {
            Token::ListItem { children } => {
                for part in children {
                    match part {
                        // Tight items carry block_text, loose items a paragraph.
                        Token::BlockText { children } | Token::Paragraph { children } => {
                            out.push(ListEntry {
                                depth,
                                runs: build_runs(children),
                                ordered,
                            })
                        }
                        Token::List { attrs, children } => {
                            flatten_list(children, depth.saturating_add(1), attrs.ordered, out)
                        }
                        other => log::debug!("Skipping list item child: {:?}", other),
                    }
                }
            }
            Token::List { attrs, children } => {
                flatten_list(children, depth.saturating_add(1), attrs.ordered, out)
            }
            Token::BlockText { children } => out.push(ListEntry {
                depth,
                runs: build_runs(children),
                ordered,
            }),
            other => log::debug!("Skipping list child: {:?}", other),
        }
    }
}

/// Split a table token's children into header cells and body rows.
fn flatten_table(children: &[Token]) -> (Vec<Cell>, Vec<Vec<Cell>>) {
    let mut head = Vec::new();
    let mut body = Vec::new();

    for child in children {
        match child {
            Token::TableHead { children } => {
                head = children.iter().filter_map(as_cell).collect();
            }
            Token::TableBody { children } => {
                for row in children {
                    if let Token::TableRow { children } = row {
                        body.push(children.iter().filter_map(as_cell).collect());
                    }
                }
            }
            other => log::debug!("Skipping table child: {:?}", other),
        }
    }

    (head, body)
}

fn as_cell(token: &Token) -> Option<Cell> {
    match token {
        Token::TableCell { attrs, children } => Some(Cell {
            runs: build_runs(children),
            align: attrs.align,
        }),
        other => {
            log::debug!("Skipping non-cell table node: {:?}", other);
            None
        }
    }
}

/// Percent-decode a URL, keeping it untouched when decoding fails.
fn percent_decode(url: &str) -> String {
    match urlencoding::decode(url) {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            log::warn!("Could not percent-decode {:?}: {}", url, err);
            url.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingAttrs, ListAttrs, UrlAttrs};

    fn text(raw: &str) -> Token {
        Token::Text { raw: raw.into() }
    }

    fn heading(level: u8, title: &str) -> Token {
        Token::Heading {
            attrs: HeadingAttrs { level },
            children: vec![text(title)],
        }
    }

    fn paragraph(body: &str) -> Token {
        Token::Paragraph {
            children: vec![text(body)],
        }
    }

    fn image_paragraph(url: &str, alt: &str) -> Token {
        Token::Paragraph {
            children: vec![Token::Image {
                attrs: UrlAttrs {
                    url: url.into(),
                    title: None,
                },
                children: if alt.is_empty() {
                    vec![]
                } else {
                    vec![text(alt)]
                },
            }],
        }
    }

    fn item(body: &str) -> Token {
        Token::ListItem {
            children: vec![Token::BlockText {
                children: vec![text(body)],
            }],
        }
    }

    #[test]
    fn test_headings_split_slides() {
        let doc = Segmenter::new().segment(vec![
            heading(1, "A"),
            paragraph("x"),
            heading(1, "B"),
        ]);
        assert_eq!(doc.slide_count(), 2);
        assert_eq!(doc.slides[0].title_text(), "A");
        assert_eq!(doc.slides[1].title_text(), "B");
        assert_eq!(doc.slides[0].placeholders.len(), 1);
        assert_eq!(doc.slides[0].placeholders[0].len(), 1);
    }

    #[test]
    fn test_slide_count_before_pruning() {
        // One finalize per level-1/2 heading plus the trailing one.
        let mut seg = Segmenter::new();
        for token in [heading(1, "A"), paragraph("x"), heading(2, "B")] {
            seg.dispatch(token);
        }
        seg.finalize_slide(true);
        // Initial slide + one appended per non-final finalize.
        assert_eq!(seg.document.slide_count(), 3);
    }

    #[test]
    fn test_leading_vacuous_slide_is_pruned() {
        let doc = Segmenter::new().segment(vec![heading(1, "A"), paragraph("x")]);
        assert_eq!(doc.slide_count(), 1);
        assert_eq!(doc.slides[0].title_text(), "A");
    }

    #[test]
    fn test_continuation_break_copies_title() {
        let doc = Segmenter::new().segment(vec![
            heading(1, "Topic"),
            paragraph("first"),
            Token::ThematicBreak,
            paragraph("second"),
        ]);
        assert_eq!(doc.slide_count(), 2);
        assert_eq!(doc.slides[1].title_text(), "Topic");
    }

    #[test]
    fn test_monopoly_forces_breaks_both_ways() {
        let doc = Segmenter::new().segment(vec![
            heading(1, "A"),
            image_paragraph("a.png", ""),
            paragraph("text"),
        ]);
        let slide = &doc.slides[0];
        assert_eq!(slide.placeholders.len(), 2);
        assert_eq!(slide.placeholders[0].len(), 1);
        assert_eq!(
            slide.placeholders[0].first().unwrap().consume,
            Consume::Monopoly
        );
        assert_eq!(slide.placeholders[1].len(), 1);
    }

    #[test]
    fn test_shared_tokens_coalesce() {
        let doc = Segmenter::new().segment(vec![
            heading(1, "A"),
            paragraph("one"),
            paragraph("two"),
            heading(3, "sub"),
        ]);
        let slide = &doc.slides[0];
        assert_eq!(slide.placeholders.len(), 1);
        assert_eq!(slide.placeholders[0].len(), 3);
    }

    #[test]
    fn test_wildcard_break_opens_placeholder() {
        let doc = Segmenter::new().segment(vec![
            heading(1, "A"),
            paragraph("left"),
            Token::WildcardBreak,
            paragraph("right"),
        ]);
        let slide = &doc.slides[0];
        assert_eq!(slide.placeholders.len(), 2);
        assert_eq!(slide.layout, "two_content");
    }

    #[test]
    fn test_empty_paragraph_skipped() {
        let doc = Segmenter::new().segment(vec![
            heading(1, "A"),
            Token::Paragraph {
                children: vec![text("   ")],
            },
        ]);
        assert_eq!(doc.slides[0].non_empty_placeholder_count(), 0);
        assert_eq!(doc.slides[0].layout, "section_header");
    }

    #[test]
    fn test_image_url_percent_decoded_and_alt_kept() {
        let doc = Segmenter::new().segment(vec![
            heading(1, "A"),
            image_paragraph("img/my%20chart.png", "chart"),
        ]);
        let placed = doc.slides[0].placeholders[0].first().unwrap();
        match &placed.token {
            ContentToken::Image { url, alt } => {
                assert_eq!(url, "img/my chart.png");
                assert_eq!(alt.as_deref(), Some("chart"));
            }
            other => panic!("unexpected token: {:?}", other),
        }
    }

    #[test]
    fn test_image_empty_alt_omitted() {
        let doc = Segmenter::new().segment(vec![heading(1, "A"), image_paragraph("a.png", "")]);
        match &doc.slides[0].placeholders[0].first().unwrap().token {
            ContentToken::Image { alt, .. } => assert!(alt.is_none()),
            other => panic!("unexpected token: {:?}", other),
        }
    }

    #[test]
    fn test_list_flattening_depths() {
        let nested = Token::ListItem {
            children: vec![
                Token::BlockText {
                    children: vec![text("parent")],
                },
                Token::List {
                    attrs: ListAttrs { ordered: true },
                    children: vec![item("child")],
                },
            ],
        };
        let doc = Segmenter::new().segment(vec![
            heading(1, "A"),
            Token::List {
                attrs: ListAttrs { ordered: false },
                children: vec![item("first"), nested, item("last")],
            },
        ]);
        match &doc.slides[0].placeholders[0].first().unwrap().token {
            ContentToken::List { items } => {
                let flat: Vec<(u8, String, bool)> = items
                    .iter()
                    .map(|e| (e.depth, runs_text(&e.runs), e.ordered))
                    .collect();
                assert_eq!(
                    flat,
                    vec![
                        (0, "first".into(), false),
                        (0, "parent".into(), false),
                        (1, "child".into(), true),
                        (0, "last".into(), false),
                    ]
                );
            }
            other => panic!("unexpected token: {:?}", other),
        }
    }

    #[test]
    fn test_layout_directive_overrides_inference() {
        let doc = Segmenter::new().segment(vec![
            heading(1, "A"),
            Token::CommentBlock {
                key: "layout".into(),
                value: "section_header".into(),
            },
            paragraph("x"),
        ]);
        assert_eq!(doc.slides[0].layout, "section_header");
    }

    #[test]
    fn test_note_directives_accumulate() {
        let doc = Segmenter::new().segment(vec![
            heading(1, "A"),
            Token::CommentBlock {
                key: "note".into(),
                value: "first".into(),
            },
            Token::CommentBlock {
                key: "note".into(),
                value: "second".into(),
            },
            paragraph("x"),
        ]);
        assert_eq!(doc.slides[0].notes, vec!["first", "second"]);
    }

    #[test]
    fn test_multi_content_fallback_layout() {
        let doc = Segmenter::with_options(
            SegmentOptions::new().with_multi_content_layout("four_content"),
        )
        .segment(vec![
            heading(1, "A"),
            paragraph("one"),
            Token::WildcardBreak,
            paragraph("two"),
            Token::WildcardBreak,
            paragraph("three"),
        ]);
        assert_eq!(doc.slides[0].layout, "four_content");
    }

    #[test]
    fn test_two_monopoly_regions_get_caption_layout() {
        let doc = Segmenter::new().segment(vec![
            heading(1, "A"),
            image_paragraph("a.png", ""),
            paragraph("caption"),
        ]);
        assert_eq!(doc.slides[0].layout, "content_with_caption");
    }

    #[test]
    fn test_unknown_tokens_are_ignored() {
        let doc = Segmenter::new().segment(vec![
            heading(1, "A"),
            Token::Unknown,
            Token::BlankLine,
            paragraph("x"),
        ]);
        assert_eq!(doc.slides[0].placeholders[0].len(), 1);
    }
}
