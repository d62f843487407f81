//! Inline run building.
//!
//! Converts a token's inline children into flat styled [`Run`]s. Styles
//! accumulate from ancestor to descendant: a `strong` node sets bold for its
//! whole subtree, and sibling subtrees never affect each other.

use crate::model::{Run, Token};

/// Style state carried down the inline tree while building runs.
#[derive(Debug, Clone, Default)]
struct RunStyle {
    bold: bool,
    italic: bool,
    monospace: bool,
    hyperlink: Option<String>,
}

impl RunStyle {
    fn run(&self, text: impl Into<String>) -> Run {
        Run {
            text: text.into(),
            bold: self.bold,
            italic: self.italic,
            monospace: self.monospace,
            hyperlink: self.hyperlink.clone(),
        }
    }
}

/// Build flat styled runs from a token's inline children.
///
/// Pure function of the input tree; unknown inline nodes are logged and
/// skipped without aborting the walk.
pub fn build_runs(children: &[Token]) -> Vec<Run> {
    let mut runs = Vec::new();
    let style = RunStyle::default();
    for child in children {
        walk(child, &style, &mut runs);
    }
    runs
}

fn walk(token: &Token, style: &RunStyle, out: &mut Vec<Run>) {
    match token {
        Token::Text { raw } => out.push(style.run(raw.clone())),

        Token::Codespan { raw } => {
            let mut inner = style.clone();
            inner.monospace = true;
            out.push(inner.run(raw.clone()));
        }

        Token::Strong { children } => {
            let mut inner = style.clone();
            inner.bold = true;
            for child in children {
                walk(child, &inner, out);
            }
        }

        Token::Emphasis { children } => {
            let mut inner = style.clone();
            inner.italic = true;
            for child in children {
                walk(child, &inner, out);
            }
        }

        Token::Link { attrs, children } => {
            let mut inner = style.clone();
            inner.hyperlink = Some(attrs.url.clone());
            for child in children {
                walk(child, &inner, out);
            }
        }

        Token::Softbreak => out.push(style.run(" ")),

        Token::Linebreak => out.push(style.run("\n")),

        other => {
            // Nodes with children but no direct text just recurse.
            let children = other.children();
            if children.is_empty() {
                log::debug!("Skipping inline token without text: {:?}", other);
            } else {
                for child in children {
                    walk(child, style, out);
                }
            }
        }
    }
}
