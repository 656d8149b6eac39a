//! Per-line highlighting state machine
//!
//! Handles the three line-level regimes (block comments, preprocessor
//! directives, line comments) and falls back to tokenize/classify for
//! ordinary code. The only state carried between lines is whether a
//! block comment is open.
//!
//! Known limitation, kept on purpose: comment markers inside string
//! literals are not recognized as string content, so a `//` inside a
//! quoted string still starts a line comment.

use super::classify::Classifier;
use super::lexer::Tokenizer;
use super::tokens::{Category, StyledSpan};

/// Comment-continuation state carried across lines and chunks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    pub in_block_comment: bool,
}

impl RenderState {
    /// State at the start of a file
    pub fn normal() -> Self {
        Self::default()
    }

    /// State inside an open `/* ... */` region
    pub fn in_comment() -> Self {
        Self {
            in_block_comment: true,
        }
    }
}

/// Line highlighter combining the tokenizer, the classifier and the
/// comment state machine
pub struct LineHighlighter {
    tokenizer: Tokenizer,
    classifier: Classifier,
}

impl LineHighlighter {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            classifier: Classifier::new(),
        }
    }

    /// Highlight one line, given the state the line is entered with.
    ///
    /// Returns the styled spans (whose concatenated text reconstructs
    /// the line, minus characters no lexical rule matched) and the
    /// state the next line is entered with. Pure: no drawing happens
    /// here.
    pub fn highlight_line(&self, line: &str, entry: RenderState) -> (Vec<StyledSpan>, RenderState) {
        let mut spans = Vec::new();
        let mut rest = line;

        // An open block comment from a previous line swallows the
        // prefix up to `*/`, or the whole line if there is none
        if entry.in_block_comment {
            match rest.find("*/") {
                Some(end) => {
                    spans.push(StyledSpan::new(&rest[..end + 2], Category::BlockComment));
                    rest = &rest[end + 2..];
                    if rest.is_empty() {
                        return (spans, RenderState::normal());
                    }
                }
                None => {
                    spans.push(StyledSpan::new(line, Category::BlockComment));
                    return (spans, RenderState::in_comment());
                }
            }
        }

        // Repeated `/* ... */` regions on one line are walked
        // iteratively; each closed region loops back here with the
        // remaining tail
        loop {
            if let Some(open) = rest.find("/*") {
                let before = &rest[..open];
                if !before.is_empty() {
                    spans.extend(self.code_spans(before));
                }
                match rest[open + 2..].find("*/") {
                    Some(close) => {
                        let end = open + 2 + close + 2;
                        spans.push(StyledSpan::new(&rest[open..end], Category::BlockComment));
                        rest = &rest[end..];
                        if rest.is_empty() {
                            return (spans, RenderState::normal());
                        }
                        continue;
                    }
                    None => {
                        spans.push(StyledSpan::new(&rest[open..], Category::BlockComment));
                        return (spans, RenderState::in_comment());
                    }
                }
            }

            // Preprocessor directive: the whole remaining segment is
            // one span
            if rest.trim_start().starts_with('#') {
                spans.push(StyledSpan::new(rest, Category::Preprocessor));
                return (spans, RenderState::normal());
            }

            // Line comment. Quote context is not tracked, so `//`
            // inside a string still wins
            if let Some(start) = rest.find("//") {
                let before = &rest[..start];
                if !before.is_empty() {
                    spans.extend(self.code_spans(before));
                }
                spans.push(StyledSpan::new(&rest[start..], Category::LineComment));
                return (spans, RenderState::normal());
            }

            // Plain code
            spans.extend(self.code_spans(rest));
            return (spans, RenderState::normal());
        }
    }

    /// Exit state of a line without building spans.
    ///
    /// Exactly mirrors the transitions of `highlight_line`: only the
    /// `/*` and `*/` markers matter, because the block comment rule is
    /// checked before the preprocessor and line comment rules.
    pub fn exit_state(&self, line: &str, entry: RenderState) -> RenderState {
        let mut rest = line;
        if entry.in_block_comment {
            match rest.find("*/") {
                Some(end) => rest = &rest[end + 2..],
                None => return RenderState::in_comment(),
            }
        }
        loop {
            match rest.find("/*") {
                None => return RenderState::normal(),
                Some(open) => match rest[open + 2..].find("*/") {
                    Some(close) => rest = &rest[open + 2 + close + 2..],
                    None => return RenderState::in_comment(),
                },
            }
        }
    }

    fn code_spans(&self, text: &str) -> Vec<StyledSpan> {
        self.classifier.classify(&self.tokenizer.tokenize(text))
    }
}

impl Default for LineHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
