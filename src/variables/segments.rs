// src/variables/segments.rs
//! Editorial view of a text: literal runs and token placeholders.

use super::catalog::{self, FieldSpec, TOKEN_PATTERN};

/// One piece of an editorial text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Token(TokenSegment),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSegment {
    /// Full token including braces
    pub token: String,
    pub label: String,
    pub icon: Option<&'static str>,
    /// Set when the token is part of the catalog
    pub spec: Option<&'static FieldSpec>,
}

impl TokenSegment {
    fn new(token: &str) -> Self {
        match catalog::lookup(token) {
            Some(spec) => Self {
                token: token.to_string(),
                label: spec.label.to_string(),
                icon: Some(spec.icon),
                spec: Some(spec),
            },
            None => Self {
                token: token.to_string(),
                label: token.replace(['{', '}'], ""),
                icon: None,
                spec: None,
            },
        }
    }

    pub fn is_known(&self) -> bool {
        self.spec.is_some()
    }
}

/// Split `text` into literal and token segments, in order.
///
/// Empty literals are dropped. Literal `&nbsp;` becomes U+00A0.
pub fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in TOKEN_PATTERN.find_iter(text) {
        push_literal(&mut segments, &text[cursor..found.start()]);
        segments.push(Segment::Token(TokenSegment::new(found.as_str())));
        cursor = found.end();
    }
    push_literal(&mut segments, &text[cursor..]);

    segments
}

fn push_literal(segments: &mut Vec<Segment>, literal: &str) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal.replace("&nbsp;", "\u{00A0}")));
    }
}

/// Whether `text` contains at least one token-shaped placeholder
pub fn has_tokens(text: &str) -> bool {
    TOKEN_PATTERN.is_match(text)
}
