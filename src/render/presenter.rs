// src/render/presenter.rs
//! Strategies for presenting text that may contain variable tokens.

use super::node::{VariableChip, VisualNode};
use crate::model::Binding;
use crate::variables::{resolve, segment, Segment};

/// How block text with `{{tokens}}` is turned into visible content.
pub trait VariablePresenter {
    /// Plain text field as inline nodes
    fn inline(&self, text: &str) -> Vec<VisualNode>;

    /// Rich markup field as (not yet sanitized) HTML
    fn markup(&self, text: &str) -> String;
}

/// Resolves tokens against a bound entity.
pub struct LivePresenter<'a> {
    binding: &'a Binding,
}

impl<'a> LivePresenter<'a> {
    pub fn new(binding: &'a Binding) -> Self {
        Self { binding }
    }
}

impl VariablePresenter for LivePresenter<'_> {
    fn inline(&self, text: &str) -> Vec<VisualNode> {
        vec![VisualNode::Text(resolve(text, Some(self.binding)))]
    }

    fn markup(&self, text: &str) -> String {
        resolve(text, Some(self.binding))
    }
}

/// Shows every token as a labeled placeholder chip.
pub struct ChipPresenter;

fn chip(token: &crate::variables::TokenSegment) -> VariableChip {
    VariableChip {
        token: token.token.clone(),
        label: token.label.clone(),
        icon: token.icon,
    }
}

impl VariablePresenter for ChipPresenter {
    fn inline(&self, text: &str) -> Vec<VisualNode> {
        segment(text)
            .iter()
            .map(|seg| match seg {
                Segment::Literal(literal) => VisualNode::Text(literal.clone()),
                Segment::Token(token) => VisualNode::Chip(chip(token)),
            })
            .collect()
    }

    fn markup(&self, text: &str) -> String {
        segment(text)
            .iter()
            .map(|seg| match seg {
                Segment::Literal(literal) => literal.clone(),
                Segment::Token(token) => chip(token).to_html(),
            })
            .collect()
    }
}

/// Pick the presenter for one render: live values when bound, chips otherwise.
pub fn presenter_for<'a>(binding: Option<&'a Binding>) -> Box<dyn VariablePresenter + 'a> {
    match binding {
        Some(binding) => Box::new(LivePresenter::new(binding)),
        None => Box::new(ChipPresenter),
    }
}
