use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ast::Sort;

/// Inclusive character range into the cleaned (whitespace-free) input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Parse failures. Every variant pins the offending character range so the
/// CLI can point at it; nothing is recovered locally, errors propagate to
/// the entry points unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("E-EMPTY: empty expression at {span}")]
    EmptyRange { span: Span },

    #[error("E-BRACKET: unbalanced brackets at {span}")]
    UnbalancedBrackets { span: Span },

    #[error("E-ALT: no grammar alternative matches at {span}")]
    NoMatchingAlternative { span: Span },

    #[error("E-SORT: expected a {expected} but found a {found} at {span}")]
    SortMismatch {
        expected: Sort,
        found: Sort,
        span: Span,
    },

    #[error("E-QUANT: quantifier must bind a letter variable at {span}")]
    InvalidQuantifierVariable { span: Span },

    #[error("E-DEPTH: expression nesting exceeds limit {limit} at {span}")]
    TooDeep { limit: usize, span: Span },
}

impl ParseError {
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::EmptyRange { .. } => "E-EMPTY",
            ParseError::UnbalancedBrackets { .. } => "E-BRACKET",
            ParseError::NoMatchingAlternative { .. } => "E-ALT",
            ParseError::SortMismatch { .. } => "E-SORT",
            ParseError::InvalidQuantifierVariable { .. } => "E-QUANT",
            ParseError::TooDeep { .. } => "E-DEPTH",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::EmptyRange { span }
            | ParseError::UnbalancedBrackets { span }
            | ParseError::NoMatchingAlternative { span }
            | ParseError::SortMismatch { span, .. }
            | ParseError::InvalidQuantifierVariable { span }
            | ParseError::TooDeep { span, .. } => *span,
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        hint_for_code(self.code())
    }
}

pub fn hint_for_code(code: &str) -> Option<&'static str> {
    match code {
        "E-IO" => Some("check the input file path and read permissions"),
        "E-EMPTY" => Some("supply a non-empty expression; commas may not delimit empty segments"),
        "E-BRACKET" => Some("make sure every '(' has a matching ')' at the same nesting level"),
        "E-ALT" => Some("check for stray operators or characters outside the grammar"),
        "E-SORT" => {
            Some("logic connectives take formulas, argument lists and arithmetic take terms")
        }
        "E-QUANT" => Some("a quantifier is written '@x1' or '?x1': marker, letter, digit run, body"),
        "E-DEPTH" => Some("flatten the expression or raise ParseOptions::max_depth"),
        _ => None,
    }
}
