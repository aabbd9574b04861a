//! Canonical textual tokens for trie edges (§4.1).
//!
//! An [`Element`] is the typed value a caller inserts into a set; a *token* is
//! its canonical textual form, and it is tokens -- not elements -- that are
//! threaded through the trie as edge labels. Token order is what the query
//! engine sorts by, so [`Element`]'s [`Ord`] impl is defined as exactly that
//! string order, never as a separately invented tag-then-value order.

use std::cmp::Ordering;
use std::fmt;

/// A single set element.
///
/// Integers render without a decimal point, reals always carry one, and
/// strings are single-quoted -- the same shape heuristics [`Element::parse_token`]
/// uses to invert the encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Int(i64),
    Real(f64),
    Str(String),
}

impl Element {
    /// Encode this element as its canonical token.
    pub fn token(&self) -> String {
        match self {
            Element::Int(i) => i.to_string(),
            Element::Real(r) => format_real(*r),
            Element::Str(s) => format!("'{s}'"),
        }
    }

    /// Decode a canonical token back into an element.
    ///
    /// A token bracketed by single quotes decodes to a string; otherwise a
    /// token containing `.` decodes to a real; otherwise an integer.
    pub fn parse_token(token: &str) -> Element {
        if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
            Element::Str(token[1..token.len() - 1].to_string())
        } else if token.contains('.') {
            Element::Real(token.parse().unwrap_or(0.0))
        } else {
            Element::Int(token.parse().unwrap_or(0))
        }
    }
}

fn format_real(r: f64) -> String {
    let s = format!("{r}");
    if s.contains('.') { s } else { format!("{s}.0") }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.token().cmp(&other.token())
    }
}

/// Tokenize and sort a set of elements into its canonical edge-label sequence.
///
/// Duplicate tokens are removed, since a trie path cannot carry two edges with
/// the same token.
pub fn canonical_sort(elements: &[Element]) -> Vec<String> {
    let mut tokens: Vec<String> = elements.iter().map(Element::token).collect();
    tokens.sort();
    tokens.dedup();
    tokens
}

#[cfg(test)]
mod token_tests;
