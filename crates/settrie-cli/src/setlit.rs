//! Set-literal textual codec (§6): the `{tok, tok, ...}` rendering the
//! binding transports sets as across its handle-based boundary.
//!
//! Commas embedded in a string element are escaped to U+DC82 in transit and
//! restored on output -- a legacy transport quirk of the original binding,
//! scoped to this codec alone. `settrie-core`'s own image format never needs
//! it (§9).

use settrie_core::Element;

const ESCAPED_COMMA: char = '\u{DC82}';

/// Parse a set-literal string into its elements.
///
/// Accepts `set()`, `{}`, and `{tok, tok, ...}`. A token that doesn't parse
/// cleanly is still accepted -- `Element::parse_token` falls back to `0` /
/// `0.0` rather than rejecting the whole literal, matching the binding's
/// permissive inbound parsing.
pub fn parse(literal: &str) -> Vec<Element> {
    let trimmed = literal.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .or_else(|| trimmed.strip_prefix("set(").and_then(|s| s.strip_suffix(')')))
        .unwrap_or("");

    split_unescaped(inner)
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .map(|t| Element::parse_token(&unescape(&t)))
        .collect()
}

/// Render elements as a canonical set-literal string (`{}` for the empty set).
pub fn format(elements: &[Element]) -> String {
    let tokens: Vec<String> = settrie_core::canonical_sort(elements).iter().map(|t| escape(t)).collect();
    format!("{{{}}}", tokens.join(", "))
}

/// Split on top-level commas, treating anything between a pair of single
/// quotes as opaque so a comma inside a string element doesn't split it.
fn split_unescaped(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in s.chars() {
        match c {
            '\'' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if !current.is_empty() || !parts.is_empty() {
        parts.push(current);
    }
    parts
}

fn escape(token: &str) -> String {
    token.replace(',', &ESCAPED_COMMA.to_string())
}

fn unescape(token: &str) -> String {
    token.replace(ESCAPED_COMMA, ",")
}

#[cfg(test)]
mod setlit_tests;
