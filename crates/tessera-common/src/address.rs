//! Address token normalization.
//!
//! A leading dark marker requests forced dark rendering for that pane. The
//! marker is stripped before the address is used for navigation, hashing, or
//! partition naming. Addresses are otherwise passed through untouched apart
//! from an `https://` prefix for scheme-less tokens.

use serde::{Deserialize, Serialize};

/// Marker character that flags a token for forced dark rendering.
pub const DEFAULT_DARK_MARKER: char = '^';

const DEFAULT_SCHEME: &str = "https://";

/// One normalized address. Immutable after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Token exactly as given on the command line.
    pub raw: String,
    /// Marker-stripped, scheme-qualified URL.
    pub url: String,
    pub dark_requested: bool,
    /// Position in the input list.
    pub index: usize,
}

impl Address {
    pub fn parse(raw: &str, index: usize, dark_marker: char) -> Self {
        let (dark_requested, rest) = match raw.strip_prefix(dark_marker) {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let url = if has_scheme(rest) {
            rest.to_string()
        } else {
            format!("{DEFAULT_SCHEME}{rest}")
        };
        Self {
            raw: raw.to_string(),
            url,
            dark_requested,
            index,
        }
    }
}

/// Whether `token` starts with `scheme://`, where the scheme is an RFC 3986
/// scheme name (letter, then letters, digits, `+`, `-`, `.`).
fn has_scheme(token: &str) -> bool {
    token.split_once("://").is_some_and(|(scheme, _)| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Normalize an ordered list of raw tokens, preserving order.
pub fn parse_addresses<S: AsRef<str>>(raw: &[S], dark_marker: char) -> Vec<Address> {
    raw.iter()
        .enumerate()
        .map(|(index, token)| Address::parse(token.as_ref(), index, dark_marker))
        .collect()
}
