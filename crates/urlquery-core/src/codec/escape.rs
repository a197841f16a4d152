//! Query-component escaping.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except unreserved characters. Space is handled separately so it
/// can become `+`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b' ');

/// Escapes `input` for use as a single query component.
///
/// Unreserved bytes (`A-Z a-z 0-9 - _ . ~`) pass through, space becomes `+`,
/// all other bytes become `%XX` with uppercase hex.
pub fn escape_query_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT)
        .to_string()
        .replace(' ', "+")
}
