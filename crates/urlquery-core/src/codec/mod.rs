//! Query string decoding and encoding.
//!
//! [`decode`] turns a raw query into ordered `(key, value)` pairs; [`encode`]
//! and [`escape`] turn an [`OrderedMultiMap`] back into text.

mod escape;
mod unescape;

pub use escape::escape_query_component;
pub use unescape::unescape;

use crate::error::DecodeError;
use crate::multimap::OrderedMultiMap;

/// Pairs decoded from a raw query, plus the first decode error if any.
///
/// Segments that failed to decode are not in `pairs`; every other segment is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    pub pairs: Vec<(String, String)>,
    pub error: Option<DecodeError>,
}

impl DecodeOutcome {
    /// Fails if any segment failed to decode, discarding the partial pairs.
    pub fn into_result(self) -> Result<Vec<(String, String)>, DecodeError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.pairs),
        }
    }
}

/// Splits a raw query string into decoded pairs, preserving order and duplicates.
///
/// Surrounding spaces and any leading `?` are ignored. Segments are separated
/// by `&` or `;` and empty segments are skipped. A segment without `=` is a key
/// with an empty value. Keys and values are percent-decoded strictly (`+` is
/// kept as `+`).
///
/// A segment whose key or value fails to decode is dropped and decoding
/// continues; only the first such error is reported.
pub fn decode(raw: &str) -> DecodeOutcome {
    let mut outcome = DecodeOutcome::default();

    let query = raw.trim_matches(' ').trim_start_matches('?');
    if query.is_empty() {
        return outcome;
    }

    for segment in query.split(['&', ';']) {
        if segment.is_empty() {
            continue;
        }
        let (raw_key, raw_value) = segment.split_once('=').unwrap_or((segment, ""));

        let decoded = unescape(raw_key).and_then(|key| Ok((key, unescape(raw_value)?)));
        match decoded {
            Ok((key, value)) => outcome.pairs.push((key.into_owned(), value.into_owned())),
            Err(err) => {
                tracing::debug!(segment, error = %err, "dropping undecodable query segment");
                outcome.error.get_or_insert(err);
            }
        }
    }

    outcome
}

/// Serializes `map` as `key=value&...` without escaping.
pub fn encode(map: &OrderedMultiMap) -> String {
    map.to_string()
}

/// Escapes the whole encoded query as a single query component.
///
/// This escapes `=` and `&` as well, so the result is one opaque token, not a
/// query string with escaped fields.
pub fn escape(map: &OrderedMultiMap) -> String {
    escape_query_component(&encode(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &str) -> Vec<(String, String)> {
        decode(raw).into_result().unwrap()
    }

    fn p(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn empty_inputs() {
        for raw in ["", "?", " ? ", "???", "   ", "&&;"] {
            let outcome = decode(raw);
            assert!(outcome.pairs.is_empty(), "input {raw:?}");
            assert!(outcome.error.is_none(), "input {raw:?}");
        }
    }

    #[test]
    fn splits_on_ampersand_and_semicolon() {
        assert_eq!(
            pairs("a=1;b=2&c=3"),
            vec![p("a", "1"), p("b", "2"), p("c", "3")]
        );
    }

    #[test]
    fn skips_empty_segments() {
        assert_eq!(pairs("foo=1&&baz=2&"), vec![p("foo", "1"), p("baz", "2")]);
        assert_eq!(pairs("&foo=1"), vec![p("foo", "1")]);
    }

    #[test]
    fn key_without_equals_has_empty_value() {
        assert_eq!(pairs("foo"), vec![p("foo", "")]);
        assert_eq!(pairs("foo="), vec![p("foo", "")]);
        assert_eq!(pairs("=bar"), vec![p("", "bar")]);
    }

    #[test]
    fn only_first_equals_splits() {
        assert_eq!(pairs("a=b=c"), vec![p("a", "b=c")]);
    }

    #[test]
    fn strips_spaces_and_leading_question_marks() {
        assert_eq!(pairs("  ??a=1 "), vec![p("a", "1")]);
        // inner spaces survive
        assert_eq!(pairs(" a b=c d "), vec![p("a b", "c d")]);
    }

    #[test]
    fn percent_decodes_keys_and_values() {
        assert_eq!(pairs("k%20y=v%26l"), vec![p("k y", "v&l")]);
        assert_eq!(pairs("a=1+2"), vec![p("a", "1+2")]);
        assert_eq!(pairs("name=%C3%A9t%C3%A9"), vec![p("name", "été")]);
    }

    #[test]
    fn bad_segment_dropped_rest_kept() {
        let outcome = decode("a=1&b=%zz&c=3");
        assert_eq!(outcome.pairs, vec![p("a", "1"), p("c", "3")]);
        assert_eq!(outcome.error, Some(DecodeError::InvalidEscape("%zz".into())));
    }

    #[test]
    fn only_first_error_reported() {
        let outcome = decode("%x=1&ok=2&b=%4");
        assert_eq!(outcome.pairs, vec![p("ok", "2")]);
        assert_eq!(outcome.error, Some(DecodeError::InvalidEscape("%x".into())));
    }

    #[test]
    fn bad_key_drops_segment_even_with_good_value() {
        let outcome = decode("%=ok");
        assert!(outcome.pairs.is_empty());
        assert!(outcome.error.is_some());
        assert!(decode("%=ok").into_result().is_err());
    }

    #[test]
    fn redecoding_encoded_output_is_stable() {
        for raw in ["foo=1&baz=2&foo=3", "?a=%31&b&c=", "x=1;y=2"] {
            let first = pairs(raw);
            let map: OrderedMultiMap = first.clone().into_iter().collect();
            assert_eq!(pairs(&encode(&map)), first, "input {raw:?}");
        }
    }

    #[test]
    fn escape_is_whole_string() {
        let map: OrderedMultiMap = [("foo", "2")].into_iter().collect();
        assert_eq!(escape(&map), "foo%3D2");

        let map: OrderedMultiMap = [("a", "1"), ("b", "x y")].into_iter().collect();
        assert_eq!(escape(&map), "a%3D1%26b%3Dx+y");
    }
}
