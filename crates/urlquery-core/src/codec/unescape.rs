//! Strict percent decoding.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::error::DecodeError;

/// Percent-decodes `input`, rejecting malformed escapes.
///
/// Every `%` must be followed by two hex digits. `+` is left alone. The
/// decoded bytes must be UTF-8.
pub fn unescape(input: &str) -> Result<Cow<'_, str>, DecodeError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while let Some(offset) = bytes[i..].iter().position(|&b| b == b'%') {
        let at = i + offset;
        let well_formed = bytes.len() >= at + 3
            && bytes[at + 1].is_ascii_hexdigit()
            && bytes[at + 2].is_ascii_hexdigit();
        if !well_formed {
            let end = bytes.len().min(at + 3);
            return Err(DecodeError::InvalidEscape(
                String::from_utf8_lossy(&bytes[at..end]).into_owned(),
            ));
        }
        i = at + 3;
    }

    percent_decode_str(input)
        .decode_utf8()
        .map_err(|_| DecodeError::InvalidUtf8(input.to_string()))
}
