use crate::compat::String;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Encode sets are additive over the C0 controls, following the WHATWG
// convention of naming one set per component.

/// Parameter value percent-encode set
/// C0 control + space, ", #, <, >, plus the pair delimiters &, = and the
/// escape character % itself
pub const PARAM_VALUE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'=')
    .add(b'%')
    .add(b'+');

/// Parameter key percent-encode set
/// `PARAM_VALUE_SET` + [, ], matching http_build_query: only structural
/// brackets appear bare in emitted keys. Keys are decoded before bracket
/// scanning on the way back in, so a literal bracket still reads as path
/// structure there.
pub const PARAM_KEY_SET: &AsciiSet = &PARAM_VALUE_SET.add(b'[').add(b']');

/// Write a percent-encoded string directly to a buffer
/// Manually iterates to avoid write! macro overhead
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode a parameter key segment directly into a buffer
pub fn percent_encode_key_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, PARAM_KEY_SET);
}

/// Percent-encode a parameter value directly into a buffer
pub fn percent_encode_value_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, PARAM_VALUE_SET);
}

/// Decode a percent-encoded string, replacing invalid UTF-8 sequences
/// Total: malformed escapes pass through as literal bytes
pub fn percent_decode_lossy(input: &str) -> String {
    percent_encoding::percent_decode_str(input)
        .decode_utf8_lossy()
        .into_owned()
}
