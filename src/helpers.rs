/// Prune fragment (#hash) from a URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
/// Optimization: uses SIMD-accelerated memchr for the '#' search
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune query (?search) from a URL string already stripped of its fragment
/// Returns (`url_without_query`, `query_without_question_mark`)
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Byte offset of the first '[' in a decoded parameter key
pub fn first_bracket(input: &str) -> Option<usize> {
    memchr::memchr(b'[', input.as_bytes())
}
