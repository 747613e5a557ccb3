//! Parsing of the `X-Ratelimit-*` response header triple.

use http::HeaderMap;

/// Rate-limit state reported by the server on a single response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RateLimitHeaders {
    pub(crate) limit: u64,
    pub(crate) remaining: u64,
    /// Epoch seconds at which the current window resets
    pub(crate) reset: u64,
}

/// Parses the `X-Ratelimit-Limit`/`-Remaining`/`-Reset` triple.
///
/// Returns `None` unless all three headers are present and parse as
/// integers; a partial or malformed set is silently ignored so that a
/// misbehaving server cannot poison the bucket state.
pub(crate) fn parse(headers: &HeaderMap) -> Option<RateLimitHeaders> {
    let limit = parse_value(headers, "x-ratelimit-limit")?;
    let remaining = parse_value(headers, "x-ratelimit-remaining")?;
    let reset = parse_value(headers, "x-ratelimit-reset")?;

    Some(RateLimitHeaders {
        limit,
        remaining,
        reset,
    })
}

fn parse_value(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.parse().ok()
}
