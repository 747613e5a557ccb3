//! Per-route adaptive rate limiting.
//!
//! Gobin reports its quota through `X-Ratelimit-*` response headers, keyed
//! by route template rather than by instantiated URL: every request against
//! `/documents/{key}` shares one quota no matter which key it targets.
//!
//! # Architecture
//!
//! - [`bucket::Bucket`]: observed quota and serialization point for one
//!   route path
//! - [`RateLimiter`]: lazily-populated bucket registry plus the background
//!   sweep that evicts buckets whose reset has elapsed
//! - [`headers`]: parsing of the response header triple

mod bucket;
mod clock;
pub(crate) mod headers;
mod limiter;

pub(crate) use limiter::RateLimiter;
