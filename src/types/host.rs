use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::{ErrorKind, Result};

/// The base URL of the Gobin instance used when none is configured,
/// <https://xgob.in>.
pub const DEFAULT_HOST: &str = "https://xgob.in";

/// The host of a remote Gobin server.
///
/// Wraps the base URL (scheme, host, port) under which all routes are
/// instantiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GobinHost {
    base: Url,
}

impl GobinHost {
    /// Creates a host from a base URL. Any path or query on the URL is
    /// ignored; only scheme, host and port are kept.
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Builds the full request URL for an instantiated route path plus
    /// query parameters.
    pub(crate) fn url_for(&self, path: &str, query: &[(&'static str, String)]) -> Url {
        let mut url = self.join(path);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        url
    }

    /// Builds a plain URL below this host, e.g. a document or preview link.
    pub(crate) fn join(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url.set_query(None);
        url
    }
}

impl Default for GobinHost {
    fn default() -> Self {
        // The constant is a valid URL, checked by the test below
        Self::new(Url::parse(DEFAULT_HOST).expect("default host URL is valid"))
    }
}

impl FromStr for GobinHost {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(s)?))
    }
}

impl fmt::Display for GobinHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host_parses() {
        assert_eq!(GobinHost::default().to_string(), "https://xgob.in/");
    }

    #[test]
    fn builds_url_with_query() {
        let host = GobinHost::from_str("http://localhost:8080").unwrap();
        let url = host.url_for(
            "/documents/abc123",
            &[("formatter", "html".to_string()), ("style", "monokai".to_string())],
        );

        assert_eq!(
            url.as_str(),
            "http://localhost:8080/documents/abc123?formatter=html&style=monokai"
        );
    }

    #[test]
    fn join_strips_query() {
        let host = GobinHost::from_str("http://localhost:8080/?foo=bar").unwrap();
        assert_eq!(host.join("/abc123").as_str(), "http://localhost:8080/abc123");
    }
}
