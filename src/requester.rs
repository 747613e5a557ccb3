//! The request-execution core.
//!
//! [`Requester::execute`] runs one logical API call: it routes the
//! outgoing request through the per-path rate limiter, feeds observed
//! rate-limit headers back into the bucket, and interprets the response
//! according to the request's [`Expect`] declaration. Throttling (429) is
//! retried transparently; "not found" is an error only when the caller
//! did not declare absence as a valid outcome.

use http::{header, HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::multipart;
use crate::ratelimit::{headers as ratelimit_headers, RateLimiter};
use crate::routes::CompiledRoute;
use crate::{ApiError, ErrorKind, FileUpload, GobinHost, Result};

/// Immutable description of one API call.
///
/// Constructed fresh per call; the body is stored in a rebuildable form
/// because multipart forms are single-use and a throttled call must be
/// able to resend itself.
#[derive(Debug)]
pub(crate) struct ApiRequest {
    route: CompiledRoute,
    body: RequestBody,
    expect: Expect,
    headers: HeaderMap,
    query: Vec<(&'static str, String)>,
}

/// Body of an outgoing request.
#[derive(Debug)]
pub(crate) enum RequestBody {
    None,
    Json(serde_json::Value),
    Multipart(Vec<FileUpload>),
}

/// What the caller expects the response body to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expect {
    /// No response body; success maps to `()`
    Empty,
    /// A response body must be present
    Required,
    /// A response body, where "absent" (404, or 204) is a valid outcome
    Nullable,
}

impl Expect {
    const fn wants_body(self) -> bool {
        !matches!(self, Self::Empty)
    }

    const fn is_nullable(self) -> bool {
        matches!(self, Self::Nullable)
    }
}

impl ApiRequest {
    pub(crate) fn new(route: CompiledRoute, expect: Expect) -> Self {
        Self {
            route,
            body: RequestBody::None,
            expect,
            headers: HeaderMap::new(),
            query: Vec::new(),
        }
    }

    pub(crate) fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    pub(crate) fn query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attaches a `Bearer` authorization header carrying an update token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token contains characters that are invalid
    /// in a header value.
    pub(crate) fn bearer(mut self, token: &str) -> Result<Self> {
        let value = format!("Bearer {token}")
            .parse()
            .map_err(|_| ErrorKind::InvalidUpdateToken("not a valid header value".to_string()))?;
        self.headers.insert(header::AUTHORIZATION, value);
        Ok(self)
    }
}

/// Executes API calls against one Gobin host.
#[derive(Debug)]
pub(crate) struct Requester {
    http: reqwest::Client,
    host: GobinHost,
    user_agent: String,
    limiter: RateLimiter,
}

impl Requester {
    pub(crate) fn new(http: reqwest::Client, host: GobinHost, user_agent: String) -> Self {
        Self {
            http,
            host,
            user_agent,
            limiter: RateLimiter::new(),
        }
    }

    pub(crate) const fn host(&self) -> &GobinHost {
        &self.host
    }

    /// Executes the request and decodes the response body.
    ///
    /// `Ok(None)` is returned only for [`Expect::Nullable`] requests whose
    /// resource turned out not to exist, and for [`Expect::Empty`]
    /// requests (which carry no body to decode).
    ///
    /// A 429 response restarts the whole call, with no retry ceiling: the
    /// next attempt re-reads the bucket state the 429's own headers just
    /// updated, so the bucket's delay logic is the only backoff applied.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<Option<T>> {
        let url = self.host.url_for(request.route.path(), &request.query);
        log::debug!("Preparing request {}", request.route);

        loop {
            let (sent, bucket) = self
                .limiter
                .limit(request.route.template(), || async {
                    log::debug!("Executing request {}", request.route);
                    self.send(request, url.clone()).await
                })
                .await;
            let response = sent?;

            if let Some(observed) = ratelimit_headers::parse(response.headers()) {
                log::debug!("Updating bucket {}", bucket.path());
                bucket.update(
                    Some(observed.limit),
                    Some(observed.remaining),
                    Some(observed.reset),
                );
            }

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(ErrorKind::ReadResponseBody)?;

            if request.expect.wants_body() && status == StatusCode::NO_CONTENT {
                if request.expect.is_nullable() {
                    return Ok(None);
                }
                return Err(ErrorKind::UnexpectedNoContent(std::any::type_name::<T>()));
            }

            if !status.is_success() {
                let error = serde_json::from_str::<ApiError>(&body)
                    .unwrap_or_else(|_| ApiError::fallback(status, &body));

                match error.status {
                    429 => {
                        log::warn!("Encountered 429 on route {}", request.route);
                        continue;
                    }
                    404 if request.expect.is_nullable() => return Ok(None),
                    _ => return Err(ErrorKind::Api(error)),
                }
            }

            if !request.expect.wants_body() {
                return Ok(None);
            }

            return serde_json::from_str(&body)
                .map(Some)
                .map_err(ErrorKind::DecodeResponseBody);
        }
    }

    /// Executes a request whose response body must be present.
    pub(crate) async fn execute_required<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<T> {
        match self.execute(request).await? {
            Some(value) => Ok(value),
            // Only reachable if `request.expect` was mis-declared
            None => Err(ErrorKind::UnexpectedNoContent(std::any::type_name::<T>())),
        }
    }

    async fn send(&self, request: &ApiRequest, url: Url) -> reqwest::Result<reqwest::Response> {
        let builder = self
            .http
            .request(request.route.method().clone(), url)
            .header(header::USER_AGENT, &self.user_agent);

        let builder = match &request.body {
            RequestBody::None => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(files) => builder.multipart(multipart::build_form(files)),
        };

        builder.headers(request.headers.clone()).send().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use pretty_assertions::assert_eq;

    #[test]
    fn expect_classification() {
        assert!(!Expect::Empty.wants_body());
        assert!(Expect::Required.wants_body());
        assert!(Expect::Nullable.wants_body());
        assert!(Expect::Nullable.is_nullable());
        assert!(!Expect::Required.is_nullable());
    }

    #[test]
    fn fallback_error_carries_raw_body() {
        let error = ApiError::fallback(StatusCode::BAD_GATEWAY, "upstream exploded");

        assert_eq!(
            error,
            ApiError {
                message: "upstream exploded".to_string(),
                status: 502,
                path: "N/A".to_string(),
                request_id: "N/A".to_string(),
            }
        );
    }

    #[test]
    fn structured_error_decodes() {
        let error: ApiError = serde_json::from_str(
            r#"{
                "message": "document not found",
                "status": 404,
                "path": "/documents/abc123",
                "request_id": "b1946ac9"
            }"#,
        )
        .unwrap();

        assert_eq!(error.status, 404);
        assert_eq!(error.to_string(), "404 - document not found");
    }

    #[test]
    fn bearer_rejects_invalid_tokens() {
        let request = ApiRequest::new(
            routes::DELETE_DOCUMENT.compile(&["abc123"]),
            Expect::Nullable,
        );

        assert!(matches!(
            request.bearer("new\nline"),
            Err(ErrorKind::InvalidUpdateToken(_))
        ));
    }
}
