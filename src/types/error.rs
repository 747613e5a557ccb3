use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// The result of a client operation.
pub type Result<T> = std::result::Result<T, ErrorKind>;

/// Structured error body returned by the Gobin API on non-success responses.
///
/// When a response body cannot be decoded into this shape, a best-effort
/// value is synthesized from the raw status and body text instead, so
/// callers always receive a semantic error rather than a decode failure.
#[derive(Error, Debug, Clone, Deserialize, PartialEq, Eq)]
#[error("{status} - {message}")]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code as reported in the error body
    pub status: u16,
    /// The request path the error refers to
    pub path: String,
    /// Server-assigned id of the failed request
    #[serde(rename = "request_id")]
    pub request_id: String,
}

impl ApiError {
    /// Synthesizes an error value for a response whose body did not decode
    /// as a structured API error.
    pub(crate) fn fallback(status: StatusCode, body: &str) -> Self {
        Self {
            message: body.to_string(),
            status: status.as_u16(),
            path: "N/A".to_string(),
            request_id: "N/A".to_string(),
        }
    }
}

/// Possible errors when interacting with `gobin_client`
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Reqwest network error
    #[error("Network error while trying to reach the Gobin server")]
    NetworkRequest(#[from] reqwest::Error),
    /// The response body could not be read
    #[error("Failed to read response body")]
    ReadResponseBody(#[source] reqwest::Error),
    /// The Gobin server reported a structured error
    #[error("Gobin API error: {0}")]
    Api(ApiError),
    /// The server sent `204 No Content` although the operation required a
    /// response body. This is a broken server contract, not a server error.
    #[error("Expected a response body of type `{0}` but got 204 No Content")]
    UnexpectedNoContent(&'static str),
    /// A successful response carried a body of an unexpected shape
    #[error("Failed to decode response body")]
    DecodeResponseBody(#[source] serde_json::Error),
    /// A style name was given without a formatter to apply it with
    #[error("Setting a style name only works when specifying a formatter")]
    StyleRequiresFormatter,
    /// An update token did not have the expected JWT shape
    #[error("Invalid update token: {0}")]
    InvalidUpdateToken(String),
    /// The given string cannot be parsed into a valid base URL
    #[error("Invalid Gobin host URL")]
    InvalidHostUrl(#[from] url::ParseError),
}

impl From<ApiError> for ErrorKind {
    fn from(error: ApiError) -> Self {
        Self::Api(error)
    }
}
