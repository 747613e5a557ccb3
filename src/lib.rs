//! `gobin-client` is an async client for the [Gobin](https://github.com/topi314/gobin)
//! paste service.
//!
//! "Hello world" example:
//!
//! ```no_run
//! use gobin_client::{ClientBuilder, FileUpload, Language, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ClientBuilder::builder().build().client()?;
//!
//!     let file = FileUpload::text("main.rs", "fn main() {}").language(Language::Rust);
//!     let document = client.create_document(vec![file]).await?;
//!     println!("{}", client.document_url(&document.key));
//!     Ok(())
//! }
//! ```
//!
//! The client enforces the server's per-route rate limits internally:
//! requests against the same route are serialized and delayed when the
//! last response reported an exhausted quota, and throttled (429)
//! requests are retried transparently. Fetch operations return
//! `Option<_>` — a missing document is a valid outcome, not an error.
// #![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod client;
mod multipart;
mod ratelimit;
mod requester;
mod routes;
mod types;

pub use client::{Client, ClientBuilder, RenderOptions, DEFAULT_USER_AGENT};
pub use types::{
    decode_update_token, ApiError, Document, DocumentFile, ErrorKind, FileUpload, Formatter,
    GobinHost, Language, Permission, Result, UpdateTokenClaims, DEFAULT_HOST,
};
