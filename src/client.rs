//! Handler of Gobin API operations.
//!
//! This module defines two structs, [`Client`] and [`ClientBuilder`].
//! `Client` exposes the document operations of the Gobin API.
//! `ClientBuilder` exposes a finer level of granularity for building
//! a `Client`.

use chrono::{DateTime, SecondsFormat, Utc};
use typed_builder::TypedBuilder;
use url::Url;

use crate::requester::{ApiRequest, Expect, RequestBody, Requester};
use crate::routes::CompiledRoute;
use crate::types::{RemainingVersions, ShareResponse};
use crate::{
    routes, Document, DocumentFile, ErrorKind, FileUpload, Formatter, GobinHost, Language,
    Permission, Result,
};

/// Default user agent, `gobin-client-<PKG_VERSION>`.
pub const DEFAULT_USER_AGENT: &str = concat!("gobin-client/", env!("CARGO_PKG_VERSION"));

/// Builder for [`Client`].
///
/// See crate-level documentation for usage example.
#[derive(TypedBuilder, Debug, Clone, Default)]
#[builder(field_defaults(default, setter(into)))]
pub struct ClientBuilder {
    /// The Gobin instance to talk to; defaults to <https://xgob.in>.
    host: Option<GobinHost>,

    /// A fully configured `reqwest` client to perform the transport with.
    ///
    /// Use this to control TLS, proxies, timeouts and connection pooling;
    /// none of those are managed by this crate.
    http_client: Option<reqwest::Client>,

    /// The user agent sent with every request.
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Instantiates a [`Client`].
    ///
    /// Must be called within a tokio runtime, since the client starts its
    /// rate limiter's background eviction sweep.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `reqwest` client cannot be
    /// created.
    pub fn client(&self) -> Result<Client> {
        let http = match &self.http_client {
            Some(client) => client.clone(),
            None => reqwest::Client::builder().build()?,
        };
        let host = self.host.clone().unwrap_or_default();
        let user_agent = self
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Client {
            requester: Requester::new(http, host, user_agent),
        })
    }
}

/// Rendering options accepted by most read operations.
///
/// `style` only has an effect together with a `formatter`; setting it
/// alone is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Formatter used to produce [`DocumentFile::formatted`]
    pub formatter: Option<Formatter>,
    /// Style name to format with, e.g. `monokai`
    pub style: Option<String>,
}

impl RenderOptions {
    fn append_to(&self, query: &mut Vec<(&'static str, String)>) -> Result<()> {
        if self.style.is_some() && self.formatter.is_none() {
            return Err(ErrorKind::StyleRequiresFormatter);
        }
        if let Some(formatter) = self.formatter {
            query.push(("formatter", formatter.id().to_string()));
        }
        if let Some(style) = &self.style {
            query.push(("style", style.clone()));
        }
        Ok(())
    }
}

/// A client for one Gobin instance.
///
/// Handles rate limiting and throttling retries internally; cheap
/// operations against different routes run concurrently, while requests
/// against the same route are serialized to respect the server's
/// per-route quota.
#[derive(Debug)]
pub struct Client {
    requester: Requester,
}

impl Client {
    /// Retrieves the latest version of a document, or `None` if no
    /// document exists under `key`.
    pub async fn document(&self, key: &str) -> Result<Option<Document>> {
        self.document_with(key, None, &RenderOptions::default())
            .await
    }

    /// Retrieves a document, optionally as a specific version snapshot
    /// and with formatted file contents.
    pub async fn document_with(
        &self,
        key: &str,
        version: Option<u64>,
        options: &RenderOptions,
    ) -> Result<Option<Document>> {
        let mut query = Vec::new();
        options.append_to(&mut query)?;

        let route = match version {
            Some(version) => {
                routes::GET_DOCUMENT_VERSION.compile(&[key, &version.to_string()])
            }
            None => routes::GET_DOCUMENT.compile(&[key]),
        };

        self.requester
            .execute(&ApiRequest::new(route, Expect::Nullable).query(query))
            .await
    }

    /// Retrieves all version snapshots of a document, newest first, or
    /// `None` if no document exists under `key`.
    ///
    /// With `with_content` disabled the server omits file contents, which
    /// makes listing large documents considerably cheaper.
    pub async fn document_versions(
        &self,
        key: &str,
        with_content: bool,
    ) -> Result<Option<Vec<Document>>> {
        self.document_versions_with(key, with_content, &RenderOptions::default())
            .await
    }

    /// Like [`document_versions`](Self::document_versions), with rendering
    /// options.
    pub async fn document_versions_with(
        &self,
        key: &str,
        with_content: bool,
        options: &RenderOptions,
    ) -> Result<Option<Vec<Document>>> {
        let mut query = vec![("withContent", with_content.to_string())];
        options.append_to(&mut query)?;

        let route = routes::GET_DOCUMENT_VERSIONS.compile(&[key]);
        self.requester
            .execute(&ApiRequest::new(route, Expect::Nullable).query(query))
            .await
    }

    /// Retrieves a single file of a document, or `None` if the document
    /// or the file does not exist.
    pub async fn document_file(&self, key: &str, file_name: &str) -> Result<Option<DocumentFile>> {
        self.document_file_with(key, file_name, None, None, &RenderOptions::default())
            .await
    }

    /// Retrieves a single file, optionally from a version snapshot, with
    /// an overridden language and with rendering options.
    pub async fn document_file_with(
        &self,
        key: &str,
        file_name: &str,
        version: Option<u64>,
        language: Option<Language>,
        options: &RenderOptions,
    ) -> Result<Option<DocumentFile>> {
        let mut query = vec![("file", file_name.to_string())];
        options.append_to(&mut query)?;
        if let Some(language) = language {
            query.push(("language", language.id().to_string()));
        }

        let route = match version {
            Some(version) => routes::GET_DOCUMENT_VERSION_FILE.compile(&[
                key,
                &version.to_string(),
                file_name,
            ]),
            None => routes::GET_DOCUMENT_FILE.compile(&[key, file_name]),
        };

        self.requester
            .execute(&ApiRequest::new(route, Expect::Nullable).query(query))
            .await
    }

    /// Creates a new document from the given files.
    pub async fn create_document(&self, files: Vec<FileUpload>) -> Result<Document> {
        self.create_document_with(files, None, &RenderOptions::default())
            .await
    }

    /// Creates a new document with an expiry time and rendering options.
    pub async fn create_document_with(
        &self,
        files: Vec<FileUpload>,
        expires: Option<DateTime<Utc>>,
        options: &RenderOptions,
    ) -> Result<Document> {
        let mut query = Vec::new();
        options.append_to(&mut query)?;
        if let Some(expires) = expires {
            query.push((
                "expires",
                expires.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }

        let route = routes::CREATE_DOCUMENT.compile(&[]);
        let request = ApiRequest::new(route, Expect::Required)
            .body(RequestBody::Multipart(files))
            .query(query);

        self.requester.execute_required(&request).await
    }

    /// Replaces the files of a document, creating a new version snapshot.
    ///
    /// Returns `None` if no document exists under `key`. The update token
    /// is the one returned when the document was created, or a shared one
    /// with the [`Write`](Permission::Write) permission.
    pub async fn update_document(
        &self,
        key: &str,
        update_token: &str,
        files: Vec<FileUpload>,
    ) -> Result<Option<Document>> {
        self.update_document_with(key, update_token, files, &RenderOptions::default())
            .await
    }

    /// Like [`update_document`](Self::update_document), with rendering
    /// options.
    pub async fn update_document_with(
        &self,
        key: &str,
        update_token: &str,
        files: Vec<FileUpload>,
        options: &RenderOptions,
    ) -> Result<Option<Document>> {
        let mut query = Vec::new();
        options.append_to(&mut query)?;

        let route = routes::UPDATE_DOCUMENT.compile(&[key]);
        let request = ApiRequest::new(route, Expect::Nullable)
            .body(RequestBody::Multipart(files))
            .query(query)
            .bearer(update_token)?;

        self.requester.execute(&request).await
    }

    /// Deletes a document and all of its versions.
    ///
    /// Returns the number of version snapshots still available, which is
    /// `0` after a full deletion.
    pub async fn delete_document(&self, key: &str, update_token: &str) -> Result<u64> {
        let route = routes::DELETE_DOCUMENT.compile(&[key]);
        self.delete(route, update_token).await
    }

    /// Deletes a single version snapshot of a document.
    ///
    /// Returns the number of version snapshots still available.
    pub async fn delete_document_version(
        &self,
        key: &str,
        update_token: &str,
        version: u64,
    ) -> Result<u64> {
        let route = routes::DELETE_DOCUMENT_VERSION.compile(&[key, &version.to_string()]);
        self.delete(route, update_token).await
    }

    /// Generates a new update token for a document, restricted to the
    /// given permissions.
    ///
    /// The provided `update_token` cannot grant permissions it does not
    /// have itself.
    pub async fn share_document(
        &self,
        key: &str,
        update_token: &str,
        permissions: &[Permission],
    ) -> Result<String> {
        let ids: Vec<&'static str> = permissions.iter().map(Permission::id).collect();
        let body = serde_json::json!({ "permissions": ids });

        let route = routes::SHARE_DOCUMENT.compile(&[key]);
        let request = ApiRequest::new(route, Expect::Required)
            .body(RequestBody::Json(body))
            .bearer(update_token)?;

        let response: ShareResponse = self.requester.execute_required(&request).await?;
        Ok(response.token)
    }

    /// The web URL of a document.
    #[must_use]
    pub fn document_url(&self, key: &str) -> Url {
        self.requester.host().join(&format!("/{key}"))
    }

    /// The preview-image URL of a document, either of a pinned version or
    /// always of the latest one.
    #[must_use]
    pub fn preview_url(&self, key: &str, version: Option<u64>) -> Url {
        let route = match version {
            Some(version) => {
                routes::GET_DOCUMENT_VERSION_PREVIEW.compile(&[key, &version.to_string()])
            }
            None => routes::GET_DOCUMENT_PREVIEW.compile(&[key]),
        };
        self.requester.host().join(route.path())
    }

    /// The host this client talks to.
    #[must_use]
    pub const fn host(&self) -> &GobinHost {
        self.requester.host()
    }

    /// Tears the client down: stops the rate limiter's eviction sweep and
    /// releases the transport. Queued and future work is interrupted; a
    /// request already sent cannot be recalled.
    ///
    /// Dropping the client has the same effect.
    pub fn close(self) {}

    async fn delete(&self, route: CompiledRoute, update_token: &str) -> Result<u64> {
        let request = ApiRequest::new(route, Expect::Nullable).bearer(update_token)?;
        let remaining: Option<RemainingVersions> = self.requester.execute(&request).await?;
        Ok(remaining.map_or(0, |remaining| remaining.versions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn style_without_formatter_is_rejected() {
        let client = ClientBuilder::builder().build().client().unwrap();
        let options = RenderOptions {
            formatter: None,
            style: Some("monokai".to_string()),
        };

        let result = client.document_with("abc123", None, &options).await;
        assert!(matches!(result, Err(ErrorKind::StyleRequiresFormatter)));
    }

    #[tokio::test]
    async fn urls_point_below_the_host() {
        let client = ClientBuilder::builder()
            .host("http://localhost:8080".parse::<GobinHost>().unwrap())
            .build()
            .client()
            .unwrap();

        assert_eq!(
            client.document_url("abc123").as_str(),
            "http://localhost:8080/abc123"
        );
        assert_eq!(
            client.preview_url("abc123", None).as_str(),
            "http://localhost:8080/abc123/preview"
        );
        assert_eq!(
            client.preview_url("abc123", Some(17)).as_str(),
            "http://localhost:8080/abc123/17/preview"
        );
    }
}
