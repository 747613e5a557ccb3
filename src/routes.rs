//! The closed inventory of Gobin API routes.
//!
//! Routes pair an HTTP method with a path template; templates are
//! instantiated with [`Route::compile`] before a request is sent. Rate
//! limiting keys on the *template* path, so all instances of
//! `/documents/{key}` share one bucket.

use std::fmt;

use http::Method;

pub(crate) const GET_DOCUMENT: Route = Route::new(Method::GET, "/documents/{key}");
pub(crate) const GET_DOCUMENT_VERSIONS: Route =
    Route::new(Method::GET, "/documents/{key}/versions");
pub(crate) const GET_DOCUMENT_VERSION: Route =
    Route::new(Method::GET, "/documents/{key}/versions/{version}");
pub(crate) const GET_DOCUMENT_FILE: Route =
    Route::new(Method::GET, "/documents/{key}/files/{fileName}");
pub(crate) const GET_DOCUMENT_VERSION_FILE: Route = Route::new(
    Method::GET,
    "/documents/{key}/versions/{version}/files/{fileName}",
);
pub(crate) const GET_DOCUMENT_PREVIEW: Route = Route::new(Method::GET, "/{key}/preview");
pub(crate) const GET_DOCUMENT_VERSION_PREVIEW: Route =
    Route::new(Method::GET, "/{key}/{version}/preview");
pub(crate) const CREATE_DOCUMENT: Route = Route::new(Method::POST, "/documents");
pub(crate) const UPDATE_DOCUMENT: Route = Route::new(Method::PATCH, "/documents/{key}");
pub(crate) const SHARE_DOCUMENT: Route = Route::new(Method::POST, "/documents/{key}/share");
pub(crate) const DELETE_DOCUMENT: Route = Route::new(Method::DELETE, "/documents/{key}/delete");
pub(crate) const DELETE_DOCUMENT_VERSION: Route =
    Route::new(Method::DELETE, "/documents/{key}/versions/{version}");

/// An HTTP method plus a path template, before parameter substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Route {
    method: Method,
    path: &'static str,
}

impl Route {
    const fn new(method: Method, path: &'static str) -> Self {
        Self { method, path }
    }

    /// Substitutes the `{param}` segments of the template positionally.
    ///
    /// # Panics
    ///
    /// Panics if the number of arguments does not match the number of
    /// template parameters; a mismatch is a bug in this crate, not a
    /// runtime condition.
    pub(crate) fn compile(&self, args: &[&str]) -> CompiledRoute {
        let params = self.path.matches('{').count();
        assert_eq!(
            args.len(),
            params,
            "route {} takes {params} parameters",
            self.path
        );

        let mut args = args.iter();
        let path = self
            .path
            .split('/')
            .map(|segment| {
                if segment.starts_with('{') {
                    *args.next().expect("checked arity above")
                } else {
                    segment
                }
            })
            .collect::<Vec<_>>()
            .join("/");

        CompiledRoute {
            route: self.clone(),
            path,
        }
    }
}

/// A route with all path parameters substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledRoute {
    route: Route,
    path: String,
}

impl CompiledRoute {
    pub(crate) fn method(&self) -> &Method {
        &self.route.method
    }

    /// The instantiated path to request.
    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    /// The template path the rate-limit bucket is keyed on.
    pub(crate) const fn template(&self) -> &'static str {
        self.route.path
    }
}

impl fmt::Display for CompiledRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route({} {})", self.route.method, self.path)
    }
}
