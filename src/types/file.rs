use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::language;
use crate::Language;

/// A file contained in a Gobin [`Document`](crate::Document).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DocumentFile {
    /// The name of this file
    pub name: String,
    /// The content of this file.
    ///
    /// `None` when the document was fetched through a versions listing
    /// with `with_content` disabled.
    #[serde(default)]
    pub content: Option<String>,
    /// The formatted content, present when a formatter was requested
    #[serde(default)]
    pub formatted: Option<String>,
    /// The language of this file; unknown server names map to
    /// [`Language::Auto`]
    #[serde(deserialize_with = "language::lenient")]
    pub language: Language,
    /// When this file expires, or `None` if it never does
    #[serde(rename = "expires_at", default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// A file to upload when creating or updating a document.
///
/// ```
/// use gobin_client::{FileUpload, Language};
///
/// let file = FileUpload::text("main.rs", "fn main() {}").language(Language::Rust);
/// assert_eq!(file.name(), "main.rs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    name: String,
    content: FileContent,
    language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FileContent {
    Text(String),
    Bytes(Vec<u8>),
}

impl FileUpload {
    /// Creates a text file upload. The language defaults to
    /// [`Language::Auto`], letting the server detect it.
    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: FileContent::Text(content.into()),
            language: Language::Auto,
        }
    }

    /// Creates a file upload from raw bytes.
    pub fn bytes(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: FileContent::Bytes(content.into()),
            language: Language::Auto,
        }
    }

    /// Tags the file with an explicit language instead of server-side
    /// detection.
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn content(&self) -> &FileContent {
        &self.content
    }

    pub(crate) fn language_tag(&self) -> Language {
        self.language
    }
}
