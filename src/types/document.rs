use serde::Deserialize;

use crate::DocumentFile;

/// A Gobin document: a keyed, versioned collection of files.
///
/// See [`Client::document`](crate::Client::document) and
/// [`Client::create_document`](crate::Client::create_document).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// The unique identifier of this document
    pub key: String,
    /// Unix timestamp identifying this document snapshot
    pub version: u64,
    /// The files contained in this document
    pub files: Vec<DocumentFile>,
    /// The token needed to update or delete this document.
    ///
    /// Present on documents returned from create/update calls, absent on
    /// plain fetches.
    #[serde(rename = "token", default)]
    pub update_token: Option<String>,
}

impl Document {
    /// Returns the file with the given name, if this document contains it.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&DocumentFile> {
        self.files.iter().find(|file| file.name == name)
    }
}

/// Response of the delete endpoints: how many snapshots remain.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RemainingVersions {
    pub(crate) versions: u64,
}

/// Response of the share endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ShareResponse {
    pub(crate) token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Language;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_document_and_finds_files() {
        let document: Document = serde_json::from_str(
            r##"{
                "key": "abc123",
                "version": 1700000000,
                "files": [
                    {"name": "main.rs", "content": "fn main() {}", "language": "Rust"},
                    {"name": "README.md", "content": "# hi", "language": "markdown"}
                ],
                "token": "secret",
                "some_future_field": true
            }"##,
        )
        .unwrap();

        assert_eq!(document.key, "abc123");
        assert_eq!(document.update_token.as_deref(), Some("secret"));
        assert_eq!(
            document.file("main.rs").map(|file| file.language),
            Some(Language::Rust)
        );
        assert_eq!(document.file("missing.txt"), None);
    }

    #[test]
    fn token_is_optional() {
        let document: Document = serde_json::from_str(
            r#"{"key": "abc123", "version": 1, "files": []}"#,
        )
        .unwrap();

        assert_eq!(document.update_token, None);
    }
}
