mod document;
mod error;
mod file;
mod formatter;
mod host;
pub(crate) mod language;
mod permission;

pub use document::Document;
pub(crate) use document::{RemainingVersions, ShareResponse};
pub use error::{ApiError, ErrorKind, Result};
pub use file::{DocumentFile, FileUpload};
pub(crate) use file::FileContent;
pub use formatter::Formatter;
pub use host::{GobinHost, DEFAULT_HOST};
pub use language::Language;
pub use permission::{decode_update_token, Permission, UpdateTokenClaims};
