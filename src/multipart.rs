//! Assembly of multipart bodies for document create/update calls.
//!
//! Gobin expects one part per file, named `file-{index}`, carrying the
//! file name in the content disposition and an explicit `Language` part
//! header when the language should not be auto-detected.

use http::{HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};

use crate::types::FileContent;
use crate::{FileUpload, Language};

pub(crate) fn build_form(files: &[FileUpload]) -> Form {
    files
        .iter()
        .enumerate()
        .fold(Form::new(), |form, (index, file)| {
            form.part(format!("file-{index}"), build_part(file))
        })
}

fn build_part(file: &FileUpload) -> Part {
    let part = match file.content() {
        FileContent::Text(text) => Part::text(text.clone()),
        FileContent::Bytes(bytes) => Part::bytes(bytes.clone()),
    };
    let mut part = part.file_name(file.name().to_string());

    if file.language_tag() != Language::Auto {
        let mut headers = HeaderMap::new();
        // Language ids are static ASCII, always legal header values
        headers.insert(
            "Language",
            HeaderValue::from_static(file.language_tag().id()),
        );
        part = part.headers(headers);
    }
    part
}
