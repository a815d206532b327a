//! Multipart upload handling and request-scoped staging on disk.

use std::io::Write;
use std::path::Path;

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use tempfile::NamedTempFile;
use tracing::warn;

use super::helpers::{ApiError, payload_too_large, unprocessable};
use crate::errors::SimplifyError;

/// Multipart form field carrying the PDF bytes.
pub const FILE_FIELD: &str = "file";

/// Reads the `file` field of the form, skipping any other fields.
///
/// # Errors
///
/// Returns 422 if the body is malformed or has no `file` field, 413 if the
/// body exceeds the configured limit.
pub async fn read_file_field(multipart: &mut Multipart) -> Result<Bytes, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some(FILE_FIELD) {
            return field.bytes().await.map_err(multipart_error);
        }
    }
    Err(unprocessable(format!("Missing upload field `{FILE_FIELD}`")))
}

fn multipart_error(e: MultipartError) -> ApiError {
    let status = e.status();
    let err = SimplifyError::UploadError(e.body_text());
    warn!("{}", err);

    if status == StatusCode::PAYLOAD_TOO_LARGE {
        payload_too_large(err.to_string())
    } else {
        unprocessable(err.to_string())
    }
}

/// Uploaded bytes written to a temporary `.pdf` file.
///
/// The file is deleted when this value is dropped, on success and on every
/// error path alike.
#[derive(Debug)]
pub struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    /// # Errors
    ///
    /// Returns an I/O error if the temporary file cannot be created or written.
    pub fn stage(bytes: &[u8]) -> Result<Self, SimplifyError> {
        let mut file = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(".pdf")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
