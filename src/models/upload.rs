//! # Upload Submission
//!
//! The decoded form of the `file` part of a multipart upload request.

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::{StatusCode, header};
use tracing::{debug, trace, warn};

use crate::utils::upload::UploadRejection;

/// Name of the multipart field carrying the uploaded file
pub const FILE_FIELD: &str = "file";

/// A single file submission as declared by the caller.
#[derive(Debug, Clone)]
pub struct UploadSubmission {
    /// Filename from the part's `Content-Disposition` header
    pub file_name: String,
    /// Value of the part's `Content-Type` header exactly as sent, empty when absent
    pub content_type: String,
    /// Raw file contents
    pub data: Bytes,
}

impl UploadSubmission {
    /// Reads the first `file` part that carries a filename.
    ///
    /// A body that is not multipart, a malformed body, or a form without a
    /// usable `file` part all yield [`UploadRejection::MissingFile`]. A body that
    /// exceeds the route's size limit yields [`UploadRejection::TooLarge`].
    pub async fn from_multipart(
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Self, UploadRejection> {
        let mut multipart = multipart.map_err(|e| {
            warn!(error = %e, "Request is not a readable multipart form");
            UploadRejection::MissingFile
        })?;

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => {
                    debug!("Multipart form has no file part");
                    return Err(UploadRejection::MissingFile);
                }
                Err(e) => {
                    warn!(error = %e, "Error reading multipart form");
                    return Err(read_failure(&e));
                }
            };

            if field.name() != Some(FILE_FIELD) {
                trace!(field_name = ?field.name(), "Skipping unrelated multipart field");
                continue;
            }

            // A part without a filename is a plain form value, not a file.
            let file_name = match field.file_name() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => {
                    trace!("Skipping `file` field without a filename");
                    continue;
                }
            };
            // Raw header value, case and parameters preserved.
            let content_type = field
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();

            let data = field.bytes().await.map_err(|e| {
                warn!(error = %e, "Error reading file data");
                read_failure(&e)
            })?;

            debug!(%file_name, %content_type, size = data.len(), "File part decoded");
            return Ok(Self {
                file_name,
                content_type,
                data,
            });
        }
    }
}

fn read_failure(e: &MultipartError) -> UploadRejection {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadRejection::TooLarge
    } else {
        UploadRejection::MissingFile
    }
}
