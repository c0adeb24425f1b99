//! # Upload Validation
//!
//! Checks applied to a decoded multipart file part. Both checks look only at
//! metadata declared by the caller: the filename and the part's `Content-Type`
//! header. The file bytes are never inspected.

use thiserror::Error;
use tracing::{debug, trace};

use crate::models::UploadSubmission;

/// Reasons an upload is refused. The display text is the client-facing message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("No file uploaded")]
    MissingFile,
    #[error("Invalid filename")]
    InvalidFilename,
    #[error("Only images allowed")]
    NotAnImage,
    #[error("File too large")]
    TooLarge,
}

/// Metadata checks for uploaded files.
pub struct UploadValidator;

impl UploadValidator {
    /// Runs the filename check, then the content type check, stopping at the first failure.
    pub fn validate(submission: &UploadSubmission) -> Result<(), UploadRejection> {
        Self::validate_filename(&submission.file_name)?;
        Self::validate_content_type(&submission.content_type)?;
        trace!(
            file_name = %submission.file_name,
            content_type = %submission.content_type,
            "Upload metadata accepted"
        );
        Ok(())
    }

    /// Rejects filenames containing `..`. Anything else is accepted as-is.
    pub fn validate_filename(file_name: &str) -> Result<(), UploadRejection> {
        if file_name.contains("..") {
            debug!(%file_name, "Filename contains a parent directory sequence");
            return Err(UploadRejection::InvalidFilename);
        }
        Ok(())
    }

    /// Accepts any declared content type starting with `image/`.
    pub fn validate_content_type(content_type: &str) -> Result<(), UploadRejection> {
        if !content_type.starts_with("image/") {
            debug!(%content_type, "Declared content type is not an image");
            return Err(UploadRejection::NotAnImage);
        }
        Ok(())
    }
}
