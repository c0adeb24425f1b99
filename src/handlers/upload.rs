//! # Upload Handler
//!
//! Accepts a multipart `file` part and decides whether it would be accepted.
//! The decision uses only the declared filename and declared content type;
//! nothing is written to disk.

use axum::{
    Json,
    extract::{Multipart, multipart::MultipartRejection},
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::AppResult;
use crate::models::UploadSubmission;
use crate::utils::upload::UploadValidator;

/// Body of an accepted upload
#[derive(Debug, Serialize)]
pub struct UploadReport {
    pub message: &'static str,
}

impl UploadReport {
    pub fn accepted() -> Self {
        Self {
            message: "File uploaded successfully",
        }
    }
}

/// Validates an uploaded file.
///
/// POST /api/v1/upload MultipartForm
///
/// # Returns
///
/// - `200 OK` - Filename and content type passed both checks
/// - `400 Bad Request` with `{error: "No file uploaded"}` - No `file` part
/// - `400 Bad Request` with `{error: "Invalid filename"}` - Filename contains `..`
/// - `400 Bad Request` with `{error: "Only images allowed"}` - Content type is not `image/*`
/// - `413 Payload Too Large` with `{error: "File too large"}` - Body exceeds the configured limit
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn upload_file(
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadReport>> {
    let submission = UploadSubmission::from_multipart(multipart).await?;

    if let Err(rejection) = UploadValidator::validate(&submission) {
        warn!(
            file_name = %submission.file_name,
            content_type = %submission.content_type,
            %rejection,
            "Upload rejected"
        );
        return Err(rejection.into());
    }

    info!(
        file_name = %submission.file_name,
        content_type = %submission.content_type,
        size = submission.data.len(),
        "Upload accepted"
    );
    Ok(Json(UploadReport::accepted()))
}
