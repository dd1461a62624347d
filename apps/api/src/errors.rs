use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::validation::ValidationResult;

/// Suggestions shown to a user whose upload was not recognised as a resume.
const RESUME_SUGGESTIONS: &[&str] = &[
    "Upload a document that contains your professional experience",
    "Include education details, skills, and work history",
    "Ensure the document is a proper resume/CV format",
    "Avoid uploading certificates, marksheets, or project reports",
];

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Document is not a resume: {}", .0.reason)]
    InvalidResumeContent(Box<ValidationResult>),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details): (StatusCode, &str, String, Option<Value>) =
            match &self {
                AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
                AppError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                ),
                AppError::UnsupportedFileType(msg) => (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "UNSUPPORTED_FILE_TYPE",
                    msg.clone(),
                    None,
                ),
                AppError::PayloadTooLarge(msg) => (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "PAYLOAD_TOO_LARGE",
                    msg.clone(),
                    None,
                ),
                AppError::InvalidResumeContent(result) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_RESUME_CONTENT",
                    "This uploaded file is not a resume. Please upload a proper CV or Resume for scoring."
                        .to_string(),
                    Some(json!({
                        "reason": result.reason,
                        "score": result.score,
                        "threshold": result.threshold,
                        "detected_categories": result.detected_categories,
                        "missing_categories": result.missing_categories,
                        "suggestions": RESUME_SUGGESTIONS,
                    })),
                ),
                AppError::Extraction(msg) => {
                    tracing::warn!("Extraction error: {msg}");
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "EXTRACTION_ERROR",
                        msg.clone(),
                        None,
                    )
                }
                AppError::Internal(e) => {
                    tracing::error!("Internal error: {e:?}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal server error occurred".to_string(),
                        None,
                    )
                }
            };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
