//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection, Multipart, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::builder::{build_analysis, AnalysisInput};
use crate::analysis::extraction::extract_text;
use crate::analysis::report::{render_report, report_filename};
use crate::errors::AppError;
use crate::models::analysis::ResumeAnalysis;
use crate::state::AppState;
use crate::validation::ValidationResult;

const DEFAULT_JOB_ROLE: &str = "General";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub text: String,
    pub filename: Option<String>,
}

struct UploadedFile {
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/validate
///
/// Runs the validator over raw text. Always 200 for a well-formed body;
/// the verdict is in the body.
pub async fn handle_validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidationResult>, AppError> {
    let Json(request) = payload.map_err(json_error)?;
    let result = state
        .validator
        .validate(&request.text, request.filename.as_deref());
    info!(
        score = result.score,
        is_valid = result.is_valid,
        "Validated submitted text"
    );
    Ok(Json(result))
}

/// POST /api/resume/upload
///
/// Multipart fields: `file` (required), `jobRole`, `userId`.
/// Rejects non-resume documents with 400 `INVALID_RESUME_CONTENT`.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut upload: Option<UploadedFile> = None;
    let mut job_role: Option<String> = None;
    let mut user_id: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?.to_vec();
                upload = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Some("jobRole") => job_role = non_blank(field.text().await.map_err(multipart_error)?),
            Some("userId") => user_id = non_blank(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    let job_role = job_role.unwrap_or_else(|| DEFAULT_JOB_ROLE.to_string());
    info!(
        file = %upload.file_name,
        bytes = upload.bytes.len(),
        job_role = %job_role,
        "Received resume upload"
    );

    let text = extract_text(
        &upload.file_name,
        upload.content_type.as_deref(),
        upload.bytes,
    )
    .await?;

    let validation = state.validator.validate(&text, Some(&upload.file_name));
    if !validation.is_valid {
        warn!(
            file = %upload.file_name,
            score = validation.score,
            "Upload rejected: {}",
            validation.reason
        );
        return Err(AppError::InvalidResumeContent(Box::new(validation)));
    }
    info!(
        file = %upload.file_name,
        score = validation.score,
        confidence = validation.confidence_score,
        "Upload passed ATS validation"
    );

    let analysis = build_analysis(
        AnalysisInput {
            user_id,
            file_name: &upload.file_name,
            job_role: &job_role,
            text: &text,
            validation: &validation,
        },
        &state.validator,
    );
    state.store.save(analysis.clone()).await?;
    info!(id = %analysis.id, overall = analysis.overall_score, "Stored analysis");

    Ok(Json(analysis))
}

/// GET /api/resume/analysis/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let analysis = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))?;
    Ok(Json(analysis))
}

/// GET /api/resume/user/:user_id
pub async fn handle_list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ResumeAnalysis>>, AppError> {
    Ok(Json(state.store.list_for_user(&user_id).await?))
}

/// POST /api/resume/download/:id
///
/// Returns the enhanced-resume report as a text attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let analysis = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))?;

    let today = Utc::now().date_naive();
    let body = render_report(&analysis, today);
    let filename = report_filename(&analysis.uploaded_file_name, today);
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed upload: {}", e.body_text()))
    }
}

fn json_error(e: JsonRejection) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed request: {}", e.body_text()))
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
