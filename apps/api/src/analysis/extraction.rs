//! Turns an uploaded file into plain text for validation.

use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

/// Decides how to read an upload from its content type, falling back to the
/// file extension when the client sent a generic type.
pub fn detect_kind(filename: &str, content_type: Option<&str>) -> Option<DocumentKind> {
    let content_type = content_type.map(|c| c.to_ascii_lowercase());
    match content_type.as_deref() {
        Some(ct) if ct.starts_with("text/plain") => return Some(DocumentKind::PlainText),
        Some("application/pdf") => return Some(DocumentKind::Pdf),
        _ => {}
    }

    let lower = filename.to_ascii_lowercase();
    if lower.ends_with(".txt") {
        Some(DocumentKind::PlainText)
    } else if lower.ends_with(".pdf") {
        Some(DocumentKind::Pdf)
    } else {
        None
    }
}

/// Extracts text from an uploaded document.
///
/// PDF parsing is CPU-bound and runs on the blocking pool.
pub async fn extract_text(
    filename: &str,
    content_type: Option<&str>,
    bytes: Vec<u8>,
) -> Result<String, AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let kind = detect_kind(filename, content_type).ok_or_else(|| {
        AppError::UnsupportedFileType(format!(
            "'{filename}' is not a supported format. Upload a PDF or plain-text resume."
        ))
    })?;

    let text = match kind {
        DocumentKind::PlainText => String::from_utf8_lossy(&bytes).into_owned(),
        DocumentKind::Pdf => tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::Extraction(format!("Could not read PDF '{filename}': {e}")))?,
    };

    debug!(filename, ?kind, chars = text.len(), "Extracted upload text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_kind_from_content_type() {
        assert_eq!(
            detect_kind("upload", Some("text/plain; charset=utf-8")),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(
            detect_kind("upload", Some("application/pdf")),
            Some(DocumentKind::Pdf)
        );
    }

    #[test]
    fn test_detect_kind_falls_back_to_extension() {
        assert_eq!(
            detect_kind("Resume.PDF", Some("application/octet-stream")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(detect_kind("cv.txt", None), Some(DocumentKind::PlainText));
    }

    #[test]
    fn test_detect_kind_rejects_unknown_formats() {
        assert_eq!(detect_kind("photo.png", Some("image/png")), None);
        assert_eq!(detect_kind("resume.docx", None), None);
    }

    #[tokio::test]
    async fn test_extract_plain_text() {
        let text = extract_text("cv.txt", Some("text/plain"), b"Resume\nSkills".to_vec())
            .await
            .unwrap();
        assert_eq!(text, "Resume\nSkills");
    }

    #[tokio::test]
    async fn test_extract_replaces_invalid_utf8() {
        let text = extract_text("cv.txt", None, vec![b'o', b'k', 0xff])
            .await
            .unwrap();
        assert!(text.starts_with("ok"));
    }

    #[tokio::test]
    async fn test_extract_rejects_empty_upload() {
        let err = extract_text("cv.txt", None, Vec::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_extract_rejects_unsupported_type() {
        let err = extract_text("photo.png", Some("image/png"), vec![1, 2, 3])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFileType(_)));
    }

    #[tokio::test]
    async fn test_extract_reports_broken_pdf() {
        let err = extract_text("resume.pdf", None, b"not a pdf".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_extract_reports_truncated_pdf() {
        let truncated = b"%PDF-1.4\n1 0 obj".to_vec();
        let err = extract_text("resume.pdf", Some("application/pdf"), truncated)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
