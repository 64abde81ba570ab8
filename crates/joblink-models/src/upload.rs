//! Client-side upload pre-checks.
//!
//! A UX courtesy, not a security boundary: the backend revalidates every
//! upload. Checks run before any bytes leave the client.

use thiserror::Error;

/// Upload size ceiling (5 MB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Accepted resume file extensions.
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Accepted post/profile image extensions.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Why a file was rejected locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("{name} is too large ({size} bytes, limit is {MAX_UPLOAD_BYTES})")]
    TooLarge { name: String, size: u64 },

    #[error("{name}: unsupported file type (accepted: {accepted})")]
    UnsupportedType { name: String, accepted: &'static str },
}

/// Check a resume file (pdf/doc/docx, ≤ 5 MB) before submission.
pub fn validate_resume_upload(name: &str, size: u64) -> Result<(), UploadError> {
    validate_upload(name, size, RESUME_EXTENSIONS, "pdf, doc, docx")
}

/// Check an image file (jpg/jpeg/png/gif/webp, ≤ 5 MB) before submission.
pub fn validate_image_upload(name: &str, size: u64) -> Result<(), UploadError> {
    validate_upload(name, size, IMAGE_EXTENSIONS, "jpg, jpeg, png, gif, webp")
}

fn validate_upload(
    name: &str,
    size: u64,
    allowed: &[&str],
    accepted: &'static str,
) -> Result<(), UploadError> {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !allowed.contains(&ext.as_str()) {
        return Err(UploadError::UnsupportedType {
            name: name.to_string(),
            accepted,
        });
    }

    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            name: name.to_string(),
            size,
        });
    }

    Ok(())
}
