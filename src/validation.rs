use serde::Serialize;
use std::fmt;
use std::path::Path;


pub const SUPPORTED_IMAGE_FORMATS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];
pub const SUPPORTED_VIDEO_FORMATS: [&str; 4] = ["mp4", "mov", "avi", "mkv"];
pub const MAX_FILE_SIZE_MB: f64 = 200.0;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationFailure {
    FileNotFound,
    SizeExceeded,
    UnsupportedFormat,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ValidationFailure::FileNotFound => "file not found",
            ValidationFailure::SizeExceeded => "exceeds size limit",
            ValidationFailure::UnsupportedFormat => "unsupported format",
        };
        write!(f, "{}", reason)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub reason: String,
    pub failure: Option<ValidationFailure>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            reason: "valid".to_string(),
            failure: None,
        }
    }

    pub fn failed(failure: ValidationFailure) -> Self {
        Self {
            is_valid: false,
            reason: failure.to_string(),
            failure: Some(failure),
        }
    }
}

pub fn is_valid_image(path: &Path) -> bool {
    path.exists() && has_extension(path, &SUPPORTED_IMAGE_FORMATS)
}

pub fn is_valid_video(path: &Path) -> bool {
    path.exists() && has_extension(path, &SUPPORTED_VIDEO_FORMATS)
}

/// False when the file is missing or larger than `max_mb` megabytes.
pub fn is_valid_size(path: &Path, max_mb: f64) -> bool {
    match std::fs::metadata(path) {
        Ok(metadata) => metadata.len() as f64 / BYTES_PER_MB <= max_mb,
        Err(_) => false,
    }
}

pub fn validate_file(path: &Path) -> ValidationResult {
    validate_file_with_limit(path, MAX_FILE_SIZE_MB)
}

/// Checks existence, then size, then format, stopping at the first failure.
pub fn validate_file_with_limit(path: &Path, max_mb: f64) -> ValidationResult {
    if !path.exists() {
        return ValidationResult::failed(ValidationFailure::FileNotFound);
    }

    if !is_valid_size(path, max_mb) {
        return ValidationResult::failed(ValidationFailure::SizeExceeded);
    }

    if is_valid_image(path) || is_valid_video(path) {
        return ValidationResult::valid();
    }

    ValidationResult::failed(ValidationFailure::UnsupportedFormat)
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            allowed.iter().any(|candidate| *candidate == ext)
        })
        .unwrap_or(false)
}
