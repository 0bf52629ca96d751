//! Pure validators for flow inputs
//!
//! Validation failures are ordinary replies, never fatal: the transition
//! function holds the current step and surfaces the rejection text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted upload size (5 MiB)
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types accepted for carrier images.
///
/// Client-provided metadata only; there is no content sniffing.
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/jpg"];

/// Minimum password length (blocking below this)
pub const MIN_PASSWORD_LEN: usize = 4;

/// Length at which the short-password advisory stops
pub const STRONG_PASSWORD_LEN: usize = 8;

/// An attached file as described by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl AttachedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

/// Why an attached file was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("Please upload a PNG or JPG image.")]
    UnsupportedType,
    #[error("Image must be under 5MB.")]
    TooLarge,
}

/// Accept or reject a carrier image based on client-provided metadata.
pub fn validate_file(file: &AttachedFile) -> Result<(), FileRejection> {
    if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(FileRejection::UnsupportedType);
    }
    if file.size > MAX_FILE_BYTES {
        return Err(FileRejection::TooLarge);
    }
    Ok(())
}

/// Password strength classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    /// Under 4 characters - blocking
    TooShort,
    /// 4-7 characters - accepted with a non-blocking advisory
    Acceptable,
    /// 8+ characters - accepted, no advisory
    Strong,
}

impl PasswordStrength {
    /// Whether the password is accepted at all
    pub fn is_valid(self) -> bool {
        !matches!(self, PasswordStrength::TooShort)
    }

    /// Non-blocking advisory for accepted-but-short passwords
    pub fn warning(self) -> Option<&'static str> {
        match self {
            PasswordStrength::Acceptable => {
                Some("Tip: Longer passwords (8+ characters) are more secure!")
            }
            PasswordStrength::TooShort | PasswordStrength::Strong => None,
        }
    }
}

/// Classify a candidate password by length.
pub fn validate_password(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        PasswordStrength::TooShort
    } else if len < STRONG_PASSWORD_LEN {
        PasswordStrength::Acceptable
    } else {
        PasswordStrength::Strong
    }
}
