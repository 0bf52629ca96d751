//! One turn of user input

use crate::validate::AttachedFile;

/// A single user turn: free-form text plus an optional attachment.
///
/// File-bearing turns arrive with empty text (the upload widget sends no
/// prose); the transition function reads whichever part the current step
/// cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTurn {
    pub text: String,
    pub file: Option<AttachedFile>,
}

impl UserTurn {
    /// Plain text turn
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            file: None,
        }
    }

    /// File upload turn
    pub fn file(file: AttachedFile) -> Self {
        Self {
            text: String::new(),
            file: Some(file),
        }
    }
}
