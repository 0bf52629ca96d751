//! Conversation state types

use crate::validate::AttachedFile;
use serde::{Deserialize, Serialize};

/// Discrete position within a flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlowStep {
    /// No flow active; the intent classifier drives the next move
    #[default]
    Idle,

    /// Encode flow: waiting for a carrier image upload
    EncodeAwaitingImage,
    /// Encode flow: waiting for the message to hide
    EncodeAwaitingMessage,
    /// Encode flow: waiting for the password
    EncodeAwaitingPassword,
    /// Encode flow: all fields collected, host is performing the encode
    EncodeProcessing,

    /// Decode flow: waiting for the encoded image upload
    DecodeAwaitingImage,
    /// Decode flow: waiting for the password
    DecodeAwaitingPassword,
    /// Decode flow: host is performing the decode
    DecodeProcessing,
}

impl FlowStep {
    pub fn is_idle(self) -> bool {
        matches!(self, FlowStep::Idle)
    }

    /// Whether this step belongs to the encode flow
    pub fn in_encode_flow(self) -> bool {
        matches!(
            self,
            FlowStep::EncodeAwaitingImage
                | FlowStep::EncodeAwaitingMessage
                | FlowStep::EncodeAwaitingPassword
                | FlowStep::EncodeProcessing
        )
    }

    /// Whether this step belongs to the decode flow
    pub fn in_decode_flow(self) -> bool {
        matches!(
            self,
            FlowStep::DecodeAwaitingImage
                | FlowStep::DecodeAwaitingPassword
                | FlowStep::DecodeProcessing
        )
    }

    /// Whether the next text turn at this step is a password.
    ///
    /// Hosts use this to mask the echoed input.
    pub fn expects_password(self) -> bool {
        matches!(
            self,
            FlowStep::EncodeAwaitingPassword | FlowStep::DecodeAwaitingPassword
        )
    }

    /// Whether the next turn at this step should be a file upload
    pub fn expects_file(self) -> bool {
        matches!(
            self,
            FlowStep::EncodeAwaitingImage | FlowStep::DecodeAwaitingImage
        )
    }
}

/// Everything collected from the user so far, plus the current step.
///
/// Immutable by convention: every transition produces a new value and the
/// host replaces its copy. Fields of one flow are never populated while
/// `step` belongs to the other flow, and any return to [`FlowStep::Idle`]
/// clears all fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConversationState {
    pub step: FlowStep,
    pub encode_image: Option<AttachedFile>,
    pub encode_message: Option<String>,
    pub encode_password: Option<String>,
    pub decode_image: Option<AttachedFile>,
    pub decode_password: Option<String>,
}

impl ConversationState {
    /// Fresh idle state with no collected fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to idle, dropping everything collected so far.
    pub fn cleared() -> Self {
        Self::default()
    }
}

/// Immutable per-session capabilities injected by the host.
///
/// Stands in for the original's global authenticated-session storage: the
/// host resolves the session once and hands the controller only what it
/// needs.
#[derive(Debug, Clone, Default)]
pub struct DialogContext {
    display_name: Option<String>,
}

impl DialogContext {
    /// Anonymous session
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with a known user display name, used to personalize greetings
    pub fn with_display_name(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}
