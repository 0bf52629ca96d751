//! Collaborator traits for the session driver
//!
//! The actual steganography/crypto lives behind these traits; the driver only
//! observes success or failure to choose the follow-up reply.

use crate::validate::AttachedFile;
use async_trait::async_trait;
use thiserror::Error;

/// Result of a successful encode: the stego image plus its content hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedArtifact {
    pub bytes: Vec<u8>,
    pub sha256: String,
}

/// Error from an encode or decode collaborator
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CodecError {
    pub kind: CodecErrorKind,
    pub message: String,
}

impl CodecError {
    pub fn new(kind: CodecErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(CodecErrorKind::Network, message)
    }

    pub fn bad_payload(message: impl Into<String>) -> Self {
        Self::new(CodecErrorKind::BadPayload, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(CodecErrorKind::Server, message)
    }
}

/// Classification of collaborator failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecErrorKind {
    /// Could not reach the service
    Network,
    /// Wrong password, image not encoded by us, or payload corrupted
    BadPayload,
    /// The service itself failed
    Server,
}

/// Hides a message inside a carrier image
#[async_trait]
pub trait StegoEncoder: Send + Sync {
    async fn encode(
        &self,
        image: &AttachedFile,
        message: &str,
        password: &str,
    ) -> Result<EncodedArtifact, CodecError>;
}

/// Extracts a hidden message from an encoded image
#[async_trait]
pub trait StegoDecoder: Send + Sync {
    async fn decode(&self, image: &AttachedFile, password: &str) -> Result<String, CodecError>;
}
