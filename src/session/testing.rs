//! Scripted collaborators for driver tests

use super::traits::{CodecError, EncodedArtifact, StegoDecoder, StegoEncoder};
use crate::validate::AttachedFile;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Build an artifact with a real content hash over the given bytes
pub fn artifact(bytes: &[u8]) -> EncodedArtifact {
    let sha256 = format!("{:x}", Sha256::digest(bytes));
    EncodedArtifact {
        bytes: bytes.to_vec(),
        sha256,
    }
}

/// Encoder that replays a fixed script of outcomes, one per call
pub struct ScriptedEncoder {
    script: Mutex<VecDeque<Result<EncodedArtifact, CodecError>>>,
    repeat_last: bool,
}

impl ScriptedEncoder {
    pub fn script(outcomes: Vec<Result<EncodedArtifact, CodecError>>) -> Self {
        Self {
            script: Mutex::new(outcomes.into()),
            repeat_last: false,
        }
    }

    /// Succeed with the same artifact on every call
    pub fn always_ok(artifact: EncodedArtifact) -> Self {
        Self {
            script: Mutex::new(VecDeque::from([Ok(artifact)])),
            repeat_last: true,
        }
    }

    /// Fail with the same error on every call
    pub fn always_err(error: CodecError) -> Self {
        Self {
            script: Mutex::new(VecDeque::from([Err(error)])),
            repeat_last: true,
        }
    }

    /// For tests that must never reach the encoder
    pub fn unused() -> Self {
        Self::script(vec![])
    }
}

#[async_trait]
impl StegoEncoder for ScriptedEncoder {
    async fn encode(
        &self,
        _image: &AttachedFile,
        _message: &str,
        _password: &str,
    ) -> Result<EncodedArtifact, CodecError> {
        next(&self.script, self.repeat_last, "encoder")
    }
}

/// Decoder that replays a fixed script of outcomes, one per call
pub struct ScriptedDecoder {
    script: Mutex<VecDeque<Result<String, CodecError>>>,
    repeat_last: bool,
}

impl ScriptedDecoder {
    pub fn script(outcomes: Vec<Result<String, CodecError>>) -> Self {
        Self {
            script: Mutex::new(outcomes.into()),
            repeat_last: false,
        }
    }

    /// For tests that must never reach the decoder
    pub fn unused() -> Self {
        Self::script(vec![])
    }
}

#[async_trait]
impl StegoDecoder for ScriptedDecoder {
    async fn decode(&self, _image: &AttachedFile, _password: &str) -> Result<String, CodecError> {
        next(&self.script, self.repeat_last, "decoder")
    }
}

fn next<T: Clone>(
    script: &Mutex<VecDeque<Result<T, CodecError>>>,
    repeat_last: bool,
    who: &str,
) -> Result<T, CodecError> {
    let mut script = script.lock().expect("script lock poisoned");
    if repeat_last {
        script.front().cloned().unwrap_or_else(|| panic!("{who} script is empty"))
    } else {
        script
            .pop_front()
            .unwrap_or_else(|| panic!("{who} script exhausted"))
    }
}
