//! Host-side session driver
//!
//! Owns one conversation's state and runs the action-then-resume loop: each
//! user turn goes through the pure `dialog::transition` function, and any
//! returned action is performed here against the injected
//! collaborators before control returns to the caller. The controller never
//! awaits; all suspension lives in this module.
//!
//! Turns are serialized by construction: `handle` takes `&mut self`, so a
//! conversation has exactly one writer.

pub mod traits;

#[cfg(test)]
pub mod testing;

pub use traits::{CodecError, CodecErrorKind, EncodedArtifact, StegoDecoder, StegoEncoder};

use crate::dialog::{
    responses, transition, Action, ConversationState, DialogContext, FlowStep, UserTurn,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One bot message produced while handling a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotReply {
    /// Plain conversational text
    Text(String),
    /// Encode finished; the artifact is ready for download
    Encoded {
        text: String,
        artifact: EncodedArtifact,
    },
    /// Decode finished; the hidden message was revealed
    Revealed { text: String, message: String },
}

impl BotReply {
    /// The display text, whatever the variant
    pub fn text(&self) -> &str {
        match self {
            BotReply::Text(text)
            | BotReply::Encoded { text, .. }
            | BotReply::Revealed { text, .. } => text,
        }
    }
}

/// A single conversation driven against injected collaborators
pub struct ChatSession<E, D> {
    state: ConversationState,
    ctx: DialogContext,
    encoder: E,
    decoder: D,
    rng: StdRng,
}

impl<E: StegoEncoder, D: StegoDecoder> ChatSession<E, D> {
    pub fn new(ctx: DialogContext, encoder: E, decoder: D) -> Self {
        Self {
            state: ConversationState::new(),
            ctx,
            encoder,
            decoder,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fix the reply-pool RNG so tests can assert exact greeting text.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Current conversation state (the host persists this between turns)
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Whether the next turn should be a file upload
    pub fn awaiting_file(&self) -> bool {
        self.state.step.expects_file()
    }

    /// Whether the next text turn is a password (hosts mask the echo)
    pub fn expects_password(&self) -> bool {
        self.state.step.expects_password()
    }

    /// Process one user turn, performing any action the controller names.
    ///
    /// Returns the bot messages to display, in order: the transition reply
    /// first, then the outcome of any encode/decode the turn triggered.
    pub async fn handle(&mut self, turn: UserTurn) -> Vec<BotReply> {
        tracing::debug!(
            step = ?self.state.step,
            has_file = turn.file.is_some(),
            "handling user turn"
        );

        let result = transition(&self.state, &self.ctx, &turn, &mut self.rng);
        self.state = result.next_state;

        let mut replies = vec![BotReply::Text(result.reply)];
        match result.action {
            // Purely advisory; the surface shows its upload affordance.
            Some(Action::RequestFile) | None => {}
            Some(Action::Encode) => self.run_encode(&mut replies).await,
            Some(Action::Decode) => self.run_decode(&mut replies).await,
        }
        replies
    }

    async fn run_encode(&mut self, replies: &mut Vec<BotReply>) {
        let (Some(image), Some(message), Some(password)) = (
            self.state.encode_image.clone(),
            self.state.encode_message.clone(),
            self.state.encode_password.clone(),
        ) else {
            tracing::error!(step = ?self.state.step, "encode action fired without collected fields");
            self.state = ConversationState::cleared();
            replies.push(BotReply::Text(
                "Encoding failed: incomplete request. Please try again.".to_string(),
            ));
            return;
        };

        match self.encoder.encode(&image, &message, &password).await {
            Ok(artifact) => {
                tracing::info!(
                    bytes = artifact.bytes.len(),
                    sha256 = %artifact.sha256,
                    "encode completed"
                );
                self.state = ConversationState::cleared();
                replies.push(BotReply::Encoded {
                    text: responses::ENCODE_SUCCESS.to_string(),
                    artifact,
                });
            }
            Err(e) => {
                tracing::warn!(kind = ?e.kind, error = %e.message, "encode failed");
                self.state = ConversationState::cleared();
                replies.push(BotReply::Text(format!(
                    "Encoding failed: {e}. Please try again."
                )));
            }
        }
    }

    async fn run_decode(&mut self, replies: &mut Vec<BotReply>) {
        let (Some(image), Some(password)) = (
            self.state.decode_image.clone(),
            self.state.decode_password.clone(),
        ) else {
            tracing::error!(step = ?self.state.step, "decode action fired without collected fields");
            self.state = ConversationState::cleared();
            replies.push(BotReply::Text(
                "Decoding failed: incomplete request. Please try again.".to_string(),
            ));
            return;
        };

        match self.decoder.decode(&image, &password).await {
            Ok(message) => {
                tracing::info!(chars = message.len(), "decode completed");
                self.state = ConversationState::cleared();
                replies.push(BotReply::Revealed {
                    text: responses::DECODE_SUCCESS.to_string(),
                    message,
                });
            }
            Err(e) => {
                tracing::warn!(kind = ?e.kind, error = %e.message, "decode failed");
                // Wrong password or unencoded image: keep the uploaded image
                // so the user can retry the password without re-uploading.
                self.state = ConversationState {
                    step: FlowStep::DecodeAwaitingPassword,
                    decode_image: Some(image),
                    ..ConversationState::cleared()
                };
                let body = match e.kind {
                    CodecErrorKind::BadPayload if !e.message.is_empty() => e.message.as_str(),
                    _ => responses::DECODE_FAIL,
                };
                replies.push(BotReply::Text(format!(
                    "{body}{}",
                    responses::DECODE_RETRY_SUFFIX
                )));
            }
        }
    }
}
