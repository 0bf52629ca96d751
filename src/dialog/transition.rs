//! Pure dialog transition function
//!
//! Deterministic and side-effect-free: given the same state, turn, and RNG
//! stream it always produces the same result, and it never performs I/O. The
//! host applies `next_state`, displays `reply`, and performs `action` if one
//! is present.

use super::responses;
use super::{Action, ConversationState, DialogContext, FlowStep, UserTurn};
use crate::intent::{self, Intent};
use crate::validate::{validate_file, validate_password};
use rand::Rng;

/// Result of processing one user turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub reply: String,
    pub next_state: ConversationState,
    pub action: Option<Action>,
}

impl TransitionResult {
    fn new(reply: impl Into<String>, next_state: ConversationState) -> Self {
        Self {
            reply: reply.into(),
            next_state,
            action: None,
        }
    }

    fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

/// Process one user turn.
///
/// The negation check runs first for every step: a recognized refusal word at
/// the start of the text aborts whatever flow is active and clears all
/// collected fields. Intent classification is consulted only while idle.
///
/// This function never fails; invalid input (bad file, short password, empty
/// message) holds the current step and reports the problem as the reply.
pub fn transition<R: Rng + ?Sized>(
    state: &ConversationState,
    ctx: &DialogContext,
    turn: &UserTurn,
    rng: &mut R,
) -> TransitionResult {
    if intent::is_negative(&turn.text) {
        return TransitionResult::new(responses::CANCEL, ConversationState::cleared());
    }

    match state.step {
        FlowStep::Idle => idle_turn(state, ctx, &turn.text, rng),

        FlowStep::EncodeAwaitingImage => match &turn.file {
            Some(file) => match validate_file(file) {
                Ok(()) => TransitionResult::new(
                    responses::ENCODE_GOT_IMAGE,
                    ConversationState {
                        step: FlowStep::EncodeAwaitingMessage,
                        encode_image: Some(file.clone()),
                        ..state.clone()
                    },
                ),
                Err(rejection) => TransitionResult::new(rejection.to_string(), state.clone())
                    .with_action(Action::RequestFile),
            },
            None => TransitionResult::new(responses::ENCODE_AWAITING_FILE, state.clone())
                .with_action(Action::RequestFile),
        },

        FlowStep::EncodeAwaitingMessage => {
            if turn.text.trim().is_empty() {
                TransitionResult::new(responses::ENCODE_EMPTY_MESSAGE, state.clone())
            } else {
                TransitionResult::new(
                    responses::ENCODE_GOT_MESSAGE,
                    ConversationState {
                        step: FlowStep::EncodeAwaitingPassword,
                        encode_message: Some(turn.text.clone()),
                        ..state.clone()
                    },
                )
            }
        }

        FlowStep::EncodeAwaitingPassword => {
            let strength = validate_password(&turn.text);
            if !strength.is_valid() {
                return TransitionResult::new(responses::PASSWORD_TOO_SHORT, state.clone());
            }
            let reply = match strength.warning() {
                Some(warning) => format!("{}\n\n{warning}", responses::ENCODE_PROCESSING),
                None => responses::ENCODE_PROCESSING.to_string(),
            };
            TransitionResult::new(
                reply,
                ConversationState {
                    step: FlowStep::EncodeProcessing,
                    encode_password: Some(turn.text.clone()),
                    ..state.clone()
                },
            )
            .with_action(Action::Encode)
        }

        FlowStep::DecodeAwaitingImage => match &turn.file {
            Some(file) => match validate_file(file) {
                Ok(()) => TransitionResult::new(
                    responses::DECODE_GOT_IMAGE,
                    ConversationState {
                        step: FlowStep::DecodeAwaitingPassword,
                        decode_image: Some(file.clone()),
                        ..state.clone()
                    },
                ),
                Err(rejection) => TransitionResult::new(rejection.to_string(), state.clone())
                    .with_action(Action::RequestFile),
            },
            None => TransitionResult::new(responses::DECODE_AWAITING_FILE, state.clone())
                .with_action(Action::RequestFile),
        },

        FlowStep::DecodeAwaitingPassword => {
            if !validate_password(&turn.text).is_valid() {
                return TransitionResult::new(responses::PASSWORD_TOO_SHORT, state.clone());
            }
            TransitionResult::new(
                responses::DECODE_PROCESSING,
                ConversationState {
                    step: FlowStep::DecodeProcessing,
                    decode_password: Some(turn.text.clone()),
                    ..state.clone()
                },
            )
            .with_action(Action::Decode)
        }

        // The host owns these steps; stray text while an action is in flight
        // gets the fallback reply and changes nothing.
        FlowStep::EncodeProcessing | FlowStep::DecodeProcessing => {
            TransitionResult::new(responses::UNKNOWN, state.clone())
        }
    }
}

fn idle_turn<R: Rng + ?Sized>(
    state: &ConversationState,
    ctx: &DialogContext,
    text: &str,
    rng: &mut R,
) -> TransitionResult {
    match intent::classify(text) {
        Intent::Greeting => {
            TransitionResult::new(responses::greeting(rng, ctx.display_name()), state.clone())
        }
        Intent::Encode => TransitionResult::new(
            responses::ENCODE_START,
            ConversationState {
                step: FlowStep::EncodeAwaitingImage,
                ..state.clone()
            },
        )
        .with_action(Action::RequestFile),
        Intent::Decode => TransitionResult::new(
            responses::DECODE_START,
            ConversationState {
                step: FlowStep::DecodeAwaitingImage,
                ..state.clone()
            },
        )
        .with_action(Action::RequestFile),
        Intent::Security => TransitionResult::new(responses::SECURITY, state.clone()),
        Intent::Help => TransitionResult::new(responses::HELP, state.clone()),
        Intent::Unknown => TransitionResult::new(responses::UNKNOWN, state.clone()),
    }
}
