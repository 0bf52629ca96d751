//! StegaBot dialog core
//!
//! A deterministic, rule-based dialog controller for a steganography chat
//! bot. The heart is a pure state machine: free-form user text (and the
//! occasional file attachment) goes in; a bot reply, the next conversation
//! state, and an optional action tag come out. The host displays the reply,
//! performs the action against an external collaborator (file picker, encode
//! service, decode service), and re-enters the controller with the result.
//!
//! The visual chat surface, HTTP transport, auth, and the actual
//! steganography/crypto all live outside this crate, behind the narrow
//! traits in [`session`].

pub mod dialog;
pub mod intent;
pub mod session;
pub mod validate;

pub use dialog::{
    transition, Action, ConversationState, DialogContext, FlowStep, TransitionResult, UserTurn,
};
pub use intent::{classify, is_affirmative, is_negative, Intent};
pub use session::{BotReply, ChatSession, CodecError, EncodedArtifact, StegoDecoder, StegoEncoder};
pub use validate::{
    validate_file, validate_password, AttachedFile, FileRejection, PasswordStrength,
};
