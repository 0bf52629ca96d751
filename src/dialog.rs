//! Dialog state machine
//!
//! Pure state transitions in the Elm Architecture style: the host owns the
//! [`ConversationState`] value, feeds each user turn through [`transition`],
//! and performs any returned [`Action`] itself before re-entering with the
//! result as a new turn.

mod action;
pub mod event;
pub(crate) mod responses;
mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use action::Action;
pub use event::UserTurn;
pub use state::{ConversationState, DialogContext, FlowStep};
pub use transition::{transition, TransitionResult};
