//! Side-effect instructions returned to the host

use serde::{Deserialize, Serialize};

/// Exactly one external effect the host should perform after displaying the
/// reply.
///
/// The controller only names the effect; the host performs it and re-enters
/// the controller with the outcome as a new turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Show an upload affordance; carries no payload
    RequestFile,
    /// Run the encode collaborator with the collected (image, message, password)
    Encode,
    /// Run the decode collaborator with the collected (image, password)
    Decode,
}
