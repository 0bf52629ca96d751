//! Property-based tests for the dialog state machine
//!
//! These verify the key invariants hold across all possible inputs.

use super::state::{ConversationState, DialogContext, FlowStep};
use super::*;
use crate::validate::AttachedFile;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_step() -> impl Strategy<Value = FlowStep> {
    prop_oneof![
        Just(FlowStep::Idle),
        Just(FlowStep::EncodeAwaitingImage),
        Just(FlowStep::EncodeAwaitingMessage),
        Just(FlowStep::EncodeAwaitingPassword),
        Just(FlowStep::EncodeProcessing),
        Just(FlowStep::DecodeAwaitingImage),
        Just(FlowStep::DecodeAwaitingPassword),
        Just(FlowStep::DecodeProcessing),
    ]
}

fn arb_file() -> impl Strategy<Value = AttachedFile> {
    (
        "[a-z]{1,12}\\.(png|jpg|txt)",
        prop_oneof![
            Just("image/png".to_string()),
            Just("image/jpeg".to_string()),
            Just("text/plain".to_string()),
        ],
        0u64..8 * 1024 * 1024,
    )
        .prop_map(|(name, mime_type, size)| AttachedFile {
            name,
            mime_type,
            size,
        })
}

/// States whose collected fields are consistent with their step, the only
/// shape a well-behaved host can ever hold.
fn arb_state() -> impl Strategy<Value = ConversationState> {
    (
        arb_step(),
        proptest::option::of(arb_file()),
        proptest::option::of("[a-zA-Z0-9 ]{1,20}"),
        proptest::option::of("[a-zA-Z0-9]{4,16}"),
    )
        .prop_map(|(step, file, message, password)| {
            let mut state = ConversationState {
                step,
                ..ConversationState::new()
            };
            match step {
                FlowStep::Idle => {}
                FlowStep::EncodeAwaitingImage => {}
                FlowStep::EncodeAwaitingMessage => {
                    state.encode_image = file;
                }
                FlowStep::EncodeAwaitingPassword => {
                    state.encode_image = file;
                    state.encode_message = message;
                }
                FlowStep::EncodeProcessing => {
                    state.encode_image = file;
                    state.encode_message = message;
                    state.encode_password = password;
                }
                FlowStep::DecodeAwaitingImage => {}
                FlowStep::DecodeAwaitingPassword => {
                    state.decode_image = file;
                }
                FlowStep::DecodeProcessing => {
                    state.decode_image = file;
                    state.decode_password = password;
                }
            }
            state
        })
}

fn arb_turn() -> impl Strategy<Value = UserTurn> {
    prop_oneof![
        "[a-zA-Z0-9 '!?.]{0,40}".prop_map(UserTurn::text),
        arb_file().prop_map(UserTurn::file),
        Just(UserTurn::text("cancel")),
        Just(UserTurn::text("no")),
    ]
}

// ============================================================================
// Invariant Checkers
// ============================================================================

fn fields_consistent(state: &ConversationState) -> bool {
    let encode_fields = state.encode_image.is_some()
        || state.encode_message.is_some()
        || state.encode_password.is_some();
    let decode_fields = state.decode_image.is_some() || state.decode_password.is_some();

    match state.step {
        FlowStep::Idle => !encode_fields && !decode_fields,
        s if s.in_encode_flow() => !decode_fields,
        _ => !encode_fields,
    }
}

fn action_matches_step(result: &TransitionResult) -> bool {
    match result.action {
        Some(Action::RequestFile) => result.next_state.step.expects_file(),
        Some(Action::Encode) => result.next_state.step == FlowStep::EncodeProcessing,
        Some(Action::Decode) => result.next_state.step == FlowStep::DecodeProcessing,
        None => true,
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Negation wins over every step-specific rule and always resets fully.
    #[test]
    fn prop_negation_always_cancels(state in arb_state()) {
        let mut rng = StdRng::seed_from_u64(1);
        let result = transition(&state, &DialogContext::new(), &UserTurn::text("cancel"), &mut rng);
        prop_assert_eq!(result.next_state, ConversationState::new());
        prop_assert_eq!(result.action, None);
    }

    // Any transition sequence from idle keeps flow fields consistent with
    // the step, and actions are only emitted alongside their matching steps.
    #[test]
    fn prop_sequences_preserve_consistency(turns in proptest::collection::vec(arb_turn(), 0..24)) {
        let ctx = DialogContext::new();
        let mut rng = StdRng::seed_from_u64(2);
        let mut state = ConversationState::new();

        for turn in turns {
            let result = transition(&state, &ctx, &turn, &mut rng);
            prop_assert!(fields_consistent(&result.next_state),
                "inconsistent state {:?}", result.next_state);
            prop_assert!(action_matches_step(&result),
                "action {:?} does not match step {:?}", result.action, result.next_state.step);
            prop_assert!(!result.reply.is_empty());
            state = result.next_state;
        }
    }

    // Starting from any well-formed state, a single turn preserves
    // consistency too.
    #[test]
    fn prop_single_turn_preserves_consistency(state in arb_state(), turn in arb_turn()) {
        let mut rng = StdRng::seed_from_u64(3);
        let result = transition(&state, &DialogContext::new(), &turn, &mut rng);
        prop_assert!(fields_consistent(&result.next_state),
            "inconsistent state {:?}", result.next_state);
        prop_assert!(action_matches_step(&result));
    }

    // Determinism: identical inputs and seed give identical output, reply
    // text included.
    #[test]
    fn prop_transition_is_deterministic(state in arb_state(), turn in arb_turn()) {
        let ctx = DialogContext::new();
        let a = transition(&state, &ctx, &turn, &mut StdRng::seed_from_u64(9));
        let b = transition(&state, &ctx, &turn, &mut StdRng::seed_from_u64(9));
        prop_assert_eq!(a, b);
    }

    // The classifier is total: every input maps to exactly one intent.
    #[test]
    fn prop_classify_is_total(text in "\\PC{0,60}") {
        let _ = crate::intent::classify(&text);
    }
}
