//! Intent classification for idle-state user input
//!
//! Pure, ordered pattern matching. The classifier is only consulted while no
//! flow is active; once a flow has started, the transition function interprets
//! input by step instead.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Coarse category assigned to free-form text while no flow is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Encode,
    Decode,
    Help,
    Security,
    Unknown,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("invalid intent pattern {p:?}: {e}")))
        .collect()
}

static GREETING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)^(hi|hello|hey|yo|sup|greetings|howdy)\b",
        r"(?i)\bgood\s+(morning|afternoon|evening|day)\b",
    ])
});

static ENCODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b(encode|hide|embed|conceal|secure|encrypt|put|store|save)\b.*\b(message|secret|text|data)\b",
        r"(?i)\b(hide|encode|embed|encrypt)\b",
        r"(?i)\bsecret\s+message\b",
        r"(?i)\bi\s+want\s+to\s+(hide|encode|secure|encrypt)\b",
    ])
});

static DECODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b(decode|extract|reveal|decrypt|read|get|retrieve|find|uncover)\b.*\b(message|secret|text|hidden)\b",
        r"(?i)\b(decode|extract|reveal|decrypt)\b",
        r"(?i)\bhidden\s+message\b",
        r"(?i)\bi\s+want\s+to\s+(decode|extract|reveal|decrypt)\b",
        r"(?i)\bwhat('s| is)\s+(hidden|inside|in)\b",
    ])
});

static SECURITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b(secure|security|safe|aes|encryption|steganography|png|lsb)\b",
        r"(?i)\bhow\s+secure\b",
        r"(?i)\bwhy\s+png\b",
        r"(?i)\bis\s+(it|this)\s+safe\b",
    ])
});

static HELP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b(help|how|what|explain|tutorial|guide|instructions?)\b",
        r"(?i)\bhow\s+(does|do|can|to)\b",
        r"(?i)\bwhat\s+(is|are)\b",
    ])
});

static AFFIRMATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(yes|yeah|yep|sure|ok|okay|y|yup|affirmative|absolutely|definitely|go ahead|proceed|do it)\b",
    )
    .expect("invalid affirmative pattern")
});

static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(no|nope|nah|cancel|stop|never|quit|exit|back)\b")
        .expect("invalid negative pattern")
});

fn any_match(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

/// Classify free-form text into exactly one [`Intent`].
///
/// Group order is the precedence order: the first satisfied group wins even
/// when a later group's pattern would also match, so "hello, I want to encode
/// a secret" is a greeting, not an encode request.
pub fn classify(text: &str) -> Intent {
    let normalized = text.trim().to_lowercase();

    if any_match(&GREETING_PATTERNS, &normalized) {
        return Intent::Greeting;
    }
    if any_match(&ENCODE_PATTERNS, &normalized) {
        return Intent::Encode;
    }
    if any_match(&DECODE_PATTERNS, &normalized) {
        return Intent::Decode;
    }
    if any_match(&SECURITY_PATTERNS, &normalized) {
        return Intent::Security;
    }
    if any_match(&HELP_PATTERNS, &normalized) {
        return Intent::Help;
    }

    Intent::Unknown
}

/// Agreement vocabulary, anchored at string start.
///
/// Defined for symmetry with [`is_negative`] but not wired into any
/// transition; kept as a reusable primitive for a future confirm-before-send
/// step.
pub fn is_affirmative(text: &str) -> bool {
    AFFIRMATIVE.is_match(text.trim())
}

/// Refusal vocabulary, anchored at string start.
///
/// A match cancels an in-progress flow regardless of the current step.
pub fn is_negative(text: &str) -> bool {
    NEGATIVE.is_match(text.trim())
}
