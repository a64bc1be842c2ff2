//! Property-based tests for prompt composition and echo-stripping
//!
//! These verify the invariants the session relies on:
//! - Composed prompts always carry the student message verbatim
//! - Unknown persona keys always behave exactly like the general tutor
//! - Echo-stripping removes a verbatim prompt prefix and nothing else

use crate::persona::{compose, Persona};
use crate::session::strip_echo;
use proptest::prelude::*;

/// Student messages: mixed ASCII and Arabic
fn arb_message() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ?!.،؟\u{0621}-\u{064a}]{1,80}"
}

/// Any selector key, known or not
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("math".to_string()),
        Just("science".to_string()),
        Just("language".to_string()),
        Just("english".to_string()),
        Just("history".to_string()),
        Just("general".to_string()),
        "[a-z]{0,12}",
    ]
}

proptest! {
    #[test]
    fn compose_carries_message_verbatim(key in arb_key(), message in arb_message()) {
        let persona = Persona::from_key(&key);
        let prompt = compose(persona, &message);
        prop_assert!(prompt.contains(&message));
        prop_assert!(prompt.contains(persona.instruction()));
    }

    #[test]
    fn unknown_keys_equal_general(message in arb_message(), key in "[A-Z]{1,12}") {
        // Keys are matched case-sensitively, so uppercase keys are
        // always unknown.
        let prompt = compose(Persona::from_key(&key), &message);
        prop_assert_eq!(prompt, compose(Persona::General, &message));
    }

    #[test]
    fn compose_is_deterministic(key in arb_key(), message in arb_message()) {
        let persona = Persona::from_key(&key);
        prop_assert_eq!(compose(persona, &message), compose(persona, &message));
    }

    #[test]
    fn echoed_prompt_is_stripped(message in arb_message(), reply in "[a-zA-Z0-9 \n]{0,120}") {
        let prompt = compose(Persona::Math, &message);
        let raw = format!("{prompt}{reply}");
        prop_assert_eq!(strip_echo(&raw, &prompt), reply.trim());
    }

    #[test]
    fn unechoed_output_is_only_trimmed(prompt_message in arb_message(), reply in "[a-zA-Z0-9 \n]{0,120}") {
        let prompt = compose(Persona::Science, &prompt_message);
        prop_assume!(!reply.trim().starts_with(&prompt));
        prop_assert_eq!(strip_echo(&reply, &prompt), reply.trim());
    }
}
