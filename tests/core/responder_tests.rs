//! Response selector behaviour

use rand::SeedableRng;
use rand::rngs::StdRng;
use ugpt_core::responder::{
    FALLBACK_REPLIES, GREETING_REPLY, HELP_REPLY, JOKES, NAME_REPLY, ResponseSelector,
    WEATHER_REPLY,
};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn hi_there_gets_greeting() {
    let selector = ResponseSelector::new();
    assert_eq!(
        selector.select("hi there", &mut rng(1)),
        "Hello! How can I assist you today?"
    );
}

#[test]
fn name_question_gets_identity() {
    let selector = ResponseSelector::new();
    assert_eq!(
        selector.select("what is your name", &mut rng(1)),
        "I'm ugpt, your friendly AI assistant."
    );
}

#[test]
fn greeting_is_case_insensitive_and_wins_priority() {
    let selector = ResponseSelector::new();
    let inputs = [
        "HELLO",
        "Hi",
        "hi, tell me a joke",
        "Hello, what's the weather?",
        "hi, I need help",
        "HeLLo what is your name",
    ];
    for (seed, input) in inputs.iter().enumerate() {
        assert_eq!(
            selector.select(input, &mut rng(seed as u64)),
            GREETING_REPLY,
            "input: {input}"
        );
    }
}

#[test]
fn priority_order_below_greeting() {
    let selector = ResponseSelector::new();
    let mut rng = rng(3);
    assert_eq!(selector.select("please HELP with my name", &mut rng), HELP_REPLY);
    assert_eq!(selector.select("your name and the weather", &mut rng), NAME_REPLY);
    assert_eq!(selector.select("weather joke", &mut rng), WEATHER_REPLY);
}

#[test]
fn joke_always_from_joke_set() {
    let selector = ResponseSelector::new();
    for seed in 0..200 {
        let reply = selector.select("tell me a JOKE", &mut rng(seed));
        assert!(JOKES.contains(&reply), "unexpected joke reply: {reply}");
    }
}

#[test]
fn joke_selection_covers_every_candidate() {
    let selector = ResponseSelector::new();
    let mut rng = rng(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(selector.select("joke", &mut rng));
    }
    assert_eq!(seen.len(), JOKES.len());
}

#[test]
fn unmatched_input_uses_fallback_set() {
    let selector = ResponseSelector::new();
    let mut rng = rng(9);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        let reply = selector.select("tell me about rust", &mut rng);
        assert!(FALLBACK_REPLIES.contains(&reply), "unexpected fallback: {reply}");
        seen.insert(reply);
    }
    assert_eq!(seen.len(), FALLBACK_REPLIES.len());
}

#[test]
fn single_candidate_rules_are_stable() {
    let selector = ResponseSelector::new();
    for input in ["hello", "help me", "name?", "weather today"] {
        let first = selector.select(input, &mut rng(1));
        let second = selector.select(input, &mut rng(2));
        assert_eq!(first, second, "input: {input}");
    }
}

#[test]
fn same_seed_gives_same_random_reply() {
    let selector = ResponseSelector::new();
    let a = selector.select("no keywords at all", &mut rng(77));
    let b = selector.select("no keywords at all", &mut rng(77));
    assert_eq!(a, b);
}

#[test]
fn matching_rule_reports_rule_name() {
    let selector = ResponseSelector::new();
    assert_eq!(selector.matching_rule("WEATHER").map(|r| r.name), Some("weather"));
    assert!(selector.matching_rule("rust").is_none());
}
