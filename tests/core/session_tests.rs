//! Chat session: pending replies, ordering and resets

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::time::Duration;
use ugpt_core::responder::{GREETING_REPLY, NAME_REPLY};
use ugpt_core::{AppConfig, ChatSession, DelayRange, INITIAL_GREETING, Role, SendError};

fn session(seed: u64) -> ChatSession {
    ChatSession::with_rng(DelayRange::default(), StdRng::seed_from_u64(seed))
}

#[test]
fn new_session_starts_with_greeting() {
    let session = session(1);
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role(), Role::Assistant);
    assert_eq!(session.messages()[0].content(), INITIAL_GREETING);
    assert!(!session.is_responding());
}

#[test]
fn submit_records_user_message_and_marks_responding() {
    let mut session = session(1);
    let reply = session.submit("what is your name").expect("submit");

    assert_eq!(session.messages().len(), 2);
    let last = session.conversation().last().expect("message");
    assert_eq!(last.role(), Role::User);
    assert_eq!(last.content(), "what is your name");
    assert!(session.is_responding());
    assert_eq!(reply.content, NAME_REPLY);
    assert_eq!(reply.conversation_id, session.conversation_id());
}

#[test]
fn reply_delay_is_within_default_range() {
    for seed in 0..100 {
        let mut session = session(seed);
        let reply = session.submit("hello").expect("submit");
        assert!(reply.delay >= Duration::from_millis(1000), "{:?}", reply.delay);
        assert!(reply.delay < Duration::from_millis(3000), "{:?}", reply.delay);
    }
}

#[test]
fn empty_input_is_rejected() {
    let mut session = session(1);
    assert_eq!(session.submit("   \n\t"), Err(SendError::EmptyInput));
    assert_eq!(session.messages().len(), 1);
    assert!(!session.can_send("  "));
}

#[test]
fn send_disabled_while_reply_pending() {
    let mut session = session(1);
    let reply = session.submit("hi").expect("submit");

    assert!(!session.can_send("another"));
    assert_eq!(session.submit("another"), Err(SendError::ReplyPending));
    assert_eq!(session.messages().len(), 2);

    let appended = session.deliver(reply).expect("delivered");
    assert_eq!(appended.role(), Role::Assistant);
    assert_eq!(appended.content(), GREETING_REPLY);
    assert!(!session.is_responding());
    assert!(session.can_send("another"));
}

#[test]
fn replies_follow_their_messages_in_order() {
    let mut session = session(5);
    for text in ["hello", "help", "tell me a joke"] {
        let reply = session.submit(text).expect("submit");
        session.deliver(reply).expect("delivered");
    }

    let roles: Vec<Role> = session.messages().iter().map(|m| m.role()).collect();
    assert_eq!(
        roles,
        [
            Role::Assistant,
            Role::User,
            Role::Assistant,
            Role::User,
            Role::Assistant,
            Role::User,
            Role::Assistant,
        ]
    );
}

#[test]
fn reply_from_reset_conversation_is_dropped() {
    let mut session = session(1);
    let stale = session.submit("hello").expect("submit");

    session.new_conversation();
    assert!(!session.is_responding());
    assert_ne!(stale.conversation_id, session.conversation_id());

    assert!(session.deliver(stale).is_none());
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].content(), INITIAL_GREETING);
}

#[test]
fn stale_reply_does_not_clear_new_pending_state() {
    let mut session = session(1);
    let stale = session.submit("hello").expect("submit");
    session.new_conversation();
    let fresh = session.submit("what is your name").expect("submit");

    assert!(session.deliver(stale).is_none());
    assert!(session.is_responding());

    let appended = session.deliver(fresh).expect("delivered");
    assert_eq!(appended.content(), NAME_REPLY);
}

#[test]
fn deliver_without_pending_reply_is_ignored() {
    let mut session = session(1);
    let reply = session.submit("hello").expect("submit");
    let duplicate = reply.clone();

    assert!(session.deliver(reply).is_some());
    assert!(session.deliver(duplicate).is_none());
    assert_eq!(session.messages().len(), 3);
}

#[test]
fn message_ids_are_never_reused() {
    let mut session = session(2);
    let mut ids = HashSet::new();
    for round in 0..3 {
        for text in ["hi", "joke", "something random"] {
            let reply = session.submit(text).expect("submit");
            session.deliver(reply).expect("delivered");
        }
        ids.extend(session.messages().iter().map(|m| m.id()));
        if round < 2 {
            session.new_conversation();
        }
    }
    // 7 messages per conversation, 3 conversations
    assert_eq!(ids.len(), 21);
}

#[test]
fn new_conversation_gets_new_id() {
    let mut session = session(1);
    let first = session.conversation_id();
    session.new_conversation();
    assert_ne!(first, session.conversation_id());
}

#[test]
fn seeded_sessions_are_reproducible() {
    let config = AppConfig::default().with_seed(Some(1234));
    let mut a = ChatSession::from_config(&config);
    let mut b = ChatSession::from_config(&config);

    let ra = a.submit("anything at all").expect("submit");
    let rb = b.submit("anything at all").expect("submit");
    assert_eq!(ra.content, rb.content);
    assert_eq!(ra.delay, rb.delay);
}

#[test]
fn degenerate_delay_range_is_exact() {
    let range = DelayRange::new(250, 250).expect("range");
    let mut session = ChatSession::with_rng(range, StdRng::seed_from_u64(1));
    let reply = session.submit("hello").expect("submit");
    assert_eq!(reply.delay, Duration::from_millis(250));
}
