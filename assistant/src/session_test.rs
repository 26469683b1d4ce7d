use super::*;

// =============================================================
// Welcome state
// =============================================================

#[test]
fn welcome_session_has_one_message_and_two_turns() {
    let log = ChatLog::welcome(0.0);
    assert_eq!(log.messages().len(), 1);
    assert_eq!(log.history().len(), 2);
    assert_eq!(log.messages()[0].text, WELCOME_TEXT);
    assert_eq!(log.messages()[0].sender, Sender::Bot);
    assert_eq!(log.history()[0].role, Role::System);
    assert_eq!(log.history()[1].role, Role::Assistant);
    assert_eq!(log.history()[1].content, WELCOME_TEXT);
}

// =============================================================
// Append / ordering
// =============================================================

#[test]
fn append_preserves_insertion_order() {
    let mut log = ChatLog::welcome(0.0);
    log.append("first", Sender::User, 1.0);
    log.append("second", Sender::Bot, 2.0);
    let texts: Vec<_> = log.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, [WELCOME_TEXT, "first", "second"]);
}

#[test]
fn ids_are_unique_and_monotonic() {
    let mut log = ChatLog::welcome(0.0);
    let a = log.append("a", Sender::User, 0.0);
    let b = log.append("b", Sender::User, 0.0);
    assert_ne!(a, b);
    let pos_a = log.messages().iter().position(|m| m.id == a).unwrap();
    let pos_b = log.messages().iter().position(|m| m.id == b).unwrap();
    assert!(pos_a < pos_b);
}

#[test]
fn append_pending_sets_pending_flag() {
    let mut log = ChatLog::welcome(0.0);
    let id = log.append_pending("...", Sender::Bot, 0.0);
    assert!(log.get(id).unwrap().pending);
    assert!(!log.get(id).unwrap().error);
}

// =============================================================
// Patching
// =============================================================

#[test]
fn apply_merges_only_present_fields() {
    let mut log = ChatLog::welcome(0.0);
    let id = log.append_pending("...", Sender::Bot, 0.0);
    log.apply(
        id,
        MessagePatch {
            text: Some("done".to_owned()),
            pending: Some(false),
            tokens: Some(12),
            ..Default::default()
        },
    );
    let msg = log.get(id).unwrap();
    assert_eq!(msg.text, "done");
    assert!(!msg.pending);
    assert_eq!(msg.tokens, Some(12));
    assert_eq!(msg.processing_time_ms, None);
}

#[test]
fn apply_to_unknown_id_is_a_no_op() {
    let mut log = ChatLog::welcome(0.0);
    let id = log.append("a", Sender::User, 0.0);
    let mut other = ChatLog::welcome(0.0);
    other.append("x", Sender::User, 0.0);
    let foreign = other.append("y", Sender::User, 0.0);

    let before = log.messages().len();
    log.apply(foreign, MessagePatch { text: Some("hijack".to_owned()), ..Default::default() });
    assert_eq!(log.messages().len(), before);
    assert_eq!(log.get(id).unwrap().text, "a");
}

#[test]
fn error_patch_marks_message_without_removing_it() {
    let mut log = ChatLog::welcome(0.0);
    let id = log.append_pending("...", Sender::Bot, 0.0);
    log.apply(
        id,
        MessagePatch {
            text: Some(crate::consts::ERROR_REPLY.to_owned()),
            pending: Some(false),
            error: Some(true),
            ..Default::default()
        },
    );
    let msg = log.get(id).unwrap();
    assert!(msg.error);
    assert!(!msg.pending);
    assert_eq!(log.messages().len(), 2);
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_restores_canonical_welcome_shape() {
    let mut log = ChatLog::welcome(0.0);
    log.append("hello", Sender::User, 1.0);
    log.push_turn(Role::User, "hello");
    log.append("hi", Sender::Bot, 2.0);
    log.push_turn(Role::Assistant, "hi");

    log.reset_to_welcome(9.0);
    assert_eq!(log.messages().len(), 1);
    assert_eq!(log.history().len(), 2);
    assert_eq!(log.messages()[0].text, WELCOME_TEXT);
    assert_eq!(log.messages()[0].timestamp, 9.0);
}

#[test]
fn history_tracks_resolved_turns_only() {
    let mut log = ChatLog::welcome(0.0);
    log.append("show me", Sender::User, 1.0);
    log.push_turn(Role::User, "show me");
    // Pending bot message exists but no assistant turn yet.
    log.append_pending("...", Sender::Bot, 1.0);
    assert_eq!(log.history().len(), 3);
    log.push_turn(Role::Assistant, "here you go");
    assert_eq!(log.history().len(), 4);
}
