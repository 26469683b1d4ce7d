use super::*;
use crate::session::{ChatLog, Sender};

fn message_id() -> MessageId {
    ChatLog::welcome(0.0).append("x", Sender::Bot, 0.0)
}

#[test]
fn ticks_reveal_one_character_at_a_time() {
    let mut anim = TypingAnimation::new(message_id(), "abc");
    assert_eq!(anim.tick(), TypingTick::Reveal("a".to_owned()));
    assert_eq!(anim.tick(), TypingTick::Reveal("ab".to_owned()));
    assert_eq!(anim.tick(), TypingTick::Reveal("abc".to_owned()));
    assert_eq!(anim.tick(), TypingTick::Done);
}

#[test]
fn done_is_sticky() {
    let mut anim = TypingAnimation::new(message_id(), "a");
    let _ = anim.tick();
    assert_eq!(anim.tick(), TypingTick::Done);
    assert_eq!(anim.tick(), TypingTick::Done);
}

#[test]
fn empty_text_completes_immediately() {
    let mut anim = TypingAnimation::new(message_id(), "");
    assert_eq!(anim.tick(), TypingTick::Done);
}

#[test]
fn multibyte_text_splits_on_char_boundaries() {
    let mut anim = TypingAnimation::new(message_id(), "➤ ok");
    assert_eq!(anim.tick(), TypingTick::Reveal("➤".to_owned()));
    assert_eq!(anim.tick(), TypingTick::Reveal("➤ ".to_owned()));
    assert_eq!(anim.tick(), TypingTick::Reveal("➤ o".to_owned()));
    assert_eq!(anim.tick(), TypingTick::Reveal("➤ ok".to_owned()));
    assert_eq!(anim.tick(), TypingTick::Done);
}

#[test]
fn animation_remembers_its_message() {
    let id = message_id();
    let anim = TypingAnimation::new(id, "text");
    assert_eq!(anim.message(), id);
}
