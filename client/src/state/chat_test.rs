use super::*;

#[test]
fn chat_state_default_is_welcome_session() {
    let state = ChatState::default();
    assert_eq!(state.log.messages().len(), 1);
    assert_eq!(state.log.history().len(), 2);
    assert!(!state.loading);
}

#[test]
fn chat_state_new_stamps_welcome_message() {
    let state = ChatState::new(1234.0);
    assert_eq!(state.log.messages()[0].timestamp, 1234.0);
}
