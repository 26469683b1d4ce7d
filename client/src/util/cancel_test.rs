use super::*;

#[test]
fn fresh_run_is_live() {
    let owner = Owner::new();
    owner.set();
    let token = CancelToken::new();
    let run = token.issue();
    assert!(!run.is_cancelled());
}

#[test]
fn cancel_invalidates_outstanding_runs() {
    let owner = Owner::new();
    owner.set();
    let token = CancelToken::new();
    let run = token.issue();
    token.cancel();
    assert!(run.is_cancelled());
}

#[test]
fn issuing_a_new_run_cancels_the_old_one() {
    let owner = Owner::new();
    owner.set();
    let token = CancelToken::new();
    let first = token.issue();
    let second = token.issue();
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
}

#[test]
fn run_issued_before_a_reset_stays_cancelled() {
    // A send task captures its run before awaiting; clearing the
    // conversation mid-flight must leave that run invalid even after
    // later turns issue fresh runs.
    let owner = Owner::new();
    owner.set();
    let token = CancelToken::new();
    let in_flight = token.issue();
    token.cancel();
    let next_turn = token.issue();
    assert!(in_flight.is_cancelled());
    assert!(!next_turn.is_cancelled());
}

#[test]
fn tokens_are_independent() {
    let owner = Owner::new();
    owner.set();
    let a = CancelToken::new();
    let b = CancelToken::new();
    let run_a = a.issue();
    b.cancel();
    assert!(!run_a.is_cancelled());
}
