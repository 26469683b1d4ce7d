use super::*;
use crate::script::{CONSOLE_SCRIPT, Emission, LOADING_ASSETS, LogKind, LogLine, expand};

fn emission(text: &str, progress: Option<(&'static str, u8)>) -> Emission {
    Emission {
        delay_ms: 0,
        line: LogLine { text: text.to_owned(), kind: LogKind::Info },
        progress,
    }
}

#[test]
fn with_assets_registers_zeroed_bars() {
    let state = PlayerState::with_assets(LOADING_ASSETS);
    let bars: Vec<_> = state.progress().collect();
    assert_eq!(bars.len(), 3);
    assert!(bars.iter().all(|&(_, pct)| pct == 0));
    assert!(!state.is_complete());
}

#[test]
fn record_appends_lines_in_order() {
    let mut state = PlayerState::default();
    state.record("[00:00:00.000]".to_owned(), emission("one", None));
    state.record("[00:00:00.100]".to_owned(), emission("two", None));
    let texts: Vec<_> = state.lines().iter().map(|l| l.line.text.as_str()).collect();
    assert_eq!(texts, ["one", "two"]);
    assert_eq!(state.lines()[0].timestamp, "[00:00:00.000]");
}

#[test]
fn progress_updates_fold_in_monotonically() {
    let mut state = PlayerState::with_assets(&["robot_base.json"]);
    state.record(String::new(), emission("a", Some(("robot_base.json", 40))));
    assert_eq!(state.percent("robot_base.json"), Some(40));
    // A stale lower value must not regress the bar.
    state.record(String::new(), emission("b", Some(("robot_base.json", 30))));
    assert_eq!(state.percent("robot_base.json"), Some(40));
    state.record(String::new(), emission("c", Some(("robot_base.json", 100))));
    assert_eq!(state.percent("robot_base.json"), Some(100));
}

#[test]
fn clear_resets_everything() {
    let mut state = PlayerState::with_assets(&["robot_base.json"]);
    state.record(String::new(), emission("a", Some(("robot_base.json", 80))));
    state.finish();
    state.clear();
    assert!(state.lines().is_empty());
    assert_eq!(state.percent("robot_base.json"), Some(0));
    assert!(!state.is_complete());
}

#[test]
fn replaying_a_full_script_reaches_completion() {
    let mut state = PlayerState::default();
    for e in expand(CONSOLE_SCRIPT) {
        state.record(String::new(), e);
    }
    state.finish();
    assert_eq!(state.lines().len(), 16);
    assert!(state.is_complete());
}

#[test]
fn cancelled_run_stays_incomplete() {
    // The driver stops recording mid-script on cancellation and never
    // calls finish; the state simply retains what was emitted.
    let mut state = PlayerState::default();
    for e in expand(CONSOLE_SCRIPT).into_iter().take(3) {
        state.record(String::new(), e);
    }
    assert_eq!(state.lines().len(), 3);
    assert!(!state.is_complete());
}
