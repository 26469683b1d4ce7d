use super::*;

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_shows_only_project_setup() {
    let state = VisibilityState::default();
    assert!(state.project_setup);
    assert!(!state.team_setup);
    assert!(!state.tools_comparison);
    assert!(!state.file_management);
    assert!(!state.version_control);
    assert!(!state.progress_graphs);
    assert!(!state.import_export);
    assert_eq!(state.active_tab, Tab::Project);
}

// =============================================================
// Mapping table
// =============================================================

#[test]
fn team_setup_reveals_team_and_base_panel() {
    let mut state = VisibilityState::default();
    state.team_setup = false;
    state.project_setup = false;
    state.apply(Some(UiAction::TeamSetup));
    assert!(state.project_setup);
    assert!(state.team_setup);
    assert_eq!(state.active_tab, Tab::Team);
}

#[test]
fn every_panel_action_forces_project_setup_on() {
    for action in [
        UiAction::ProjectSetup,
        UiAction::TeamSetup,
        UiAction::ToolsComparison,
        UiAction::FileManagement,
        UiAction::VersionControl,
        UiAction::ProgressGraphs,
        UiAction::ImportExport,
    ] {
        let mut state = VisibilityState::default();
        state.project_setup = false;
        state.apply(Some(action));
        assert!(state.project_setup, "{action:?} must re-enable the base panel");
    }
}

#[test]
fn view_3d_changes_tab_only() {
    let mut state = VisibilityState::default();
    let before = state.clone();
    state.apply(Some(UiAction::View3d));
    assert_eq!(state.active_tab, Tab::View3d);
    assert_eq!(
        VisibilityState { active_tab: before.active_tab, ..state.clone() },
        before
    );
}

#[test]
fn none_action_changes_nothing() {
    let mut state = VisibilityState::default();
    let before = state.clone();
    state.apply(None);
    assert_eq!(state, before);
}

#[test]
fn tab_mapping_is_exact() {
    let cases = [
        (UiAction::ProjectSetup, Tab::Project),
        (UiAction::TeamSetup, Tab::Team),
        (UiAction::ToolsComparison, Tab::Tools),
        (UiAction::FileManagement, Tab::Files),
        (UiAction::VersionControl, Tab::Versions),
        (UiAction::ProgressGraphs, Tab::Graphs),
        (UiAction::ImportExport, Tab::ImportExport),
        (UiAction::View3d, Tab::View3d),
    ];
    for (action, tab) in cases {
        let mut state = VisibilityState::default();
        state.apply(Some(action));
        assert_eq!(state.active_tab, tab);
    }
}

// =============================================================
// Monotonicity
// =============================================================

#[test]
fn no_sequence_of_actions_clears_a_flag() {
    let mut state = VisibilityState::default();
    let all = [
        UiAction::TeamSetup,
        UiAction::ToolsComparison,
        UiAction::FileManagement,
        UiAction::VersionControl,
        UiAction::ProgressGraphs,
        UiAction::ImportExport,
        UiAction::View3d,
        UiAction::ProjectSetup,
    ];
    for action in all {
        state.apply(Some(action));
    }
    // Everything is on; replaying any action must not turn one off.
    for action in all {
        state.apply(Some(action));
        assert!(state.team_setup && state.tools_comparison && state.file_management);
        assert!(state.version_control && state.progress_graphs && state.import_export);
        assert!(state.project_setup);
    }
}

#[test]
fn team_setup_is_independent_of_prior_flags() {
    let mut state = VisibilityState::default();
    state.apply(Some(UiAction::ImportExport));
    state.apply(Some(UiAction::TeamSetup));
    assert!(state.import_export, "previously-true flag must stay true");
    assert!(state.team_setup);
    assert_eq!(state.active_tab, Tab::Team);
}

// =============================================================
// Sidebar tab selection
// =============================================================

#[test]
fn open_tab_reveals_matching_panel() {
    let mut state = VisibilityState::default();
    state.open_tab(Tab::Versions);
    assert!(state.version_control);
    assert_eq!(state.active_tab, Tab::Versions);
    assert!(state.is_open(Tab::Versions));
}

#[test]
fn open_3d_tab_sets_no_flag() {
    let mut state = VisibilityState::default();
    let flags_before = (state.project_setup, state.team_setup);
    state.open_tab(Tab::View3d);
    assert_eq!((state.project_setup, state.team_setup), flags_before);
    assert_eq!(state.active_tab, Tab::View3d);
}
