use super::*;

// =============================================================
// Rule table shape
// =============================================================

#[test]
fn table_has_twenty_rules() {
    assert_eq!(RULES.len(), 20);
}

#[test]
fn first_rule_has_no_ui_action() {
    assert_eq!(RULES[0].ui, None);
}

#[test]
fn last_rule_is_troubleshooting() {
    let rule = RULES.last().unwrap();
    assert!(rule.matches("I'm stuck on this"));
    assert_eq!(rule.ui, None);
}

// =============================================================
// First-match-wins ordering
// =============================================================

#[test]
fn robot_for_a_game_hits_first_rule_not_game_engine_rule() {
    // "game" also triggers the Unity/Unreal rule, but the first rule is
    // checked first and wins.
    let rule = match_rules("I want to build a robot for a game").unwrap();
    assert!(rule.reply.contains("Sci-Fi Robot"));
    assert_eq!(rule.ui, None);
}

#[test]
fn unity_without_earlier_triggers_hits_engine_rule() {
    let rule = match_rules("we are using unity").unwrap();
    assert!(rule.reply.contains("Unity or Unreal"));
    assert_eq!(rule.ui, Some(UiAction::ProjectSetup));
}

#[test]
fn texture_hits_milestone_rule_before_pbr_rule() {
    // "texture" appears in rule 5 (milestones) and rule 13 (PBR); the
    // earlier rule wins.
    let rule = match_rules("what about the texture").unwrap();
    assert_eq!(rule.ui, Some(UiAction::ProjectSetup));
    assert!(rule.reply.contains("Gantt chart"));
}

#[test]
fn deadline_hits_timeline_rule_before_critical_path_rule() {
    let rule = match_rules("the deadline is tight").unwrap();
    assert!(rule.reply.contains("2-month development cycle"));
}

// =============================================================
// Trigger matching semantics
// =============================================================

#[test]
fn matching_is_case_insensitive() {
    let lower = match_rules("show me the VERSION history").unwrap();
    let upper = match_rules("show me the version history").unwrap();
    assert_eq!(lower.reply, upper.reply);
}

#[test]
fn trigger_matches_anywhere_in_input() {
    let rule = match_rules("could you maybe help me invite someone").unwrap();
    assert_eq!(rule.ui, Some(UiAction::TeamSetup));
}

#[test]
fn no_trigger_means_no_match() {
    assert!(match_rules("zzz qqq").is_none());
}

#[test]
fn team_setup_rule_maps_to_team_panel() {
    let rule = match_rules("add a teammate please").unwrap();
    assert_eq!(rule.ui, Some(UiAction::TeamSetup));
    assert!(rule.reply.contains("John"));
}

#[test]
fn import_rule_maps_to_import_export() {
    let rule = match_rules("export to fbx").unwrap();
    assert_eq!(rule.ui, Some(UiAction::ImportExport));
}
