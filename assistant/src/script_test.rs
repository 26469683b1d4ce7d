use super::*;

// =============================================================
// Progress easing
// =============================================================

#[test]
fn ten_step_load_hits_seventy_at_step_seven() {
    assert_eq!(progress_percent(7, 10), 70);
}

#[test]
fn ten_step_load_completes_at_step_ten() {
    assert_eq!(progress_percent(10, 10), 100);
}

#[test]
fn percentages_are_non_decreasing() {
    let mut last = 0;
    for step in 1..=10 {
        let pct = progress_percent(step, 10);
        assert!(pct >= last, "step {step}: {pct} < {last}");
        last = pct;
    }
}

#[test]
fn percent_never_exceeds_one_hundred() {
    for steps in [3, 7, 10, 16] {
        for step in 1..=steps {
            assert!(progress_percent(step, steps) <= 100);
        }
    }
}

#[test]
fn decelerating_branch_applies_strictly_past_the_threshold() {
    // With 16 steps the threshold 11.2 is non-integer: step 11 is still
    // linear, step 12 uses the decelerating formula.
    assert_eq!(progress_percent(11, 16), 69); // 68.75 rounded
    assert_eq!(progress_percent(12, 16), 75); // 70 + 0.8 * (30 / 4.8)
}

// =============================================================
// Script expansion
// =============================================================

#[test]
fn console_script_expands_to_sixteen_lines() {
    let emissions = expand(CONSOLE_SCRIPT);
    assert_eq!(emissions.len(), 16);
    assert!(emissions.iter().all(|e| e.progress.is_none()));
    assert_eq!(emissions[0].delay_ms, 0);
    assert_eq!(emissions[0].line.text, "Initializing Three.js renderer...");
    assert_eq!(emissions[15].line.text, "Ready for interaction");
    assert_eq!(emissions[15].line.kind, LogKind::Success);
}

#[test]
fn load_step_expands_to_ten_sub_emissions() {
    let script = [ScriptStep::Load { asset: "robot_base.json", size_kb: 324, duration_ms: 900 }];
    let emissions = expand(&script);
    assert_eq!(emissions.len(), 10);
    for e in &emissions {
        assert_eq!(e.delay_ms, 90);
        assert_eq!(e.line.kind, LogKind::Loading);
    }
    assert_eq!(emissions[6].progress, Some(("robot_base.json", 70)));
    assert_eq!(emissions[9].progress, Some(("robot_base.json", 100)));
    assert_eq!(emissions[9].line.text, "➤ robot_base.json: 324kb/324kb loaded (100%)");
}

#[test]
fn loaded_size_tracks_percentage() {
    let script = [ScriptStep::Load { asset: "robot_base.json", size_kb: 324, duration_ms: 900 }];
    let emissions = expand(&script);
    // 70% of 324kb, rounded.
    assert_eq!(emissions[6].line.text, "➤ robot_base.json: 227kb/324kb loaded (70%)");
}

#[test]
fn model_loading_script_covers_all_three_assets() {
    let emissions = expand(MODEL_LOADING_SCRIPT);
    for &asset in LOADING_ASSETS {
        let count = emissions.iter().filter(|e| matches!(e.progress, Some((a, _)) if a == asset)).count();
        assert_eq!(count, 10, "{asset} should emit ten progress updates");
    }
    let last = emissions.last().unwrap();
    assert_eq!(last.line.text, "✓ Scene ready for interaction");
}

#[test]
fn model_loading_progress_is_monotonic_per_asset() {
    let emissions = expand(MODEL_LOADING_SCRIPT);
    for &asset in LOADING_ASSETS {
        let mut last = 0;
        for e in &emissions {
            if let Some((a, pct)) = e.progress {
                if a == asset {
                    assert!(pct >= last);
                    last = pct;
                }
            }
        }
        assert_eq!(last, 100);
    }
}

// =============================================================
// Timestamps
// =============================================================

#[test]
fn timestamps_are_zero_padded() {
    assert_eq!(format_timestamp(9, 5, 3, 42), "[09:05:03.042]");
    assert_eq!(format_timestamp(23, 59, 59, 999), "[23:59:59.999]");
}
