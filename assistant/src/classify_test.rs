use super::*;

#[test]
fn modeling_keywords_detect_modeling() {
    let cat = classify("my mesh topology is messy").unwrap();
    assert_eq!(cat.topic, Topic::Modeling);
    assert_eq!(cat.ui, Some(UiAction::View3d));
    assert_eq!(cat.replies.len(), 3);
}

#[test]
fn texturing_keywords_detect_texturing() {
    let cat = classify("roughness and metalness maps").unwrap();
    assert_eq!(cat.topic, Topic::Texturing);
    assert_eq!(cat.ui, Some(UiAction::FileManagement));
}

#[test]
fn animation_keywords_detect_animation() {
    let cat = classify("keyframe the walk cycle").unwrap();
    assert_eq!(cat.topic, Topic::Animation);
    assert_eq!(cat.ui, Some(UiAction::View3d));
}

#[test]
fn project_keywords_detect_project_management() {
    let cat = classify("what is the deliverable scope").unwrap();
    assert_eq!(cat.topic, Topic::ProjectManagement);
    assert_eq!(cat.ui, Some(UiAction::ProjectSetup));
}

#[test]
fn first_category_wins_on_overlap() {
    // "mesh" (modeling) and "uv" (texturing) both present; modeling is
    // declared first.
    let cat = classify("mesh uv layout").unwrap();
    assert_eq!(cat.topic, Topic::Modeling);
}

#[test]
fn unrelated_text_detects_nothing() {
    assert!(classify("hello there").is_none());
}

#[test]
fn view_override_detection() {
    assert!(wants_view("show me what you have"));
    assert!(wants_view("let me look at it"));
    assert!(!wants_view("hello there"));
}

#[test]
fn detection_is_case_insensitive() {
    assert!(classify("SCULPT something").is_some());
    assert!(wants_view("DISPLAY it"));
}
