//! Secondary keyword context classifier.
//!
//! Runs only when no intent rule matched. Categories are checked in
//! declaration order and the first detection wins; reply selection
//! within the winning category is the caller's (randomized) choice.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::visibility::UiAction;

/// Topic buckets the classifier can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Modeling,
    Texturing,
    Animation,
    ProjectManagement,
}

/// A detection pattern plus the canned replies and UI action for one topic.
pub struct Category {
    pub topic: Topic,
    pattern: Regex,
    pub replies: &'static [&'static str],
    pub ui: Option<UiAction>,
}

/// Return the first category whose pattern matches the input.
#[must_use]
pub fn classify(input: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|cat| cat.pattern.is_match(input))
}

/// Whether the input asks to see the model, overriding any category.
#[must_use]
pub fn wants_view(input: &str) -> bool {
    VIEW_PATTERN.is_match(input)
}

/// Reply used when the 3D-view override fires.
pub const VIEW_REPLY: &str = "Here's the 3D model of your robot. You can rotate, zoom, and \
     examine the details. The model has clean topology suitable for animation, with optimized \
     edge flow around joint areas.";

static VIEW_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)show|view|see|look at|display|3d|model").expect("static pattern"));

static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
    CATEGORY_TABLE
        .iter()
        .map(|&(topic, pattern, replies, ui)| Category {
            topic,
            pattern: Regex::new(&format!("(?i){pattern}")).expect("static category pattern"),
            replies,
            ui,
        })
        .collect()
});

type CategorySpec = (Topic, &'static str, &'static [&'static str], Option<UiAction>);

const CATEGORY_TABLE: &[CategorySpec] = &[
    (
        Topic::Modeling,
        "model|topology|mesh|sculpt|polygon|vertex|edge|boolean|subdivision|hard surface",
        &[
            "The topology of your mesh is crucial for animation. I recommend using edge loops \
             around joints and ensuring even quad distribution.",
            "For organic models, start with a base mesh and use sculpting for details. For \
             mechanical models like your robot, precision modeling with boolean operations \
             works best.",
            "Your model's level of detail should match its intended use. For close-up shots, \
             higher polygon counts are acceptable, but for real-time applications, aim for \
             efficiency.",
        ],
        Some(UiAction::View3d),
    ),
    (
        Topic::Texturing,
        "texture|material|uv|unwrap|pbr|normal map|roughness|metalness|specular|albedo|diffuse",
        &[
            "PBR (Physically Based Rendering) texturing would work best for your robot. You'll \
             need at minimum: base color, metalness, roughness, and normal maps.",
            "For efficient UV unwrapping, prioritize texture space for visible areas and \
             minimize stretching on curved surfaces. Your robot's mechanical parts can share \
             texture space effectively.",
            "Consider using tileable textures for repeated elements like panels or mechanical \
             parts to save texture memory while maintaining high quality.",
        ],
        Some(UiAction::FileManagement),
    ),
    (
        Topic::Animation,
        "animate|animation|rig|bone|skeleton|keyframe|motion|pose|blend shape|morph target",
        &[
            "A well-designed rig with IK/FK switching would give you the control needed for \
             both precise and natural robot movements.",
            "For a mechanical character like your robot, procedural animations can be combined \
             with keyframed sequences for the most realistic movement.",
            "Consider using motion capture as a reference, even for mechanical movements. It \
             can add subtle imperfections that make the animation feel more realistic.",
        ],
        Some(UiAction::View3d),
    ),
    (
        Topic::ProjectManagement,
        "project|timeline|milestone|team|collaboration|deadline|budget|scope|client|deliverable",
        &[
            "Breaking your project into specific milestones with clear deliverables will help \
             track progress. For your robot, I recommend: concept, blockout, high-poly, \
             retopology, UVs, texturing, rigging, and animation.",
            "For team collaboration, consider using asset management systems like Perforce or \
             Git LFS to handle your large 3D files efficiently.",
            "Time estimation for 3D projects should account for iterations and revisions. A \
             good rule is to allocate 30% of your timeline for refinements and unexpected \
             challenges.",
        ],
        Some(UiAction::ProjectSetup),
    ),
];
