//! Scripted log sequences for the console and model-loading demos.
//!
//! DESIGN
//! ======
//! A script is an ordered list of steps. A plain `Line` step emits one
//! log line after a delay; a `Load` step expands into a fixed number of
//! timed progress sub-emissions for one named asset. `expand` flattens
//! a script into the exact emission sequence a driver replays, so the
//! timing math stays pure and testable while the `client` crate owns
//! the actual sleeping.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use crate::consts::LOAD_STEPS;

/// Severity/coloring class of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Success,
    Warning,
    Error,
    Debug,
    Command,
    Loading,
}

/// One emitted console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    pub kind: LogKind,
}

/// One authored step of a script.
#[derive(Debug, Clone, Copy)]
pub enum ScriptStep {
    /// Emit a line `delay_ms` after the previous emission.
    Line {
        delay_ms: u32,
        text: &'static str,
        kind: LogKind,
    },
    /// Progressively load a named asset: `LOAD_STEPS` sub-emissions
    /// spread evenly across `duration_ms`.
    Load {
        asset: &'static str,
        size_kb: u32,
        duration_ms: u32,
    },
}

/// A flattened, ready-to-replay emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    /// Delay before this emission, relative to the previous one.
    pub delay_ms: u32,
    pub line: LogLine,
    /// Progress-bar update accompanying the line, if any.
    pub progress: Option<(&'static str, u8)>,
}

/// Flatten a script into its timed emission sequence.
#[must_use]
pub fn expand(script: &[ScriptStep]) -> Vec<Emission> {
    let mut out = Vec::new();
    for step in script {
        match *step {
            ScriptStep::Line { delay_ms, text, kind } => out.push(Emission {
                delay_ms,
                line: LogLine { text: text.to_owned(), kind },
                progress: None,
            }),
            ScriptStep::Load { asset, size_kb, duration_ms } => {
                let step_ms = duration_ms / LOAD_STEPS;
                for i in 1..=LOAD_STEPS {
                    let percent = progress_percent(i, LOAD_STEPS);
                    let loaded = (f64::from(percent) / 100.0 * f64::from(size_kb)).round();
                    out.push(Emission {
                        delay_ms: step_ms,
                        line: LogLine {
                            text: format!("➤ {asset}: {loaded}kb/{size_kb}kb loaded ({percent}%)"),
                            kind: LogKind::Loading,
                        },
                        progress: Some((asset, percent)),
                    });
                }
            }
        }
    }
    out
}

/// Percent complete after `step` of `steps` sub-steps.
///
/// Linear up to 70% of the steps, then decelerating over the remaining
/// 30%. The decelerating branch applies for indices strictly greater
/// than `steps * 0.7`; values are rounded half-up and clamped to 100.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_percent(step: u32, steps: u32) -> u8 {
    let step = f64::from(step);
    let steps = f64::from(steps);
    let threshold = steps * 0.7;
    let value = if step > threshold {
        70.0 + (step - threshold) * (30.0 / (steps * 0.3))
    } else {
        step * 100.0 / steps
    };
    value.round().min(100.0) as u8
}

/// Format a wall-clock emission timestamp as `[HH:MM:SS.mmm]`.
#[must_use]
pub fn format_timestamp(hours: u32, minutes: u32, seconds: u32, millis: u32) -> String {
    format!("[{hours:02}:{minutes:02}:{seconds:02}.{millis:03}]")
}

/// Assets tracked by the model-loading progress bars, in display order.
pub const LOADING_ASSETS: &[&str] = &["robot_base.json", "robot_arm.json", "robot_head.json"];

/// The 16-line console demo script.
///
/// Delays reproduce the original pacing: 300 ms before each "Loading"
/// line, 500 ms before the line following a "model loaded" line, 200 ms
/// otherwise.
pub const CONSOLE_SCRIPT: &[ScriptStep] = &[
    line(0, "Initializing Three.js renderer...", LogKind::Info),
    line(200, "WebGL 2.0 context created successfully", LogKind::Success),
    line(200, "Initializing scene with default lighting", LogKind::Info),
    line(200, "Loading model assets...", LogKind::Info),
    line(300, "Loading robot_base.json (324kb)", LogKind::Debug),
    line(300, "Base model loaded successfully (458 vertices, 312 faces)", LogKind::Success),
    line(500, "Loading robot_arm.json (652kb)", LogKind::Debug),
    line(300, "Arm model loaded successfully (1024 vertices, 876 faces)", LogKind::Success),
    line(500, "Loading robot_head.json (528kb)", LogKind::Debug),
    line(300, "Head model loaded successfully (862 vertices, 704 faces)", LogKind::Success),
    line(500, "Applying PBR materials...", LogKind::Info),
    line(200, "Configuring shadow maps (resolution: 2048)", LogKind::Debug),
    line(200, "Initializing physics constraints for robotic joints", LogKind::Info),
    line(200, "Setting up OrbitControls", LogKind::Debug),
    line(200, "Scene initialization complete", LogKind::Success),
    line(200, "Ready for interaction", LogKind::Success),
];

/// The model-loading console script: renderer init, three progressive
/// asset loads, then scene finalization.
pub const MODEL_LOADING_SCRIPT: &[ScriptStep] = &[
    line(0, "Initializing WebGL context...", LogKind::Info),
    line(500, "WebGL 2.0 context created", LogKind::Success),
    line(0, "Hardware acceleration: enabled", LogKind::Info),
    line(0, "Shader version: GLSL ES 3.00", LogKind::Info),
    line(300, "Memory allocation: 512MB", LogKind::Info),
    line(0, "Setting up scene graph", LogKind::Info),
    line(400, "Three.js v0.157.0 initialized", LogKind::Info),
    line(300, "Starting model assets download...", LogKind::Info),
    line(500, "Fetching robot_base.json (324kb)", LogKind::Command),
    ScriptStep::Load { asset: "robot_base.json", size_kb: 324, duration_ms: 900 },
    line(0, "➤ Base model successfully decoded", LogKind::Loading),
    line(0, "➤ Base model vertices: 458, faces: 312, materials: 3", LogKind::Loading),
    line(200, "Fetching robot_arm.json (652kb)", LogKind::Command),
    ScriptStep::Load { asset: "robot_arm.json", size_kb: 652, duration_ms: 1200 },
    line(0, "➤ Arm model successfully decoded", LogKind::Loading),
    line(0, "➤ Arm model vertices: 1024, faces: 876, materials: 5", LogKind::Loading),
    line(0, "➤ Joint constraints initialized", LogKind::Loading),
    line(300, "Fetching robot_head.json (528kb)", LogKind::Command),
    ScriptStep::Load { asset: "robot_head.json", size_kb: 528, duration_ms: 1000 },
    line(0, "➤ Head model successfully decoded", LogKind::Loading),
    line(0, "➤ Head model vertices: 862, faces: 704, materials: 4", LogKind::Loading),
    line(400, "Generating mipmaps for textures...", LogKind::Info),
    line(600, "Applying PBR materials to models", LogKind::Info),
    line(500, "Setting up shadow maps (resolution: 2048)", LogKind::Info),
    line(300, "Configuring physics for robotic joints", LogKind::Info),
    line(400, "Initializing lighting environment", LogKind::Info),
    line(300, "Scene compilation complete", LogKind::Info),
    line(200, "✓ All assets loaded successfully", LogKind::Success),
    line(0, "✓ Scene ready for interaction", LogKind::Success),
];

const fn line(delay_ms: u32, text: &'static str, kind: LogKind) -> ScriptStep {
    ScriptStep::Line { delay_ms, text, kind }
}
