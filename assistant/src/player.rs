//! Log/progress state for a playing script.
//!
//! The state itself is pure and append-only; the driving loop (delays,
//! cancellation guard, completion callback) lives in the client. The
//! progress map is clamped monotonic per asset, and `clear` is the only
//! wholesale reset — used both by "clear console" and by restarting a
//! run.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use std::collections::BTreeMap;

use crate::script::{Emission, LogLine};

/// A log line stamped with its wall-clock emission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLine {
    /// `[HH:MM:SS.mmm]` at emission time, or empty when untimestamped.
    pub timestamp: String,
    pub line: LogLine,
}

/// Observable state of one script run.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    lines: Vec<PlayerLine>,
    progress: BTreeMap<&'static str, u8>,
    complete: bool,
}

impl PlayerState {
    /// State with progress bars pre-registered at 0% for a fixed asset set.
    #[must_use]
    pub fn with_assets(assets: &[&'static str]) -> Self {
        Self {
            lines: Vec::new(),
            progress: assets.iter().map(|&a| (a, 0)).collect(),
            complete: false,
        }
    }

    /// Record one emission: append its line and fold in any progress
    /// update. Progress never decreases.
    pub fn record(&mut self, timestamp: String, emission: Emission) {
        if let Some((asset, percent)) = emission.progress {
            let entry = self.progress.entry(asset).or_insert(0);
            *entry = (*entry).max(percent.min(100));
        }
        self.lines.push(PlayerLine { timestamp, line: emission.line });
    }

    /// Mark the run finished. The driver calls this exactly once, after
    /// the final emission and only if the run was not cancelled.
    pub fn finish(&mut self) {
        self.complete = true;
    }

    /// Wholesale reset: drop all lines, zero all progress bars, clear
    /// the completion flag.
    pub fn clear(&mut self) {
        self.lines.clear();
        for value in self.progress.values_mut() {
            *value = 0;
        }
        self.complete = false;
    }

    #[must_use]
    pub fn lines(&self) -> &[PlayerLine] {
        &self.lines
    }

    /// Progress entries in asset-name order.
    pub fn progress(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.progress.iter().map(|(&asset, &pct)| (asset, pct))
    }

    #[must_use]
    pub fn percent(&self, asset: &str) -> Option<u8> {
        self.progress.get(asset).copied()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Append a line directly, outside any script (e.g. error surfaced
    /// by the driver).
    pub fn push_line(&mut self, timestamp: String, line: LogLine) {
        self.lines.push(PlayerLine { timestamp, line });
    }
}
