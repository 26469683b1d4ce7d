//! Wall-clock access, stubbed on the server where no JS clock exists.

#![allow(clippy::unused_unit)]

use assistant::script::format_timestamp;

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Current local time as a `[HH:MM:SS.mmm]` log stamp.
#[must_use]
pub fn clock_stamp() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_timestamp(
            now.get_hours(),
            now.get_minutes(),
            now.get_seconds(),
            now.get_milliseconds(),
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format_timestamp(0, 0, 0, 0)
    }
}

/// Short `HH:MM` display time for chat message footers.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn short_time(epoch_ms: f64) -> String {
    let total_minutes = (epoch_ms / 60_000.0) as u64;
    let minutes = total_minutes % 60;
    let hours = (total_minutes / 60) % 24;
    format!("{hours:02}:{minutes:02}")
}
