//! Small display helpers for the rendering layer: uptime text, temperature
//! conversion, responsive layout and accessibility attributes.

use std::collections::BTreeMap;

/// CSS class applied to error output lines.
pub const ERROR_CLASS: &str = "error-text";

/// Widest viewport (in CSS px) that still gets the compact weather layout.
const COMPACT_WEATHER_MAX_WIDTH: u32 = 900;

/// Converts Celsius to whole degrees Fahrenheit.
///
/// Halves round towards positive infinity, matching the browser's
/// `Math.round`.
pub fn celsius_to_fahrenheit(celsius: f64) -> i64 {
    (celsius * 9.0 / 5.0 + 32.0 + 0.5).floor() as i64
}

/// Formats a duration in milliseconds as `1 day, 2 hours, 3 mins, 4 secs`.
///
/// Zero-valued units are omitted, except seconds which always appear.
pub fn format_uptime(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::with_capacity(4);
    for (value, unit) in [(days, "day"), (hours, "hour"), (minutes, "min")] {
        if value > 0 {
            parts.push(plural(value, unit));
        }
    }
    parts.push(plural(seconds, "sec"));
    parts.join(", ")
}

fn plural(value: u64, unit: &str) -> String {
    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

/// Returns true when the weather card should use its narrow layout.
pub fn should_use_compact_weather_layout(is_mobile: bool, window_width: u32) -> bool {
    is_mobile || window_width <= COMPACT_WEATHER_MAX_WIDTH
}

/// ARIA attributes for an output line with the given CSS class.
///
/// Errors are announced assertively; everything else gets no extra attributes.
pub fn get_output_a11y_attrs(class_name: &str) -> BTreeMap<&'static str, &'static str> {
    let mut attrs = BTreeMap::new();
    if class_name == ERROR_CLASS {
        attrs.insert("role", "alert");
        attrs.insert("aria-live", "assertive");
    }
    attrs
}
