//! Scroll-linked parallax for decorative background blobs.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::consts::{PARALLAX_BASE_SPEED, PARALLAX_MIN_WIDTH_PX, PARALLAX_SPEED_STEP};

/// Whether parallax runs at this viewport width. Narrow viewports skip all
/// layout reads and writes.
#[must_use]
pub fn enabled(viewport_width: f64) -> bool {
    viewport_width >= PARALLAX_MIN_WIDTH_PX
}

/// Speed coefficient of the `index`-th blob among its siblings.
#[must_use]
pub fn speed(index: u32) -> f64 {
    PARALLAX_BASE_SPEED + f64::from(index) * PARALLAX_SPEED_STEP
}

/// Vertical offset in px for the `index`-th blob.
#[must_use]
pub fn offset(scroll_y: f64, index: u32) -> f64 {
    scroll_y * speed(index)
}

/// Inline `transform` values for `count` blobs, or `None` below the breakpoint.
#[must_use]
pub fn transforms(viewport_width: f64, scroll_y: f64, count: u32) -> Option<Vec<String>> {
    if !enabled(viewport_width) {
        return None;
    }
    Some((0..count).map(|i| format!("translateY({}px)", offset(scroll_y, i))).collect())
}
