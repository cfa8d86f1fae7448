//! Click ripple overlays.
//!
//! Each activation spawns one square overlay centered on the pointer and
//! removes it after [`RIPPLE_LIFETIME_MS`].
//! Overlays are independent: rapid clicks stack, and every overlay has its
//! own removal timer.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

use std::collections::BTreeMap;

use crate::consts::RIPPLE_LIFETIME_MS;

/// A host control's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Placement of one overlay relative to its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Square of side `max(width, height)` centered at the click point.
    #[must_use]
    pub fn from_click(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            size,
            left: client_x - bounds.left - size / 2.0,
            top: client_y - bounds.top - size / 2.0,
        }
    }

    /// Inline style declarations as `(property, value)` pairs.
    #[must_use]
    pub fn style(&self) -> [(&'static str, String); 4] {
        [
            ("width", format!("{}px", self.size)),
            ("height", format!("{}px", self.size)),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
        ]
    }
}

pub type RippleId = u64;

/// Live overlays awaiting removal, keyed by spawn order.
#[derive(Debug)]
pub struct RippleLedger<T> {
    next_id: RippleId,
    live: BTreeMap<RippleId, (f64, T)>,
}

impl<T> Default for RippleLedger<T> {
    fn default() -> Self {
        Self { next_id: 0, live: BTreeMap::new() }
    }
}

impl<T> RippleLedger<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an overlay appended at `now_ms`. It falls due
    /// [`RIPPLE_LIFETIME_MS`] later.
    pub fn spawn(&mut self, overlay: T, now_ms: f64) -> RippleId {
        let id = self.next_id;
        self.next_id += 1;
        let deadline = now_ms + f64::from(RIPPLE_LIFETIME_MS);
        self.live.insert(id, (deadline, overlay));
        id
    }

    /// Take out every overlay whose lifetime has elapsed at `now_ms`, in
    /// spawn order.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<T> {
        let due: Vec<RippleId> = self
            .live
            .iter()
            .filter(|(_, (deadline, _))| *deadline <= now_ms)
            .map(|(id, _)| *id)
            .collect();
        due.into_iter().filter_map(|id| self.live.remove(&id)).map(|(_, overlay)| overlay).collect()
    }

    #[must_use]
    pub fn live(&self) -> usize {
        self.live.len()
    }
}
