//! One-shot scroll reveal bookkeeping.
//!
//! Tagged elements live in an arena indexed by [`RevealId`]. Each is pending
//! until its first intersection, then retired for good. Stagger delays count
//! positions within one observer batch, so every batch restarts at zero.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::REVEAL_STAGGER_S;

/// Index of a tracked element in the arena.
pub type RevealId = usize;

/// Attribute carrying each tracked element's [`RevealId`], so observer
/// entries map back to the arena without scanning it.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Read a [`REVEAL_ID_ATTR`] value.
#[must_use]
pub fn parse_id(raw: &str) -> Option<RevealId> {
    match raw.trim().parse::<RevealId>() {
        Ok(id) => Some(id),
        Err(_) => None,
    }
}

/// One observer entry, in the order the observer delivered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchEntry {
    pub id: RevealId,
    pub intersecting: bool,
}

/// An element to animate and stop observing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub id: RevealId,
    pub delay_s: f64,
}

impl Reveal {
    /// Inline `animation` value.
    #[must_use]
    pub fn animation(&self) -> String {
        format!("fadeInUp 0.6s ease-out {}s forwards", self.delay_s)
    }
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    pending: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one more element; it starts pending.
    pub fn track(&mut self) -> RevealId {
        self.pending.push(true);
        self.pending.len() - 1
    }

    #[must_use]
    pub fn is_pending(&self, id: RevealId) -> bool {
        self.pending.get(id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.iter().filter(|p| **p).count()
    }

    /// Process one observer callback. Returns the elements to animate, each
    /// already retired from the pending set.
    pub fn on_batch(&mut self, entries: &[BatchEntry]) -> Vec<Reveal> {
        let mut reveals = Vec::new();
        for (position, entry) in (0u32..).zip(entries) {
            if !entry.intersecting || !self.is_pending(entry.id) {
                continue;
            }
            self.pending[entry.id] = false;
            reveals.push(Reveal { id: entry.id, delay_s: f64::from(position) * REVEAL_STAGGER_S });
        }
        reveals
    }
}
