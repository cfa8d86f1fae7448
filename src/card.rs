//! Project card "See More" expansion.
//!
//! A description that already fits the collapsed height gets no control at
//! all. Longer descriptions flip between the collapsed and expanded
//! max-height classes, and the control label follows.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::consts::{CARD_COLLAPSED_MAX_PX, SEE_LESS_LABEL, SEE_MORE_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
}

impl CardState {
    /// Control label for this state.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Collapsed => SEE_MORE_LABEL,
            Self::Expanded => SEE_LESS_LABEL,
        }
    }
}

/// Class swap to apply to the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSwap<'a> {
    pub remove: &'a str,
    pub add: &'a str,
}

/// Whether a click may bubble to ancestor handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Links inside a card never trigger the card's own click handler.
#[must_use]
pub fn nested_link_click() -> Propagation {
    Propagation::Stop
}

/// Everything the host applies for one click on a "See More" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardClick<'a> {
    /// Always [`Propagation::Stop`]; the card itself may be a navigation surface.
    pub propagation: Propagation,
    pub swap: ClassSwap<'a>,
    pub label: &'static str,
}

/// One description/control pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard {
    state: CardState,
}

impl ProjectCard {
    /// Gate on the description's natural content height. `None` means the
    /// text fits and the control should be hidden.
    #[must_use]
    pub fn gate(content_height: i32, expanded: bool) -> Option<Self> {
        if content_height <= CARD_COLLAPSED_MAX_PX {
            return None;
        }
        let state = if expanded { CardState::Expanded } else { CardState::Collapsed };
        Some(Self { state })
    }

    #[must_use]
    pub fn state(&self) -> CardState {
        self.state
    }

    /// Flip the state and return the class swap for the new state.
    pub fn toggle<'a>(&mut self, collapsed_class: &'a str, expanded_class: &'a str) -> ClassSwap<'a> {
        self.state = match self.state {
            CardState::Collapsed => CardState::Expanded,
            CardState::Expanded => CardState::Collapsed,
        };
        match self.state {
            CardState::Expanded => ClassSwap { remove: collapsed_class, add: expanded_class },
            CardState::Collapsed => ClassSwap { remove: expanded_class, add: collapsed_class },
        }
    }

    /// Handle a click on the control.
    pub fn click<'a>(&mut self, collapsed_class: &'a str, expanded_class: &'a str) -> CardClick<'a> {
        let swap = self.toggle(collapsed_class, expanded_class);
        CardClick { propagation: Propagation::Stop, swap, label: self.state.label() }
    }
}
