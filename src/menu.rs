//! Mobile navigation menu controller.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::{MENU_ICON_TRANSITION, MENU_OPEN_ANGLE_DEG};
use crate::theme::Rotation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

/// What the DOM layer writes after a menu transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRender {
    /// Whether the hidden marker class belongs on the container.
    pub hidden: bool,
    pub icon: Rotation,
    /// Set on trigger clicks only; link clicks leave the transition alone.
    pub icon_transition: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    /// Start from the container's current class list.
    #[must_use]
    pub fn from_hidden(hidden: bool) -> Self {
        let state = if hidden { MenuState::Closed } else { MenuState::Open };
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Trigger click.
    pub fn toggle(&mut self) -> MenuRender {
        self.state = match self.state {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        let icon = match self.state {
            MenuState::Open => Rotation(MENU_OPEN_ANGLE_DEG),
            MenuState::Closed => Rotation::REST,
        };
        MenuRender {
            hidden: self.state == MenuState::Closed,
            icon,
            icon_transition: Some(MENU_ICON_TRANSITION),
        }
    }

    /// Navigation link click. Always closes, even if already closed.
    pub fn close(&mut self) -> MenuRender {
        self.state = MenuState::Closed;
        MenuRender { hidden: true, icon: Rotation::REST, icon_transition: None }
    }
}
