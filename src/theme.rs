//! Light/dark theme state shared by the desktop and mobile toggles.
//!
//! The theme resolves once at startup (stored preference, then the
//! environment's dark signal, then light). [`ThemeState`] owns the store and
//! fans every toggle out to its subscribers, so both toggle controls and the
//! root marker class re-render from the same change.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::consts::THEME_SPIN_TRANSITION;
use crate::store::{PreferenceStore, StoreError, load_theme, save_theme};

/// Active color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal persisted in the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored literal. Anything but `light` / `dark` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the dark marker class belongs on the root element.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the startup theme: stored preference, else environment, else light.
#[must_use]
pub fn resolve(stored: Option<Theme>, prefers_dark: bool) -> Theme {
    match stored {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Outcome of a toggle. The theme always flips; persisting may fail.
#[derive(Debug)]
pub struct Toggled {
    pub theme: Theme,
    pub persisted: Result<(), StoreError>,
}

type Listener = Box<dyn FnMut(Theme)>;

/// Shared theme holder with notify-all subscribers.
pub struct ThemeState<S> {
    theme: Theme,
    store: S,
    key: String,
    listeners: Vec<Listener>,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Resolve the startup theme from `store` and the environment signal.
    pub fn load(store: S, key: impl Into<String>, prefers_dark: bool) -> Self {
        let key = key.into();
        let theme = resolve(load_theme(&store, &key), prefers_dark);
        Self { theme, store, key, listeners: Vec::new() }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a renderer called after every toggle with the new theme.
    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Flip the theme, persist it, then notify every subscriber in
    /// registration order.
    pub fn toggle(&mut self) -> Toggled {
        self.theme = self.theme.flipped();
        let persisted = save_theme(&mut self.store, &self.key, self.theme);
        for listener in &mut self.listeners {
            listener(self.theme);
        }
        Toggled { theme: self.theme, persisted }
    }
}

/// An icon rotation in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation(pub u16);

impl Rotation {
    pub const REST: Self = Self(0);
    pub const HOVER: Self = Self(180);
    pub const SPUN: Self = Self(360);

    /// Inline `transform` value.
    #[must_use]
    pub fn css(self) -> String {
        format!("rotate({}deg)", self.0)
    }
}

/// Inline style state of the icon glyphs inside one theme toggle control.
///
/// `rotation` is `None` until something writes a transform, matching an
/// unstyled glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleIcon {
    rotation: Option<Rotation>,
    transition: Option<&'static str>,
}

impl ToggleIcon {
    #[must_use]
    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }

    #[must_use]
    pub fn transition(&self) -> Option<&'static str> {
        self.transition
    }

    /// Pointer entered the control. Rotates to 180° only from rest; returns
    /// the new rotation when it changed.
    pub fn hover_enter(&mut self) -> Option<Rotation> {
        match self.rotation {
            None | Some(Rotation::REST) => {
                self.rotation = Some(Rotation::HOVER);
                self.rotation
            }
            Some(_) => None,
        }
    }

    /// Pointer left the control. Always back to rest.
    pub fn hover_leave(&mut self) -> Rotation {
        self.rotation = Some(Rotation::REST);
        Rotation::REST
    }

    /// A toggle happened on either control.
    pub fn spin(&mut self) -> Rotation {
        self.transition = Some(THEME_SPIN_TRANSITION);
        self.rotation = Some(Rotation::SPUN);
        Rotation::SPUN
    }
}
