//! Page contract: element ids, selectors, class names, and the storage key.
//!
//! Defaults match the portfolio markup. A page can override any subset by
//! embedding a JSON object in `<script type="application/json" id="folio-config">`;
//! fields left out keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::WireError;

/// Id of the inline script element holding a JSON config override.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Everything the behaviors need to find in the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Durable store key for the theme preference.
    pub storage_key: String,

    pub theme_toggle_id: String,
    pub theme_toggle_mobile_id: String,
    pub menu_button_id: String,
    pub menu_id: String,
    pub hero_id: String,

    pub dark_class: String,
    pub hidden_class: String,
    pub collapsed_class: String,
    pub expanded_class: String,
    pub ripple_class: String,

    pub icon_selector: String,
    pub nav_selector: String,
    pub nav_link_selector: String,
    pub reveal_selector: String,
    pub parallax_selector: String,
    pub anchor_selector: String,
    pub ripple_selector: String,
    pub hover_icon_selector: String,
    pub pill_selector: String,
    pub see_more_selector: String,
    pub card_link_selector: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".into(),
            theme_toggle_id: "theme-toggle".into(),
            theme_toggle_mobile_id: "theme-toggle-mobile".into(),
            menu_button_id: "mobile-menu-btn".into(),
            menu_id: "mobile-menu".into(),
            hero_id: "home".into(),
            dark_class: "dark".into(),
            hidden_class: "hidden".into(),
            collapsed_class: "max-h-[4.5rem]".into(),
            expanded_class: "max-h-[24rem]".into(),
            ripple_class: "ripple".into(),
            icon_selector: "i".into(),
            nav_selector: "nav".into(),
            nav_link_selector: ".mobile-nav-link".into(),
            reveal_selector: ".scroll-element".into(),
            parallax_selector: ".animate-blob".into(),
            anchor_selector: "a[href^=\"#\"]".into(),
            ripple_selector:
                ".btn-primary, .btn-secondary, a[href^=\"#projects\"], a[href^=\"mailto\"]".into(),
            hover_icon_selector: ".fa-download, .fa-arrow-right".into(),
            pill_selector: ".tech-pill".into(),
            see_more_selector: ".see-more-btn".into(),
            card_link_selector: ".project-card a".into(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Config`] if `raw` is not a JSON object of string fields.
    pub fn from_json(raw: &str) -> Result<Self, WireError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Selector for one hero child, scoped under the hero section.
    #[must_use]
    pub fn hero_selector(&self, tag: &str) -> String {
        format!("#{} {tag}", self.hero_id)
    }
}
