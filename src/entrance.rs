//! Load-time entrance animations.

#[cfg(test)]
#[path = "entrance_test.rs"]
mod entrance_test;

use crate::config::PageConfig;

/// One element to animate once the page has loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntranceStep {
    pub selector: String,
    pub animation: &'static str,
}

/// Nav bar first, then the hero subtitle, headline, and paragraph with
/// increasing delays.
#[must_use]
pub fn plan(config: &PageConfig) -> Vec<EntranceStep> {
    vec![
        EntranceStep { selector: config.nav_selector.clone(), animation: "slideDown 0.6s ease-out" },
        EntranceStep { selector: config.hero_selector("h2"), animation: "fadeInUp 0.8s ease-out" },
        EntranceStep {
            selector: config.hero_selector("h1"),
            animation: "fadeInUp 0.8s ease-out 0.2s forwards",
        },
        EntranceStep {
            selector: config.hero_selector("p"),
            animation: "fadeInUp 0.8s ease-out 0.4s forwards",
        },
    ]
}
