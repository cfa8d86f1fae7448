//! Same-page anchor classification for smooth scrolling.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// How a click on an in-page anchor should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Bare `#` placeholder, or not a fragment link: leave the click alone.
    Default,
    /// Look up the element with this id; scroll smoothly if it exists,
    /// otherwise let native navigation happen.
    ScrollTo(&'a str),
}

/// Classify an anchor's `href`.
#[must_use]
pub fn classify(href: &str) -> AnchorAction<'_> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => AnchorAction::ScrollTo(id),
        _ => AnchorAction::Default,
    }
}

/// What the host does with an anchor click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome<T> {
    /// Leave the click alone; the browser's own jump (if any) applies.
    Native,
    /// Prevent default navigation and smooth-scroll `T` to the viewport top.
    Smooth(T),
}

impl<T> AnchorOutcome<T> {
    /// Whether the click's default navigation must be cancelled.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Smooth(_))
    }
}

/// Decide a click on an anchor with `href`. `lookup` finds the element with
/// the fragment id and runs only for non-empty fragments.
pub fn resolve<T>(href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> AnchorOutcome<T> {
    match classify(href) {
        AnchorAction::Default => AnchorOutcome::Native,
        AnchorAction::ScrollTo(id) => lookup(id).map_or(AnchorOutcome::Native, AnchorOutcome::Smooth),
    }
}
