//! Shared numeric and CSS constants for the page behaviors.

// ── Theme ───────────────────────────────────────────────────────

/// Media query consulted when no theme preference is stored.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Transition applied to theme icons when a toggle spins them.
pub const THEME_SPIN_TRANSITION: &str = "transform 0.6s cubic-bezier(0.34, 1.56, 0.64, 1)";

// ── Menu ────────────────────────────────────────────────────────

/// Transition applied to the hamburger icon on every menu toggle.
pub const MENU_ICON_TRANSITION: &str = "transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1)";

/// Icon rotation while the mobile menu is open, in degrees.
pub const MENU_OPEN_ANGLE_DEG: u16 = 90;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must be visible to trigger its reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; the negative bottom edge fires slightly early.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Stagger between entries of one observer batch, in seconds.
pub const REVEAL_STAGGER_S: f64 = 0.1;

// ── Parallax ────────────────────────────────────────────────────

/// Minimum viewport width (CSS px) at which parallax runs.
pub const PARALLAX_MIN_WIDTH_PX: f64 = 768.0;

/// Speed coefficient of the first decorative element.
pub const PARALLAX_BASE_SPEED: f64 = 0.5;

/// Added speed per sibling index.
pub const PARALLAX_SPEED_STEP: f64 = 0.1;

// ── Ripple ──────────────────────────────────────────────────────

/// Lifetime of a ripple overlay before it is removed.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

// ── Project cards ───────────────────────────────────────────────

/// Content height (px) at or under which a description needs no toggle.
pub const CARD_COLLAPSED_MAX_PX: i32 = 80;

/// Control label while the description is collapsed.
pub const SEE_MORE_LABEL: &str = "See More";

/// Control label while the description is expanded.
pub const SEE_LESS_LABEL: &str = "See Less";
