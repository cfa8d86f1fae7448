//! Hover micro-interactions for icon glyphs and technology pills.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

/// Inline style writes for pointer enter and leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverProfile {
    pub enter_transform: &'static str,
    /// Written on enter only; leave keeps whatever transition is set.
    pub enter_transition: &'static str,
    pub leave_transform: &'static str,
}

/// Download and arrow icons, driven by their parent control.
pub const ICON: HoverProfile = HoverProfile {
    enter_transform: "translateY(-3px) scale(1.1)",
    enter_transition: "transform 0.3s ease-out",
    leave_transform: "translateY(0) scale(1)",
};

/// Technology badge pills.
pub const PILL: HoverProfile = HoverProfile {
    enter_transform: "scale(1.15) translateY(-5px)",
    enter_transition: "all 0.3s cubic-bezier(0.34, 1.56, 0.64, 1)",
    leave_transform: "scale(1) translateY(0)",
};

/// Pointer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Enter,
    Leave,
}

impl Pointer {
    /// DOM event name.
    #[must_use]
    pub fn event(self) -> &'static str {
        match self {
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
        }
    }
}

impl HoverProfile {
    /// `(transform, transition)` to write for `pointer`.
    #[must_use]
    pub fn style(&self, pointer: Pointer) -> (&'static str, Option<&'static str>) {
        match pointer {
            Pointer::Enter => (self.enter_transform, Some(self.enter_transition)),
            Pointer::Leave => (self.leave_transform, None),
        }
    }
}
