use super::*;

#[test]
fn enter_lifts_and_sets_transition() {
    let (transform, transition) = ICON.style(Pointer::Enter);
    assert_eq!(transform, "translateY(-3px) scale(1.1)");
    assert_eq!(transition, Some("transform 0.3s ease-out"));
}

#[test]
fn leave_returns_to_rest_without_transition() {
    assert_eq!(ICON.style(Pointer::Leave), ("translateY(0) scale(1)", None));
    assert_eq!(PILL.style(Pointer::Leave), ("scale(1) translateY(0)", None));
}

#[test]
fn pill_scales_more_than_icon() {
    let (transform, transition) = PILL.style(Pointer::Enter);
    assert!(transform.starts_with("scale(1.15)"));
    assert!(transition.is_some_and(|t| t.starts_with("all ")));
}

#[test]
fn pointer_event_names() {
    assert_eq!(Pointer::Enter.event(), "mouseenter");
    assert_eq!(Pointer::Leave.event(), "mouseleave");
}
