use super::*;

const COLLAPSED: &str = "max-h-[4.5rem]";
const EXPANDED: &str = "max-h-[24rem]";

#[test]
fn short_description_hides_control() {
    assert_eq!(ProjectCard::gate(40, false), None);
    assert_eq!(ProjectCard::gate(80, false), None);
}

#[test]
fn long_description_starts_collapsed() {
    let card = ProjectCard::gate(81, false).expect("81px should need a toggle");
    assert_eq!(card.state(), CardState::Collapsed);
    assert_eq!(card.state().label(), "See More");
}

#[test]
fn gate_reads_existing_expanded_class() {
    let card = ProjectCard::gate(200, true).expect("should need a toggle");
    assert_eq!(card.state(), CardState::Expanded);
}

#[test]
fn toggle_alternates_classes_and_labels() {
    let mut card = ProjectCard::gate(200, false).expect("should need a toggle");

    let swap = card.toggle(COLLAPSED, EXPANDED);
    assert_eq!(swap, ClassSwap { remove: COLLAPSED, add: EXPANDED });
    assert_eq!(card.state().label(), "See Less");

    let swap = card.toggle(COLLAPSED, EXPANDED);
    assert_eq!(swap, ClassSwap { remove: EXPANDED, add: COLLAPSED });
    assert_eq!(card.state().label(), "See More");
}

#[test]
fn classes_never_overlap() {
    let mut card = ProjectCard::gate(300, false).expect("should need a toggle");
    for _ in 0..6 {
        let swap = card.toggle(COLLAPSED, EXPANDED);
        assert_ne!(swap.remove, swap.add);
    }
    assert_eq!(card.state(), CardState::Collapsed);
}

// =============================================================
// Clicks
// =============================================================

#[test]
fn click_stops_propagation_every_time() {
    let mut card = ProjectCard::gate(200, false).expect("should need a toggle");
    for _ in 0..3 {
        assert_eq!(card.click(COLLAPSED, EXPANDED).propagation, Propagation::Stop);
    }
}

#[test]
fn click_carries_swap_and_label() {
    let mut card = ProjectCard::gate(200, false).expect("should need a toggle");

    let first = card.click(COLLAPSED, EXPANDED);
    assert_eq!(first.swap, ClassSwap { remove: COLLAPSED, add: EXPANDED });
    assert_eq!(first.label, "See Less");

    let second = card.click(COLLAPSED, EXPANDED);
    assert_eq!(second.swap, ClassSwap { remove: EXPANDED, add: COLLAPSED });
    assert_eq!(second.label, "See More");
}

#[test]
fn nested_links_never_reach_the_card() {
    assert_eq!(nested_link_click(), Propagation::Stop);
}
