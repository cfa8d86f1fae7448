//! Project card description expansion and nested-link isolation.

use web_sys::{Document, Event};

use super::{listen, query_all, set_class, set_style};
use crate::card::{ProjectCard, Propagation, nested_link_click};
use crate::config::PageConfig;
use crate::error::WireError;

pub(super) fn wire(document: &Document, config: &PageConfig) -> Result<(), WireError> {
    let mut expandable = 0usize;
    for control in query_all(document, &config.see_more_selector)? {
        let Some(description) = control.previous_element_sibling() else {
            log::debug!("cards: see-more control without a description");
            continue;
        };
        let expanded = description.class_list().contains(&config.expanded_class);
        let Some(mut card) = ProjectCard::gate(description.scroll_height(), expanded) else {
            set_style(&control, "display", "none");
            continue;
        };
        expandable += 1;

        let (collapsed_class, expanded_class) = (config.collapsed_class.clone(), config.expanded_class.clone());
        let label_target = control.clone();
        listen(&control, "click", move |event: Event| {
            let click = card.click(&collapsed_class, &expanded_class);
            apply_propagation(&event, click.propagation);
            set_class(&description, click.swap.remove, false);
            set_class(&description, click.swap.add, true);
            label_target.set_text_content(Some(click.label));
        })?;
    }

    let links = query_all(document, &config.card_link_selector)?;
    for link in &links {
        listen(link, "click", |event: Event| apply_propagation(&event, nested_link_click()))?;
    }
    log::debug!("cards: {expandable} expandable, {} nested links", links.len());
    Ok(())
}

fn apply_propagation(event: &Event, propagation: Propagation) {
    if propagation == Propagation::Stop {
        event.stop_propagation();
    }
}
