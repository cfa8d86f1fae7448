//! Mobile menu and smooth in-page anchors.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{listen, query_all, query_all_in, set_class, set_style};
use crate::anchor::{AnchorOutcome, resolve};
use crate::config::PageConfig;
use crate::error::WireError;
use crate::menu::{MenuRender, MobileMenu};

/// Elements a menu transition renders into.
struct MenuView {
    container: Element,
    icon: Option<HtmlElement>,
    hidden_class: String,
}

impl MenuView {
    fn render(&self, render: MenuRender) {
        set_class(&self.container, &self.hidden_class, render.hidden);
        let Some(icon) = &self.icon else {
            return;
        };
        if let Some(transition) = render.icon_transition {
            set_style(icon, "transition", transition);
        }
        set_style(icon, "transform", &render.icon.css());
    }
}

pub(super) fn wire_menu(document: &Document, config: &PageConfig) -> Result<(), WireError> {
    let button = document
        .get_element_by_id(&config.menu_button_id)
        .ok_or_else(|| WireError::MissingElement(config.menu_button_id.clone()))?;
    let container = document
        .get_element_by_id(&config.menu_id)
        .ok_or_else(|| WireError::MissingElement(config.menu_id.clone()))?;

    let menu = MobileMenu::from_hidden(container.class_list().contains(&config.hidden_class));
    let menu = Rc::new(RefCell::new(menu));
    let view = Rc::new(MenuView {
        icon: query_all_in(&button, &config.icon_selector).into_iter().next(),
        container,
        hidden_class: config.hidden_class.clone(),
    });

    {
        let (menu, view) = (Rc::clone(&menu), Rc::clone(&view));
        listen(&button, "click", move |_| {
            let render = menu.borrow_mut().toggle();
            view.render(render);
        })?;
    }

    let links = query_all(document, &config.nav_link_selector)?;
    for link in &links {
        let (menu, view) = (Rc::clone(&menu), Rc::clone(&view));
        listen(link, "click", move |_| {
            let render = menu.borrow_mut().close();
            view.render(render);
        })?;
    }
    log::debug!("menu: wired with {} links", links.len());
    Ok(())
}

pub(super) fn wire_anchors(document: &Document, config: &PageConfig) -> Result<(), WireError> {
    let anchors = query_all(document, &config.anchor_selector)?;
    for anchor in &anchors {
        let (document, href_source) = (document.clone(), anchor.clone());
        listen(anchor, "click", move |event: Event| {
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let outcome = resolve(&href, |id| document.get_element_by_id(id));
            if outcome.prevents_default() {
                event.prevent_default();
            }
            if let AnchorOutcome::Smooth(target) = outcome {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    log::debug!("anchors: wired {}", anchors.len());
    Ok(())
}
