//! Theme toggles: root marker class plus the desktop and mobile controls.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, Window};

use super::{listen, query_all_in, set_class, set_style};
use crate::config::PageConfig;
use crate::consts::PREFERS_DARK_QUERY;
use crate::error::WireError;
use crate::store::{LocalStore, MemoryStore, PreferenceStore};
use crate::theme::{Rotation, Theme, ThemeState, ToggleIcon};

type SharedTheme = Rc<RefCell<ThemeState<Box<dyn PreferenceStore>>>>;

pub(super) fn wire(window: &Window, document: &Document, config: &PageConfig) -> Result<Theme, WireError> {
    let store: Box<dyn PreferenceStore> = match LocalStore::open(window) {
        Some(store) => Box::new(store),
        None => Box::new(MemoryStore::new()),
    };
    let state = ThemeState::load(store, config.storage_key.clone(), prefers_dark(window));
    let theme = state.theme();
    let state: SharedTheme = Rc::new(RefCell::new(state));

    match document.document_element() {
        Some(root) => {
            set_class(&root, &config.dark_class, theme.is_dark());
            subscribe_root(&state, root, config.dark_class.clone());
        }
        None => log::debug!("theme: no root element, marker class skipped"),
    }

    wire_control(document, &config.theme_toggle_id, &state, config, true)?;
    wire_control(document, &config.theme_toggle_mobile_id, &state, config, false)?;
    Ok(theme)
}

fn prefers_dark(window: &Window) -> bool {
    match window.match_media(PREFERS_DARK_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(err) => {
            log::debug!("theme: matchMedia failed: {err:?}");
            false
        }
    }
}

fn subscribe_root(state: &SharedTheme, root: Element, dark_class: String) {
    state
        .borrow_mut()
        .subscribe(move |theme| set_class(&root, &dark_class, theme.is_dark()));
}

/// Wire one toggle control. Missing controls are skipped; `hover` enables the
/// half-turn hover on the desktop control.
fn wire_control(
    document: &Document,
    id: &str,
    state: &SharedTheme,
    config: &PageConfig,
    hover: bool,
) -> Result<(), WireError> {
    let Some(control) = document.get_element_by_id(id) else {
        log::debug!("theme: #{id} not found, skipping");
        return Ok(());
    };
    let icons = Rc::new(query_all_in(&control, &config.icon_selector));
    let icon_state = Rc::new(RefCell::new(ToggleIcon::default()));

    {
        let icons = Rc::clone(&icons);
        let icon_state = Rc::clone(&icon_state);
        state.borrow_mut().subscribe(move |_| {
            let rotation = icon_state.borrow_mut().spin();
            let transition = icon_state.borrow().transition();
            for icon in icons.iter() {
                if let Some(transition) = transition {
                    set_style(icon, "transition", transition);
                }
                set_style(icon, "transform", &rotation.css());
            }
        });
    }

    let state = Rc::clone(state);
    listen(&control, "click", move |_| {
        let toggled = state.borrow_mut().toggle();
        if let Err(err) = toggled.persisted {
            log::warn!("theme: {err}");
        }
    })?;

    if hover {
        let (enter_icons, enter_state) = (Rc::clone(&icons), Rc::clone(&icon_state));
        listen(&control, "mouseenter", move |_| {
            if let Some(rotation) = enter_state.borrow_mut().hover_enter() {
                rotate_all(&enter_icons, rotation);
            }
        })?;
        listen(&control, "mouseleave", move |_| {
            let rotation = icon_state.borrow_mut().hover_leave();
            rotate_all(&icons, rotation);
        })?;
    }
    log::debug!("theme: wired #{id}");
    Ok(())
}

fn rotate_all(icons: &[HtmlElement], rotation: Rotation) {
    for icon in icons {
        set_style(icon, "transform", &rotation.css());
    }
}
