//! Browser wiring. Looks up the page's elements, builds one controller per
//! behavior, and attaches event listeners that project controller state
//! back onto the DOM.
//!
//! Listeners live as long as the page, so their closures are leaked with
//! `Closure::forget`. Errors inside a listener are logged at `warn` and
//! otherwise dropped.

mod cards;
mod motion;
mod nav;
mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::error::WireError;
use crate::theme::Theme;

/// Attach every behavior. Theme comes first so a broken menu contract still
/// leaves the page in the right theme.
///
/// # Errors
///
/// Returns [`WireError`] if a required element is missing or a browser call
/// needed for wiring fails.
pub fn wire() -> Result<Theme, WireError> {
    let window = web_sys::window().ok_or_else(|| WireError::browser("window", "no global window"))?;
    let document = window.document().ok_or_else(|| WireError::browser("document", "window has no document"))?;
    let config = load_config(&document);

    let theme = theme::wire(&window, &document, &config)?;
    nav::wire_menu(&document, &config)?;
    motion::wire_reveal(&document, &config)?;
    motion::wire_parallax(&window, &document, &config)?;
    nav::wire_anchors(&document, &config)?;
    motion::wire_ripples(&document, &config)?;
    motion::wire_entrance(&window, &document, &config)?;
    motion::wire_hover(&document, &config)?;
    cards::wire(&document, &config)?;
    Ok(theme)
}

fn load_config(document: &Document) -> PageConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using default page config");
            PageConfig::default()
        }
    }
}

/// All elements under `document` matching `selector`.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, WireError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| WireError::dom("querySelectorAll", err))?;
    Ok(html_elements(&list))
}

/// All elements under `root` matching `selector`. Lookup failures read as none.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    match root.query_selector_all(selector) {
        Ok(list) => html_elements(&list),
        Err(err) => {
            log::warn!("querySelectorAll({selector}) failed: {err:?}");
            Vec::new()
        }
    }
}

/// First element under `document` matching `selector`, if any.
pub(crate) fn query_first(document: &Document, selector: &str) -> Option<HtmlElement> {
    match document.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_ref::<HtmlElement>().cloned()),
        Err(err) => {
            log::warn!("querySelector({selector}) failed: {err:?}");
            None
        }
    }
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WireError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| WireError::dom("addEventListener", err))?;
    closure.forget();
    Ok(())
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    warn_on_err(property, el.style().set_property(property, value));
}

pub(crate) fn set_class(el: &Element, class: &str, present: bool) {
    let list = el.class_list();
    let result = if present { list.add_1(class) } else { list.remove_1(class) };
    warn_on_err(class, result);
}

pub(crate) fn warn_on_err<T>(context: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("{context}: {err:?}");
    }
}
