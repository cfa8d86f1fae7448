//! Scroll reveal, parallax, ripples, entrance animations, and hover styles.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Date};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, Window,
};

use super::{listen, query_all, query_first, set_style, warn_on_err};
use crate::config::PageConfig;
use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, RIPPLE_LIFETIME_MS};
use crate::entrance::{self, EntranceStep};
use crate::error::WireError;
use crate::hover::{self, HoverProfile, Pointer};
use crate::parallax;
use crate::reveal::{BatchEntry, REVEAL_ID_ATTR, RevealTracker, parse_id};
use crate::ripple::{Bounds, RippleGeometry, RippleLedger};

// ── Reveal ──────────────────────────────────────────────────────

pub(super) fn wire_reveal(document: &Document, config: &PageConfig) -> Result<(), WireError> {
    let elements = query_all(document, &config.reveal_selector)?;
    let mut tracker = RevealTracker::new();
    for el in &elements {
        set_style(el, "opacity", "0");
        let id = tracker.track();
        warn_on_err(REVEAL_ID_ATTR, el.set_attribute(REVEAL_ID_ATTR, &id.to_string()));
    }
    let elements = Rc::new(elements);
    let tracker = Rc::new(RefCell::new(tracker));

    let observed = Rc::clone(&elements);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch: Vec<BatchEntry> = entries
                .iter()
                .filter_map(|value| {
                    let entry: IntersectionObserverEntry = value.unchecked_into();
                    let id = entry.target().get_attribute(REVEAL_ID_ATTR).as_deref().and_then(parse_id)?;
                    Some(BatchEntry { id, intersecting: entry.is_intersecting() })
                })
                .collect();
            for reveal in tracker.borrow_mut().on_batch(&batch) {
                if let Some(el) = observed.get(reveal.id) {
                    set_style(el, "animation", &reveal.animation());
                    observer.unobserve(el);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| WireError::dom("IntersectionObserver", err))?;
    callback.forget();

    for el in elements.iter() {
        observer.observe(el);
    }
    log::debug!("reveal: observing {}", elements.len());
    Ok(())
}

// ── Parallax ────────────────────────────────────────────────────

pub(super) fn wire_parallax(window: &Window, document: &Document, config: &PageConfig) -> Result<(), WireError> {
    let (win, document, selector) = (window.clone(), document.clone(), config.parallax_selector.clone());
    listen(window, "scroll", move |_| {
        let width = match win.inner_width() {
            Ok(width) => width.as_f64().unwrap_or(0.0),
            Err(err) => {
                log::warn!("parallax: innerWidth: {err:?}");
                return;
            }
        };
        if !parallax::enabled(width) {
            return;
        }
        let scroll_y = match win.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::warn!("parallax: scrollY: {err:?}");
                return;
            }
        };
        let blobs = match query_all(&document, &selector) {
            Ok(blobs) => blobs,
            Err(err) => {
                log::warn!("parallax: {err}");
                return;
            }
        };
        let count = u32::try_from(blobs.len()).unwrap_or(u32::MAX);
        let Some(transforms) = parallax::transforms(width, scroll_y, count) else {
            return;
        };
        for (blob, transform) in blobs.iter().zip(&transforms) {
            set_style(blob, "transform", transform);
        }
    })
}

// ── Ripple ──────────────────────────────────────────────────────

type SharedLedger = Rc<RefCell<RippleLedger<HtmlElement>>>;

pub(super) fn wire_ripples(document: &Document, config: &PageConfig) -> Result<(), WireError> {
    let hosts = query_all(document, &config.ripple_selector)?;
    let ledger: SharedLedger = Rc::new(RefCell::new(RippleLedger::new()));
    for host in &hosts {
        set_style(host, "position", "relative");
        set_style(host, "overflow", "hidden");

        let (document, target, ledger) = (document.clone(), host.clone(), Rc::clone(&ledger));
        let class = config.ripple_class.clone();
        listen(host, "click", move |event: Event| {
            let Some(click) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let bounds = Bounds { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() };
            let geometry =
                RippleGeometry::from_click(bounds, f64::from(click.client_x()), f64::from(click.client_y()));
            spawn_ripple(&document, &target, &class, geometry, &ledger);
        })?;
    }
    log::debug!("ripple: wired {} hosts", hosts.len());
    Ok(())
}

fn spawn_ripple(document: &Document, host: &HtmlElement, class: &str, geometry: RippleGeometry, ledger: &SharedLedger) {
    let overlay = match document.create_element("span") {
        Ok(el) => el,
        Err(err) => {
            log::warn!("ripple: createElement: {err:?}");
            return;
        }
    };
    let Some(overlay) = overlay.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };
    for (property, value) in geometry.style() {
        set_style(&overlay, property, &value);
    }
    warn_on_err(class, overlay.class_list().add_1(class));
    if let Err(err) = host.append_child(&overlay) {
        log::warn!("ripple: appendChild: {err:?}");
        return;
    }

    let spawned_ms = Date::now();
    ledger.borrow_mut().spawn(overlay, spawned_ms);
    let ledger = Rc::clone(ledger);
    Timeout::new(RIPPLE_LIFETIME_MS, move || {
        // Coarse clocks can read a hair early; this timer's own overlay is always due.
        let now_ms = Date::now().max(spawned_ms + f64::from(RIPPLE_LIFETIME_MS));
        let due = ledger.borrow_mut().take_due(now_ms);
        for overlay in due {
            overlay.remove();
        }
    })
    .forget();
}

// ── Entrance ────────────────────────────────────────────────────

pub(super) fn wire_entrance(window: &Window, document: &Document, config: &PageConfig) -> Result<(), WireError> {
    let steps = entrance::plan(config);
    // The module may start after `load` already fired.
    if document.ready_state() == "complete" {
        play_entrance(document, &steps);
        return Ok(());
    }
    let document = document.clone();
    listen(window, "load", move |_| play_entrance(&document, &steps))
}

fn play_entrance(document: &Document, steps: &[EntranceStep]) {
    for step in steps {
        match query_first(document, &step.selector) {
            Some(el) => set_style(&el, "animation", step.animation),
            None => log::debug!("entrance: {} not found", step.selector),
        }
    }
}

// ── Hover ───────────────────────────────────────────────────────

pub(super) fn wire_hover(document: &Document, config: &PageConfig) -> Result<(), WireError> {
    for icon in query_all(document, &config.hover_icon_selector)? {
        let Some(parent) = icon.parent_element() else {
            continue;
        };
        hover_on(&parent, &icon, hover::ICON)?;
    }
    for pill in query_all(document, &config.pill_selector)? {
        hover_on(&pill, &pill, hover::PILL)?;
    }
    Ok(())
}

/// Pointer events on `trigger` restyle `target`.
fn hover_on(trigger: &Element, target: &HtmlElement, profile: HoverProfile) -> Result<(), WireError> {
    for pointer in [Pointer::Enter, Pointer::Leave] {
        let target = target.clone();
        listen(trigger, pointer.event(), move |_| {
            let (transform, transition) = profile.style(pointer);
            set_style(&target, "transform", transform);
            if let Some(transition) = transition {
                set_style(&target, "transition", transition);
            }
        })?;
    }
    Ok(())
}
