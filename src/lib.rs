//! Page behaviors for the portfolio site, compiled to WebAssembly.
//!
//! Every behavior is a small controller with explicit state that renders
//! into the DOM through CSS classes and inline styles. The controllers are
//! plain Rust and test natively; the [`dom`] module (feature `hydrate`)
//! attaches them to the rendered page when the wasm module starts.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark resolution, shared toggle state, toggle icons |
//! | [`store`] | Durable preference storage behind a trait |
//! | [`menu`] | Mobile navigation menu |
//! | [`reveal`] | One-shot scroll reveal with batch stagger |
//! | [`parallax`] | Scroll-linked blob translation above the breakpoint |
//! | [`anchor`] | Smooth in-page anchor scrolling |
//! | [`ripple`] | Click ripple geometry and live-overlay ledger |
//! | [`entrance`] | Load-time nav and hero animations |
//! | [`hover`] | Icon and pill hover styles |
//! | [`card`] | Project description "See More" expansion |
//! | [`config`] | Element ids, selectors, class names |
//! | [`consts`] | Breakpoints, thresholds, durations, easing |
//! | [`error`] | Startup errors |

pub mod anchor;
pub mod card;
pub mod config;
pub mod consts;
pub mod entrance;
pub mod error;
pub mod hover;
pub mod menu;
pub mod parallax;
pub mod reveal;
pub mod ripple;
pub mod store;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;

/// Wasm entry point. Installs the panic hook and console logger, then wires
/// every behavior to the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("folio: console logger not installed: {err}").into());
    }

    match dom::wire() {
        Ok(theme) => log::info!("folio: page wired, theme {theme}"),
        Err(err) => log::error!("folio: {err}"),
    }
}
