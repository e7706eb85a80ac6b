//! Browser entry point for the portfolio page
//!
//! Builds each component over a live [`DomView`] once the document is
//! parsed. Components are independent: a failed setup is logged and the
//! rest still start.

mod components;
mod config;
mod logging;

pub mod dom;
pub mod storage;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use dom::{DomNode, DomView};
pub use storage::LocalStore;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init(logging::level_from_url());

    let Some(doc) = dom::get_document() else {
        return Ok(());
    };

    let loading = js_sys::Reflect::get(&doc, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string())
        .is_some_and(|state| state == "loading");

    if loading {
        let cb = Closure::once(Box::new(|| {
            if let Err(e) = start() {
                tracing::error!("page setup failed: {e:?}");
            }
        }) as Box<dyn FnOnce()>);
        doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    } else {
        start()
    }
}

/// Start every component against the current document
pub fn start() -> Result<(), JsValue> {
    if let Err(e) = portfolio_core::palette::validate() {
        tracing::warn!("{e}");
    }
    let config = config::load();
    let view = DomView::new()?;

    report("navigation", components::nav::setup(&view, &config.nav));
    report("settings", components::settings::setup(&view, &config));
    report("modal", components::modal::setup(&view, &config.modal));
    report("reveal", components::reveal::setup(&view, &config.reveal));

    tracing::info!("portfolio page ready");
    Ok(())
}

fn report(component: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        tracing::warn!(component, "setup failed: {e:?}");
    }
}
