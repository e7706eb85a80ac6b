//! Event wiring for each page component
//!
//! Setup functions resolve their elements once, build the core component
//! around a `DomView`, and attach listeners that live for the page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub mod modal;
pub mod nav;
pub mod reveal;
pub mod settings;

/// Attach a page-lifetime click listener
fn on_click(target: &Element, handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// `.class` selector
fn class_selector(class: &str) -> String {
    format!(".{class}")
}
