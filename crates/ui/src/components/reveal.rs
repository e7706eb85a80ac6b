use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::config::RevealConfig;
use portfolio_core::RevealTracker;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::class_selector;
use crate::dom::{query_all, DomNode, DomView};

/// Observe every slide-up element and reveal it once
pub fn setup(view: &DomView, config: &RevealConfig) -> Result<(), JsValue> {
    let elements = query_all(view.document(), &class_selector(&config.animate_class))?;
    if elements.is_empty() {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(
        view.clone(),
        config.visible_class.clone(),
    )));

    let reveal = Rc::clone(&tracker);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut tracker = reveal.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if tracker.on_intersection(&DomNode(target.clone()), entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(_, _)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let mut tracker = tracker.borrow_mut();
    for el in elements {
        observer.observe(&el);
        tracker.watch(DomNode(el));
    }
    tracing::debug!(pending = tracker.pending(), "scroll reveal observing");
    Ok(())
}
