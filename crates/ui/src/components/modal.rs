use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::config::ModalConfig;
use portfolio_core::{KeyOutcome, KeyPress, ModalController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use super::{class_selector, on_click};
use crate::dom::{query_all, DomNode, DomView};

type Controller = Rc<RefCell<ModalController<DomView>>>;

/// Bind modal triggers, close controls, Escape and the focus trap
pub fn setup(view: &DomView, config: &ModalConfig) -> Result<(), JsValue> {
    let doc = view.document();
    let player = view.by_id(&config.player_id);
    let controller: Controller = Rc::new(RefCell::new(ModalController::new(
        view.clone(),
        player,
        config.clone(),
    )));

    // Focus trap: attached by the controller only while a session is open
    let ctrl = Rc::clone(&controller);
    let trap = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if let Ok(mut modals) = ctrl.try_borrow_mut() {
            apply(&e, modals.handle_key(&key_press(&e)));
        }
    }) as Box<dyn FnMut(_)>);
    view.set_trap_handler(trap.as_ref().unchecked_ref::<js_sys::Function>().clone());
    trap.forget();

    let triggers = query_all(doc, &format!("[{}]", config.target_attr))?;
    for trigger in &triggers {
        let ctrl = Rc::clone(&controller);
        let view = view.clone();
        let config = config.clone();
        let trigger_node = DomNode(trigger.clone());
        on_click(trigger, move || {
            let modal = trigger_node
                .0
                .get_attribute(&config.target_attr)
                .and_then(|id| view.by_id(&id));
            let video = trigger_node.0.get_attribute(&config.video_attr);
            if let Ok(mut modals) = ctrl.try_borrow_mut() {
                modals.open(modal, video.as_deref(), Some(trigger_node.clone()));
            }
        })?;
    }

    let close_selector = format!(
        "[{}], {}, {}",
        config.close_attr,
        class_selector(&config.close_class),
        class_selector(&config.backdrop_class)
    );
    for control in query_all(doc, &close_selector)? {
        let ctrl = Rc::clone(&controller);
        let node = DomNode(control.clone());
        on_click(&control, move || {
            if let Ok(mut modals) = ctrl.try_borrow_mut() {
                modals.close_containing(&node);
            }
        })?;
    }

    let ctrl = Rc::clone(&controller);
    let page_keys = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if let Ok(mut modals) = ctrl.try_borrow_mut() {
            apply(&e, modals.handle_page_key(&key_press(&e)));
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", page_keys.as_ref().unchecked_ref())?;
    page_keys.forget();

    tracing::debug!(triggers = triggers.len(), "modal player ready");
    Ok(())
}

fn key_press(e: &KeyboardEvent) -> KeyPress {
    KeyPress::new(e.key(), e.shift_key())
}

fn apply(e: &KeyboardEvent, outcome: KeyOutcome) {
    match outcome {
        KeyOutcome::Wrapped => e.prevent_default(),
        KeyOutcome::ClosedAll(closed) => tracing::debug!(closed, "escape closed modals"),
        KeyOutcome::Ignored => {}
    }
}
