#![cfg(target_arch = "wasm32")]

use portfolio_core::config::{ModalConfig, PreferenceConfig, SettingsConfig};
use portfolio_core::{
    KeyOutcome, KeyPress, MemoryStore, ModalController, PreferenceStore, SettingsPanel, View,
};
use portfolio_ui::{DomNode, DomView, LocalStore};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Replace the body with `html` and return a fresh view
fn page(html: &str) -> DomView {
    let view = DomView::new().unwrap();
    view.body().0.set_inner_html(html);
    view
}

fn el(view: &DomView, id: &str) -> Element {
    view.document().get_element_by_id(id).unwrap()
}

#[wasm_bindgen_test]
fn modal_mounts_video_and_focuses_close() {
    let view = page(
        r##"<button id="trigger">Play</button>
           <div class="modal" id="demo">
             <button class="close-btn" id="close">x</button>
             <div id="videoPlayer"></div>
             <a href="#" id="more">more</a>
           </div>"##,
    );
    let mut modals =
        ModalController::new(view.clone(), view.by_id("videoPlayer"), ModalConfig::default());
    let trigger = DomNode(el(&view, "trigger"));
    trigger.0.unchecked_ref::<HtmlElement>().focus().unwrap();

    assert!(modals.open(view.by_id("demo"), Some("/v.mp4"), Some(trigger.clone())));

    let source = view
        .document()
        .query_selector("#videoPlayer video.modal-video source")
        .unwrap()
        .unwrap();
    assert_eq!(source.get_attribute("src").as_deref(), Some("/v.mp4"));
    assert!(el(&view, "demo").class_list().contains("active"));
    assert_eq!(view.active_element(), view.by_id("close"));
    let overflow = view.body().0.unchecked_ref::<HtmlElement>().style().get_property_value("overflow");
    assert_eq!(overflow.unwrap(), "hidden");

    assert!(modals.close(&DomNode(el(&view, "demo"))));
    assert_eq!(el(&view, "videoPlayer").child_element_count(), 0);
    assert_eq!(view.active_element(), Some(trigger));
}

#[wasm_bindgen_test]
fn focusable_query_skips_disabled_and_negative_tabindex() {
    let view = page(
        r#"<div id="box">
             <button id="a">a</button>
             <button disabled>b</button>
             <span tabindex="-1">c</span>
             <span tabindex="0" id="d">d</span>
             <input id="e">
           </div>"#,
    );
    let ids: Vec<String> = view
        .query_focusable(&DomNode(el(&view, "box")))
        .into_iter()
        .map(|n| n.0.id())
        .collect();
    assert_eq!(ids, ["a", "d", "e"]);
}

#[wasm_bindgen_test]
fn settings_write_root_variables() {
    let view = page(r#"<button class="color-button" data-color="orange" id="orange"></button>"#);
    let panel = SettingsPanel::new(
        view.clone(),
        MemoryStore::new(),
        Vec::new(),
        vec![DomNode(el(&view, "orange"))],
        PreferenceConfig::default(),
        SettingsConfig::default(),
    );

    panel.select_color(&DomNode(el(&view, "orange")));

    let root = view.root().0.unchecked_into::<HtmlElement>();
    assert_eq!(root.style().get_property_value("--primary-color").unwrap(), "#fd7e14");
    assert_eq!(root.style().get_property_value("--primary-color-rgb").unwrap(), "253, 126, 20");
    assert_eq!(root.get_attribute("data-color").as_deref(), Some("orange"));
    assert!(el(&view, "orange").class_list().contains("active"));
}

#[wasm_bindgen_test]
fn local_store_persists() {
    let store = LocalStore::open();
    store.set("portfolioTheme", "light");
    assert_eq!(store.get("portfolioTheme").as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn escape_closes_modals_shipped_active() {
    let view = page(
        r#"<div class="modal active" id="one"><button class="close-btn">x</button></div>
           <div class="modal" id="two"></div>
           <div class="modal active" id="three"></div>"#,
    );
    let mut modals = ModalController::new(view.clone(), None, ModalConfig::default());

    let ids: Vec<String> = modals.active_modals().into_iter().map(|n| n.0.id()).collect();
    assert_eq!(ids, ["one", "three"]);

    let outcome = modals.handle_page_key(&KeyPress::new("Escape", false));
    assert_eq!(outcome, KeyOutcome::ClosedAll(2));
    assert!(modals.active_modals().is_empty());
}
