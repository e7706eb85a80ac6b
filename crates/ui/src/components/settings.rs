use std::rc::Rc;

use portfolio_core::{PageConfig, SettingsPanel};
use wasm_bindgen::prelude::*;

use super::{class_selector, on_click};
use crate::dom::{query_all, DomNode, DomView};
use crate::storage::LocalStore;

/// Apply saved theme/color and bind the switcher buttons
pub fn setup(view: &DomView, config: &PageConfig) -> Result<(), JsValue> {
    let doc = view.document();
    let theme_els = query_all(doc, &class_selector(&config.settings.theme_button_class))?;
    let color_els = query_all(doc, &class_selector(&config.settings.color_button_class))?;

    let panel = Rc::new(SettingsPanel::new(
        view.clone(),
        LocalStore::open(),
        theme_els.iter().cloned().map(DomNode).collect(),
        color_els.iter().cloned().map(DomNode).collect(),
        config.preferences.clone(),
        config.settings.clone(),
    ));
    panel.apply_saved();

    for el in theme_els {
        let panel = Rc::clone(&panel);
        let button = DomNode(el.clone());
        on_click(&el, move || {
            panel.select_theme(&button);
        })?;
    }
    for el in color_els {
        let panel = Rc::clone(&panel);
        let button = DomNode(el.clone());
        on_click(&el, move || {
            panel.select_color(&button);
        })?;
    }
    Ok(())
}
