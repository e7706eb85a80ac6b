use std::rc::Rc;

use portfolio_core::config::NavConfig;
use portfolio_core::NavMenu;
use wasm_bindgen::prelude::*;

use super::{class_selector, on_click};
use crate::dom::{query_all, viewport_width, DomNode, DomView};

/// Bind the menu toggle and the navigation links
pub fn setup(view: &DomView, config: &NavConfig) -> Result<(), JsValue> {
    let (Some(toggle), Some(navbar)) = (view.by_id(&config.toggle_id), view.by_id(&config.navbar_id))
    else {
        tracing::debug!("no navigation menu on this page");
        return Ok(());
    };
    let icon = toggle.0.query_selector("i").ok().flatten().map(DomNode);
    let toggle_el = toggle.0.clone();

    let menu = Rc::new(NavMenu::new(view.clone(), toggle, icon, navbar, config.clone()));

    let menu_toggle = Rc::clone(&menu);
    on_click(&toggle_el, move || {
        menu_toggle.toggle();
    })?;

    let links = query_all(view.document(), &class_selector(&config.link_class))?;
    for link in &links {
        let menu_link = Rc::clone(&menu);
        on_click(link, move || {
            if let Some(width) = viewport_width() {
                menu_link.close_for_link(width);
            }
        })?;
    }

    tracing::debug!(links = links.len(), "navigation ready");
    Ok(())
}
