//! `web_sys` implementation of the core `View`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_core::View;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};

/// Sequentially focusable elements inside a modal
pub const FOCUSABLE_SELECTOR: &str = "button:not([disabled]), [href], input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

const VIDEO_FALLBACK: &str = "Your browser does not support the video tag.";

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Current viewport width in CSS pixels
pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

/// Element handle compared by identity
#[derive(Debug, Clone)]
pub struct DomNode(pub Element);

impl PartialEq for DomNode {
    fn eq(&self, other: &Self) -> bool {
        let a: &JsValue = self.0.as_ref();
        let b: &JsValue = other.0.as_ref();
        a == b
    }
}

impl From<Element> for DomNode {
    fn from(el: Element) -> Self {
        Self(el)
    }
}

/// The focus-trap keydown listener and whether it is attached
#[derive(Default)]
struct KeyTrap {
    handler: RefCell<Option<js_sys::Function>>,
    installed: Cell<bool>,
}

/// Live page view
#[derive(Clone)]
pub struct DomView {
    document: Document,
    root: DomNode,
    body: DomNode,
    trap: Rc<KeyTrap>,
}

impl DomView {
    pub fn new() -> Result<Self, JsValue> {
        let document = get_document().ok_or("No document")?;
        let root = document.document_element().ok_or("No document element")?;
        let body = document.body().ok_or("No body")?;
        Ok(Self {
            document,
            root: root.into(),
            body: DomNode(body.into()),
            trap: Rc::new(KeyTrap::default()),
        })
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    pub fn by_id(&self, id: &str) -> Option<DomNode> {
        self.document.get_element_by_id(id).map(DomNode)
    }

    /// Register the listener `set_key_trap` attaches and detaches.
    pub fn set_trap_handler(&self, handler: js_sys::Function) {
        *self.trap.handler.borrow_mut() = Some(handler);
    }
}

impl View for DomView {
    type Node = DomNode;

    fn root(&self) -> DomNode {
        self.root.clone()
    }

    fn body(&self) -> DomNode {
        self.body.clone()
    }

    fn toggle_class(&self, node: &DomNode, class: &str, on: bool) {
        let list = node.0.class_list();
        let _ = if on { list.add_1(class) } else { list.remove_1(class) };
    }

    fn has_class(&self, node: &DomNode, class: &str) -> bool {
        node.0.class_list().contains(class)
    }

    fn set_attribute(&self, node: &DomNode, name: &str, value: &str) {
        let _ = node.0.set_attribute(name, value);
    }

    fn attribute(&self, node: &DomNode, name: &str) -> Option<String> {
        node.0.get_attribute(name)
    }

    fn set_style(&self, node: &DomNode, property: &str, value: Option<&str>) {
        if let Some(html_el) = node.0.dyn_ref::<HtmlElement>() {
            let style = html_el.style();
            let _ = match value {
                Some(v) => style.set_property(property, v),
                None => style.remove_property(property).map(drop),
            };
        }
    }

    fn focus(&self, node: &DomNode) {
        if let Some(html_el) = node.0.dyn_ref::<HtmlElement>() {
            let _ = html_el.focus();
        }
    }

    fn active_element(&self) -> Option<DomNode> {
        self.document.active_element().map(DomNode)
    }

    fn query_focusable(&self, container: &DomNode) -> Vec<DomNode> {
        let Ok(list) = container.0.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomNode)
            .collect()
    }

    fn query_with_classes(&self, classes: &[&str]) -> Vec<DomNode> {
        let selector: String = classes.iter().map(|c| format!(".{c}")).collect();
        if selector.is_empty() {
            return Vec::new();
        }
        query_all(&self.document, &selector)
            .unwrap_or_default()
            .into_iter()
            .map(DomNode)
            .collect()
    }

    fn find_in(&self, container: &DomNode, class: &str) -> Option<DomNode> {
        container
            .0
            .query_selector(&format!(".{class}"))
            .ok()
            .flatten()
            .map(DomNode)
    }

    fn closest(&self, node: &DomNode, class: &str) -> Option<DomNode> {
        node.0.closest(&format!(".{class}")).ok().flatten().map(DomNode)
    }

    fn mount_video(&self, mount: &DomNode, src: &str) {
        if let Err(e) = build_video(&self.document, &mount.0, src) {
            tracing::warn!("could not build video element: {e:?}");
        }
    }

    fn clear_children(&self, node: &DomNode) {
        node.0.set_inner_html("");
    }

    fn set_key_trap(&self, installed: bool) {
        if self.trap.installed.get() == installed {
            return;
        }
        let Some(handler) = self.trap.handler.borrow().clone() else {
            return;
        };
        let result = if installed {
            self.document
                .add_event_listener_with_callback("keydown", &handler)
        } else {
            self.document
                .remove_event_listener_with_callback("keydown", &handler)
        };
        if result.is_ok() {
            self.trap.installed.set(installed);
        }
    }
}

/// `<video class="modal-video" controls autoplay><source src type="video/mp4">…</video>`
fn build_video(doc: &Document, mount: &Element, src: &str) -> Result<(), JsValue> {
    let video = doc.create_element("video")?;
    video.set_class_name("modal-video");
    video.set_attribute("controls", "")?;
    video.set_attribute("autoplay", "")?;

    let source = doc.create_element("source")?;
    source.set_attribute("src", src)?;
    source.set_attribute("type", "video/mp4")?;
    video.append_child(&source)?;
    video.append_child(&doc.create_text_node(VIDEO_FALLBACK))?;

    mount.set_inner_html("");
    mount.append_child(&video)?;
    Ok(())
}
