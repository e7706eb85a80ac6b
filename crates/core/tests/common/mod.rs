//! Recording fake of the page, standing in for the DOM in tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use portfolio_core::View;

pub type Node = usize;

pub const ROOT: Node = 0;
pub const BODY: Node = 1;

#[derive(Debug, Default)]
struct Element {
    parent: Option<Node>,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    focusable: bool,
    video: Option<String>,
}

#[derive(Debug, Default)]
struct Page {
    elements: Vec<Element>,
    focused: Option<Node>,
    key_trap: bool,
    trap_installs: usize,
}

/// Cheap-to-clone handle onto a shared fake page
#[derive(Debug, Clone)]
pub struct FakePage(Rc<RefCell<Page>>);

impl FakePage {
    pub fn new() -> Self {
        let page = Self(Rc::new(RefCell::new(Page::default())));
        page.add(None); // root
        page.add(Some(ROOT)); // body
        page
    }

    /// Create an element under `parent`
    pub fn add(&self, parent: Option<Node>) -> Node {
        let mut page = self.0.borrow_mut();
        page.elements.push(Element {
            parent,
            ..Element::default()
        });
        page.elements.len() - 1
    }

    pub fn add_focusable(&self, parent: Node) -> Node {
        let node = self.add(Some(parent));
        self.0.borrow_mut().elements[node].focusable = true;
        node
    }

    pub fn add_with_class(&self, parent: Node, class: &str) -> Node {
        let node = self.add(Some(parent));
        self.toggle_class(&node, class, true);
        node
    }

    pub fn mark(&self, node: Node, class: &str) {
        self.toggle_class(&node, class, true);
    }

    pub fn focus_node(&self, node: Node) {
        self.focus(&node);
    }

    pub fn with_attr(&self, node: Node, name: &str, value: &str) -> Node {
        self.set_attribute(&node, name, value);
        node
    }

    pub fn classes(&self, node: Node) -> Vec<String> {
        self.0.borrow().elements[node].classes.iter().cloned().collect()
    }

    pub fn attr(&self, node: Node, name: &str) -> Option<String> {
        self.attribute(&node, name)
    }

    pub fn style(&self, node: Node, property: &str) -> Option<String> {
        self.0.borrow().elements[node].style.get(property).cloned()
    }

    pub fn video(&self, node: Node) -> Option<String> {
        self.0.borrow().elements[node].video.clone()
    }

    pub fn focused(&self) -> Option<Node> {
        self.0.borrow().focused
    }

    pub fn key_trap(&self) -> bool {
        self.0.borrow().key_trap
    }

    pub fn trap_installs(&self) -> usize {
        self.0.borrow().trap_installs
    }

    fn is_descendant(&self, node: Node, ancestor: Node) -> bool {
        let page = self.0.borrow();
        let mut cursor = page.elements[node].parent;
        while let Some(n) = cursor {
            if n == ancestor {
                return true;
            }
            cursor = page.elements[n].parent;
        }
        false
    }
}

impl View for FakePage {
    type Node = Node;

    fn root(&self) -> Node {
        ROOT
    }

    fn body(&self) -> Node {
        BODY
    }

    fn toggle_class(&self, node: &Node, class: &str, on: bool) {
        let mut page = self.0.borrow_mut();
        let classes = &mut page.elements[*node].classes;
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn has_class(&self, node: &Node, class: &str) -> bool {
        self.0.borrow().elements[*node].classes.contains(class)
    }

    fn set_attribute(&self, node: &Node, name: &str, value: &str) {
        self.0.borrow_mut().elements[*node]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, node: &Node, name: &str) -> Option<String> {
        self.0.borrow().elements[*node].attrs.get(name).cloned()
    }

    fn set_style(&self, node: &Node, property: &str, value: Option<&str>) {
        let mut page = self.0.borrow_mut();
        let style = &mut page.elements[*node].style;
        match value {
            Some(v) => {
                style.insert(property.to_string(), v.to_string());
            }
            None => {
                style.remove(property);
            }
        }
    }

    fn focus(&self, node: &Node) {
        self.0.borrow_mut().focused = Some(*node);
    }

    fn active_element(&self) -> Option<Node> {
        self.focused()
    }

    fn query_focusable(&self, container: &Node) -> Vec<Node> {
        let count = self.0.borrow().elements.len();
        (0..count)
            .filter(|&n| self.0.borrow().elements[n].focusable && self.is_descendant(n, *container))
            .collect()
    }

    fn query_with_classes(&self, classes: &[&str]) -> Vec<Node> {
        let count = self.0.borrow().elements.len();
        (0..count)
            .filter(|n| !classes.is_empty() && classes.iter().all(|c| self.has_class(n, c)))
            .collect()
    }

    fn find_in(&self, container: &Node, class: &str) -> Option<Node> {
        let count = self.0.borrow().elements.len();
        (0..count).find(|&n| self.has_class(&n, class) && self.is_descendant(n, *container))
    }

    fn closest(&self, node: &Node, class: &str) -> Option<Node> {
        let mut cursor = Some(*node);
        while let Some(n) = cursor {
            if self.has_class(&n, class) {
                return Some(n);
            }
            cursor = self.0.borrow().elements[n].parent;
        }
        None
    }

    fn mount_video(&self, mount: &Node, src: &str) {
        self.0.borrow_mut().elements[*mount].video = Some(src.to_string());
    }

    fn clear_children(&self, node: &Node) {
        self.0.borrow_mut().elements[*node].video = None;
    }

    fn set_key_trap(&self, installed: bool) {
        let mut page = self.0.borrow_mut();
        if installed {
            page.trap_installs += 1;
        }
        page.key_trap = installed;
    }
}
