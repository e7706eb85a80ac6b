//! One-shot scroll reveal
//!
//! Watched elements get the `visible` class the first time they
//! intersect the viewport and are then dropped from the watch list.

use crate::view::View;

pub struct RevealTracker<V: View> {
    view: V,
    visible_class: String,
    watched: Vec<V::Node>,
}

impl<V: View> RevealTracker<V> {
    pub fn new(view: V, visible_class: impl Into<String>) -> Self {
        Self {
            view,
            visible_class: visible_class.into(),
            watched: Vec::new(),
        }
    }

    pub fn watch(&mut self, node: V::Node) {
        if !self.watched.contains(&node) {
            self.watched.push(node);
        }
    }

    /// Number of elements still waiting to be revealed
    pub fn pending(&self) -> usize {
        self.watched.len()
    }

    /// Intersection callback for one entry.
    ///
    /// Returns `true` when the caller should stop observing `node`.
    pub fn on_intersection(&mut self, node: &V::Node, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        let Some(index) = self.watched.iter().position(|n| n == node) else {
            return false;
        };
        self.watched.swap_remove(index);
        self.view.toggle_class(node, &self.visible_class, true);
        true
    }
}
