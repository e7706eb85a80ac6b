//! View boundary between the behaviour components and the page
//!
//! Components never touch the DOM directly; they ask a `View` to toggle
//! classes, write attributes and move focus. The browser implementation
//! lives in `portfolio-ui`, tests substitute a recording fake.

/// Capabilities the components need from the rendered page.
pub trait View {
    /// Handle to a single element. Equality must mean "same element".
    type Node: Clone + PartialEq;

    /// The document root (`<html>`), target of theme attributes and CSS variables.
    fn root(&self) -> Self::Node;

    /// The `<body>` element, target of scroll locks.
    fn body(&self) -> Self::Node;

    /// Add `class` when `on`, remove it otherwise.
    fn toggle_class(&self, node: &Self::Node, class: &str, on: bool);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Set an inline style property; `None` clears it.
    fn set_style(&self, node: &Self::Node, property: &str, value: Option<&str>);

    fn focus(&self, node: &Self::Node);

    /// Element currently holding keyboard focus.
    fn active_element(&self) -> Option<Self::Node>;

    /// Sequentially focusable descendants of `container`, in document order.
    fn query_focusable(&self, container: &Self::Node) -> Vec<Self::Node>;

    /// Elements anywhere in the document carrying every class in `classes`, in document order.
    fn query_with_classes(&self, classes: &[&str]) -> Vec<Self::Node>;

    /// First descendant of `container` carrying `class`.
    fn find_in(&self, container: &Self::Node, class: &str) -> Option<Self::Node>;

    /// Nearest ancestor-or-self carrying `class`.
    fn closest(&self, node: &Self::Node, class: &str) -> Option<Self::Node>;

    /// Replace the children of `mount` with an autoplaying video of `src`.
    fn mount_video(&self, mount: &Self::Node, src: &str);

    fn clear_children(&self, node: &Self::Node);

    /// Install or remove the document-level focus-trap keydown listener.
    fn set_key_trap(&self, installed: bool);
}
