//! Collapsible navigation menu

use crate::config::NavConfig;
use crate::view::View;

/// Mobile menu toggle.
///
/// Open state lives in the navbar's `active` class; the icon glyph,
/// `aria-expanded` and the body scroll lock mirror it.
pub struct NavMenu<V: View> {
    view: V,
    toggle: V::Node,
    icon: Option<V::Node>,
    navbar: V::Node,
    config: NavConfig,
}

impl<V: View> NavMenu<V> {
    pub const fn new(
        view: V,
        toggle: V::Node,
        icon: Option<V::Node>,
        navbar: V::Node,
        config: NavConfig,
    ) -> Self {
        Self {
            view,
            toggle,
            icon,
            navbar,
            config,
        }
    }

    pub fn is_open(&self) -> bool {
        self.view.has_class(&self.navbar, &self.config.open_class)
    }

    /// Flip the menu, returning the new open state
    pub fn toggle(&self) -> bool {
        let open = !self.is_open();
        self.apply(open);
        tracing::debug!(open, "nav menu toggled");
        open
    }

    /// Collapse the menu after a link tap on narrow viewports.
    ///
    /// Width is read at click time; returns whether the menu was forced closed.
    pub fn close_for_link(&self, viewport_width: f64) -> bool {
        if viewport_width > self.config.mobile_breakpoint {
            return false;
        }
        self.apply(false);
        true
    }

    fn apply(&self, open: bool) {
        let view = &self.view;
        view.toggle_class(&self.navbar, &self.config.open_class, open);
        if let Some(icon) = &self.icon {
            view.toggle_class(icon, &self.config.icon_closed_class, !open);
            view.toggle_class(icon, &self.config.icon_open_class, open);
        }
        view.set_attribute(&self.toggle, "aria-expanded", if open { "true" } else { "false" });
        view.toggle_class(&view.body(), &self.config.no_scroll_class, open);
    }
}
