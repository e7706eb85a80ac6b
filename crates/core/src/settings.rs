//! Theme and accent color switcher

use crate::config::{PreferenceConfig, SettingsConfig};
use crate::palette;
use crate::preferences::{PreferenceStore, Preferences};
use crate::view::View;

const THEME_ATTR: &str = "data-theme";
const COLOR_ATTR: &str = "data-color";

/// CSS custom properties written on the document root
pub const PRIMARY_COLOR_VAR: &str = "--primary-color";
pub const HIGHLIGHT_COLOR_VAR: &str = "--highlight-color";
pub const PRIMARY_RGB_VAR: &str = "--primary-color-rgb";

/// Theme/color buttons and the preferences behind them.
pub struct SettingsPanel<V: View, S: PreferenceStore> {
    view: V,
    store: S,
    theme_buttons: Vec<V::Node>,
    color_buttons: Vec<V::Node>,
    prefs: PreferenceConfig,
    config: SettingsConfig,
}

impl<V: View, S: PreferenceStore> SettingsPanel<V, S> {
    pub const fn new(
        view: V,
        store: S,
        theme_buttons: Vec<V::Node>,
        color_buttons: Vec<V::Node>,
        prefs: PreferenceConfig,
        config: SettingsConfig,
    ) -> Self {
        Self {
            view,
            store,
            theme_buttons,
            color_buttons,
            prefs,
            config,
        }
    }

    /// Current stored preferences (defaults substituted)
    pub fn preferences(&self) -> Preferences {
        Preferences::load(&self.store, &self.prefs)
    }

    /// Apply stored preferences to the page. Run once at startup.
    pub fn apply_saved(&self) -> Preferences {
        let saved = self.preferences();
        let root = self.view.root();

        self.view.set_attribute(&root, THEME_ATTR, &saved.theme);
        self.mark_matching(&self.theme_buttons, &self.config.theme_value_attr, &saved.theme);

        self.view.set_attribute(&root, COLOR_ATTR, &saved.color);
        self.set_primary_color(&saved.color);
        self.mark_matching(&self.color_buttons, &self.config.color_value_attr, &saved.color);

        tracing::debug!(theme = %saved.theme, color = %saved.color, "applied saved settings");
        saved
    }

    /// Write the palette entry for `key` into the root CSS variables.
    ///
    /// Unknown keys leave the variables untouched and return `false`.
    pub fn set_primary_color(&self, key: &str) -> bool {
        let Some(swatch) = palette::lookup(key) else {
            tracing::debug!(key, "unknown color key");
            return false;
        };
        let root = self.view.root();
        self.view.set_style(&root, PRIMARY_COLOR_VAR, Some(swatch.hex));
        self.view.set_style(&root, HIGHLIGHT_COLOR_VAR, Some(swatch.hex));
        self.view
            .set_style(&root, PRIMARY_RGB_VAR, Some(&swatch.rgb_triplet()));
        true
    }

    /// Theme button click. Returns the applied theme.
    pub fn select_theme(&self, button: &V::Node) -> Option<String> {
        let theme = self.view.attribute(button, &self.config.theme_value_attr)?;
        self.view.set_attribute(&self.view.root(), THEME_ATTR, &theme);
        self.store.set(&self.prefs.theme_key, &theme);
        self.activate_only(&self.theme_buttons, button);
        tracing::debug!(%theme, "theme selected");
        Some(theme)
    }

    /// Color button click. Returns the applied color key.
    pub fn select_color(&self, button: &V::Node) -> Option<String> {
        let color = self.view.attribute(button, &self.config.color_value_attr)?;
        self.view.set_attribute(&self.view.root(), COLOR_ATTR, &color);
        self.store.set(&self.prefs.color_key, &color);
        self.set_primary_color(&color);
        self.activate_only(&self.color_buttons, button);
        tracing::debug!(%color, "color selected");
        Some(color)
    }

    fn mark_matching(&self, buttons: &[V::Node], attr: &str, value: &str) {
        for button in buttons {
            let matches = self.view.attribute(button, attr).as_deref() == Some(value);
            self.view.toggle_class(button, &self.config.active_class, matches);
        }
    }

    fn activate_only(&self, buttons: &[V::Node], chosen: &V::Node) {
        for button in buttons {
            self.view.toggle_class(button, &self.config.active_class, false);
        }
        self.view.toggle_class(chosen, &self.config.active_class, true);
    }
}
