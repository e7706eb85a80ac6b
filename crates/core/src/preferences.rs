//! Durable theme/color preferences

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::PreferenceConfig;

/// Key/value string storage that survives reloads (`localStorage` in the browser).
///
/// Implementations swallow storage failures: a failed read is `None`,
/// a failed write is dropped.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// In-memory store, used when `localStorage` is unavailable
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded store
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in items {
            store.set(key, value);
        }
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// The two persisted presentation preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub theme: String,
    pub color: String,
}

impl Preferences {
    /// Read both preferences, substituting defaults for missing or empty values.
    pub fn load(store: &impl PreferenceStore, config: &PreferenceConfig) -> Self {
        let read = |key: &str, default: &str| {
            store
                .get(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            theme: read(&config.theme_key, &config.default_theme),
            color: read(&config.color_key, &config.default_color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_when_empty() {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store, &PreferenceConfig::default());
        assert_eq!(prefs.theme, "dark");
        assert_eq!(prefs.color, "blue");
    }

    #[test]
    fn test_load_saved_values() {
        let store = MemoryStore::with_items([("portfolioTheme", "light"), ("portfolioColor", "red")]);
        let prefs = Preferences::load(&store, &PreferenceConfig::default());
        assert_eq!(prefs.theme, "light");
        assert_eq!(prefs.color, "red");
    }

    #[test]
    fn test_empty_value_falls_back() {
        let store = MemoryStore::with_items([("portfolioTheme", "")]);
        let prefs = Preferences::load(&store, &PreferenceConfig::default());
        assert_eq!(prefs.theme, "dark");
    }
}
