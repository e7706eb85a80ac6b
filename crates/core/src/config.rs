//! Page configuration
//!
//! Describes the markup contract (ids, classes, attribute names) and the
//! tunables. Defaults match the shipped page; an inline JSON block may
//! override individual fields.

use serde::Deserialize;

use crate::error::{PortfolioError, Result};
use crate::palette::ColorKey;

/// Storage keys and fallback values for the two preferences
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreferenceConfig {
    pub theme_key: String,
    pub color_key: String,
    pub default_theme: String,
    pub default_color: String,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            theme_key: "portfolioTheme".to_string(),
            color_key: "portfolioColor".to_string(),
            default_theme: "dark".to_string(),
            default_color: "blue".to_string(),
        }
    }
}

/// Navigation menu markup
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_id: String,
    pub navbar_id: String,
    pub link_class: String,
    pub open_class: String,
    pub no_scroll_class: String,
    pub icon_closed_class: String,
    pub icon_open_class: String,
    /// Viewport width (CSS pixels) at or below which a link click collapses the menu
    pub mobile_breakpoint: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_id: "menu-toggle".to_string(),
            navbar_id: "navbar".to_string(),
            link_class: "nav-link".to_string(),
            open_class: "active".to_string(),
            no_scroll_class: "no-scroll".to_string(),
            icon_closed_class: "fa-bars".to_string(),
            icon_open_class: "fa-times".to_string(),
            mobile_breakpoint: 992.0,
        }
    }
}

/// Theme and color button markup
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub theme_button_class: String,
    pub color_button_class: String,
    pub theme_value_attr: String,
    pub color_value_attr: String,
    pub active_class: String,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            theme_button_class: "theme-button".to_string(),
            color_button_class: "color-button".to_string(),
            theme_value_attr: "data-theme-toggle".to_string(),
            color_value_attr: "data-color".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Modal video player markup
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub modal_class: String,
    pub active_class: String,
    pub close_class: String,
    pub backdrop_class: String,
    pub close_attr: String,
    pub target_attr: String,
    pub video_attr: String,
    pub player_id: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal_class: "modal".to_string(),
            active_class: "active".to_string(),
            close_class: "close-btn".to_string(),
            backdrop_class: "modal-backdrop".to_string(),
            close_attr: "data-modal-close".to_string(),
            target_attr: "data-modal-target".to_string(),
            video_attr: "data-video-path".to_string(),
            player_id: "videoPlayer".to_string(),
        }
    }
}

/// Scroll-reveal observer settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub animate_class: String,
    pub visible_class: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            animate_class: "animate-slide-up".to_string(),
            visible_class: "visible".to_string(),
            threshold: 0.1,
            root_margin: "0px".to_string(),
        }
    }
}

/// Full page configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub preferences: PreferenceConfig,
    pub nav: NavConfig,
    pub settings: SettingsConfig,
    pub modal: ModalConfig,
    pub reveal: RevealConfig,
}

impl PageConfig {
    /// Parse an override document. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an override document, falling back to defaults on any error.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring page config override: {e}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PortfolioError::InvalidThreshold(threshold));
        }
        let breakpoint = self.nav.mobile_breakpoint;
        if breakpoint.is_nan() || breakpoint <= 0.0 {
            return Err(PortfolioError::InvalidBreakpoint(breakpoint));
        }
        let default_color = &self.preferences.default_color;
        if default_color.parse::<ColorKey>().is_err() {
            return Err(PortfolioError::UnknownDefaultColor(default_color.clone()));
        }

        let required = [
            ("preferences.theme_key", &self.preferences.theme_key),
            ("preferences.color_key", &self.preferences.color_key),
            ("preferences.default_theme", &self.preferences.default_theme),
            ("modal.active_class", &self.modal.active_class),
            ("modal.modal_class", &self.modal.modal_class),
            ("reveal.visible_class", &self.reveal.visible_class),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(PortfolioError::EmptyField(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.preferences.theme_key, "portfolioTheme");
        assert_eq!(config.preferences.color_key, "portfolioColor");
        assert!((config.nav.mobile_breakpoint - 992.0).abs() < f64::EPSILON);
        assert!((config.reveal.threshold - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(r#"{"nav": {"mobile_breakpoint": 768}}"#).unwrap();
        assert!((config.nav.mobile_breakpoint - 768.0).abs() < f64::EPSILON);
        assert_eq!(config.nav.navbar_id, "navbar");
        assert_eq!(config.modal, ModalConfig::default());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = PageConfig::from_json(r#"{"reveal": {"threshold": 1.5}}"#).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidThreshold(_)));
    }

    #[test]
    fn test_unknown_default_color_rejected() {
        let err = PageConfig::from_json(r#"{"preferences": {"default_color": "teal"}}"#)
            .unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownDefaultColor(ref c) if c == "teal"));
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let config = PageConfig::from_json_or_default(Some("{not json"));
        assert_eq!(config, PageConfig::default());
        assert_eq!(PageConfig::from_json_or_default(None), PageConfig::default());
    }
}
