//! Behaviour layer for the portfolio page
//!
//! Every component here is target independent: DOM access goes through
//! [`View`] and durable storage through [`PreferenceStore`]. The
//! `portfolio-ui` crate supplies the browser implementations.

pub mod config;
pub mod error;
pub mod modal;
pub mod nav;
pub mod palette;
pub mod preferences;
pub mod reveal;
pub mod settings;
pub mod view;

pub use config::PageConfig;
pub use error::{PortfolioError, Result};
pub use modal::{KeyOutcome, KeyPress, ModalController};
pub use nav::NavMenu;
pub use palette::{ColorKey, Swatch};
pub use preferences::{MemoryStore, PreferenceStore, Preferences};
pub use reveal::RevealTracker;
pub use settings::SettingsPanel;
pub use view::View;
