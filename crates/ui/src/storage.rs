use portfolio_core::{MemoryStore, PreferenceStore};
use web_sys::{window, Storage};

/// `localStorage`-backed preferences, falling back to memory when the
/// browser refuses storage access (private mode, sandboxed frames)
pub enum LocalStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl LocalStore {
    pub fn open() -> Self {
        match window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => Self::Local(storage),
            None => {
                tracing::info!("localStorage unavailable, preferences will not persist");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => storage.get_item(key).ok().flatten(),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            Self::Local(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    tracing::debug!(key, "localStorage write failed: {e:?}");
                }
            }
            Self::Memory(store) => store.set(key, value),
        }
    }
}
