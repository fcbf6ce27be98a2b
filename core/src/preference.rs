use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

/// Key-value backend for the few flags that outlive a game.
pub trait PreferenceStore {
    /// `None` when the key is absent or its value cannot be read back as a boolean.
    fn load_bool(&self, key: &str) -> Option<bool>;

    /// Best effort, failures are the store's to report.
    fn save_bool(&mut self, key: &str, value: bool);
}

/// In-memory store, for tests and hosts without persistent storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    values: BTreeMap<String, bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn save_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }
}

/// Mute switch, survives restarts and is saved on every toggle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundPreference {
    enabled: bool,
}

impl SoundPreference {
    pub const KEY: &'static str = "isSoundEnabled";

    /// Reads the stored flag, sound is off unless it was explicitly turned on
    pub fn load(store: &impl PreferenceStore) -> Self {
        let enabled = store.load_bool(Self::KEY).unwrap_or_default();
        log::debug!("Sound enabled: {}", enabled);
        Self { enabled }
    }

    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self, store: &mut impl PreferenceStore) -> bool {
        self.enabled = !self.enabled;
        store.save_bool(Self::KEY, self.enabled);
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_preference_defaults_to_muted() {
        let store = MemoryStore::new();
        assert!(!SoundPreference::load(&store).is_enabled());
    }

    #[test]
    fn toggle_persists_every_change() {
        let mut store = MemoryStore::new();
        let mut sound = SoundPreference::load(&store);

        assert!(sound.toggle(&mut store));
        assert_eq!(store.load_bool(SoundPreference::KEY), Some(true));
        assert!(SoundPreference::load(&store).is_enabled());

        assert!(!sound.toggle(&mut store));
        assert_eq!(store.load_bool(SoundPreference::KEY), Some(false));
        assert!(!SoundPreference::load(&store).is_enabled());
        assert_eq!(store.len(), 1);
    }
}
