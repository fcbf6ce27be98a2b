use concentration_core::PreferenceStore;
use gloo::storage::{LocalStorage, Storage};

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Browser local storage, values are stored JSON encoded.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct LocalStore;

impl PreferenceStore for LocalStore {
    fn load_bool(&self, key: &str) -> Option<bool> {
        match LocalStorage::get(key) {
            Ok(value) => Some(value),
            Err(gloo::storage::errors::StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                log::warn!("Ignoring unreadable {:?} in local storage: {:?}", key, err);
                None
            }
        }
    }

    fn save_bool(&mut self, key: &str, value: bool) {
        if let Err(err) = LocalStorage::set(key, value) {
            log::error!("Could not save {:?} to local storage: {:?}", key, err);
        }
    }
}
