use modelgen_core::{MemoryStore, ScratchStore, StoreError};
use web_sys as web;

/// `window.localStorage` as a scratch store.
pub struct LocalStore {
    storage: web::Storage,
}

impl LocalStore {
    pub fn from_window(window: &web::Window) -> Option<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(e) => {
                log::warn!("[store] localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl ScratchStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&mut self, key: &str) {
        _ = self.storage.remove_item(key);
    }
}

/// Prefer localStorage; private browsing modes may deny it.
pub fn open(window: &web::Window) -> Box<dyn ScratchStore> {
    match LocalStore::from_window(window) {
        Some(s) => Box::new(s),
        None => {
            log::info!("[store] falling back to in-memory scratch store");
            Box::new(MemoryStore::new())
        }
    }
}
