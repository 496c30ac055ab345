// src/storage.rs

use std::collections::{HashMap, HashSet};

/// Synchronous string key/value store. Reads that find nothing return `None`;
/// writes never fail from the caller's point of view.
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value.to_string());
        store
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

/// Snapshot of the values eframe persisted for us. eframe only hands out its
/// storage at startup and in `App::save`, so writes are kept here and pushed
/// back with `flush_into`.
#[derive(Debug, Default)]
pub struct EframeStore {
    values: MemoryStore,
    dirty: HashSet<String>,
}

impl EframeStore {
    pub fn load(storage: Option<&dyn eframe::Storage>, keys: &[&str]) -> Self {
        let mut values = MemoryStore::new();
        if let Some(storage) = storage {
            for key in keys {
                if let Some(value) = storage.get_string(key) {
                    values.set(key, value);
                }
            }
        }
        Self {
            values,
            dirty: HashSet::new(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn flush_into(&mut self, storage: &mut dyn eframe::Storage) {
        if self.dirty.is_empty() {
            return;
        }
        for key in self.dirty.drain() {
            if let Some(value) = self.values.get(&key) {
                storage.set_string(&key, value);
            }
        }
        storage.flush();
        log::debug!("persisted store flushed");
    }
}

impl ScoreStore for EframeStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.set(key, value);
        self.dirty.insert(key.to_string());
    }
}

/// The browser's `window.localStorage`, read and written in place.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, scores will not survive a reload");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: String) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, &value) {
                log::warn!("localStorage write for {key} failed: {err:?}");
            }
        }
    }
}
