//! Browser `localStorage` adapters for the cached task list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cache is best-effort, not a durable store: every read/write failure
//! is swallowed (logged in the browser build) and degrades to "no data".
//! The generic JSON helpers centralize the web-sys glue; the [`TaskStore`]
//! trait is the seam pages depend on, injected via [`StoreContext`] instead
//! of referenced as an ambient global.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

use tasks::Task;

/// `localStorage` key holding the serialized task list.
pub const STORAGE_KEY: &str = "tasks";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding unparsable stored value for {key:?}: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; skipping write for {key:?}");
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("localStorage write failed for {key:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Storage adapter for the cached task list.
///
/// Both operations are infallible at the interface: failures are handled
/// inside the implementation and surface as "no data". Mutation handlers
/// read-modify-write through this trait, so implementations must serialize
/// access on hosts where callers could overlap.
pub trait TaskStore: Send + Sync {
    /// Read the cached list. Missing or unparsable data loads as empty.
    fn load(&self) -> Vec<Task>;
    /// Replace the cached list wholesale.
    fn store(&self, tasks: &[Task]);
}

/// `localStorage`-backed store under the fixed [`STORAGE_KEY`].
///
/// Outside the browser build every operation is an inert no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl TaskStore for LocalStore {
    fn load(&self) -> Vec<Task> {
        load_json(STORAGE_KEY).unwrap_or_default()
    }

    fn store(&self, tasks: &[Task]) {
        save_json(STORAGE_KEY, &tasks);
    }
}

/// In-memory store mirroring `localStorage` semantics: a single serialized
/// string cell behind a lock. Used as the native default and as the test
/// double.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    cell: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    /// Seed the cell with raw serialized content. Tests use this to model
    /// corrupt storage.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self {
            cell: Arc::new(Mutex::new(Some(raw.to_owned()))),
        }
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> Vec<Task> {
        let Ok(cell) = self.cell.lock() else {
            return Vec::new();
        };
        cell.as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    fn store(&self, tasks: &[Task]) {
        if let (Ok(raw), Ok(mut cell)) = (serde_json::to_string(tasks), self.cell.lock()) {
            *cell = Some(raw);
        }
    }
}

/// Store handle provided through Leptos context.
#[derive(Clone)]
pub struct StoreContext(pub Arc<dyn TaskStore>);

/// Build the store for the current build: `localStorage` in the browser,
/// in-memory otherwise.
#[must_use]
pub fn default_store() -> StoreContext {
    #[cfg(feature = "csr")]
    {
        StoreContext(Arc::new(LocalStore))
    }
    #[cfg(not(feature = "csr"))]
    {
        StoreContext(Arc::new(MemoryStore::default()))
    }
}
