//! Browser Key-Value Persistence
//!
//! Small wrapper around `window.localStorage` that stores serde values as JSON.
//! `MemoryStore` offers the same interface without a browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("storage {op} failed for `{key}`: {message}")]
    Access {
        op: &'static str,
        key: String,
        message: String,
    },

    #[error("stored value under `{key}` is not valid: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode value for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// True when the stored bytes exist but could not be decoded.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StorageError::Corrupt { .. })
    }
}

/// String key-value backend
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Short backend name for logs
    fn backend(&self) -> &'static str;
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `window.localStorage`
#[derive(Clone, Debug)]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        // Throws in some sandboxed iframes; returns None when disabled.
        let inner = window
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key).map_err(|e| StorageError::Access {
            op: "read",
            key: key.to_string(),
            message: js_message(e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set_item(key, value).map_err(|e| StorageError::Access {
            op: "write",
            key: key.to_string(),
            message: js_message(e),
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove_item(key).map_err(|e| StorageError::Access {
            op: "remove",
            key: key.to_string(),
            message: js_message(e),
        })
    }

    fn backend(&self) -> &'static str {
        "localStorage"
    }
}

/// In-process store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

/// Either backend behind one concrete type, so callers can fall back at runtime.
#[derive(Clone, Debug)]
pub enum AnyStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl AnyStore {
    /// Local storage when the browser allows it, memory otherwise.
    /// The second value is why local storage was skipped.
    pub fn open_or_memory() -> (Self, Option<StorageError>) {
        match LocalStorage::open() {
            Ok(local) => (AnyStore::Local(local), None),
            Err(e) => (AnyStore::Memory(MemoryStore::new()), Some(e)),
        }
    }
}

impl KeyValueStore for AnyStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            AnyStore::Local(s) => s.get(key),
            AnyStore::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            AnyStore::Local(s) => s.set(key, value),
            AnyStore::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match self {
            AnyStore::Local(s) => s.remove(key),
            AnyStore::Memory(s) => s.remove(key),
        }
    }

    fn backend(&self) -> &'static str {
        match self {
            AnyStore::Local(s) => s.backend(),
            AnyStore::Memory(s) => s.backend(),
        }
    }
}

/// Read and decode `key`. `Ok(None)` when nothing is stored.
pub fn load_json<T, S>(store: &S, key: &str) -> StorageResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        })
}

/// Encode `value` and overwrite whatever `key` held before.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}
