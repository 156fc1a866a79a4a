//! Persistent Storage
//!
//! Key-value storage seam for the todo collection. The whole collection is
//! stored as one JSON array under a single key.
//! Implementations: browser `localStorage`, shared in-memory map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::models::Todo;

/// Default key holding the serialized collection
pub const STORAGE_KEY: &str = "todos";

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Unavailable(String),
    Read(String),
    Write(String),
    Malformed(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Write failed: {}", msg),
            StorageError::Malformed(msg) => write!(f, "Malformed data: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Malformed(e.to_string())
    }
}

/// Flat string key-value store
pub trait KeyValueStorage {
    /// Value under `key`, `None` when the key was never written
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn new() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no global window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read(js_error(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_error(e)))
    }
}

/// In-memory storage; clones share the same map
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ========================
// Collection Codec
// ========================

pub fn encode_todos(todos: &[Todo]) -> StorageResult<String> {
    Ok(serde_json::to_string(todos)?)
}

pub fn decode_todos(raw: &str) -> StorageResult<Vec<Todo>> {
    Ok(serde_json::from_str(raw)?)
}

/// Read the persisted collection, `None` when nothing was stored yet
pub fn load_todos(storage: &dyn KeyValueStorage, key: &str) -> StorageResult<Option<Vec<Todo>>> {
    match storage.get_item(key)? {
        Some(raw) => decode_todos(&raw).map(Some),
        None => Ok(None),
    }
}

/// Overwrite the persisted collection in full
pub fn save_todos(storage: &dyn KeyValueStorage, key: &str, todos: &[Todo]) -> StorageResult<()> {
    let raw = encode_todos(todos)?;
    storage.set_item(key, &raw)
}
