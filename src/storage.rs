//! Storage
//!
//! The persistence adapter: a key-value store abstraction, the JSON cart
//! codec, and the last-order convenience key.

use std::{fs, io, path::PathBuf};

use rustc_hash::FxHashMap;
use rusty_money::iso;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{basket::Basket, catalog::Catalog};

/// Storage key holding the serialized cart.
pub const CART_KEY: &str = "bikemart_cart_v1";

/// Storage key holding the most recently generated order id.
pub const LAST_ORDER_KEY: &str = "bm_last_order_id";

/// Errors raised by the backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error accessing the backing store
    #[error("Failed to access backing store: {0}")]
    Io(#[from] io::Error),

    /// Serialization error encoding or decoding a stored value
    #[error("Failed to encode stored value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A durable string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// An in-memory store, for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);

        Ok(())
    }
}

/// A store persisting all keys as a single JSON object file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file is created on first write; a missing file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<FxHashMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(FxHashMap::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_entries(&self, entries: &FxHashMap<String, String>) -> Result<(), StorageError> {
        let contents = serde_json::to_string(entries)?;

        fs::write(&self.path, contents)?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;

        entries.insert(key.to_string(), value.to_string());

        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;

        entries.remove(key);

        self.write_entries(&entries)
    }
}

/// One persisted cart line: the product reference is dropped and only the id
/// and quantity survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLine {
    /// Product id
    pub id: String,

    /// Units held
    pub qty: u32,
}

/// Serialize the basket under [`CART_KEY`] as a JSON array of `{id, qty}`.
///
/// Lines whose product no longer resolves against the catalog are skipped.
///
/// # Errors
///
/// Returns a `StorageError` if encoding or the store write fails.
pub fn save_cart<S: KeyValueStore>(
    store: &mut S,
    basket: &Basket<'_>,
    catalog: &Catalog<'_>,
) -> Result<(), StorageError> {
    let saved: Vec<SavedLine> = basket
        .iter()
        .filter_map(|line| {
            catalog.get(line.product()).map(|product| SavedLine {
                id: product.id.clone(),
                qty: line.quantity(),
            })
        })
        .collect();

    let payload = serde_json::to_string(&saved)?;

    store.set(CART_KEY, &payload)
}

/// Rebuild a basket from the store, resolving ids against the live catalog.
///
/// This never fails: absent, malformed or corrupt data, and store read
/// errors, all produce an empty basket. Ids no longer present in the catalog
/// and zero quantities are silently dropped.
pub fn load_cart<'a, S: KeyValueStore>(store: &S, catalog: &Catalog<'a>) -> Basket<'a> {
    let currency = catalog.currency().unwrap_or(iso::INR);
    let mut basket = Basket::new(currency);

    let Ok(Some(raw)) = store.get(CART_KEY) else {
        return basket;
    };

    let Ok(saved) = serde_json::from_str::<Vec<SavedLine>>(&raw) else {
        return basket;
    };

    for line in saved {
        let Some(key) = catalog.resolve(&line.id) else {
            continue;
        };

        let Some(product) = catalog.get(key) else {
            continue;
        };

        if basket.add(key, product.price, line.qty).is_err() {
            continue;
        }
    }

    basket
}

/// Record the most recently generated order id.
///
/// # Errors
///
/// Returns a `StorageError` if the store write fails.
pub fn save_last_order<S: KeyValueStore>(store: &mut S, order_id: &str) -> Result<(), StorageError> {
    store.set(LAST_ORDER_KEY, order_id)
}

/// The most recently generated order id, used to prefill the tracking form.
pub fn load_last_order<S: KeyValueStore>(store: &S) -> Option<String> {
    store.get(LAST_ORDER_KEY).ok().flatten()
}
