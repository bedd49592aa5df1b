//! Single-key typed snapshots.

use crate::{Cache, CacheError};
use serde::{de::DeserializeOwned, Serialize};

/// A typed value persisted wholesale under one fixed key.
///
/// Every [`save`](Snapshot::save) overwrites the previous value; there is
/// no versioning and the last writer wins.
///
/// # Example
///
/// ```rust,ignore
/// use turbo_cache::{Cache, MemoryStore, Snapshot};
///
/// let cache = Cache::new(Arc::new(MemoryStore::new()));
/// let slot = Snapshot::<Vec<Product>>::new(cache, "@RocketShoes:cart");
///
/// slot.save(&cart)?;
/// let restored = slot.load()?.unwrap_or_default();
/// ```
pub struct Snapshot<T> {
    cache: Cache,
    key: String,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> Snapshot<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind a snapshot slot to `key` in `cache`.
    pub fn new(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// The key this slot is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the snapshot, `None` if nothing was ever saved.
    pub fn load(&self) -> Result<Option<T>, CacheError> {
        self.cache.get(&self.key)
    }

    /// Overwrite the snapshot.
    pub fn save(&self, value: &T) -> Result<(), CacheError> {
        self.cache.set(&self.key, value)
    }

    /// Remove the snapshot.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.cache.delete(&self.key)
    }

    /// Raw serialized form, if present.
    pub fn raw(&self) -> Result<Option<String>, CacheError> {
        self.cache.get_raw(&self.key)
    }
}

impl<T> std::fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot").field("key", &self.key).finish()
    }
}
