//! Type-safe Key-Value storage for TurboCart.
//!
//! Provides a small `localStorage`-style abstraction with automatic JSON
//! serialization and single-key snapshots.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use turbo_cache::{cache_key, Cache, FileStore, Snapshot};
//!
//! let store = Arc::new(FileStore::open("storage.json")?);
//! let cache = Cache::new(store);
//!
//! let slot = Snapshot::<Vec<Product>>::new(cache, cache_key!("@RocketShoes", "cart"));
//! slot.save(&cart)?;
//! let restored = slot.load()?;
//! ```

mod error;
mod file;
mod kv;
mod memory;
mod snapshot;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;
pub use snapshot::Snapshot;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore, Snapshot};
}
