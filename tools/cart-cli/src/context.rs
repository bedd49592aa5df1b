//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::debug;
use turbo_cache::{Cache, FileStore};
use turbo_cart::{CartStore, Catalog, InMemoryStorefront, StockService};
use turbo_data::StorefrontApi;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, in lookup order.
const CONFIG_NAMES: [&str; 3] = ["cart.toml", ".cart.toml", "cart.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find the nearest config file, walking up from `start`.
    fn find_config(start: &Path) -> Option<CliConfig> {
        start
            .ancestors()
            .flat_map(|dir| CONFIG_NAMES.iter().map(move |name| dir.join(name)))
            .filter(|path| path.is_file())
            .find_map(|path| CliConfig::load(path.to_str()?).ok())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Get the storage file path.
    pub fn storage_path(&self) -> PathBuf {
        match &self.config.storage.path {
            Some(path) => self.resolve_path(path),
            None => dirs_path().join("turbo-cart").join("storage.json"),
        }
    }

    /// Open the cart store.
    ///
    /// With a fixture the storefront is served from that file; otherwise
    /// lookups go to the configured API.
    pub fn open_store(&self, fixture: Option<&str>) -> Result<CartStore> {
        let storage = self.storage_path();
        let kv = FileStore::open(&storage)
            .with_context(|| format!("Failed to open storage: {}", storage.display()))?;

        let (stock, catalog): (Arc<dyn StockService>, Arc<dyn Catalog>) = match fixture {
            Some(path) => {
                let path = self.resolve_path(path);
                let storefront = InMemoryStorefront::load(&path)
                    .with_context(|| format!("Failed to load fixture: {}", path.display()))?;
                let storefront = Arc::new(storefront);
                (storefront.clone(), storefront)
            }
            None => {
                let api = Arc::new(StorefrontApi::from_config(&self.config.api));
                (api.clone(), api)
            }
        };

        debug!(path = %storage.display(), fixture = fixture.is_some(), "opening cart store");

        Ok(CartStore::initialize(
            &self.config.store,
            Cache::new(Arc::new(kv)),
            stock,
            catalog,
        )
        .with_notifier(Arc::new(self.output.clone())))
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}
