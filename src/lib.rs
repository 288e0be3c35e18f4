//! Med-Supply Frontend Core
//!
//! Data layer of the medical supply stock dashboard:
//! - api: bindings to the remote article service
//! - store: in-memory article cache
//! - inventory: cache-aware facade with optimistic mutations
//! - context: inventory signals shared with the view tree
//! - stock, usage, listing, forms: derived values and input handling for views

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod forms;
pub mod inventory;
pub mod listing;
pub mod logging;
pub mod models;
pub mod stock;
pub mod store;
pub mod usage;

pub use api::{ArticleApi, HttpArticleApi};
pub use config::ClientConfig;
pub use error::{ApiError, InventoryError, ValidationError};
pub use inventory::{Inventory, LoadStatus};
pub use models::{Article, ArticleId, ArticlePatch, NewArticle, StockStatus, UsagePoint, UsageRecord};
pub use store::ArticleCache;

/// Inventory wired to the real article service
pub type AppInventory = Inventory<HttpArticleApi>;

/// Build an [`AppInventory`] from configuration
pub fn connect(config: &ClientConfig) -> AppInventory {
    log::info!("[Inventory] using article service at {}", config.api_base_url);
    Inventory::new(HttpArticleApi::new(config), config)
}
