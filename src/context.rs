//! Application Context
//!
//! Inventory state shared with the view tree via the Leptos Context API.

use leptos::prelude::*;

use crate::api::ArticleApi;
use crate::inventory::{Inventory, LoadStatus};
use crate::models::Article;

/// Read-only inventory signals provided via context
#[derive(Clone)]
pub struct InventoryContext {
    /// Load state of the article list
    pub status: ArcReadSignal<LoadStatus>,
    /// Articles as last published by the inventory
    pub articles: ArcReadSignal<Vec<Article>>,
}

impl InventoryContext {
    pub fn new<A: ArticleApi + 'static>(inventory: &Inventory<A>) -> Self {
        Self {
            status: inventory.status(),
            articles: inventory.articles(),
        }
    }
}

/// Make the inventory's signals available to child components
pub fn provide_inventory_context<A: ArticleApi + 'static>(inventory: &Inventory<A>) {
    provide_context(InventoryContext::new(inventory));
}

/// Get the inventory signals from context
pub fn use_inventory_context() -> InventoryContext {
    expect_context::<InventoryContext>()
}
