//! Inventory Facade
//!
//! The only component that talks to the article service. It keeps the
//! [`ArticleCache`] in step with the service, applies mutations optimistically
//! and publishes the article list and load status as Leptos signals.
//!
//! Everything runs on one thread. Cache borrows are never held across an
//! `.await`.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use chrono::NaiveDate;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use leptos::prelude::*;

use crate::api::ArticleApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, InventoryError, InventoryResult, ValidationError};
use crate::forms::{validate_new, validate_patch};
use crate::models::{Article, ArticleId, ArticlePatch, NewArticle, UsageRecord};
use crate::stock::{count_after_restock, count_after_use};
use crate::store::ArticleCache;

/// Load state of the article list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

type ListFetch = Shared<LocalBoxFuture<'static, ApiResult<Vec<Article>>>>;

/// The list request currently on the wire, tagged so that only its own
/// waiters settle it
struct PendingList {
    generation: u64,
    fetch: ListFetch,
}

pub struct Inventory<A> {
    api: Rc<A>,
    cache: RefCell<ArticleCache>,
    pending_list: RefCell<Option<PendingList>>,
    generation: Cell<u64>,
    rollback_failed_patch: bool,
    status: ArcRwSignal<LoadStatus>,
    articles: ArcRwSignal<Vec<Article>>,
}

impl<A: ArticleApi + 'static> Inventory<A> {
    pub fn new(api: A, config: &ClientConfig) -> Self {
        Self::with_cache(api, ArticleCache::new(), config)
    }

    /// Start from an existing cache, e.g. one restored by the host
    pub fn with_cache(api: A, cache: ArticleCache, config: &ClientConfig) -> Self {
        let status = if cache.is_loaded() { LoadStatus::Success } else { LoadStatus::Idle };
        let articles = cache.get().map(<[Article]>::to_vec).unwrap_or_default();
        Self {
            api: Rc::new(api),
            cache: RefCell::new(cache),
            pending_list: RefCell::new(None),
            generation: Cell::new(0),
            rollback_failed_patch: config.rollback_failed_patch,
            status: ArcRwSignal::new(status),
            articles: ArcRwSignal::new(articles),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn cache(&self) -> Ref<'_, ArticleCache> {
        self.cache.borrow()
    }

    /// Load status for the view layer
    pub fn status(&self) -> ArcReadSignal<LoadStatus> {
        self.status.read_only()
    }

    /// Published article list; empty until the first successful load
    pub fn articles(&self) -> ArcReadSignal<Vec<Article>> {
        self.articles.read_only()
    }

    pub fn current_status(&self) -> LoadStatus {
        self.status.get_untracked()
    }

    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.get_untracked()
    }

    fn publish(&self) {
        let list = self.cache.borrow().get().map(<[Article]>::to_vec).unwrap_or_default();
        self.articles.set(list);
    }

    /// The full article list, from cache when loaded
    ///
    /// Callers arriving while a list request is in flight wait on that same
    /// request instead of issuing another one.
    pub async fn list(&self) -> InventoryResult<Vec<Article>> {
        let cached = self.cache.borrow().get().map(<[Article]>::to_vec);
        if let Some(list) = cached {
            log::debug!("[Inventory] serving {} cached articles", list.len());
            self.status.set(LoadStatus::Success);
            return Ok(list);
        }

        let joined = self
            .pending_list
            .borrow()
            .as_ref()
            .map(|p| (p.generation, p.fetch.clone()));
        let (generation, fetch) = match joined {
            Some(joined) => {
                log::debug!("[Inventory] joining in-flight article list request");
                joined
            }
            None => self.start_list_fetch(),
        };

        let result = fetch.await;

        let settles = {
            let mut pending = self.pending_list.borrow_mut();
            match pending.as_ref() {
                Some(p) if p.generation == generation => {
                    *pending = None;
                    true
                }
                _ => false,
            }
        };

        match result {
            Ok(list) => {
                if settles {
                    log::info!("[Inventory] loaded {} articles", list.len());
                    self.cache.borrow_mut().put(list.clone());
                    self.publish();
                    self.status.set(LoadStatus::Success);
                }
                Ok(list)
            }
            Err(e) => {
                if settles {
                    log::error!("[Inventory] failed to load articles: {}", e);
                    self.status.set(LoadStatus::Error);
                }
                Err(InventoryError::Api(e))
            }
        }
    }

    fn start_list_fetch(&self) -> (u64, ListFetch) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let api = Rc::clone(&self.api);
        let fetch = async move { api.list_articles().await }.boxed_local().shared();
        *self.pending_list.borrow_mut() = Some(PendingList {
            generation,
            fetch: fetch.clone(),
        });
        self.status.set(LoadStatus::Loading);
        (generation, fetch)
    }

    /// Fetch one article straight from the service, bypassing the cache
    pub async fn get_by_id(&self, id: ArticleId) -> InventoryResult<Option<Article>> {
        Ok(self.api.get_article(id).await?)
    }

    /// Create an article; it enters the cache once the service assigns its id
    pub async fn create(&self, payload: NewArticle) -> InventoryResult<Article> {
        validate_new(&payload)?;
        let created = self.api.create_article(&payload).await?;
        log::info!("[Inventory] created article {} ({})", created.id, created.name);
        self.cache.borrow_mut().upsert(created.clone());
        self.publish();
        Ok(created)
    }

    /// Apply `patch` to the cached article now, then confirm with the service
    ///
    /// On success the server's copy replaces the optimistic one. On failure the
    /// optimistic value is reverted or kept depending on
    /// `ClientConfig::rollback_failed_patch`; the error says which.
    pub async fn patch(&self, id: ArticleId, patch: ArticlePatch) -> InventoryResult<Article> {
        validate_patch(&patch)?;

        let previous = self.cache.borrow().get_by_id(id).cloned();
        let optimistic = previous.as_ref().map(|prev| patch.apply(prev));
        if let Some(optimistic) = &optimistic {
            self.cache.borrow_mut().upsert(optimistic.clone());
            self.publish();
        }

        match self.api.patch_article(id, &patch).await {
            Ok(updated) => {
                {
                    let mut cache = self.cache.borrow_mut();
                    // skip articles removed while the request was out
                    if cache.get_by_id(id).is_some() || !cache.is_loaded() {
                        cache.upsert(updated.clone());
                    }
                }
                self.publish();
                log::info!("[Inventory] patched article {}", id);
                Ok(updated)
            }
            Err(e) => match (previous, optimistic) {
                (Some(previous), Some(optimistic)) if self.rollback_failed_patch => {
                    let untouched = self.cache.borrow().get_by_id(id) == Some(&optimistic);
                    if untouched {
                        self.cache.borrow_mut().upsert(previous);
                        self.publish();
                    }
                    log::warn!("[Inventory] patch of article {} failed, reverted: {}", id, e);
                    Err(InventoryError::RolledBack(e))
                }
                (Some(_), Some(_)) => {
                    log::warn!("[Inventory] patch of article {} failed, keeping local value: {}", id, e);
                    Err(InventoryError::Unreconciled(e))
                }
                _ => Err(InventoryError::Api(e)),
            },
        }
    }

    /// Remove an article now and restore it if the service refuses
    pub async fn remove(&self, id: ArticleId) -> InventoryResult<()> {
        let snapshot = self.cache.borrow_mut().remove(id);
        self.publish();

        match self.api.delete_article(id).await {
            Ok(()) => {
                log::info!("[Inventory] removed article {}", id);
                Ok(())
            }
            Err(e) => {
                self.cache.borrow_mut().restore(snapshot);
                self.publish();
                log::warn!("[Inventory] delete of article {} failed, restored: {}", id, e);
                Err(InventoryError::RolledBack(e))
            }
        }
    }

    /// Record consumption: count drops by `amount`, never below zero
    pub async fn use_stock(&self, id: ArticleId, amount: u32) -> InventoryResult<Article> {
        if amount == 0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        let count = self.current_count(id).await?;
        self.patch(id, ArticlePatch::count(count_after_use(count, amount)?)).await
    }

    pub async fn restock(&self, id: ArticleId, amount: u32) -> InventoryResult<Article> {
        if amount == 0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        let count = self.current_count(id).await?;
        self.patch(id, ArticlePatch::count(count_after_restock(count, amount)?)).await
    }

    async fn current_count(&self, id: ArticleId) -> InventoryResult<u32> {
        let cached = self.cache.borrow().get_by_id(id).map(|a| a.count);
        match cached {
            Some(count) => Ok(count),
            None => match self.api.get_article(id).await? {
                Some(article) => Ok(article.count),
                None => Err(InventoryError::Api(ApiError::NotFound(id))),
            },
        }
    }

    /// Daily usage for one article, straight from the service
    pub async fn usage_history(&self, id: ArticleId) -> InventoryResult<Vec<UsageRecord>> {
        Ok(self.api.usage_history(id, None, None).await?)
    }

    /// Daily usage within an optional date range
    pub async fn usage_history_between(
        &self,
        id: ArticleId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> InventoryResult<Vec<UsageRecord>> {
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(ValidationError::InvalidDateRange.into());
            }
        }
        Ok(self.api.usage_history(id, start, end).await?)
    }

    /// Drop the cached list; the next [`list`](Self::list) goes to the service
    ///
    /// A list request already in flight is detached: its waiters still get
    /// the result, but it no longer fills the cache or sets the status.
    pub fn refresh(&self) {
        self.pending_list.borrow_mut().take();
        self.generation.set(self.generation.get() + 1);
        self.cache.borrow_mut().invalidate();
        self.publish();
        self.status.set(LoadStatus::Idle);
    }
}
