//! Article Cache
//!
//! In-memory mirror of the article service: the last fetched list plus a
//! by-id index. No I/O happens here.
//!
//! While the list is loaded, the index holds exactly the listed ids. After
//! [`ArticleCache::invalidate`] the index may keep individual entries around.

use std::collections::HashMap;

use crate::models::{Article, ArticleId};

#[derive(Debug, Clone, Default)]
pub struct ArticleCache {
    list: Option<Vec<Article>>,
    by_id: HashMap<ArticleId, Article>,
}

/// What [`ArticleCache::remove`] took out, for restoring on failure
#[derive(Debug, Clone)]
pub struct RemovalSnapshot {
    list: Option<Vec<Article>>,
    entry: Option<Article>,
}

impl ArticleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached list, or `None` if not yet loaded
    pub fn get(&self) -> Option<&[Article]> {
        self.list.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.list.is_some()
    }

    pub fn get_by_id(&self, id: ArticleId) -> Option<&Article> {
        self.by_id.get(&id)
    }

    /// Replace the list and rebuild the index from it
    pub fn put(&mut self, list: Vec<Article>) {
        self.by_id = list.iter().map(|a| (a.id, a.clone())).collect();
        self.list = Some(list);
    }

    /// Insert or replace one article, keeping list order (new ones go last)
    ///
    /// If the list is not loaded only the index is updated, so the next load
    /// still fetches the whole collection.
    pub fn upsert(&mut self, article: Article) {
        if let Some(list) = self.list.as_mut() {
            match list.iter_mut().find(|a| a.id == article.id) {
                Some(slot) => *slot = article.clone(),
                None => list.push(article.clone()),
            }
        }
        self.by_id.insert(article.id, article);
    }

    /// Remove an article from list and index; a no-op if absent
    pub fn remove(&mut self, id: ArticleId) -> RemovalSnapshot {
        let snapshot = RemovalSnapshot {
            list: self.list.clone(),
            entry: self.by_id.get(&id).cloned(),
        };
        if let Some(list) = self.list.as_mut() {
            list.retain(|a| a.id != id);
        }
        self.by_id.remove(&id);
        snapshot
    }

    /// Put back what a [`remove`](Self::remove) took out
    ///
    /// A list loaded at removal time returns to its exact pre-removal state.
    /// Otherwise whatever list is cached now is kept, and the removed entry
    /// comes back only if nothing re-added that id in the meantime.
    pub fn restore(&mut self, snapshot: RemovalSnapshot) {
        let RemovalSnapshot { list, entry } = snapshot;
        if let Some(list) = list {
            self.put(list);
        }
        if let Some(entry) = entry {
            if !self.by_id.contains_key(&entry.id) {
                self.upsert(entry);
            }
        }
    }

    /// Forget the list so the next load goes to the service
    pub fn invalidate(&mut self) {
        self.list = None;
    }
}
