//! Article Service Bindings
//!
//! The remote article service, organized by resource. [`ArticleApi`] is the
//! seam the inventory facade talks to; [`HttpArticleApi`] is the real thing.

mod articles;
mod client;
mod usage;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ApiResult;
use crate::models::{Article, ArticleId, ArticlePatch, NewArticle, UsageRecord};

pub use client::HttpArticleApi;

/// Operations the remote article service provides
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// one thread.
#[async_trait(?Send)]
pub trait ArticleApi {
    /// `GET /articles`
    async fn list_articles(&self) -> ApiResult<Vec<Article>>;

    /// `GET /articles/{id}`, `None` when the service answers 404
    async fn get_article(&self, id: ArticleId) -> ApiResult<Option<Article>>;

    /// `POST /articles`
    async fn create_article(&self, payload: &NewArticle) -> ApiResult<Article>;

    /// `PATCH /articles/{id}`
    async fn patch_article(&self, id: ArticleId, patch: &ArticlePatch) -> ApiResult<Article>;

    /// `DELETE /articles/{id}`
    async fn delete_article(&self, id: ArticleId) -> ApiResult<()>;

    /// `GET /usage?articleId={id}[&start=..][&end=..]`
    async fn usage_history(
        &self,
        id: ArticleId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ApiResult<Vec<UsageRecord>>;
}
