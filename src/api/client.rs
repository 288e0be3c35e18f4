//! HTTP transport for the article service

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{articles, usage, ArticleApi};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Article, ArticleId, ArticlePatch, NewArticle, UsageRecord};

/// `reqwest`-backed [`ArticleApi`]
#[derive(Debug, Clone)]
pub struct HttpArticleApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpArticleApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), &config.api_base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(super) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Send a request and decode a JSON body
pub(super) async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let response = checked(request.send().await?).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request whose response body is ignored
pub(super) async fn send_empty(request: RequestBuilder) -> ApiResult<()> {
    checked(request.send().await?).await?;
    Ok(())
}

async fn checked(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Turn a 404 for a specific article into `NotFound`
pub(super) fn not_found_as(id: ArticleId) -> impl Fn(ApiError) -> ApiError {
    move |err| match err {
        ApiError::Status { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => ApiError::NotFound(id),
        other => other,
    }
}

#[async_trait(?Send)]
impl ArticleApi for HttpArticleApi {
    async fn list_articles(&self) -> ApiResult<Vec<Article>> {
        articles::list(self).await
    }

    async fn get_article(&self, id: ArticleId) -> ApiResult<Option<Article>> {
        articles::get(self, id).await
    }

    async fn create_article(&self, payload: &NewArticle) -> ApiResult<Article> {
        articles::create(self, payload).await
    }

    async fn patch_article(&self, id: ArticleId, patch: &ArticlePatch) -> ApiResult<Article> {
        articles::patch(self, id, patch).await
    }

    async fn delete_article(&self, id: ArticleId) -> ApiResult<()> {
        articles::delete(self, id).await
    }

    async fn usage_history(
        &self,
        id: ArticleId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ApiResult<Vec<UsageRecord>> {
        usage::history(self, id, start, end).await
    }
}
