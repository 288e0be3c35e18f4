//! Article endpoints

use super::client::{not_found_as, send_empty, send_json, HttpArticleApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{Article, ArticleId, ArticlePatch, NewArticle};

pub(super) async fn list(api: &HttpArticleApi) -> ApiResult<Vec<Article>> {
    let request = api.http().get(api.url("articles"));
    let articles: Vec<Article> = send_json(request).await?;
    log::debug!("[ArticleApi] listed {} articles", articles.len());
    Ok(articles)
}

pub(super) async fn get(api: &HttpArticleApi, id: ArticleId) -> ApiResult<Option<Article>> {
    let request = api.http().get(api.url(&format!("articles/{id}")));
    match send_json(request).await.map_err(not_found_as(id)) {
        Ok(article) => Ok(Some(article)),
        Err(ApiError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

pub(super) async fn create(api: &HttpArticleApi, payload: &NewArticle) -> ApiResult<Article> {
    let request = api.http().post(api.url("articles")).json(payload);
    let created: Article = send_json(request).await?;
    log::debug!("[ArticleApi] created article {}", created.id);
    Ok(created)
}

pub(super) async fn patch(api: &HttpArticleApi, id: ArticleId, patch: &ArticlePatch) -> ApiResult<Article> {
    let request = api.http().patch(api.url(&format!("articles/{id}"))).json(patch);
    send_json(request).await.map_err(not_found_as(id))
}

pub(super) async fn delete(api: &HttpArticleApi, id: ArticleId) -> ApiResult<()> {
    let request = api.http().delete(api.url(&format!("articles/{id}")));
    send_empty(request).await.map_err(not_found_as(id))
}
