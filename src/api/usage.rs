//! Usage history endpoint

use chrono::NaiveDate;

use super::client::{send_json, HttpArticleApi};
use crate::error::ApiResult;
use crate::models::{ArticleId, UsageRecord};

fn usage_query(id: ArticleId, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<(&'static str, String)> {
    let mut query = vec![("articleId", id.to_string())];
    if let Some(start) = start {
        query.push(("start", start.format("%Y-%m-%d").to_string()));
    }
    if let Some(end) = end {
        query.push(("end", end.format("%Y-%m-%d").to_string()));
    }
    query
}

pub(super) async fn history(
    api: &HttpArticleApi,
    id: ArticleId,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ApiResult<Vec<UsageRecord>> {
    let request = api.http().get(api.url("usage")).query(&usage_query(id, start, end));
    send_json(request).await
}
