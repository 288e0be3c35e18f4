//! Frontend Models
//!
//! Data structures matching the article service's resources.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned article identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub u64);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ArticleId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Article data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub name: String,
    pub unit: String,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

impl Article {
    /// Build an article with only the required fields set
    pub fn new(id: u64, name: impl Into<String>, unit: impl Into<String>, count: u32) -> Self {
        Self {
            id: ArticleId(id),
            name: name.into(),
            unit: unit.into(),
            count,
            icon: None,
            description: None,
            price: None,
            category: None,
            supplier: None,
        }
    }
}

/// Payload for `POST /articles`: an article without its id
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NewArticle {
    pub name: String,
    pub unit: String,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

impl NewArticle {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            count,
            ..Default::default()
        }
    }
}

/// Field mask for `PATCH /articles/{id}`
///
/// Each field is either present (sent and merged) or absent (left alone).
/// Absent fields are omitted from the request body entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ArticlePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

impl ArticlePatch {
    /// A mask that only sets the stock count
    pub fn count(count: u32) -> Self {
        Self {
            count: Some(count),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the present fields over `article`, returning the merged copy
    pub fn apply(&self, article: &Article) -> Article {
        let mut merged = article.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(unit) = &self.unit {
            merged.unit = unit.clone();
        }
        if let Some(count) = self.count {
            merged.count = count;
        }
        if let Some(icon) = &self.icon {
            merged.icon = Some(icon.clone());
        }
        if let Some(description) = &self.description {
            merged.description = Some(description.clone());
        }
        if let Some(price) = self.price {
            merged.price = Some(price);
        }
        if let Some(category) = &self.category {
            merged.category = Some(category.clone());
        }
        if let Some(supplier) = &self.supplier {
            merged.supplier = Some(supplier.clone());
        }
        merged
    }
}

/// One day of consumption for one article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub usage_date: NaiveDate,
    pub used: u64,
}

/// A chart point pairing a current-week day with the same position in the prior week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsagePoint {
    /// Short weekday name of the current-week record, e.g. "Mon"
    pub label: String,
    pub date: NaiveDate,
    pub current: Option<u64>,
    pub prior: Option<u64>,
}

/// Stock level classification derived from an article's count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    Critical,
    Low,
    High,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Critical => "Critical",
            StockStatus::Low => "Low",
            StockStatus::High => "High",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// The backend stores price as text, so accept either representation.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceRepr {
        Number(f64),
        Text(String),
    }

    match Option::<PriceRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(PriceRepr::Number(n)) => Ok(Some(n)),
        Some(PriceRepr::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(PriceRepr::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid price: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_decodes_numeric_and_text_price() {
        let numeric: Article =
            serde_json::from_str(r#"{"id":1,"name":"Gauze","unit":"box","count":5,"price":12.5}"#).unwrap();
        assert_eq!(numeric.price, Some(12.5));

        let text: Article =
            serde_json::from_str(r#"{"id":2,"name":"Tape","unit":"roll","count":0,"price":"3.75"}"#).unwrap();
        assert_eq!(text.price, Some(3.75));

        let blank: Article =
            serde_json::from_str(r#"{"id":3,"name":"Mask","unit":"pcs","count":9,"price":""}"#).unwrap();
        assert_eq!(blank.price, None);
    }

    #[test]
    fn test_article_decodes_without_optional_fields() {
        let article: Article =
            serde_json::from_str(r#"{"id":7,"name":"Syringe","unit":"pcs","count":40,"icon":null}"#).unwrap();
        assert_eq!(article, Article::new(7, "Syringe", "pcs", 40));
    }

    #[test]
    fn test_bad_price_text_is_rejected() {
        let result = serde_json::from_str::<Article>(r#"{"id":1,"name":"a","unit":"b","count":1,"price":"cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = ArticlePatch {
            count: Some(12),
            supplier: Some("Medline".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"count": 12, "supplier": "Medline"}));
    }

    #[test]
    fn test_patch_apply_merges_per_field() {
        let mut base = Article::new(1, "Gloves", "box", 100);
        base.category = Some("PPE".to_string());

        let patch = ArticlePatch {
            count: Some(80),
            price: Some(4.0),
            ..Default::default()
        };
        let merged = patch.apply(&base);

        assert_eq!(merged.count, 80);
        assert_eq!(merged.price, Some(4.0));
        assert_eq!(merged.category.as_deref(), Some("PPE"));
        assert_eq!(merged.name, "Gloves");
        assert!(ArticlePatch::default().is_empty());
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_usage_record_uses_camel_case_date() {
        let record: UsageRecord = serde_json::from_str(r#"{"usageDate":"2025-03-04","used":6}"#).unwrap();
        assert_eq!(record.usage_date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(record.used, 6);
    }
}
