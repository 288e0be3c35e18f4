//! Form Input
//!
//! Raw text from the create and edit forms, validated into request payloads
//! before anything reaches the network.

use crate::error::ValidationError;
use crate::models::{ArticlePatch, NewArticle};

/// Fields of the "new article" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub name: String,
    pub unit: String,
    pub count: u32,
    pub icon: String,
    pub description: String,
    pub category: String,
    pub supplier: String,
    pub price: String,
}

impl CreateForm {
    pub fn validate(&self) -> Result<NewArticle, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let unit = self.unit.trim();
        if unit.is_empty() {
            return Err(ValidationError::EmptyUnit);
        }

        Ok(NewArticle {
            name: name.to_string(),
            unit: unit.to_string(),
            count: self.count,
            icon: non_blank(&self.icon),
            description: non_blank(&self.description),
            price: parse_price(&self.price)?,
            category: non_blank(&self.category),
            supplier: non_blank(&self.supplier),
        })
    }
}

/// Fields of the "edit details" form on the article page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsForm {
    pub supplier: String,
    pub category: String,
    pub price: String,
}

impl DetailsForm {
    /// Build the patch, carrying the article's current count along
    pub fn to_patch(&self, current_count: u32) -> Result<ArticlePatch, ValidationError> {
        Ok(ArticlePatch {
            count: Some(current_count),
            supplier: non_blank(&self.supplier),
            category: non_blank(&self.category),
            price: parse_price(&self.price)?,
            ..Default::default()
        })
    }
}

/// Validate a new article built in code rather than from a form
pub fn validate_new(article: &NewArticle) -> Result<(), ValidationError> {
    if article.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if article.unit.trim().is_empty() {
        return Err(ValidationError::EmptyUnit);
    }
    check_price(article.price)
}

pub fn validate_patch(patch: &ArticlePatch) -> Result<(), ValidationError> {
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(ValidationError::EmptyName);
    }
    if patch.unit.as_deref().is_some_and(|u| u.trim().is_empty()) {
        return Err(ValidationError::EmptyUnit);
    }
    check_price(patch.price)
}

fn check_price(price: Option<f64>) -> Result<(), ValidationError> {
    match price {
        Some(p) if !p.is_finite() => Err(ValidationError::InvalidPrice(p.to_string())),
        Some(p) if p < 0.0 => Err(ValidationError::NegativePrice(p)),
        _ => Ok(()),
    }
}

/// Empty means "no price"; anything else must be a finite, non-negative number
pub fn parse_price(raw: &str) -> Result<Option<f64>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let price: f64 = raw.parse().map_err(|_| ValidationError::InvalidPrice(raw.to_string()))?;
    check_price(Some(price))?;
    Ok(Some(price))
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
