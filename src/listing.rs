//! Article List View
//!
//! Search and column sorting for the stock table.

use std::cmp::Ordering;

use crate::models::Article;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Count,
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Search text plus an optional sort column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub query: String,
    pub sort: Option<(SortKey, SortDirection)>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Header click: a new column starts ascending, the same column cycles
    /// asc -> desc -> unsorted
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some((current, SortDirection::Asc)) if current == key => Some((key, SortDirection::Desc)),
            Some((current, SortDirection::Desc)) if current == key => None,
            _ => Some((key, SortDirection::Asc)),
        };
    }

    fn matches(&self, article: &Article) -> bool {
        let needle = self.query.to_lowercase();
        format!("{} {}", article.name, article.unit).to_lowercase().contains(&needle)
    }

    /// Filtered and sorted view; without a sort the input order is kept
    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        let mut rows: Vec<&Article> = articles.iter().filter(|a| self.matches(a)).collect();
        if let Some((key, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare(a, b, key);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        rows
    }
}

fn compare(a: &Article, b: &Article, key: SortKey) -> Ordering {
    match key {
        SortKey::Count => a.count.cmp(&b.count),
        SortKey::Name => compare_text(&a.name, &b.name),
        SortKey::Unit => compare_text(&a.unit, &b.unit),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
