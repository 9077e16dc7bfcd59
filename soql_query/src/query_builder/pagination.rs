//! Pagination
//!
//! Cursor settings for select statements. Either `skip`/`limit` or the
//! 1-indexed `page`/`pageSize` pair, plus an optional ascending sort field.

use serde::{Deserialize, Serialize};

/// Pagination descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// Normalized skip/limit pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub skip: u64,
    pub limit: u64,
    pub has_pagination: bool,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// First page is 1
    pub fn with_page(mut self, page: u64, page_size: u64) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    pub fn with_sort(mut self, field: &str) -> Self {
        self.sort = Some(field.to_string());
        self
    }

    /// Sort field, if one is set and non-empty
    pub fn sort_field(&self) -> Option<&str> {
        self.sort.as_deref().filter(|s| !s.is_empty())
    }

    /// Resolve the descriptor into a cursor. `page`/`pageSize` take precedence
    /// over `skip`/`limit` when both are non-zero.
    pub fn normalize(&self) -> Cursor {
        let mut skip = self.skip.unwrap_or(0);
        let mut limit = self.limit.unwrap_or(0);

        if let (Some(page), Some(page_size)) = (self.page, self.page_size) {
            if page > 0 && page_size > 0 {
                skip = (page - 1).saturating_mul(page_size);
                limit = page_size;
            }
        }

        Cursor {
            skip,
            limit,
            has_pagination: limit > 0,
        }
    }
}

impl Cursor {
    /// `LIMIT n OFFSET m`, dropping zero parts; empty without pagination
    pub fn to_soql(&self) -> String {
        let mut clauses = Vec::new();

        if self.has_pagination {
            if self.limit > 0 {
                clauses.push(format!("LIMIT {}", self.limit));
            }

            if self.skip > 0 {
                clauses.push(format!("OFFSET {}", self.skip));
            }
        }

        clauses.join(" ")
    }
}
