//! Configured translator
//!
//! Applies [`TranslatorConfig`] select defaults before compiling a statement.

use crate::errors::SoqueryError;
use config::TranslatorConfig;
use serde_json::Value;
use soql_query::debug_log;
use soql_query::{Pagination, SelectStatement, TranslateError};

/// SOQL translator with configured select defaults
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    /// Create a translator from a validated configuration
    pub fn new(config: TranslatorConfig) -> Result<Self, SoqueryError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a translator from `SOQUERY_CONFIG` / `./soquery.toml`
    pub fn from_env() -> Result<Self, SoqueryError> {
        Self::new(TranslatorConfig::load()?)
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate a select statement descriptor into SOQL
    pub fn translate(&self, statement: &SelectStatement) -> Result<String, SoqueryError> {
        let statement = self.apply_defaults(statement)?;
        Ok(soql_query::translate(&statement)?)
    }

    /// Translate a JSON statement descriptor into SOQL
    pub fn translate_json(&self, descriptor: Value) -> Result<String, SoqueryError> {
        let statement: SelectStatement =
            serde_json::from_value(descriptor).map_err(TranslateError::from)?;
        self.translate(&statement)
    }

    fn apply_defaults(
        &self,
        statement: &SelectStatement,
    ) -> Result<SelectStatement, TranslateError> {
        let defaults = &self.config.select;
        let mut pagination = statement.pagination.clone().unwrap_or_default();

        if let Some(default_limit) = defaults.default_limit {
            if !pagination.normalize().has_pagination {
                let page_requested = pagination.page.is_some_and(|page| page > 0);
                if page_requested && pagination.page_size.is_none_or(|size| size == 0) {
                    pagination.page_size = Some(default_limit);
                } else {
                    pagination.limit = Some(default_limit);
                }
                debug_log!("[APPLY_DEFAULTS] limit {} for {}", default_limit, statement.object);
            }
        }

        if pagination.sort_field().is_none() {
            if let Some(sort) = &defaults.default_sort {
                pagination.sort = Some(sort.clone());
                debug_log!("[APPLY_DEFAULTS] sort {} for {}", sort, statement.object);
            }
        }

        if let Some(max_limit) = defaults.max_limit {
            let limit = pagination.normalize().limit;
            if limit > max_limit {
                return Err(TranslateError::MalformedQuery(format!(
                    "limit {} exceeds the configured maximum of {}",
                    limit, max_limit
                )));
            }
        }

        Ok(SelectStatement {
            pagination: Some(pagination).filter(|p| *p != Pagination::default()),
            ..statement.clone()
        })
    }
}
