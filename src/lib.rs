//! # Soquery
//!
//! Translate MongoDB-style filter objects into Salesforce Object Query Language
//! `SELECT` statements.
//!
//! ## Quick Start
//!
//! ```rust
//! use soquery::prelude::*;
//!
//! let soql = soquery::translate_json(json!({
//!     "object": "Contact",
//!     "type": "select",
//!     "fields": ["Id", "Name"],
//!     "query": {
//!         "Age__c": { "$gt": 18 },
//!         "$or": [{ "City": "Lisbon" }, { "City": "Porto" }]
//!     },
//!     "pagination": { "page": 2, "pageSize": 10, "sort": "Name" }
//! }))?;
//!
//! assert_eq!(
//!     soql,
//!     "SELECT Id,Name FROM Contact \
//!      WHERE (((City = 'Lisbon') OR (City = 'Porto')) AND (Age__c > 18)) \
//!      ORDER BY Name ASC LIMIT 10 OFFSET 10"
//! );
//! # Ok::<(), TranslateError>(())
//! ```
//!
//! Whitespace in the output is not significant to the target language.

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::Translator;
pub use errors::SoqueryError;

// Re-export centralized config
pub use config::{ConfigError, SelectDefaults, TranslatorConfig};

pub use soql_query::{
    translate, translate_json, Pagination, QueryTree, QueryValue, SelectStatement, StatementType,
    TranslateError,
};

// Re-export internal crates used by the public API
pub use soql_query;
