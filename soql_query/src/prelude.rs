//! Convenience re-exports for common SOQL Query usage
//!
//! ```rust
//! use soql_query::prelude::*;
//! ```

pub use crate::errors::TranslateError;
pub use crate::query_builder::{
    compile_matcher, compile_node, compile_tree, format_literal, format_value, is_iso_date,
    resolve_comparison, resolve_logical, translate, translate_json, ComparisonOperator, Cursor,
    LogicalOperator, Pagination, QueryTree, SelectStatement, StatementCompiler, StatementType,
};
pub use crate::value::{FieldMatch, QueryValue};

pub use serde_json::json;
