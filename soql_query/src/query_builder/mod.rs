//! Query builder utilities
//!
//! This module provides SOQL query construction utilities.

pub mod expression;
pub mod format;
pub mod operators;
pub mod pagination;
pub mod statement;


#[cfg(test)]
mod format_tests;

pub use expression::{compile_matcher, compile_node, compile_tree, QueryExpression, QueryTree};
pub use format::{format_literal, format_value, is_iso_date};
pub use operators::{resolve_comparison, resolve_logical, ComparisonOperator, LogicalOperator};
pub use pagination::{Cursor, Pagination};
pub use statement::{
    build_select, translate, translate_json, SelectStatement, StatementCompiler, StatementType,
};
