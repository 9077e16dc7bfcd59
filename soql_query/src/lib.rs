//! SOQL Query - Mongo-style filter compiler for Salesforce Object Query Language
//!
//! This crate provides the operator tables, literal formatting, expression
//! compiler and statement builder that turn a filter object such as
//! `{ "Age__c": { "$gt": 18 } }` into a SOQL `SELECT` statement.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod prelude;
pub mod query_builder;
pub mod value;

#[cfg(test)]
mod value_test;

pub use errors::TranslateError;
pub use query_builder::{
    translate, translate_json, ComparisonOperator, Cursor, LogicalOperator, Pagination,
    QueryTree, SelectStatement, StatementCompiler, StatementType,
};
pub use value::{FieldMatch, QueryValue};

// Used by the logging macros from dependent crates
#[doc(hidden)]
pub use tracing;
