//! Operator tables
//!
//! Fixed mapping from Mongo-style operator symbols to SOQL tokens. Resolution
//! is total-or-error: a symbol missing from a table is an `UnknownOperator`.

use crate::errors::TranslateError;
use std::fmt;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    NotIn, // NOT IN
    In,    // IN
    Like,  // LIKE
    Gt,    // >
    Gte,   // >=
    Lt,    // <
    Lte,   // <=
    Eq,    // =
    Ne,    // !=
}

/// Logical operators for combining expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
}

impl ComparisonOperator {
    pub const ALL: [ComparisonOperator; 9] = [
        ComparisonOperator::NotIn,
        ComparisonOperator::In,
        ComparisonOperator::Like,
        ComparisonOperator::Gt,
        ComparisonOperator::Gte,
        ComparisonOperator::Lt,
        ComparisonOperator::Lte,
        ComparisonOperator::Eq,
        ComparisonOperator::Ne,
    ];

    pub fn from_symbol(symbol: &str) -> Result<Self, TranslateError> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or_else(|| {
                TranslateError::UnknownOperator(format!("invalid comparison operator {}", symbol))
            })
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::NotIn => "$nin",
            ComparisonOperator::In => "$in",
            ComparisonOperator::Like => "$like",
            ComparisonOperator::Gt => "$gt",
            ComparisonOperator::Gte => "$gte",
            ComparisonOperator::Lt => "$lt",
            ComparisonOperator::Lte => "$lte",
            ComparisonOperator::Eq => "$eq",
            ComparisonOperator::Ne => "$ne",
        }
    }

    pub fn to_soql(&self) -> &'static str {
        match self {
            ComparisonOperator::NotIn => "NOT IN",
            ComparisonOperator::In => "IN",
            ComparisonOperator::Like => "LIKE",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Gte => ">=",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Lte => "<=",
            ComparisonOperator::Eq => "=",
            ComparisonOperator::Ne => "!=",
        }
    }

    /// Operators whose operand is a parenthesized value list
    pub fn is_set(&self) -> bool {
        matches!(self, ComparisonOperator::In | ComparisonOperator::NotIn)
    }
}

impl LogicalOperator {
    pub const ALL: [LogicalOperator; 2] = [LogicalOperator::And, LogicalOperator::Or];

    pub fn from_symbol(symbol: &str) -> Result<Self, TranslateError> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or_else(|| {
                TranslateError::UnknownOperator(format!("invalid logical operator {}", symbol))
            })
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LogicalOperator::And => "$and",
            LogicalOperator::Or => "$or",
        }
    }

    pub fn to_soql(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Resolve a comparison symbol (`$gt`) to its SOQL token (`>`)
pub fn resolve_comparison(symbol: &str) -> Result<&'static str, TranslateError> {
    ComparisonOperator::from_symbol(symbol).map(|op| op.to_soql())
}

/// Resolve a logical symbol (`$or`) to its SOQL token (`OR`)
pub fn resolve_logical(symbol: &str) -> Result<&'static str, TranslateError> {
    LogicalOperator::from_symbol(symbol).map(|op| op.to_soql())
}
