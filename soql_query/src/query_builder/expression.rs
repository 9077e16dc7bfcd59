//! Expression compiler
//!
//! Compiles Mongo-style filter objects into SOQL boolean expressions. A query
//! tree holds optional `$and` / `$or` arrays of query expressions plus implicit
//! field filters; a query expression maps fields to literals, arrays or
//! operator mappings.

use crate::errors::TranslateError;
use crate::query_builder::format::format_value;
use crate::query_builder::operators::{ComparisonOperator, LogicalOperator};
use crate::trace_log;
use crate::value::{FieldMatch, QueryValue};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// One level of field to value-or-matcher entries
pub type QueryExpression = [(String, QueryValue)];

/// Top-level filter object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryTree {
    entries: Vec<(String, QueryValue)>,
}

impl QueryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping insertion order
    pub fn with(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.entries.push((key.to_string(), value.into()));
        self
    }

    /// Build a tree from a JSON object; `null` is the empty tree
    pub fn from_json(value: Value) -> Result<Self, TranslateError> {
        match QueryValue::from(value) {
            QueryValue::Object(entries) => Ok(Self { entries }),
            QueryValue::Null => Ok(Self::default()),
            other => Err(TranslateError::malformed(format!(
                "query must be an object, got {}",
                other
            ))),
        }
    }

    pub fn entries(&self) -> &QueryExpression {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<(String, QueryValue)>> for QueryTree {
    fn from(entries: Vec<(String, QueryValue)>) -> Self {
        Self { entries }
    }
}

impl<'de> Deserialize<'de> for QueryTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(value).map_err(de::Error::custom)
    }
}

/// Compile one `field <operator> <value>` comparison
pub fn compile_matcher(
    field: &str,
    value: &QueryValue,
    operator: ComparisonOperator,
) -> Result<String, TranslateError> {
    let operand = format_value(field, operator, value)?;
    let clause = format!("{} {} {}", field, operator.to_soql(), operand);
    trace_log!("[COMPILE_MATCHER] {}", clause);
    Ok(clause)
}

/// Compile a query expression into one parenthesized AND group
pub fn compile_node(node: &QueryExpression) -> Result<String, TranslateError> {
    if node.is_empty() {
        return Err(TranslateError::malformed("query expression cannot be empty"));
    }

    let mut clauses = Vec::with_capacity(node.len());

    for (field, exp_or_value) in node {
        if let Ok(logical) = LogicalOperator::from_symbol(field) {
            return Err(TranslateError::malformed(format!(
                "logical operator {} cannot be nested inside a query expression",
                logical
            )));
        }

        match exp_or_value.classify() {
            FieldMatch::Set(_) => {
                clauses.push(compile_matcher(field, exp_or_value, ComparisonOperator::In)?);
            }
            FieldMatch::Operators(matchers) => {
                if matchers.is_empty() {
                    return Err(TranslateError::malformed(format!(
                        "incorrect operator value for field {}: {}",
                        field, exp_or_value
                    )));
                }
                for (symbol, operand) in matchers {
                    let operator = ComparisonOperator::from_symbol(symbol)?;
                    clauses.push(compile_matcher(field, operand, operator)?);
                }
            }
            FieldMatch::Literal(value) => {
                clauses.push(compile_matcher(field, value, ComparisonOperator::Eq)?);
            }
        }
    }

    Ok(join_group(&clauses, LogicalOperator::And))
}

/// Compile a query tree into a `WHERE (...)` clause, or an empty string
pub fn compile_tree(tree: &QueryTree) -> Result<String, TranslateError> {
    if tree.is_empty() {
        return Ok(String::new());
    }

    let mut and_nodes = None;
    let mut or_nodes = None;
    let mut filters = Vec::new();

    for (key, value) in tree.entries() {
        match LogicalOperator::from_symbol(key) {
            Ok(LogicalOperator::And) => set_once(&mut and_nodes, LogicalOperator::And, value)?,
            Ok(LogicalOperator::Or) => set_once(&mut or_nodes, LogicalOperator::Or, value)?,
            Err(_) => filters.push((key.clone(), value.clone())),
        }
    }

    let mut conditions = Vec::new();

    if let Some(nodes) = and_nodes {
        conditions.push(compile_combinator(&nodes, LogicalOperator::And)?);
    }

    if let Some(nodes) = or_nodes {
        conditions.push(compile_combinator(&nodes, LogicalOperator::Or)?);
    }

    if !filters.is_empty() {
        conditions.push(compile_node(&filters)?);
    }

    if conditions.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("WHERE {}", join_group(&conditions, LogicalOperator::And)))
    }
}

fn set_once<'a>(
    slot: &mut Option<Vec<&'a QueryExpression>>,
    operator: LogicalOperator,
    value: &'a QueryValue,
) -> Result<(), TranslateError> {
    if slot.is_some() {
        return Err(TranslateError::malformed(format!(
            "logical operator {} is specified more than once",
            operator
        )));
    }
    *slot = Some(combinator_nodes(operator, value)?);
    Ok(())
}

fn combinator_nodes(
    operator: LogicalOperator,
    value: &QueryValue,
) -> Result<Vec<&QueryExpression>, TranslateError> {
    let QueryValue::Array(items) = value else {
        return Err(TranslateError::malformed(format!(
            "logical operator {} must have an array value",
            operator
        )));
    };

    if items.is_empty() {
        return Err(TranslateError::malformed(format!(
            "logical operator {} must have at least one query expression",
            operator
        )));
    }

    items
        .iter()
        .map(|item| match item {
            QueryValue::Object(entries) => Ok(entries.as_slice()),
            other => Err(TranslateError::malformed(format!(
                "logical operator {} expects query expressions, got {}",
                operator, other
            ))),
        })
        .collect()
}

fn compile_combinator(
    nodes: &[&QueryExpression],
    operator: LogicalOperator,
) -> Result<String, TranslateError> {
    let expressions = nodes
        .iter()
        .map(|node| compile_node(node))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(join_group(&expressions, operator))
}

fn join_group(expressions: &[String], operator: LogicalOperator) -> String {
    let separator = format!(" {} ", operator.to_soql());
    format!("({})", expressions.join(&separator))
}
