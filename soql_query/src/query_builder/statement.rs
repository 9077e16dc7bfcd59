//! Statement builder
//!
//! Wraps a compiled WHERE clause into a full SOQL statement.

use crate::debug_log;
use crate::errors::TranslateError;
use crate::query_builder::expression::{compile_tree, QueryTree};
use crate::query_builder::pagination::Pagination;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Statement kinds accepted in a descriptor. Only `Select` is compiled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatementType {
    #[default]
    Select,
    Insert,
    Update,
    Delete,
    /// Any other operation name, kept so it can be reported
    Other(String),
}

impl StatementType {
    pub fn as_str(&self) -> &str {
        match self {
            StatementType::Select => "select",
            StatementType::Insert => "insert",
            StatementType::Update => "update",
            StatementType::Delete => "delete",
            StatementType::Other(name) => name,
        }
    }
}

impl From<&str> for StatementType {
    fn from(name: &str) -> Self {
        match name {
            "select" => StatementType::Select,
            "insert" => StatementType::Insert,
            "update" => StatementType::Update,
            "delete" => StatementType::Delete,
            other => StatementType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StatementType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatementType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from(name.as_str()))
    }
}

/// Select statement descriptor
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SelectStatement {
    /// Object API name, e.g. `Account`
    #[serde(default)]
    pub object: String,
    #[serde(rename = "type", default)]
    pub statement_type: StatementType,
    #[serde(default)]
    pub query: QueryTree,
    /// Projection
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl SelectStatement {
    pub fn new<S: AsRef<str>>(object: &str, fields: &[S]) -> Self {
        Self {
            object: object.to_string(),
            statement_type: StatementType::Select,
            query: QueryTree::default(),
            fields: fields.iter().map(|f| f.as_ref().to_string()).collect(),
            pagination: None,
        }
    }

    pub fn with_query(mut self, query: QueryTree) -> Self {
        self.query = query;
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_type(mut self, statement_type: StatementType) -> Self {
        self.statement_type = statement_type;
        self
    }
}

/// Validated statement ready to build
#[derive(Debug, Clone, Copy)]
pub struct StatementCompiler<'a> {
    statement: &'a SelectStatement,
}

impl<'a> StatementCompiler<'a> {
    pub fn new(statement: &'a SelectStatement) -> Result<Self, TranslateError> {
        if statement.object.trim().is_empty() {
            return Err(TranslateError::malformed(
                "the statement object must be specified in order to define the query expression",
            ));
        }

        match &statement.statement_type {
            StatementType::Select => Ok(Self { statement }),
            other => Err(TranslateError::UnsupportedOperation(format!(
                "the operation {} was not implemented yet",
                other
            ))),
        }
    }

    pub fn build(&self) -> Result<String, TranslateError> {
        let statement = self.statement;
        let where_clause = compile_tree(&statement.query)?;
        let soql = build_select(
            &statement.object,
            &statement.fields,
            &where_clause,
            statement.pagination.as_ref(),
        )?;
        debug_log!("[BUILD_SELECT] {}", soql);
        Ok(soql)
    }
}

/// Assemble `SELECT ... FROM ... [WHERE] [ORDER BY] [LIMIT] [OFFSET]`
pub fn build_select<S: AsRef<str>>(
    object: &str,
    fields: &[S],
    where_clause: &str,
    pagination: Option<&Pagination>,
) -> Result<String, TranslateError> {
    if fields.is_empty() {
        return Err(TranslateError::malformed(
            "the fields must be specified on a select query",
        ));
    }

    let projection = fields.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
    let mut clauses = vec![format!("SELECT {} FROM {}", projection, object)];

    if !where_clause.is_empty() {
        clauses.push(where_clause.to_string());
    }

    if let Some(sort) = pagination.and_then(Pagination::sort_field) {
        clauses.push(format!("ORDER BY {} ASC", sort));
    }

    let cursor = pagination.map(Pagination::normalize).unwrap_or_default();
    let cursor_clause = cursor.to_soql();
    if !cursor_clause.is_empty() {
        clauses.push(cursor_clause);
    }

    Ok(clauses.join(" "))
}

/// Compile a select statement descriptor into SOQL
pub fn translate(statement: &SelectStatement) -> Result<String, TranslateError> {
    StatementCompiler::new(statement)?.build()
}

/// Compile a JSON statement descriptor into SOQL
pub fn translate_json(descriptor: Value) -> Result<String, TranslateError> {
    let statement: SelectStatement = serde_json::from_value(descriptor)?;
    translate(&statement)
}
