use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Malformed query expression: {0}")]
    MalformedQuery(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Invalid value for operator {operator} on field {field}: {value}")]
    InvalidValueForOperator {
        field: String,
        operator: String,
        value: String,
    },

    #[error("Invalid array element for field {field}: {value}")]
    InvalidArrayElement { field: String, value: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TranslateError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedQuery(reason.into())
    }
}
