//! Error types for the Soquery crate
//!
//! This module contains all error types that can be returned by Soquery operations.

use config::ConfigError;
use soql_query::TranslateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoqueryError {
    #[error("Translation error: {0}")]
    Translate(#[from] TranslateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
