//! Convenience re-exports for common Soquery usage
//!
//! # Example
//!
//! ```rust
//! use soquery::prelude::*;
//!
//! let statement = SelectStatement::new("Account", &["Id"]);
//! assert_eq!(translate(&statement).unwrap(), "SELECT Id FROM Account");
//! ```

pub use crate::core::Translator;
pub use crate::errors::SoqueryError;

pub use config::{ConfigError, SelectDefaults, TranslatorConfig};

pub use soql_query::prelude::*;
