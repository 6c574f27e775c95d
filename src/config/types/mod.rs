//! Utility types for configuration handling.

mod error;
mod field;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub(crate) use field::config_fields;
