//! `[build]` configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"   # Output directory (relative to site root)
//! ```

use crate::config::{ConfigDiagnostics, types::config_fields};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Static build settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory (relative to site root until finalized).
    pub output: PathBuf,

    /// Remove the output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

config_fields!(BuildConfig => BuildFields, "build" { output });

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            clean: false,
        }
    }
}

impl BuildConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.output,
                "output directory must not be empty",
                "e.g.: output = \"public\"",
            );
        }
    }
}
