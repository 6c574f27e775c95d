//! `[site]` configuration.
//!
//! Page-level metadata rendered into `<head>`.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "WorkforceMax | Enterprise Workforce Management"
//! description = "Streamline your workforce operations"
//! language = "en"
//! url = "https://workforcemax.example"
//! ```

use crate::config::{ConfigDiagnostics, types::config_fields};
use serde::{Deserialize, Serialize};

/// Page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Document title.
    pub title: String,

    /// Meta description.
    pub description: String,

    /// Language code (e.g., "en", "de").
    pub language: String,

    /// Canonical URL of the deployed page.
    pub url: Option<String>,
}

config_fields!(SiteInfoConfig => SiteInfoFields, "site" { title, description, language, url });

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "WorkforceMax | Enterprise Workforce Management".into(),
            description: "Streamline your workforce operations with our comprehensive SaaS platform designed for modern enterprises.".into(),
            language: "en".into(),
            url: None,
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `language` must not be empty
    /// - `url` must be a valid URL with http(s) scheme and a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.language.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.language,
                "language must not be empty",
                "use a language code such as \"en\"",
            );
        }

        let Some(url_str) = &self.url else {
            return;
        };
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}
