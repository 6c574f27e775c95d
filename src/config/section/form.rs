//! `[form]` configuration for the contact form.
//!
//! # Example
//!
//! ```toml
//! [form]
//! submit_delay_ms = 1000                 # Simulated submission time
//! form_id = "6949dacd1126a36a8ce470d9"   # Emitted as data-form-id
//! ```

use crate::config::{ConfigDiagnostics, types::config_fields};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Form id registered with the external form collector.
pub const DEFAULT_FORM_ID: &str = "6949dacd1126a36a8ce470d9";

/// Upper bound for the simulated submission delay.
const MAX_SUBMIT_DELAY_MS: u64 = 60_000;

/// Contact form behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Time between submit and the success message, in milliseconds.
    pub submit_delay_ms: u64,

    /// Identifier handed to the external form collector, emitted as
    /// `data-form-id` on every render.
    pub form_id: String,
}

config_fields!(FormConfig => FormFields, "form" { submit_delay_ms, form_id });

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            form_id: DEFAULT_FORM_ID.into(),
        }
    }
}

impl FormConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.submit_delay_ms > MAX_SUBMIT_DELAY_MS {
            diag.error_with_hint(
                Self::FIELDS.submit_delay_ms,
                format!("delay of {}ms is longer than a minute", self.submit_delay_ms),
                "the delay only simulates a network round trip, e.g.: submit_delay_ms = 1000",
            );
        }
        if self.form_id.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.form_id,
                "form_id must not be blank",
                format!("remove the key to use the default id, e.g.: form_id = \"{DEFAULT_FORM_ID}\""),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_form_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.form.submit_delay(), Duration::from_secs(1));
        assert_eq!(config.form.form_id, DEFAULT_FORM_ID);
    }

    #[test]
    fn test_form_validation() {
        let config = test_parse_config("[form]\nsubmit_delay_ms = 120000\nform_id = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.form.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["form.submit_delay_ms", "form.form_id"]);
    }
}
