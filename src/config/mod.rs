//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Site-level sections
//! │   ├── build      # [build]
//! │   ├── form       # [form]
//! │   ├── serve      # [serve]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath, config_fields!
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                         |
//! |----------------|-------------------------------------------------|
//! | `[site]`       | Page metadata (title, description, language)    |
//! | `[build]`      | Output directory                                |
//! | `[serve]`      | Development server (interface, port)            |
//! | `[form]`       | Contact form delay and form id                  |
//! | `[navigation]` | Navigation bar override                         |
//! | `[hero]`       | Hero override                                   |
//! | `[contact]`    | Contact override                                |
//! | `[footer]`     | Footer override                                 |
//!
//! Section overrides are partial: a key missing from the table keeps the
//! built-in default, a present key replaces it wholesale.

pub mod section;
pub mod types;

pub use section::{BuildConfig, FormConfig, ServeConfig, SiteInfoConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    section::{
        ContactConfig, FooterConfig, HeroConfig, NavigationConfig, Section, SectionKind,
        contact::ContactOverride, footer::FooterOverride, hero::HeroOverride,
        navigation::NavigationOverride,
    },
    utils::path::{find_upward, normalize_path},
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Page metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Contact form settings
    #[serde(default)]
    pub form: FormConfig,

    /// Navigation bar override
    #[serde(default)]
    pub navigation: NavigationOverride,

    /// Hero override
    #[serde(default)]
    pub hero: HeroOverride,

    /// Contact override
    #[serde(default)]
    pub contact: ContactOverride,

    /// Footer override
    #[serde(default)]
    pub footer: FooterOverride,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = find_upward(&cli.config).ok_or_else(|| {
            let cwd = std::env::current_dir().unwrap_or_default();
            ConfigError::NotFound(cwd.join(&cli.config))
        })?;

        let mut config = Self::from_path(&config_path)?;
        config.finalize(&config_path);
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        let mut diag = ConfigDiagnostics::new();
        for field in fields {
            diag.warn(format!("unknown field `{field}` in {display_path} is ignored"));
        }
        diag.print_warnings();
    }

    /// Set the config path and root, and make the output directory absolute.
    fn finalize(&mut self, config_path: &Path) {
        self.config_path = normalize_path(config_path);
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.build.output = normalize_path(&self.root.join(&self.build.output));
    }

    /// Re-read the config file for a running server.
    ///
    /// Paths and server settings stay as they were at startup; everything
    /// that shapes the page is taken from the file.
    pub fn reload(&self) -> Result<Self> {
        let content = fs::read_to_string(&self.config_path)
            .map_err(|err| ConfigError::Io(self.config_path.clone(), err))?;
        let (mut config, _) = Self::parse_with_ignored(&content)?;

        config.config_path = self.config_path.clone();
        config.root = self.root.clone();
        config.build = self.build.clone();
        config.serve = self.serve.clone();
        config.validate()?;

        Ok(config)
    }

    /// Whether the file sets any key of `kind`'s table.
    pub fn has_override(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Navigation => self.navigation != NavigationOverride::default(),
            SectionKind::Hero => self.hero != HeroOverride::default(),
            SectionKind::Contact => self.contact != ContactOverride::default(),
            SectionKind::Footer => self.footer != FooterOverride::default(),
        }
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // merged sections
    // ========================================================================

    pub fn navigation(&self) -> NavigationConfig {
        NavigationConfig::with_override(self.navigation.clone())
    }

    pub fn hero(&self) -> HeroConfig {
        HeroConfig::with_override(self.hero.clone())
    }

    pub fn contact(&self) -> ContactConfig {
        ContactConfig::with_override(self.contact.clone())
    }

    pub fn footer(&self) -> FooterConfig {
        FooterConfig::with_override(self.footer.clone())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { clean } => {
                self.build.clean = *clean;
            }
            Commands::Serve { interface, port } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Init { .. } | Commands::Paths { .. } | Commands::Edit { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        self.serve.validate(&mut diag);
        self.form.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

/// Log where the config came from (verbose only).
pub fn describe(config: &SiteConfig) {
    crate::debug!("config"; "loaded {}", config.config_path.display());
    crate::debug!(
        "config";
        "output: {}",
        config.root_relative(&config.build.output).display()
    );
    crate::debug!(
        "config";
        "overrides: {}",
        SectionKind::ALL
            .iter()
            .filter(|kind| config.has_override(**kind))
            .map(|kind| kind.id())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_toml() {
        let result = SiteConfig::parse_with_ignored("[site\ntitle = \"Acme\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let result = SiteConfig::parse_with_ignored("[hero]\nkeyBenefits = \"not a list\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_empty_config_renders_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.navigation(), NavigationConfig::default());
        assert_eq!(config.hero(), HeroConfig::default());
        assert_eq!(config.contact(), ContactConfig::default());
        assert_eq!(config.footer(), FooterConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_section_override() {
        let config = test_parse_config(
            r##"
[navigation]
brandName = "Acme"
navigationItems = [{ label = "Docs", href = "/docs" }]

[hero]
keyBenefits = []
"##,
        );

        let nav = config.navigation();
        assert_eq!(nav.brand_name, "Acme");
        assert_eq!(nav.navigation_items.len(), 1);
        assert_eq!(nav.brand_tagline, NavigationConfig::default().brand_tagline);

        let hero = config.hero();
        assert!(hero.key_benefits.is_empty());
        assert_eq!(hero.headline, HeroConfig::default().headline);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"\n[hero]\nheadLine = \"typo\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
        assert!(ignored.iter().any(|f| f == "hero.headLine"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config("[serve]\nport = 0\n[site]\nurl = \"ftp://acme.test\"");
        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.errors().len(), 2);
    }

    #[test]
    fn test_from_path_and_finalize() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[build]\noutput = \"dist\"").unwrap();

        let mut config = SiteConfig::from_path(&path).unwrap();
        config.finalize(&path);

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.root, root);
        assert_eq!(config.build.output, root.join("dist"));
        assert_eq!(config.root_relative(&config.build.output), PathBuf::from("dist"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&dir.path().join("site.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_has_override() {
        let config = test_parse_config("[footer]\ncopyright = \"(c) Acme\"");
        assert!(config.has_override(SectionKind::Footer));
        assert!(!config.has_override(SectionKind::Hero));
    }

    #[test]
    fn test_reload_keeps_startup_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[serve]\nport = 4000").unwrap();

        let mut config = SiteConfig::from_path(&path).unwrap();
        config.finalize(&path);
        config.serve.port = 9000;

        fs::write(&path, "[serve]\nport = 4001\n[hero]\nheadline = \"New\"").unwrap();
        let fresh = config.reload().unwrap();
        assert_eq!(fresh.serve.port, 9000);
        assert_eq!(fresh.hero().headline, "New");
        assert_eq!(fresh.build.output, config.build.output);
    }

    #[test]
    fn test_contact_serializes_camel_case() {
        let config = test_parse_config("[contact]\nformTitle = \"Say hi\"");
        let value = serde_json::to_value(config.contact()).unwrap();
        assert_eq!(value["formTitle"], "Say hi");
        assert_eq!(value["submitText"], "Send Message");
    }
}
