//! Configuration file generation.
//!
//! Site-level tables are written active with their defaults. Section tables
//! are written commented out, so the page keeps its built-in copy until a
//! key is uncommented.

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::config::{BuildConfig, FormConfig, ServeConfig, SiteInfoConfig};
use crate::section::{
    ContactConfig, FooterConfig, HeroConfig, NavigationConfig, SectionKind,
};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# wmsite configuration file (v{})\n#\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Site settings. Every key is optional and shown with its default.\n\n");

    out.push_str(&table("site", &SiteInfoConfig::default()));
    out.push_str("# url = \"https://example.com\"\n\n");
    out.push_str(&table("build", &BuildConfig::default()));
    out.push('\n');
    out.push_str(&table("serve", &ServeConfig::default()));
    out.push('\n');
    out.push_str(&table("form", &FormConfig::default()));
    out.push('\n');

    out.push_str("# Section content. Uncomment a table and edit its keys to override the\n");
    out.push_str("# built-in copy. Missing keys keep their default, arrays are replaced whole.\n");
    for kind in SectionKind::ALL {
        out.push('\n');
        out.push_str(&commented(&section_template(kind)));
    }

    out
}

/// Default content of one section as an active TOML table.
pub fn section_template(kind: SectionKind) -> String {
    match kind {
        SectionKind::Navigation => table(kind.id(), &NavigationConfig::default()),
        SectionKind::Hero => table(kind.id(), &HeroConfig::default()),
        SectionKind::Contact => table(kind.id(), &ContactConfig::default()),
        SectionKind::Footer => table(kind.id(), &FooterConfig::default()),
    }
}

/// Serialize `value` as `[name]`.
fn table<T: Serialize>(name: &str, value: &T) -> String {
    let wrapper = BTreeMap::from([(name, value)]);
    // Config types only hold strings, numbers, paths and nested tables
    toml::to_string(&wrapper).unwrap_or_default()
}

fn commented(toml: &str) -> String {
    toml.lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}

/// Write the default config file. Returns its path.
pub fn write_config(root: &Path, config_name: &Path) -> Result<PathBuf> {
    let path = root.join(config_name);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(path)
}

/// Write .gitignore and .ignore files ignoring the output directory
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let template = generate_config_template();
        let config = test_parse_config(&template);

        assert_eq!(config.site, SiteInfoConfig::default());
        assert_eq!(config.serve, ServeConfig::default());
        assert_eq!(config.form, FormConfig::default());
        assert!(template.contains("form_id = \"6949dacd1126a36a8ce470d9\"\n"));
        assert_eq!(config.navigation(), NavigationConfig::default());
        assert!(template.contains("# [navigation]\n"));
        assert!(template.contains("# [[footer.socialLinks]]\n"));
    }

    #[test]
    fn test_section_templates_round_trip() {
        let config = test_parse_config(&SectionKind::ALL.map(section_template).join("\n"));

        assert!(config.navigation.brand_name.is_some());
        assert!(config.hero.features.is_some());
        assert_eq!(config.navigation(), NavigationConfig::default());
        assert_eq!(config.hero(), HeroConfig::default());
        assert_eq!(config.contact(), ContactConfig::default());
        assert_eq!(config.footer(), FooterConfig::default());
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path(), Path::new("public")).unwrap();

        let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(content.contains("/public"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path(), Path::new("public")).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
