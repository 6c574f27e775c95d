//! `edit` command: apply one editor change and persist it.
//!
//! The change is applied to the merged section, then the whole top-level key
//! it touched is written into the section's table in `site.toml`. Comments
//! and formatting of the file are not preserved.

use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{fs, path::Path};

use crate::{
    config::SiteConfig,
    editable::{EditablePath, apply_edit},
    log,
    section::SectionKind,
};

/// One change requested by the editor.
#[derive(Debug, Clone)]
pub struct EditRequest {
    pub section: SectionKind,
    pub path: EditablePath,
    pub value: Value,
}

impl EditRequest {
    /// Build a request from CLI strings. `json` parses `value` as JSON,
    /// otherwise it is taken as a plain string.
    pub fn parse(section: SectionKind, path: &str, value: &str, json: bool) -> Result<Self> {
        let path: EditablePath = path
            .parse()
            .with_context(|| format!("Invalid editable path `{path}`"))?;
        let value = if json {
            serde_json::from_str(value).context("VALUE is not valid JSON")?
        } else {
            Value::String(value.to_string())
        };
        Ok(Self {
            section,
            path,
            value,
        })
    }
}

/// Apply `request` and write the result to the config file.
pub fn edit_site(config: &SiteConfig, request: EditRequest) -> Result<()> {
    let (key, value) = match request.section {
        SectionKind::Navigation => edit_section(&config.navigation(), &request)?,
        SectionKind::Hero => edit_section(&config.hero(), &request)?,
        SectionKind::Contact => edit_section(&config.contact(), &request)?,
        SectionKind::Footer => edit_section(&config.footer(), &request)?,
    };

    write_override(&config.config_path, request.section, &key, &value)?;
    log!("edit"; "{}.{} updated", request.section, key);
    Ok(())
}

fn edit_section<C>(section: &C, request: &EditRequest) -> Result<(String, Value)>
where
    C: Serialize + DeserializeOwned,
{
    let edit = apply_edit(section, &request.path, request.value.clone())
        .with_context(|| format!("Cannot edit `{}` in [{}]", request.path, request.section))?;
    crate::debug!("edit"; "{} -> {}", request.path, edit.value);
    Ok((edit.key, edit.value))
}

/// Set `[section].key = value` in the TOML file at `path`.
fn write_override(path: &Path, section: SectionKind, key: &str, value: &Value) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read `{}`", path.display()))?;
    let mut doc: toml::Table = content
        .parse()
        .with_context(|| format!("Failed to parse `{}`", path.display()))?;

    let table = doc
        .entry(section.id())
        .or_insert_with(|| toml::Value::Table(toml::Table::new()))
        .as_table_mut()
        .with_context(|| format!("`{}` in `{}` is not a table", section, path.display()))?;

    let value = toml::Value::try_from(value)
        .with_context(|| format!("`{key}` cannot be written as TOML"))?;
    table.insert(key.to_string(), value);

    let content = toml::to_string(&doc).context("Failed to serialize config")?;
    fs::write(path, content).with_context(|| format!("Failed to write `{}`", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site(dir: &TempDir, content: &str) -> SiteConfig {
        let path = dir.path().join("site.toml");
        fs::write(&path, content).unwrap();
        let mut config = SiteConfig::from_path(&path).unwrap();
        config.config_path = path;
        config
    }

    fn reload(config: &SiteConfig) -> SiteConfig {
        SiteConfig::from_path(&config.config_path).unwrap()
    }

    #[test]
    fn test_edit_text_leaf() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir, "[site]\ntitle = \"Acme\"\n");

        let request =
            EditRequest::parse(SectionKind::Navigation, "brandName", "Acme Corp", false).unwrap();
        edit_site(&config, request).unwrap();

        let config = reload(&config);
        assert_eq!(config.navigation().brand_name, "Acme Corp");
        assert_eq!(config.site.title, "Acme");
    }

    #[test]
    fn test_edit_array_item_writes_whole_key() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir, "");

        let request =
            EditRequest::parse(SectionKind::Hero, "keyBenefits[1]", "Fast onboarding", false)
                .unwrap();
        edit_site(&config, request).unwrap();

        let config = reload(&config);
        let benefits = config.hero.key_benefits.clone().unwrap();
        let defaults = crate::section::HeroConfig::default().key_benefits;
        assert_eq!(benefits.len(), defaults.len());
        assert_eq!(benefits[0], defaults[0]);
        assert_eq!(benefits[1], "Fast onboarding");
    }

    #[test]
    fn test_edit_nested_href() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir, "[footer]\ncopyright = \"(c) Acme\"\n");

        let request = EditRequest::parse(
            SectionKind::Footer,
            "companyLinks[0].href",
            "/about-us",
            false,
        )
        .unwrap();
        edit_site(&config, request).unwrap();

        let footer = reload(&config).footer();
        assert_eq!(footer.company_links[0].href, "/about-us");
        assert_eq!(footer.copyright, "(c) Acme");
    }

    #[test]
    fn test_edit_json_value() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir, "");

        let request =
            EditRequest::parse(SectionKind::Hero, "keyBenefits", r#"["One", "Two"]"#, true)
                .unwrap();
        edit_site(&config, request).unwrap();

        assert_eq!(reload(&config).hero().key_benefits, ["One", "Two"]);
    }

    #[test]
    fn test_rejected_edits_leave_file_untouched() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir, "[hero]\nheadline = \"Hi\"\n");
        let before = fs::read_to_string(&config.config_path).unwrap();

        for (path, value, json) in [
            ("navigationItems[9].label", "x", false),
            ("brandName", "[1]", true),
        ] {
            let request = EditRequest::parse(SectionKind::Navigation, path, value, json).unwrap();
            assert!(edit_site(&config, request).is_err(), "{path}");
        }
        assert!(EditRequest::parse(SectionKind::Hero, "features[", "x", false).is_err());

        assert_eq!(fs::read_to_string(&config.config_path).unwrap(), before);
    }
}
