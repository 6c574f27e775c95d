//! Site initialization module.
//!
//! Writes a commented config file with every default spelled out.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{config::BuildConfig, log};
use anyhow::{Context, Result};
use std::path::Path;

pub use validate::InitMode;

/// Create a new site at `root`.
///
/// # Steps
/// 1. Validate target directory
/// 2. Write the config file
/// 3. Write ignore files for the output directory
pub fn new_site(root: &Path, config_name: &Path, mode: InitMode) -> Result<()> {
    validate::validate_target(root, config_name, mode)?;

    std::fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    let path = config::write_config(root, config_name)?;
    config::write_ignore_files(root, &BuildConfig::default().output)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_new_site_is_loadable() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");
        new_site(&root, Path::new("site.toml"), InitMode::NewDir).unwrap();

        let config = SiteConfig::from_path(&root.join("site.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert!(root.join(".gitignore").is_file());
    }

    #[test]
    fn test_new_site_refuses_existing_config() {
        let temp = TempDir::new().unwrap();
        new_site(temp.path(), Path::new("site.toml"), InitMode::CurrentDir).unwrap();
        assert!(new_site(temp.path(), Path::new("site.toml"), InitMode::CurrentDir).is_err());
    }
}
