//! Embedded static resources.
//!
//! The stylesheet and client runtime are minified by `build.rs` and compiled
//! into the binary, so `build` and `serve` never read them from disk.
//!
//! # Usage
//!
//! ```ignore
//! use embed::{SITE_CSS, SITE_JS};
//!
//! SITE_CSS.write_to(&output_dir)?;
//! let body = SITE_JS.content;
//! ```

use crate::render::{SCRIPT_PATH, STYLESHEET_PATH};
use crate::utils::mime;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A static file compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAsset {
    /// Path relative to the output directory (and URL path without `/`).
    pub path: &'static str,
    pub content: &'static str,
}

impl EmbeddedAsset {
    pub const fn new(path: &'static str, content: &'static str) -> Self {
        Self { path, content }
    }

    pub fn mime(&self) -> &'static str {
        mime::from_path(Path::new(self.path))
    }

    /// Write the asset below `output_dir`, creating parent directories.
    pub fn write_to(&self, output_dir: &Path) -> Result<PathBuf> {
        let dest = output_dir.join(self.path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create `{}`", parent.display()))?;
        }
        fs::write(&dest, self.content)
            .with_context(|| format!("Failed to write `{}`", dest.display()))?;
        Ok(dest)
    }
}

/// Client runtime: navigation dispatch, mobile menu, hero reveal, contact form.
pub const SITE_JS: EmbeddedAsset = EmbeddedAsset::new(
    SCRIPT_PATH,
    include_str!(concat!(env!("OUT_DIR"), "/site.min.js")),
);

/// Page stylesheet.
pub const SITE_CSS: EmbeddedAsset = EmbeddedAsset::new(
    STYLESHEET_PATH,
    include_str!(concat!(env!("OUT_DIR"), "/site.min.css")),
);

/// Every embedded asset, in the order `build` writes them.
pub const ASSETS: [EmbeddedAsset; 2] = [SITE_CSS, SITE_JS];

/// Find the asset served at a URL path (leading `/` optional).
pub fn lookup(url_path: &str) -> Option<EmbeddedAsset> {
    let path = url_path.trim_start_matches('/');
    ASSETS.into_iter().find(|asset| asset.path == path)
}
