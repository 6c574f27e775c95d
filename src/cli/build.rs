//! Static build: render the page once and write it with its assets.
//!
//! ```text
//! public/
//! ├── index.html
//! └── assets/
//!     ├── site.css
//!     └── site.js
//! ```

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::{
    config::SiteConfig,
    embed, log,
    render::render_page,
    utils::plural_count,
};

/// File name of the rendered page inside the output directory.
pub const INDEX_HTML: &str = "index.html";

/// Build the site into `config.build.output`. Returns the written files.
pub fn build_site(config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean `{}`", output.display()))?;
        crate::debug!("build"; "cleaned {}", config.root_relative(output).display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create `{}`", output.display()))?;

    let page = render_page(config);
    let index = output.join(INDEX_HTML);
    fs::write(&index, &page.html)
        .with_context(|| format!("Failed to write `{}`", index.display()))?;

    let mut written = vec![index];
    for asset in embed::ASSETS {
        written.push(asset.write_to(output)?);
    }

    log!(
        "build";
        "wrote {} to {} ({})",
        plural_count(written.len(), "file"),
        config.root_relative(output).display(),
        plural_count(page.field_count(), "editable field")
    );

    Ok(written)
}
