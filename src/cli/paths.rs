//! `paths` command: list the editable marks of the page as JSON.
//!
//! Without a section, prints one entry per section in page order:
//!
//! ```json
//! {
//!   "navigation": [{ "path": "brandName", "kind": "text", "value": "WorkforceMax" }, ...],
//!   "hero": [...],
//!   ...
//! }
//! ```

use anyhow::Result;
use serde_json::{Map, Value};

use crate::{config::SiteConfig, render::Sections, section::SectionKind};

/// Render the marks of one section, or of all sections, as JSON text.
pub fn marks_json(config: &SiteConfig, section: Option<SectionKind>, pretty: bool) -> Result<String> {
    let sections = Sections::from_config(config);

    let value = match section {
        Some(kind) => serde_json::to_value(sections.marks(kind))?,
        None => {
            let mut all = Map::new();
            for kind in SectionKind::ALL {
                all.insert(kind.id().to_string(), serde_json::to_value(sections.marks(kind))?);
            }
            Value::Object(all)
        }
    };

    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

pub fn print_paths(config: &SiteConfig, section: Option<SectionKind>, pretty: bool) -> Result<()> {
    println!("{}", marks_json(config, section, pretty)?);
    Ok(())
}
