//! MIME type detection utilities.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const CSS: &str = "text/css; charset=utf-8";
    pub const JAVASCRIPT: &str = "text/javascript; charset=utf-8";
    pub const JSON: &str = "application/json";
    pub const SVG: &str = "image/svg+xml";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Detect MIME type from a file path's extension.
pub fn from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("html" | "htm") => types::HTML,
        Some("css") => types::CSS,
        Some("js" | "mjs") => types::JAVASCRIPT,
        Some("json") => types::JSON,
        Some("svg") => types::SVG,
        Some("txt") => types::PLAIN,
        _ => types::OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(Path::new("index.html")), types::HTML);
        assert_eq!(from_path(Path::new("assets/site.JS")), types::JAVASCRIPT);
        assert_eq!(from_path(Path::new("assets/site.css")), types::CSS);
        assert_eq!(from_path(Path::new("blob")), types::OCTET_STREAM);
    }
}
