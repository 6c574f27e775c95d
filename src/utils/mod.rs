//! Shared helpers for HTML output, MIME types, paths and log wording.

pub mod html;
pub mod mime;
pub mod path;
mod plural;

pub use plural::plural_count;
