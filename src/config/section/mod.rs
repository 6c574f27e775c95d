//! Configuration section definitions.

mod build;
mod form;
mod serve;
mod site;

pub use build::BuildConfig;
pub use form::FormConfig;
pub use serve::ServeConfig;
pub use site::SiteInfoConfig;
