//! Command-line interface module.

mod args;
pub mod build;
pub mod edit;
pub mod init;
pub mod paths;
pub mod serve;

pub use args::{Cli, Commands};
