//! ruleseg CLI library
//!
//! Command-line front end for the `ruleseg-core` sentence segmenter.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod prefix_source;
pub mod progress;

pub use error::{CliError, CliResult};
