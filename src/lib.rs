pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{engine::ReplaceEngine, replace_pipeline::ReplacePipeline};
pub use domain::ports::RandomUuidSource;
pub use utils::error::{ReplaceError, Result};
