pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_distinct_paths, validate_path, validate_required_field, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "uuid-replacer")]
#[command(about = "Replace every UUID in a JSON file with a freshly generated one")]
pub struct CliConfig {
    /// JSON file to process
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write here instead of <name>-replaced.<ext> next to the input
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the mapping without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = validate_required_field(&self.input)?;
        validate_path("input", input)?;

        if let Some(output) = &self.output {
            validate_path("output", output)?;
            validate_distinct_paths("output", input, output)?;
        }

        Ok(())
    }
}
