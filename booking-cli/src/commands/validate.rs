//! `validate`: check a single configuration file without merging it.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use booking::config::{ConfigLoader, ConfigValidator};
use booking::Error as LibError;
use clap::Args;
use std::path::PathBuf;

/// Validate a booking configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = &self.config_path;
        if !path.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let config = ConfigLoader::load_file(path).map_err(|e| match e {
            unreadable @ LibError::InvalidPath { .. } => CliError::Library(unreadable),
            parse => {
                eprintln!("Parse error: {parse}");
                CliError::SemanticFailure(format!("{} is not valid YAML", path.display()))
            }
        })?;

        if let Err(e) = ConfigValidator::validate(&config) {
            eprintln!("Validation error: {e}");
            return Err(CliError::SemanticFailure(format!(
                "{} failed validation",
                path.display()
            )));
        }

        if !global.quiet {
            println!("Configuration is valid");
        }
        Ok(())
    }
}
