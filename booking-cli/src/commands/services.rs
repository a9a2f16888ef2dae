//! Services command implementation.
//!
//! Prints the configured service catalog.

use crate::error::CliError;
use crate::utils::{load_catalog, load_configuration, GlobalOptions};
use booking::ServiceCatalog;
use clap::{Args, ValueEnum};
use std::io::Write;

/// Show the offered services.
#[derive(Args)]
pub struct ServicesCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: ServicesFormat,
}

/// Output format for the services command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ServicesFormat {
    /// Tab-separated table format
    Table,
    /// JSON format
    Json,
}

impl ServicesCommand {
    /// Execute the services command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let catalog = load_catalog(&config)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            ServicesFormat::Table => write_table(&mut handle, &catalog)?,
            ServicesFormat::Json => write_json(&mut handle, &catalog)?,
        }

        Ok(())
    }
}

fn write_table<W: Write>(out: &mut W, catalog: &ServiceCatalog) -> Result<(), CliError> {
    writeln!(out, "VALUE\tLABEL")?;
    for option in catalog.options() {
        writeln!(out, "{}\t{}", option.value, option.label)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, catalog: &ServiceCatalog) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(catalog.options())
        .map_err(|e| CliError::InvalidArguments(format!("Failed to serialize services: {e}")))?;
    writeln!(out, "{json}")?;
    Ok(())
}
