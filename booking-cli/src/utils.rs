//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, terminal detection and delimited output.

use crate::error::CliError;
use booking::config::Config;
use booking::{ConfigBuilder, Reservation, ServiceCatalog};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,

    /// Start sessions in dark mode regardless of configuration.
    pub dark_mode: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config_dir(global.config_dir.as_deref());

    if global.dark_mode {
        builder = builder.with_config(Config {
            dark_mode: Some(true),
            ..Config::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the service catalog from configuration.
pub fn load_catalog(config: &Config) -> Result<ServiceCatalog, CliError> {
    config
        .catalog()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Whether stdout should receive ANSI colors.
///
/// Colors are used only on a terminal and never when `NO_COLOR` is set.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 7] = [
    "id",
    "name",
    "email",
    "date",
    "time",
    "service",
    "service_label",
];

/// Write reservations as delimited output (CSV or TSV).
pub fn write_delimited<W: Write>(
    out: W,
    reservations: &[Reservation],
    catalog: &ServiceCatalog,
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS)?;

    for r in reservations {
        writer.write_record([
            r.id.to_string().as_str(),
            r.name.as_str(),
            r.email.as_str(),
            r.date.as_str(),
            r.time.as_str(),
            r.service.as_str(),
            catalog.label_for(&r.service).unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
