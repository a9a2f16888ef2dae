//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ServicesCommand, ShellCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for making and managing reservations.
#[derive(Parser)]
#[command(name = "booking")]
#[command(version, about = "Make and manage reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "BOOKING_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long, global = true)]
    pub dark_mode: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive booking session
    Shell(ShellCommand),

    /// Show the offered services
    Services(ServicesCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
