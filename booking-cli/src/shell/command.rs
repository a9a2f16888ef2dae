//! Grammar of the commands accepted inside a session.

use booking::config::OutputFormat;
use booking::{DraftField, ReservationId};
use clap::{Parser, Subcommand, ValueEnum};

/// One line typed into the session shell.
#[derive(Parser, Debug)]
#[command(
    name = "booking",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]",
    help_template = "{subcommands}"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Commands available inside a session.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Set a draft field (name, email, date, time, service)
    Set {
        /// Field to set
        field: DraftField,
        /// New value; several words are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        value: Vec<String>,
    },

    /// Clear a draft field
    Unset {
        /// Field to clear
        field: DraftField,
    },

    /// Show the current draft
    Draft,

    /// Validate the draft and make or update the reservation
    Submit,

    /// Load a reservation into the draft for editing
    Edit {
        /// Reservation id
        id: ReservationId,
    },

    /// Discard the draft and leave edit mode
    Cancel,

    /// Delete a reservation
    #[command(alias = "rm")]
    Delete {
        /// Reservation id
        id: ReservationId,
    },

    /// List reservations
    #[command(alias = "ls")]
    List {
        /// Output format (defaults to the configured one)
        #[arg(long, value_enum, ignore_case = true)]
        format: Option<ListFormat>,
    },

    /// Show the offered services
    Services,

    /// Switch dark mode on, off, or toggle it
    DarkMode {
        /// New state
        #[arg(value_enum, default_value = "toggle", ignore_case = true)]
        state: Toggle,
    },

    /// Show the edit mode, reservation count and dark mode
    Status,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Output format for the `list` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// Tab-separated table format
    Table,
    /// One card per reservation
    Cards,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<ListFormat> for OutputFormat {
    fn from(format: ListFormat) -> Self {
        match format {
            ListFormat::Table => Self::Table,
            ListFormat::Cards => Self::Cards,
            ListFormat::Json => Self::Json,
            ListFormat::Csv => Self::Csv,
            ListFormat::Tsv => Self::Tsv,
        }
    }
}

/// Requested dark-mode state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    /// Switch on
    On,
    /// Switch off
    Off,
    /// Flip the current state
    Toggle,
}
