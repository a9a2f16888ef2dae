//! Shell command implementation.
//!
//! Starts an interactive session reading commands from stdin. Data goes to
//! stdout; confirmations, warnings and errors go to stderr.

use crate::error::CliError;
use crate::shell::command::ListFormat;
use crate::shell::Shell;
use crate::utils::{load_catalog, load_configuration, use_color, GlobalOptions};
use booking::config::OutputFormat;
use booking::{ReservationStore, Session};
use clap::Args;
use std::io::{self, IsTerminal};

/// Start an interactive booking session.
#[derive(Args)]
pub struct ShellCommand {
    /// Stop at the first command that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Default format for `list` (overrides configuration)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ListFormat>,
}

impl ShellCommand {
    /// Execute the shell command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;
        let catalog = load_catalog(&config)?;

        // 2. Build the session
        let store = ReservationStore::with_strategy(config.id_strategy());
        let session = Session::new(store).with_dark_mode(config.dark_mode_enabled());
        let format = self
            .format
            .map_or_else(|| config.output_format(), OutputFormat::from);

        log::debug!(
            "Starting session with {} services, id strategy {}",
            catalog.len(),
            config.id_strategy()
        );

        // 3. Run until quit or end of input
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        let mut shell = Shell::new(session, catalog)
            .with_default_format(format)
            .with_color(use_color())
            .with_quiet(global.quiet)
            .with_fail_fast(self.fail_fast)
            .with_prompt(interactive && !global.quiet);

        if interactive && !global.quiet {
            eprintln!("Type 'help' for the list of commands, 'quit' to leave.");
        }

        let stdout = io::stdout();
        let stderr = io::stderr();
        shell.run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
    }
}
