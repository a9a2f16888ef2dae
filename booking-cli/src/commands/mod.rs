//! Command implementations for the booking CLI.
//!
//! Each subcommand lives in its own module and exposes an `execute` method
//! taking the [`GlobalOptions`](crate::utils::GlobalOptions).

pub mod completions;
pub mod services;
pub mod shell;
pub mod validate;

pub use completions::CompletionsCommand;
pub use services::ServicesCommand;
pub use shell::ShellCommand;
pub use validate::ValidateCommand;
