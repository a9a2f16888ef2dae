//! The interactive session shell.
//!
//! Reads one command per line, applies it to a [`Session`], and writes data
//! (lists, the draft, status) to `out` and confirmations and errors to `err`.
//! A failing command does not end the session unless `fail_fast` is set.

pub mod command;
pub mod tokenize;

use crate::error::CliError;
use crate::utils::write_delimited;
use booking::config::OutputFormat;
use booking::output::{create_formatter, Theme, EMPTY_LIST_MESSAGE};
use booking::{
    DraftField, EditMode, Error as LibError, FormValidator, ReservationId, ServiceCatalog,
    Session, SubmitOutcome,
};
use clap::error::ErrorKind;
use clap::Parser;
use command::{SessionCommand, SessionLine, Toggle};
use std::io::{BufRead, Write};
use tokenize::tokenize;

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Shell state around one session.
pub struct Shell {
    session: Session,
    catalog: ServiceCatalog,
    default_format: OutputFormat,
    colored: bool,
    quiet: bool,
    fail_fast: bool,
    prompt: bool,
}

impl Shell {
    /// Creates a shell over `session`.
    pub fn new(session: Session, catalog: ServiceCatalog) -> Self {
        Self {
            session,
            catalog,
            default_format: OutputFormat::default(),
            colored: false,
            quiet: false,
            fail_fast: false,
            prompt: false,
        }
    }

    /// List format used when `list` has no `--format`.
    pub fn with_default_format(mut self, format: OutputFormat) -> Self {
        self.default_format = format;
        self
    }

    /// Emit ANSI colors in table and card output.
    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Suppress confirmations.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Stop at the first failing command.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Print a prompt before each line.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// The session being driven.
    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, O: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut O,
        err: &mut E,
    ) -> Result<(), CliError> {
        let mut lines = input.lines();

        loop {
            if self.prompt {
                write!(err, "{}", self.prompt_text())?;
                err.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match self.execute_line(trimmed, out, err) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(CliError::Io(e)) => return Err(CliError::Io(e)),
                Err(e) => {
                    writeln!(err, "Error: {e}")?;
                    if self.fail_fast {
                        return Err(CliError::SemanticFailure(format!(
                            "Stopped at '{trimmed}'"
                        )));
                    }
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    fn prompt_text(&self) -> String {
        match self.session.mode() {
            EditMode::Composing => "booking> ".to_string(),
            EditMode::Editing { id } => format!("booking [edit #{id}]> "),
        }
    }

    fn execute_line<O: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut O,
        err: &mut E,
    ) -> Result<Flow, CliError> {
        let words = tokenize(line).map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let command = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                let rendered = e.render().to_string();
                let first = rendered.lines().next().unwrap_or("invalid command");
                let message = first.strip_prefix("error: ").unwrap_or(first);
                return Err(CliError::InvalidArguments(message.to_string()));
            }
        };

        self.execute(command, out, err)
    }

    fn execute<O: Write, E: Write>(
        &mut self,
        command: SessionCommand,
        out: &mut O,
        err: &mut E,
    ) -> Result<Flow, CliError> {
        match command {
            SessionCommand::Set { field, value } => {
                let value = value.join(" ");
                if field == DraftField::Service && !self.catalog.contains(&value) {
                    self.confirm(err, &format!("Note: '{value}' is not an offered service"))?;
                }
                self.session.set_field(field, value);
            }
            SessionCommand::Unset { field } => {
                self.session.set_field(field, "");
            }
            SessionCommand::Draft => self.print_draft(out)?,
            SessionCommand::Submit => self.submit(err)?,
            SessionCommand::Edit { id } => {
                let record = self.session.find(id).ok_or_else(|| not_found(id))?;
                self.session.start_edit(&record);
                self.confirm(err, &format!("Editing reservation #{id}"))?;
                self.print_draft(out)?;
            }
            SessionCommand::Cancel => {
                self.session.cancel();
                self.confirm(err, "Draft cleared")?;
            }
            SessionCommand::Delete { id } => {
                if self.session.delete(id) == 0 {
                    self.confirm(err, "No reservation found (already deleted)")?;
                } else {
                    self.confirm(err, &format!("Deleted reservation #{id}"))?;
                }
            }
            SessionCommand::List { format } => {
                let format = format.map_or(self.default_format, OutputFormat::from);
                self.print_list(format, out)?;
            }
            SessionCommand::Services => self.print_services(out)?,
            SessionCommand::DarkMode { state } => {
                match state {
                    Toggle::On => self.session.set_dark_mode(true),
                    Toggle::Off => self.session.set_dark_mode(false),
                    Toggle::Toggle => {
                        self.session.toggle_dark_mode();
                    }
                }
                let label = on_off(self.session.dark_mode());
                self.confirm(err, &format!("Dark mode: {label}"))?;
            }
            SessionCommand::Status => self.print_status(out)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn submit<E: Write>(&mut self, err: &mut E) -> Result<(), CliError> {
        FormValidator::new(&self.catalog).validate(self.session.draft())?;

        match self.session.submit() {
            SubmitOutcome::Inserted(reservation) => {
                self.confirm(err, &format!("Created reservation #{}", reservation.id))
            }
            SubmitOutcome::Updated {
                reservation,
                matched: true,
            } => self.confirm(err, &format!("Updated reservation #{}", reservation.id)),
            SubmitOutcome::Updated {
                reservation,
                matched: false,
            } => {
                writeln!(
                    err,
                    "Warning: reservation #{} no longer exists; nothing was updated",
                    reservation.id
                )?;
                Ok(())
            }
        }
    }

    fn confirm<E: Write>(&self, err: &mut E, message: &str) -> Result<(), CliError> {
        if !self.quiet {
            writeln!(err, "{message}")?;
        }
        Ok(())
    }

    fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.session.dark_mode())
    }

    fn print_list<O: Write>(&self, format: OutputFormat, out: &mut O) -> Result<(), CliError> {
        let reservations = self.session.reservations();

        match format {
            OutputFormat::Csv => write_delimited(&mut *out, &reservations, &self.catalog, b',')?,
            OutputFormat::Tsv => write_delimited(&mut *out, &reservations, &self.catalog, b'\t')?,
            OutputFormat::Table if reservations.is_empty() => writeln!(out, "{EMPTY_LIST_MESSAGE}")?,
            other => {
                if let Some(formatter) = create_formatter(other, self.theme(), self.colored) {
                    let rendered = formatter.format(&reservations, &self.catalog)?;
                    writeln!(out, "{rendered}")?;
                }
            }
        }

        Ok(())
    }

    fn print_draft<O: Write>(&self, out: &mut O) -> Result<(), CliError> {
        let heading = match self.session.mode() {
            EditMode::Composing => "Make a Reservation".to_string(),
            EditMode::Editing { id } => format!("Update Reservation #{id}"),
        };
        writeln!(out, "{heading}")?;

        let draft = self.session.draft();
        for field in DraftField::ALL {
            let raw = draft.get(field);
            let shown = match field {
                DraftField::Service => self.catalog.display(raw),
                _ if raw.is_empty() => "-",
                _ => raw,
            };
            writeln!(out, "  {}: {shown}", field.label())?;
        }

        Ok(())
    }

    fn print_services<O: Write>(&self, out: &mut O) -> Result<(), CliError> {
        writeln!(out, "VALUE\tLABEL")?;
        for option in self.catalog.options() {
            writeln!(out, "{}\t{}", option.value, option.label)?;
        }
        Ok(())
    }

    fn print_status<O: Write>(&self, out: &mut O) -> Result<(), CliError> {
        let mode = match self.session.mode() {
            EditMode::Composing => "composing".to_string(),
            EditMode::Editing { id } => format!("editing #{id}"),
        };
        writeln!(out, "Mode: {mode}")?;
        writeln!(out, "Reservations: {}", self.session.reservations().len())?;
        writeln!(out, "Dark mode: {}", on_off(self.session.dark_mode()))?;
        Ok(())
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn not_found(id: ReservationId) -> CliError {
    CliError::Library(LibError::NotFound {
        resource: format!("reservation {id}"),
    })
}
