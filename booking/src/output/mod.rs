//! Output formatting for reservation lists.
//!
//! List views are projections of the store: a tab-separated table, one card
//! per reservation (the layout of the booking page), or JSON. Service values
//! are shown through the catalog's display labels in the human formats and
//! kept as stored values in JSON.

mod formatters;

use crate::config::OutputFormat;
use crate::{Reservation, Result, ServiceCatalog};

pub use formatters::{CardFormatter, JsonFormatter, TableFormatter};

/// Message shown in place of an empty list.
pub const EMPTY_LIST_MESSAGE: &str = "No reservations yet.";

/// Trait for formatting reservations into different output formats.
pub trait OutputFormatter {
    /// Format the given reservations into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, reservations: &[Reservation], catalog: &ServiceCatalog) -> Result<String>;
}

/// Display theme, driven by the session's dark-mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Theme for a dark-mode flag.
    #[must_use]
    pub const fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// ANSI style for field labels and headers.
    #[must_use]
    pub const fn label_style(self) -> &'static str {
        match self {
            Self::Light => "\x1b[1;30m",
            Self::Dark => "\x1b[1;97m",
        }
    }

    /// ANSI style for values.
    #[must_use]
    pub const fn value_style(self) -> &'static str {
        match self {
            Self::Light => "\x1b[90m",
            Self::Dark => "\x1b[37m",
        }
    }

    /// ANSI style for the empty-list message.
    #[must_use]
    pub const fn notice_style(self) -> &'static str {
        match self {
            Self::Light => "\x1b[90m",
            Self::Dark => "\x1b[93m",
        }
    }
}

/// Resets any ANSI style.
pub const RESET: &str = "\x1b[0m";

/// Wraps `text` in `style` when `colored` is set.
pub(crate) fn paint(text: &str, style: &str, colored: bool) -> String {
    if colored {
        format!("{style}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Creates the library formatter for `format`.
///
/// Returns `None` for CSV and TSV, which callers write with their own
/// delimited writer.
#[must_use]
pub fn create_formatter(
    format: OutputFormat,
    theme: Theme,
    colored: bool,
) -> Option<Box<dyn OutputFormatter>> {
    match format {
        OutputFormat::Table => Some(Box::new(TableFormatter::new(theme, colored))),
        OutputFormat::Cards => Some(Box::new(CardFormatter::new(theme, colored))),
        OutputFormat::Json => Some(Box::new(JsonFormatter)),
        OutputFormat::Csv | OutputFormat::Tsv => None,
    }
}
