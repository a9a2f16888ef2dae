//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::service::{ServiceCatalog, ServiceOption};
use crate::store::IdStrategy;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; the
/// accessor methods supply the built-in defaults.
///
/// # Examples
///
/// ```
/// use booking::config::Config;
/// use booking::ServiceOption;
///
/// let config = Config {
///     services: Some(vec![ServiceOption::new("Nails", "Manicure")]),
///     ..Default::default()
/// };
/// assert_eq!(config.catalog().unwrap().label_for("Nails"), Some("Manicure"));
/// assert!(!config.dark_mode_enabled());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Offered services as `{value, label}` pairs, in display order.
    pub services: Option<Vec<ServiceOption>>,

    /// Whether sessions start in dark mode.
    pub dark_mode: Option<bool>,

    /// How new reservation ids are assigned.
    pub id_strategy: Option<IdStrategy>,

    /// Output format for list views.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured service catalog, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured services are empty,
    /// blank or duplicated.
    pub fn catalog(&self) -> Result<ServiceCatalog> {
        match &self.services {
            Some(options) => ServiceCatalog::new(options.clone()),
            None => Ok(ServiceCatalog::default()),
        }
    }

    /// Whether sessions start in dark mode (default: off).
    #[must_use]
    pub fn dark_mode_enabled(&self) -> bool {
        self.dark_mode.unwrap_or(false)
    }

    /// The id strategy (default: monotonic).
    #[must_use]
    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy.unwrap_or_default()
    }

    /// The list output format (default: table).
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for list views.
///
/// # Examples
///
/// ```
/// use booking::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// One card per reservation, as on the booking page.
    Cards,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Cards => write!(f, "cards"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "cards" => Ok(Self::Cards),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{s}' (expected table, cards, json, csv or tsv)"),
            }),
        }
    }
}
