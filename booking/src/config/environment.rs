//! Environment variable handling for configuration overrides.
//!
//! This module provides support for BOOKING_* environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::service::ServiceOption;
use crate::store::IdStrategy;
use std::env;

/// Handles environment variable overrides for configuration.
///
/// Recognized variables:
///
/// - `BOOKING_DARK_MODE`: boolean
/// - `BOOKING_ID_STRATEGY`: `monotonic` or `count-plus-one`
/// - `BOOKING_OUTPUT_FORMAT`: `table`, `cards`, `json`, `csv` or `tsv`
/// - `BOOKING_SERVICES`: comma-separated `value=label` pairs
///
/// # Examples
///
/// ```no_run
/// use booking::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("BOOKING_DARK_MODE") {
            config.dark_mode = Some(Self::parse_bool("BOOKING_DARK_MODE", &val)?);
        }

        if let Ok(val) = env::var("BOOKING_ID_STRATEGY") {
            config.id_strategy = Some(val.parse::<IdStrategy>().map_err(|_| {
                Error::Validation {
                    field: "BOOKING_ID_STRATEGY".into(),
                    message: format!("Invalid id strategy: '{val}' (expected monotonic or count-plus-one)"),
                }
            })?);
        }

        if let Ok(val) = env::var("BOOKING_OUTPUT_FORMAT") {
            config.output_format = Some(val.parse::<OutputFormat>().map_err(|_| {
                Error::Validation {
                    field: "BOOKING_OUTPUT_FORMAT".into(),
                    message: format!("Invalid output format: '{val}'"),
                }
            })?);
        }

        if let Ok(val) = env::var("BOOKING_SERVICES") {
            config.services = Some(Self::parse_services(&val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Parse services from comma-separated `value=label` pairs.
    ///
    /// A bare `value` uses itself as the label.
    fn parse_services(s: &str) -> Result<Vec<ServiceOption>> {
        let mut services = Vec::new();

        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (value, label) = match part.split_once('=') {
                Some((value, label)) => (value.trim(), label.trim()),
                None => (part, part),
            };

            if value.is_empty() || label.is_empty() {
                return Err(Error::Validation {
                    field: "BOOKING_SERVICES".into(),
                    message: format!("Invalid service entry: '{part}'"),
                });
            }

            services.push(ServiceOption::new(value, label));
        }

        Ok(services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "BOOKING_DARK_MODE",
        "BOOKING_ID_STRATEGY",
        "BOOKING_OUTPUT_FORMAT",
        "BOOKING_SERVICES",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_bool_variants() {
        for s in ["true", "TRUE", "1", "yes", "on"] {
            assert!(EnvironmentConfig::parse_bool("test", s).unwrap());
        }
        for s in ["false", "0", "no", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("test", s).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("test", "maybe").is_err());
    }

    #[test]
    fn test_parse_services_pairs_and_bare_values() {
        let services = EnvironmentConfig::parse_services("Haircut=Corte, Shave ,").unwrap();
        assert_eq!(
            services,
            vec![
                ServiceOption::new("Haircut", "Corte"),
                ServiceOption::new("Shave", "Shave"),
            ]
        );
    }

    #[test]
    fn test_parse_services_rejects_blank_side() {
        assert!(EnvironmentConfig::parse_services("=Corte").is_err());
        assert!(EnvironmentConfig::parse_services("Haircut=").is_err());
    }

    #[test]
    #[serial]
    fn test_apply_overrides() {
        clear_env();
        env::set_var("BOOKING_DARK_MODE", "yes");
        env::set_var("BOOKING_ID_STRATEGY", "count-plus-one");
        env::set_var("BOOKING_OUTPUT_FORMAT", "tsv");
        env::set_var("BOOKING_SERVICES", "Nails=Manicure");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        result.unwrap();
        assert_eq!(config.dark_mode, Some(true));
        assert_eq!(config.id_strategy, Some(IdStrategy::CountPlusOne));
        assert_eq!(config.output_format, Some(OutputFormat::Tsv));
        assert_eq!(
            config.services,
            Some(vec![ServiceOption::new("Nails", "Manicure")])
        );
    }

    #[test]
    #[serial]
    fn test_apply_overrides_invalid_value() {
        clear_env();
        env::set_var("BOOKING_ID_STRATEGY", "random");
        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        let err = result.unwrap_err();
        assert_eq!(err.validation_field(), Some("BOOKING_ID_STRATEGY"));
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config_untouched() {
        clear_env();
        let mut config = Config {
            dark_mode: Some(false),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.dark_mode, Some(false));
        assert_eq!(config.services, None);
    }
}
