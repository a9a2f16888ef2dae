//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::service::{ServiceCatalog, ServiceOption};

/// Longest accepted service value or label.
const MAX_TEXT_LEN: usize = 255;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use booking::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref services) = config.services {
            Self::validate_services(services)?;
        }

        Ok(())
    }

    /// Validate the service list.
    ///
    /// The catalog rules (non-empty, no blank or duplicate values) apply,
    /// plus length and control-character checks on every value and label.
    fn validate_services(services: &[ServiceOption]) -> Result<()> {
        for (index, option) in services.iter().enumerate() {
            Self::validate_text(&format!("services[{index}].value"), &option.value)?;
            Self::validate_text(&format!("services[{index}].label"), &option.label)?;
        }

        ServiceCatalog::new(services.to_vec()).map(|_| ())
    }

    fn validate_text(field: &str, value: &str) -> Result<()> {
        if value.chars().any(char::is_control) {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain control characters".into(),
            });
        }

        if value.trim().len() > MAX_TEXT_LEN {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Cannot exceed {MAX_TEXT_LEN} characters"),
            });
        }

        Ok(())
    }
}
