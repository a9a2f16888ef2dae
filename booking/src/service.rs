//! The catalog of services a reservation can be booked for.
//!
//! Each option has a stored value (what a [`crate::Reservation`] holds) and a
//! display label (what a form or list shows). The two are deliberately kept
//! apart: the default catalog pairs values and labels that do not match, and
//! that pairing is data, not something to normalise.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single bookable service.
///
/// # Examples
///
/// ```
/// use booking::ServiceOption;
///
/// let option = ServiceOption::new("Haircut", "Veterinaria");
/// assert_eq!(option.value, "Haircut");
/// assert_eq!(option.label, "Veterinaria");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceOption {
    /// Value stored on reservations.
    pub value: String,
    /// Label shown to users.
    pub label: String,
}

impl ServiceOption {
    /// Creates a service option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Ordered set of service options.
///
/// # Examples
///
/// ```
/// use booking::ServiceCatalog;
///
/// let catalog = ServiceCatalog::default();
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.label_for("Shave"), Some("Color"));
/// assert!(catalog.contains("Coloring"));
/// assert!(!catalog.contains("Peluqeria"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    options: Vec<ServiceOption>,
}

/// Prompt shown in place of a service before one is chosen.
pub const SERVICE_PLACEHOLDER: &str = "Select a service";

impl ServiceCatalog {
    /// Builds a catalog from options, rejecting empty or duplicate values.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the list is empty, if any value or label
    /// is blank, or if a value appears twice.
    pub fn new(options: Vec<ServiceOption>) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::Validation {
                field: "services".into(),
                message: "at least one service must be offered".into(),
            });
        }

        for (index, option) in options.iter().enumerate() {
            if option.value.trim().is_empty() {
                return Err(Error::Validation {
                    field: format!("services[{index}].value"),
                    message: "Cannot be empty or only whitespace".into(),
                });
            }
            if option.label.trim().is_empty() {
                return Err(Error::Validation {
                    field: format!("services[{index}].label"),
                    message: "Cannot be empty or only whitespace".into(),
                });
            }
            if options[..index].iter().any(|o| o.value == option.value) {
                return Err(Error::Validation {
                    field: format!("services[{index}].value"),
                    message: format!("duplicate service value '{}'", option.value),
                });
            }
        }

        Ok(Self { options })
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[ServiceOption] {
        &self.options
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false for a catalog built through [`ServiceCatalog::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// True if `value` is one of the stored values.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Display label for a stored value.
    #[must_use]
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Label for display, falling back to the raw value for unknown services
    /// and to the placeholder for an empty one.
    #[must_use]
    pub fn display<'a>(&'a self, value: &'a str) -> &'a str {
        if value.is_empty() {
            return SERVICE_PLACEHOLDER;
        }
        self.label_for(value).unwrap_or(value)
    }

    /// Looks up an option by stored value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownService`] if the value is not offered.
    pub fn require(&self, value: &str) -> Result<&ServiceOption> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .ok_or_else(|| Error::UnknownService {
                value: value.to_string(),
            })
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self {
            options: vec![
                ServiceOption::new("Haircut", "Veterinaria"),
                ServiceOption::new("Shave", "Color"),
                ServiceOption::new("Coloring", "Peluqeria"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_keeps_label_mismatch() {
        let catalog = ServiceCatalog::default();
        let values: Vec<_> = catalog.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["Haircut", "Shave", "Coloring"]);
        assert_eq!(catalog.label_for("Haircut"), Some("Veterinaria"));
        assert_eq!(catalog.label_for("Coloring"), Some("Peluqeria"));
    }

    #[test]
    fn test_display_fallbacks() {
        let catalog = ServiceCatalog::default();
        assert_eq!(catalog.display("Shave"), "Color");
        assert_eq!(catalog.display("Massage"), "Massage");
        assert_eq!(catalog.display(""), SERVICE_PLACEHOLDER);
    }

    #[test]
    fn test_new_rejects_empty_catalog() {
        assert!(ServiceCatalog::new(Vec::new()).is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_values() {
        let err = ServiceCatalog::new(vec![
            ServiceOption::new("Haircut", "Cut"),
            ServiceOption::new("Haircut", "Trim"),
        ])
        .unwrap_err();
        assert_eq!(err.validation_field(), Some("services[1].value"));
    }

    #[test]
    fn test_new_rejects_blank_label() {
        let err = ServiceCatalog::new(vec![ServiceOption::new("Haircut", "  ")]).unwrap_err();
        assert_eq!(err.validation_field(), Some("services[0].label"));
    }

    #[test]
    fn test_require_unknown_service() {
        let catalog = ServiceCatalog::default();
        assert!(catalog.require("Shave").is_ok());
        assert!(matches!(
            catalog.require("Color"),
            Err(Error::UnknownService { .. })
        ));
    }

    #[test]
    fn test_catalog_deserializes_from_yaml_list() {
        let yaml = "- value: Nails\n  label: Manicure\n";
        let catalog: ServiceCatalog = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.label_for("Nails"), Some("Manicure"));
    }
}
