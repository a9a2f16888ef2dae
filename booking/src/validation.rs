//! Form validation for drafts.
//!
//! The store accepts anything; this is the check a form runs before it
//! submits. It mirrors what a browser enforces for the booking form: every
//! field is required, the email must look like an address, the date and time
//! must parse, and the service must be one the catalog offers.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{Error, Result};
use crate::reservation::{Draft, DraftField};
use crate::service::ServiceCatalog;

/// Date format accepted for the `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time formats accepted for the `time` field.
pub const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Validates drafts against a service catalog.
///
/// # Examples
///
/// ```
/// use booking::{Draft, DraftField, FormValidator, ServiceCatalog};
///
/// let catalog = ServiceCatalog::default();
/// let validator = FormValidator::new(&catalog);
///
/// let mut draft = Draft::default();
/// assert!(validator.validate(&draft).is_err());
///
/// draft.set(DraftField::Name, "Ana");
/// draft.set(DraftField::Email, "a@x.com");
/// draft.set(DraftField::Date, "2024-05-01");
/// draft.set(DraftField::Time, "10:00");
/// draft.set(DraftField::Service, "Haircut");
/// assert!(validator.validate(&draft).is_ok());
/// ```
pub struct FormValidator<'a> {
    catalog: &'a ServiceCatalog,
}

impl<'a> FormValidator<'a> {
    /// Creates a validator that checks services against `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a ServiceCatalog) -> Self {
        Self { catalog }
    }

    /// Validates every field in form order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(&self, draft: &Draft) -> Result<()> {
        for field in DraftField::ALL {
            self.validate_field(field, draft.get(field))?;
        }
        Ok(())
    }

    /// Validates every field and collects all failures.
    #[must_use]
    pub fn validate_all(&self, draft: &Draft) -> Vec<Error> {
        DraftField::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field, draft.get(field)).err())
            .collect()
    }

    /// Validates a single field value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the value is missing or malformed.
    pub fn validate_field(&self, field: DraftField, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(invalid(field, "is required"));
        }

        match field {
            DraftField::Name => Ok(()),
            DraftField::Email => validate_email(value),
            DraftField::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map(|_| ())
                .map_err(|_| invalid(field, &format!("'{value}' is not a YYYY-MM-DD date"))),
            DraftField::Time => {
                if TIME_FORMATS
                    .iter()
                    .any(|fmt| NaiveTime::parse_from_str(value, fmt).is_ok())
                {
                    Ok(())
                } else {
                    Err(invalid(field, &format!("'{value}' is not an HH:MM time")))
                }
            }
            DraftField::Service => self.catalog.require(value).map(|_| ()).map_err(|e| {
                let offered: Vec<_> = self
                    .catalog
                    .options()
                    .iter()
                    .map(|o| o.value.as_str())
                    .collect();
                invalid(field, &format!("{e} (choose from: {})", offered.join(", ")))
            }),
        }
    }
}

fn invalid(field: DraftField, message: &str) -> Error {
    Error::Validation {
        field: field.as_str().into(),
        message: message.into(),
    }
}

/// Accepts `local@domain` with no whitespace and a non-empty domain made of
/// dot-separated labels.
fn validate_email(value: &str) -> Result<()> {
    let well_formed = value
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.split('.').all(|label| !label.is_empty())
        })
        && !value.chars().any(char::is_whitespace);

    if well_formed {
        Ok(())
    } else {
        Err(invalid(
            DraftField::Email,
            &format!("'{value}' is not an email address"),
        ))
    }
}
