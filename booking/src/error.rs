//! Error types for the booking library.
//!
//! The reservation store itself never fails; these errors come from the
//! layers around it: configuration loading, form validation and I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Shorthand for results carrying [`Error`].
///
/// # Examples
///
/// ```
/// use booking::{Error, Result};
///
/// fn first_id() -> Result<u64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Everything the booking library can fail with.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be used, e.g. an unreadable config file.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// Offending path.
        path: PathBuf,
        /// What went wrong with it.
        reason: String,
    },

    /// YAML that did not deserialize.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A field or setting was rejected.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// Field or setting name.
        field: String,
        /// Why it was rejected.
        message: String,
    },

    /// A service value is not part of the configured catalog.
    #[error("unknown service '{value}'")]
    UnknownService {
        /// The value as given.
        value: String,
    },

    /// Lookup by id or name found nothing.
    #[error("not found: {resource}")]
    NotFound {
        /// What was looked up.
        resource: String,
    },
}

impl Error {
    /// True for [`Error::NotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use booking::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation 3".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the offending field name for validation errors.
    #[must_use]
    pub fn validation_field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
