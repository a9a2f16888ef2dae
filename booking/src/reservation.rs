//! Reservation records and the draft they are composed from.
//!
//! A [`Draft`] is what the user is typing; a [`Reservation`] is a draft that
//! was committed to the store and received an id. Every field is plain text:
//! required-field and format checks belong to [`crate::FormValidator`], not
//! to these types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier assigned to a reservation by the store.
///
/// # Examples
///
/// ```
/// use booking::ReservationId;
///
/// let id = ReservationId::new(3);
/// assert_eq!(id.value(), 3);
/// assert_eq!(format!("{id}"), "3");
/// assert_eq!("3".parse::<ReservationId>().unwrap(), id);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ReservationId(u64);

impl ReservationId {
    /// Wraps a raw id value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| Error::Validation {
                field: "id".into(),
                message: format!("'{s}' is not a reservation id"),
            })
    }
}

/// A committed booking entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Store-assigned identifier; never changes once assigned.
    pub id: ReservationId,
    /// Name of the person booking.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Calendar date, `YYYY-MM-DD` when entered through the form.
    pub date: String,
    /// Time of day, `HH:MM` when entered through the form.
    pub time: String,
    /// Stored service value (see [`crate::ServiceCatalog`]).
    pub service: String,
}

impl Reservation {
    /// Builds a reservation from a draft's fields and the given id.
    ///
    /// The draft's own id, if any, is ignored.
    #[must_use]
    pub fn from_draft(id: ReservationId, draft: Draft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            date: draft.date,
            time: draft.time,
            service: draft.service,
        }
    }

    /// Copies this reservation into a draft that carries its id.
    #[must_use]
    pub fn to_draft(&self) -> Draft {
        Draft {
            id: Some(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            service: self.service.clone(),
        }
    }

    /// Returns the value of one field as text.
    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::Service => &self.service,
        }
    }
}

/// One of the five user-editable fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    /// The person's name.
    Name,
    /// The contact email.
    Email,
    /// The calendar date.
    Date,
    /// The time of day.
    Time,
    /// The requested service.
    Service,
}

impl DraftField {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Date,
        Self::Time,
        Self::Service,
    ];

    /// Lowercase field name, as used in messages and commands.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Date => "date",
            Self::Time => "time",
            Self::Service => "service",
        }
    }

    /// Form label for the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Service => "Service",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| Error::Validation {
                field: "field".into(),
                message: format!(
                    "unknown field '{s}' (expected one of: name, email, date, time, service)"
                ),
            })
    }
}

/// A reservation under construction or edit.
///
/// # Examples
///
/// ```
/// use booking::{Draft, DraftField};
///
/// let mut draft = Draft::default();
/// assert!(draft.is_empty());
///
/// draft.set(DraftField::Name, "Ana");
/// assert_eq!(draft.get(DraftField::Name), "Ana");
/// assert!(!draft.is_empty());
///
/// draft.clear();
/// assert!(draft.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Id of the record being edited, if this draft was loaded from one.
    pub id: Option<ReservationId>,
    /// Name of the person booking.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Calendar date.
    pub date: String,
    /// Time of day.
    pub time: String,
    /// Stored service value.
    pub service: String,
}

impl Draft {
    /// Replaces one field's value.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Date => self.date = value,
            DraftField::Time => self.time = value,
            DraftField::Service => self.service = value,
        }
    }

    /// Returns one field's value.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::Service => &self.service,
        }
    }

    /// True when no id is held and every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && DraftField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields that are still empty, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Resets the draft to its empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
