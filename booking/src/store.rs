//! The reservation store.
//!
//! [`ReservationRepository`] is the capability every store offers: insert,
//! update, delete and list. [`ReservationStore`] implements it over a `Vec`
//! that keeps insertion order. None of the operations fail: an update or
//! delete that matches nothing leaves the store as it was, and the returned
//! value only reports what happened.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::reservation::{Draft, Reservation, ReservationId};

/// How the store picks the id of the next inserted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// A counter owned by the store that only ever grows. Ids are never
    /// reused, even after deletes.
    #[default]
    Monotonic,
    /// `current record count + 1`. After a delete this can hand out an id
    /// that is still held by another record.
    CountPlusOne,
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monotonic => write!(f, "monotonic"),
            Self::CountPlusOne => write!(f, "count-plus-one"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monotonic" => Ok(Self::Monotonic),
            "count-plus-one" => Ok(Self::CountPlusOne),
            _ => Err(Error::Validation {
                field: "id_strategy".into(),
                message: format!("unknown id strategy '{s}' (expected monotonic or count-plus-one)"),
            }),
        }
    }
}

/// Storage capability for reservations.
///
/// Implementations keep records in insertion order and never reject input.
pub trait ReservationRepository {
    /// Appends a record built from `draft` and returns it with its new id.
    ///
    /// The draft's own id is ignored.
    fn insert(&mut self, draft: Draft) -> Reservation;

    /// Replaces the first record whose id equals `record.id`.
    ///
    /// Returns `false`, leaving the store unchanged, when no record matches.
    fn update(&mut self, record: Reservation) -> bool;

    /// Removes every record with the given id and returns how many went.
    fn delete(&mut self, id: ReservationId) -> usize;

    /// A fresh snapshot of all records in order.
    fn list(&self) -> Vec<Reservation>;
}

/// In-memory reservation store.
///
/// # Examples
///
/// ```
/// use booking::{Draft, DraftField, ReservationRepository, ReservationStore};
///
/// let mut store = ReservationStore::new();
/// let mut draft = Draft::default();
/// draft.set(DraftField::Name, "Ana");
///
/// let first = store.insert(draft.clone());
/// let second = store.insert(draft);
/// assert_eq!((first.id.value(), second.id.value()), (1, 2));
///
/// assert_eq!(store.delete(first.id), 1);
/// assert_eq!(store.list(), vec![second]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReservationStore {
    records: Vec<Reservation>,
    last_id: u64,
    strategy: IdStrategy,
}

impl ReservationStore {
    /// Creates an empty store with monotonic ids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given id strategy.
    #[must_use]
    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// The id strategy in use.
    #[must_use]
    pub const fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&mut self) -> ReservationId {
        match self.strategy {
            IdStrategy::Monotonic => {
                self.last_id += 1;
                ReservationId::new(self.last_id)
            }
            IdStrategy::CountPlusOne => ReservationId::new(self.records.len() as u64 + 1),
        }
    }
}

impl ReservationRepository for ReservationStore {
    fn insert(&mut self, draft: Draft) -> Reservation {
        let id = self.next_id();
        let reservation = Reservation::from_draft(id, draft);
        log::debug!("Inserted reservation {id}");
        self.records.push(reservation.clone());
        reservation
    }

    fn update(&mut self, record: Reservation) -> bool {
        let id = record.id;
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(existing) => {
                *existing = record;
                log::debug!("Updated reservation {id}");
                true
            }
            None => {
                log::debug!("No reservation {id} to update");
                false
            }
        }
    }

    fn delete(&mut self, id: ReservationId) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = before - self.records.len();
        log::debug!("Deleted {removed} reservation(s) with id {id}");
        removed
    }

    fn list(&self) -> Vec<Reservation> {
        self.records.clone()
    }
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
