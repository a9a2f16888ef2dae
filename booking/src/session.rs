//! The compose/edit/submit workflow.
//!
//! A [`Session`] owns a reservation store together with the state a form
//! needs around it: the draft being typed, whether the next submit is an
//! insert or an update, and the dark-mode display flag.
//!
//! ```text
//!            start_edit(record)
//!  Composing ------------------> Editing { id }
//!     ^  |                           |
//!     |  | submit(): insert          | submit(): update
//!     +--+                           |
//!     ^------------------------------+
//! ```
//!
//! Both transitions back to `Composing` clear the draft.

use crate::reservation::{Draft, DraftField, Reservation, ReservationId};
use crate::store::{ReservationRepository, ReservationStore};

/// Whether the next submit inserts or updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// The next submit inserts a new record.
    #[default]
    Composing,
    /// The next submit replaces the record with this id.
    Editing {
        /// Id of the record being edited.
        id: ReservationId,
    },
}

impl EditMode {
    /// True while a record is being edited.
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

/// What a call to [`Session::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was appended.
    Inserted(Reservation),
    /// An update was committed for an existing id.
    Updated {
        /// The record as submitted.
        reservation: Reservation,
        /// False if the id was no longer in the store and nothing changed.
        matched: bool,
    },
}

impl SubmitOutcome {
    /// The record that was submitted.
    #[must_use]
    pub fn reservation(&self) -> &Reservation {
        match self {
            Self::Inserted(reservation) | Self::Updated { reservation, .. } => reservation,
        }
    }
}

/// A single user's working session over a reservation store.
///
/// # Examples
///
/// ```
/// use booking::{DraftField, Session, SubmitOutcome};
///
/// let mut session: Session = Session::default();
/// session.set_field(DraftField::Name, "Ana");
/// let inserted = session.submit().reservation().clone();
///
/// session.start_edit(&inserted);
/// session.set_field(DraftField::Name, "Ana Maria");
/// let outcome = session.submit();
/// assert!(matches!(outcome, SubmitOutcome::Updated { matched: true, .. }));
/// assert_eq!(session.reservations()[0].name, "Ana Maria");
/// assert!(!session.mode().is_editing());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session<R = ReservationStore> {
    store: R,
    draft: Draft,
    mode: EditMode,
    dark_mode: bool,
}

impl<R: ReservationRepository> Session<R> {
    /// Creates a session over the given store.
    #[must_use]
    pub fn new(store: R) -> Self {
        Self {
            store,
            draft: Draft::default(),
            mode: EditMode::Composing,
            dark_mode: false,
        }
    }

    /// Sets the initial dark-mode flag.
    #[must_use]
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &R {
        &self.store
    }

    /// The current draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The current edit mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Replaces one draft field.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Loads `record` into the draft and switches to editing it.
    ///
    /// Calling this while already editing switches to the new record and
    /// discards the previous draft.
    pub fn start_edit(&mut self, record: &Reservation) {
        log::debug!("Editing reservation {}", record.id);
        self.draft = record.to_draft();
        self.mode = EditMode::Editing { id: record.id };
    }

    /// Drops the draft and returns to composing a new record.
    pub fn cancel(&mut self) {
        self.draft.clear();
        self.mode = EditMode::Composing;
    }

    /// Commits the draft.
    ///
    /// While composing this inserts; while editing it updates the record
    /// being edited. Either way the session ends up composing with an empty
    /// draft. Required-field checks are the caller's job.
    pub fn submit(&mut self) -> SubmitOutcome {
        let draft = std::mem::take(&mut self.draft);
        let outcome = match std::mem::take(&mut self.mode) {
            EditMode::Composing => SubmitOutcome::Inserted(self.store.insert(draft)),
            EditMode::Editing { id } => {
                let reservation = Reservation::from_draft(id, draft);
                let matched = self.store.update(reservation.clone());
                if !matched {
                    log::debug!("Reservation {id} no longer exists; update discarded");
                }
                SubmitOutcome::Updated {
                    reservation,
                    matched,
                }
            }
        };
        log::info!("Submitted reservation {}", outcome.reservation().id);
        outcome
    }

    /// Deletes every record with `id`; see [`ReservationRepository::delete`].
    ///
    /// Deleting the record currently being edited does not leave edit mode;
    /// the later submit then matches nothing.
    pub fn delete(&mut self, id: ReservationId) -> usize {
        self.store.delete(id)
    }

    /// A fresh snapshot of the stored records.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.store.list()
    }

    /// First stored record with `id`.
    pub fn find(&self, id: ReservationId) -> Option<Reservation> {
        self.store.list().into_iter().find(|r| r.id == id)
    }

    /// Whether dark mode is on.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flips dark mode and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Sets dark mode explicitly.
    pub fn set_dark_mode(&mut self, on: bool) {
        self.dark_mode = on;
    }
}
