#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # booking
//!
//! A library for keeping a book of reservations in process memory.
//!
//! Reservations are held by a [`ReservationStore`] and edited through a
//! [`Session`], which owns the draft being composed, the edit mode and the
//! dark-mode display flag. Nothing is persisted: dropping the session drops
//! every reservation.
//!
//! ## Core Types
//!
//! - [`Reservation`], [`ReservationId`] and [`Draft`]: booking records
//! - [`ReservationRepository`] and [`ReservationStore`]: the record store
//! - [`Session`]: the compose/edit/submit state machine
//! - [`ServiceCatalog`]: the offered services and their display labels
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use booking::{DraftField, Session};
//!
//! let mut session: Session = Session::default();
//! session.set_field(DraftField::Name, "Ana");
//! session.set_field(DraftField::Email, "a@x.com");
//! session.set_field(DraftField::Date, "2024-05-01");
//! session.set_field(DraftField::Time, "10:00");
//! session.set_field(DraftField::Service, "Haircut");
//!
//! let outcome = session.submit();
//! assert_eq!(outcome.reservation().id.value(), 1);
//! assert_eq!(session.reservations().len(), 1);
//! assert!(session.draft().is_empty());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod reservation;
pub mod service;
pub mod session;
pub mod store;
pub mod validation;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{Draft, DraftField, Reservation, ReservationId};
pub use service::{ServiceCatalog, ServiceOption};
pub use session::{EditMode, Session, SubmitOutcome};
pub use store::{IdStrategy, ReservationRepository, ReservationStore};
pub use validation::FormValidator;
