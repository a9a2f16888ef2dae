//! Common test utilities for integration tests.

use booking::{Draft, DraftField};

/// Builder for drafts with sensible defaults.
#[allow(dead_code)]
pub struct DraftFixture {
    draft: Draft,
}

#[allow(dead_code)]
impl DraftFixture {
    /// A fully filled draft for "Ana".
    pub fn new() -> Self {
        let mut draft = Draft::default();
        draft.set(DraftField::Name, "Ana");
        draft.set(DraftField::Email, "a@x.com");
        draft.set(DraftField::Date, "2024-05-01");
        draft.set(DraftField::Time, "10:00");
        draft.set(DraftField::Service, "Haircut");
        Self { draft }
    }

    /// Overrides one field.
    pub fn with(mut self, field: DraftField, value: &str) -> Self {
        self.draft.set(field, value);
        self
    }

    /// Sets the name.
    pub fn named(self, name: &str) -> Self {
        self.with(DraftField::Name, name)
    }

    /// Returns the draft.
    pub fn build(self) -> Draft {
        self.draft
    }
}
