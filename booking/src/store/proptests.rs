//! Property-based tests for the reservation store.
//!
//! Random insert/update/delete sequences run against a `ReservationStore`
//! and a plain `Vec` model side by side.

use super::{IdStrategy, ReservationRepository, ReservationStore};
use crate::reservation::{Draft, DraftField, Reservation, ReservationId};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Insert(String),
    /// Update the record at `index % len` (or a missing id when empty).
    Update(usize, String),
    /// Delete the record at `index % len`, or a never-issued id.
    Delete(usize, bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[A-Z][a-z]{0,8}".prop_map(Op::Insert),
        2 => (any::<usize>(), "[A-Z][a-z]{0,8}").prop_map(|(i, name)| Op::Update(i, name)),
        1 => (any::<usize>(), any::<bool>()).prop_map(|(i, miss)| Op::Delete(i, miss)),
    ]
}

fn draft(name: &str) -> Draft {
    let mut draft = Draft::default();
    draft.set(DraftField::Name, name);
    draft.set(DraftField::Email, "a@x.com");
    draft.set(DraftField::Service, "Haircut");
    draft
}

const MISSING: ReservationId = ReservationId::new(u64::MAX);

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Under monotonic ids the store behaves exactly like a Vec keyed by
    // unique ids: inserts append, updates replace in place, deletes remove.
    #[test]
    fn monotonic_store_matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut store = ReservationStore::with_strategy(IdStrategy::Monotonic);
        let mut model: Vec<Reservation> = Vec::new();
        let mut issued = HashSet::new();

        for op in ops {
            match op {
                Op::Insert(name) => {
                    let inserted = store.insert(draft(&name));
                    prop_assert!(issued.insert(inserted.id), "id {} reissued", inserted.id);
                    model.push(inserted);
                }
                Op::Update(i, name) => {
                    if model.is_empty() {
                        let ghost = Reservation::from_draft(MISSING, draft(&name));
                        prop_assert!(!store.update(ghost));
                    } else {
                        let at = i % model.len();
                        let mut changed = model[at].clone();
                        changed.name = name;
                        prop_assert!(store.update(changed.clone()));
                        model[at] = changed;
                    }
                }
                Op::Delete(i, miss) => {
                    if miss || model.is_empty() {
                        prop_assert_eq!(store.delete(MISSING), 0);
                    } else {
                        let id = model[i % model.len()].id;
                        prop_assert_eq!(store.delete(id), 1);
                        model.retain(|r| r.id != id);
                    }
                }
            }

            prop_assert_eq!(store.list(), model.clone());
        }
    }

    // Ids listed by a monotonic store are unique and increasing.
    #[test]
    fn monotonic_ids_stay_unique(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut store = ReservationStore::new();
        for op in ops {
            match op {
                Op::Insert(name) => {
                    store.insert(draft(&name));
                }
                Op::Update(i, name) => {
                    let listed = store.list();
                    if !listed.is_empty() {
                        let mut changed = listed[i % listed.len()].clone();
                        changed.name = name;
                        store.update(changed);
                    }
                }
                Op::Delete(i, _) => {
                    let listed = store.list();
                    if !listed.is_empty() {
                        store.delete(listed[i % listed.len()].id);
                    }
                }
            }

            let ids: Vec<u64> = store.list().iter().map(|r| r.id.value()).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids out of order: {:?}", ids);
        }
    }

    // An update touches exactly one record, even when count-plus-one ids
    // collide; every other record and the order are unchanged.
    #[test]
    fn update_keeps_other_records(
        ops in prop::collection::vec(op_strategy(), 1..40),
        pick in any::<usize>(),
        name in "[A-Z][a-z]{0,8}",
    ) {
        let mut store = ReservationStore::with_strategy(IdStrategy::CountPlusOne);
        for op in ops {
            match op {
                Op::Insert(n) | Op::Update(_, n) => {
                    store.insert(draft(&n));
                }
                Op::Delete(i, _) => {
                    let listed = store.list();
                    if !listed.is_empty() {
                        store.delete(listed[i % listed.len()].id);
                    }
                }
            }
        }

        let before = store.list();
        prop_assume!(!before.is_empty());
        let target = before[pick % before.len()].id;
        let first = before.iter().position(|r| r.id == target).unwrap_or_default();

        let mut changed = before[first].clone();
        changed.name = name;
        prop_assert!(store.update(changed.clone()));

        let mut expected = before;
        expected[first] = changed;
        prop_assert_eq!(store.list(), expected);
    }
}
